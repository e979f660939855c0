use crate::error::{ChartError, ChartResult};

use super::{ChartTheme, FeatureChartConfig};

pub(super) fn validate_feature_chart_config(
    config: FeatureChartConfig,
) -> ChartResult<FeatureChartConfig> {
    if config.expected_len == 0 {
        return Err(ChartError::InvalidConfig(
            "expected feature length must be >= 1".to_owned(),
        ));
    }
    if !config.fixed_axis_max.is_finite() || config.fixed_axis_max <= 0.0 {
        return Err(ChartError::InvalidConfig(
            "fixed axis max must be finite and > 0".to_owned(),
        ));
    }
    if !config.x_axis_title_standoff.is_finite() || config.x_axis_title_standoff < 0.0 {
        return Err(ChartError::InvalidConfig(
            "x-axis title standoff must be finite and >= 0".to_owned(),
        ));
    }

    config.margin.validate()?;
    config.mask_strip.validate()?;
    validate_chart_theme(&config.theme)?;
    Ok(config)
}

fn validate_chart_theme(theme: &ChartTheme) -> ChartResult<()> {
    for color in [
        theme.positive_bar,
        theme.neutral_bar,
        theme.plot_background,
        theme.paper_background,
    ] {
        color.validate().map_err(into_config_error)?;
    }
    theme.bar_outline.validate().map_err(into_config_error)?;
    theme.title_font.validate().map_err(into_config_error)?;
    theme.axis_title_font.validate().map_err(into_config_error)?;
    if theme.font_family.trim().is_empty() {
        return Err(ChartError::InvalidConfig(
            "font family must not be empty".to_owned(),
        ));
    }
    theme.container.validate().map_err(into_config_error)?;
    theme.busy.validate().map_err(into_config_error)?;
    Ok(())
}

fn into_config_error(err: ChartError) -> ChartError {
    match err {
        ChartError::InvalidData(message) => ChartError::InvalidConfig(message),
        other => other,
    }
}

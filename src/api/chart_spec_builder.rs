use crate::core::FeatureChartModel;
use crate::render::{
    AxisTitleSpec, BarMarker, BarTrace, BusyOverlay, ChartSpec, CoordinateRef, FeatureChartView,
    FontFamily, ImageSpec, Layout, RangeMode, TitleSpec, TraceType, XAxisSpec, YAxisSpec,
};

use super::FeatureChartConfig;

/// Half a category on each side of the first and last bar.
const CATEGORY_PADDING: f64 = 0.5;

/// Assembles the declarative chart from a derived model and static chrome.
#[must_use]
pub fn build_chart_spec(model: &FeatureChartModel, config: &FeatureChartConfig) -> ChartSpec {
    let theme = &config.theme;
    let labels = &config.labels;

    let trace = BarTrace {
        x: model.labels(),
        y: model.bars.iter().map(|bar| bar.value).collect(),
        trace_type: TraceType::Bar,
        marker: BarMarker {
            color: model.bars.iter().map(|bar| bar.color).collect(),
            line: theme.bar_outline,
        },
        name: labels.series_name.clone(),
    };

    let images = model
        .overlays
        .iter()
        .map(|overlay| {
            let geometry = overlay.placement.geometry;
            ImageSpec {
                source: overlay.image_ref.clone(),
                xref: CoordinateRef::X,
                yref: CoordinateRef::Paper,
                x: overlay.placement.x,
                y: overlay.placement.y,
                sizex: geometry.size_x,
                sizey: geometry.size_y,
                xanchor: geometry.x_anchor,
                yanchor: geometry.y_anchor,
                layer: geometry.layer,
                sizing: geometry.sizing,
            }
        })
        .collect();

    let layout = Layout {
        title: TitleSpec {
            text: labels.title_for(config.expected_len),
            font: theme.title_font,
        },
        xaxis: XAxisSpec {
            title: AxisTitleSpec {
                text: labels.x_axis_title.clone(),
                font: theme.axis_title_font,
                standoff: Some(config.x_axis_title_standoff),
            },
            dtick: 1.0,
            range: [CATEGORY_PADDING, model.len() as f64 + CATEGORY_PADDING],
        },
        yaxis: YAxisSpec {
            title: AxisTitleSpec {
                text: labels.y_axis_title.clone(),
                font: theme.axis_title_font,
                standoff: None,
            },
            range: model.axis.explicit(),
            rangemode: RangeMode::Nonnegative,
        },
        images,
        plot_bgcolor: theme.plot_background,
        paper_bgcolor: theme.paper_background,
        margin: config.margin,
        showlegend: false,
        font: FontFamily {
            family: theme.font_family.clone(),
        },
    };

    ChartSpec {
        data: vec![trace],
        layout,
        config: config.plot_config,
    }
}

/// Wraps the chart with container chrome and, when loading, the busy overlay.
#[must_use]
pub fn build_feature_chart_view(
    model: &FeatureChartModel,
    is_loading: bool,
    config: &FeatureChartConfig,
) -> FeatureChartView {
    let busy_overlay = is_loading
        .then(|| BusyOverlay::from_style(config.theme.busy, config.labels.busy_caption.clone()));
    FeatureChartView {
        container: config.theme.container,
        chart: build_chart_spec(model, config),
        busy_overlay,
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::build_chart_spec;
    use crate::api::FeatureChartConfig;
    use crate::core::{BasePathMaskResolver, FeatureChartModel};
    use crate::render::{CoordinateRef, RangeMode};

    fn model_for(features: &[f64]) -> FeatureChartModel {
        let config = FeatureChartConfig::default();
        FeatureChartModel::derive(
            features,
            config.derivation_params(),
            &BasePathMaskResolver::new("/base/"),
        )
        .expect("derive")
    }

    #[test]
    fn stock_chrome_matches_hlac_chart() {
        let config = FeatureChartConfig::default();
        let spec = build_chart_spec(&model_for(&[]), &config);

        assert_eq!(spec.layout.title.text, "HLAC特徴量 (25次元)");
        assert!(!spec.layout.showlegend);
        assert!(!spec.config.display_mode_bar);
        assert!(spec.config.responsive);
        assert_relative_eq!(spec.layout.margin.b, 180.0);
        assert_eq!(spec.layout.xaxis.title.standoff, Some(60.0));
        assert_eq!(spec.layout.yaxis.rangemode, RangeMode::Nonnegative);
        assert_eq!(spec.layout.yaxis.range, Some([0.0, 100.0]));
        assert_relative_eq!(spec.layout.xaxis.range[0], 0.5);
        assert_relative_eq!(spec.layout.xaxis.range[1], 25.5);
    }

    #[test]
    fn images_use_data_x_and_paper_y() {
        let spec = build_chart_spec(&model_for(&[]), &FeatureChartConfig::default());
        let image = &spec.layout.images[4];
        assert_eq!(image.source, "/base/bin/hlac_mask/4.png");
        assert_eq!(image.xref, CoordinateRef::X);
        assert_eq!(image.yref, CoordinateRef::Paper);
        assert_relative_eq!(image.x, 5.0);
        assert_relative_eq!(image.y, -0.06);
    }

    #[test]
    fn x_range_follows_display_length() {
        let spec = build_chart_spec(&model_for(&[1.0, 2.0, 3.0]), &FeatureChartConfig::default());
        assert_relative_eq!(spec.layout.xaxis.range[1], 3.5);
        assert_eq!(spec.data[0].x, vec!["1", "2", "3"]);
    }
}

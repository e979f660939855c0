use serde::{Deserialize, Serialize};

use crate::core::{
    DEFAULT_FEATURE_LEN, DEFAULT_FIXED_AXIS_MAX, DerivationParams, FeatureLengthPolicy,
    MaskStripGeometry,
};
use crate::error::{ChartError, ChartResult};
use crate::render::{Margin, PlotConfig};

use super::validation::validate_feature_chart_config;
use super::{ChartLabels, ChartTheme};

/// Public configuration of the feature chart.
///
/// All fields default to the stock HLAC chart, so a partial JSON document or
/// a couple of `with_*` calls is enough to customize it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureChartConfig {
    pub expected_len: usize,
    pub length_policy: FeatureLengthPolicy,
    pub fixed_axis_max: f64,
    pub theme: ChartTheme,
    pub labels: ChartLabels,
    pub margin: Margin,
    pub x_axis_title_standoff: f64,
    pub mask_strip: MaskStripGeometry,
    pub plot_config: PlotConfig,
}

impl Default for FeatureChartConfig {
    fn default() -> Self {
        Self {
            expected_len: DEFAULT_FEATURE_LEN,
            length_policy: FeatureLengthPolicy::default(),
            fixed_axis_max: DEFAULT_FIXED_AXIS_MAX,
            theme: ChartTheme::default(),
            labels: ChartLabels::default(),
            margin: Margin::default(),
            x_axis_title_standoff: 60.0,
            mask_strip: MaskStripGeometry::default(),
            plot_config: PlotConfig::default(),
        }
    }
}

impl FeatureChartConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_expected_len(mut self, expected_len: usize) -> Self {
        self.expected_len = expected_len;
        self
    }

    #[must_use]
    pub fn with_length_policy(mut self, policy: FeatureLengthPolicy) -> Self {
        self.length_policy = policy;
        self
    }

    #[must_use]
    pub fn with_fixed_axis_max(mut self, fixed_axis_max: f64) -> Self {
        self.fixed_axis_max = fixed_axis_max;
        self
    }

    #[must_use]
    pub fn with_theme(mut self, theme: ChartTheme) -> Self {
        self.theme = theme;
        self
    }

    #[must_use]
    pub fn with_labels(mut self, labels: ChartLabels) -> Self {
        self.labels = labels;
        self
    }

    #[must_use]
    pub fn with_margin(mut self, margin: Margin) -> Self {
        self.margin = margin;
        self
    }

    #[must_use]
    pub fn with_x_axis_title_standoff(mut self, standoff: f64) -> Self {
        self.x_axis_title_standoff = standoff;
        self
    }

    #[must_use]
    pub fn with_mask_strip(mut self, mask_strip: MaskStripGeometry) -> Self {
        self.mask_strip = mask_strip;
        self
    }

    #[must_use]
    pub fn with_plot_config(mut self, plot_config: PlotConfig) -> Self {
        self.plot_config = plot_config;
        self
    }

    /// Parses and validates a (possibly partial) JSON config document.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidConfig(format!("failed to parse feature chart config: {e}"))
        })?;
        config.validate()
    }

    pub fn validate(self) -> ChartResult<Self> {
        validate_feature_chart_config(self)
    }

    #[must_use]
    pub fn derivation_params(&self) -> DerivationParams {
        DerivationParams {
            expected_len: self.expected_len,
            length_policy: self.length_policy,
            fixed_axis_max: self.fixed_axis_max,
            palette: self.theme.palette(),
            mask_strip: self.mask_strip,
        }
    }
}

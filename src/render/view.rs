use serde::{Deserialize, Serialize};

use crate::core::ImageLayer;
use crate::error::{ChartError, ChartResult};
use crate::render::{BusyOverlay, ChartSpec, Color, Outline, ViewLayerStack};

/// Box the chart and busy overlay are drawn into.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerStyle {
    pub background: Color,
    pub padding_px: f64,
    pub border_left: Outline,
}

impl Default for ContainerStyle {
    fn default() -> Self {
        Self {
            background: Color::rgb(0xFA, 0xFA, 0xFA),
            padding_px: 20.0,
            border_left: Outline::new(Color::rgb(0xDD, 0xDD, 0xDD), 1.0),
        }
    }
}

impl ContainerStyle {
    pub fn validate(self) -> ChartResult<Self> {
        self.background.validate()?;
        if !self.padding_px.is_finite() || self.padding_px < 0.0 {
            return Err(ChartError::InvalidConfig(
                "container padding must be finite and >= 0".to_owned(),
            ));
        }
        self.border_left.validate()?;
        Ok(self)
    }
}

/// Everything a backend needs for one draw pass of the feature chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureChartView {
    pub container: ContainerStyle,
    pub chart: ChartSpec,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub busy_overlay: Option<BusyOverlay>,
}

impl FeatureChartView {
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy_overlay.is_some()
    }

    #[must_use]
    pub fn layers(&self) -> ViewLayerStack {
        let images = &self.chart.layout.images;
        let mask_layer = images
            .first()
            .map_or(ImageLayer::Below, |image| image.layer);
        ViewLayerStack::for_view(!images.is_empty(), mask_layer, self.is_busy())
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.container.validate()?;
        self.chart.validate()?;
        if let Some(overlay) = &self.busy_overlay {
            overlay.background.validate()?;
            overlay.spinner.validate()?;
            overlay.caption.font.validate()?;
        }
        Ok(())
    }
}

mod busy_overlay;
mod json_renderer;
mod layer_stack;
mod null_renderer;
mod primitives;
mod spec;
mod view;

pub use busy_overlay::{BusyCaption, BusyOverlay, BusyOverlayStyle, Spinner};
pub use json_renderer::JsonRenderer;
pub use layer_stack::{ViewLayer, ViewLayerStack};
pub use null_renderer::NullRenderer;
pub use primitives::{Color, FontStyle, Outline};
pub use spec::{
    AxisTitleSpec, BarMarker, BarTrace, ChartSpec, CoordinateRef, FontFamily, ImageSpec, Layout,
    Margin, PlotConfig, RangeMode, TitleSpec, TraceType, XAxisSpec, YAxisSpec,
};
pub use view::{ContainerStyle, FeatureChartView};

use crate::error::ChartResult;

/// Contract implemented by any chart engine backend.
///
/// Backends receive a fully derived, deterministic `FeatureChartView`, so
/// drawing code stays isolated from feature normalization and styling rules.
pub trait Renderer {
    fn render(&mut self, view: &FeatureChartView) -> ChartResult<()>;
}

//! hlac-chart: declarative bar chart for HLAC feature vectors.
//!
//! Turns a feature vector and a loading flag into an engine-agnostic chart
//! view: one bar per feature, a strip of mask images under the x-axis, a
//! value axis that auto-scales past a threshold, and an optional busy
//! overlay. Drawing is delegated to a `render::Renderer` backend.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{FeatureChartConfig, FeatureChartProps, FeatureChartRenderer};
pub use error::{ChartError, ChartResult};

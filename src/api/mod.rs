mod chart_spec_builder;
mod config;
mod engine;
mod json_contract;
mod theme;
mod validation;

pub use chart_spec_builder::{build_chart_spec, build_feature_chart_view};
pub use config::FeatureChartConfig;
pub use engine::{FeatureChartProps, FeatureChartRenderer};
pub use json_contract::{
    CHART_SPEC_JSON_SCHEMA_V1, CHART_VIEW_JSON_SCHEMA_V1, ChartSpecJsonContractV1,
    ChartViewJsonContractV1,
};
pub use theme::{ChartLabels, ChartTheme};

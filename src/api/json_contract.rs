use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::{ChartSpec, FeatureChartView};

pub const CHART_SPEC_JSON_SCHEMA_V1: u32 = 1;
pub const CHART_VIEW_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpecJsonContractV1 {
    pub schema_version: u32,
    pub spec: ChartSpec,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartViewJsonContractV1 {
    pub schema_version: u32,
    pub view: FeatureChartView,
}

impl ChartSpec {
    /// Engine-ready `{data, layout, config}` document.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::Serialization(format!("failed to serialize chart spec: {e}")))
    }

    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = ChartSpecJsonContractV1 {
            schema_version: CHART_SPEC_JSON_SCHEMA_V1,
            spec: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::Serialization(format!("failed to serialize chart spec contract v1: {e}"))
        })
    }

    /// Accepts either a bare spec or a versioned v1 contract payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        let bare_err = match serde_json::from_str::<ChartSpec>(input) {
            Ok(spec) => return Ok(spec),
            Err(e) => e,
        };
        let payload: ChartSpecJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::Serialization(format!(
                "failed to parse chart spec json payload: {bare_err} (as v1 contract: {e})"
            ))
        })?;
        if payload.schema_version != CHART_SPEC_JSON_SCHEMA_V1 {
            return Err(ChartError::Serialization(format!(
                "unsupported chart spec schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.spec)
    }
}

impl FeatureChartView {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = ChartViewJsonContractV1 {
            schema_version: CHART_VIEW_JSON_SCHEMA_V1,
            view: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::Serialization(format!("failed to serialize chart view contract v1: {e}"))
        })
    }

    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        let bare_err = match serde_json::from_str::<FeatureChartView>(input) {
            Ok(view) => return Ok(view),
            Err(e) => e,
        };
        let payload: ChartViewJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::Serialization(format!(
                "failed to parse chart view json payload: {bare_err} (as v1 contract: {e})"
            ))
        })?;
        if payload.schema_version != CHART_VIEW_JSON_SCHEMA_V1 {
            return Err(ChartError::Serialization(format!(
                "unsupported chart view schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.view)
    }
}

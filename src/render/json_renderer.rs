use tracing::trace;

use crate::error::{ChartError, ChartResult};
use crate::render::{FeatureChartView, Renderer};

/// Backend that serializes each view to JSON for an out-of-process engine.
///
/// Only the most recent document is kept.
#[derive(Debug, Default)]
pub struct JsonRenderer {
    pretty: bool,
    last_document: Option<String>,
}

impl JsonRenderer {
    #[must_use]
    pub fn pretty() -> Self {
        Self {
            pretty: true,
            last_document: None,
        }
    }

    #[must_use]
    pub fn last_document(&self) -> Option<&str> {
        self.last_document.as_deref()
    }

    pub fn take_last_document(&mut self) -> Option<String> {
        self.last_document.take()
    }
}

impl Renderer for JsonRenderer {
    fn render(&mut self, view: &FeatureChartView) -> ChartResult<()> {
        view.validate()?;
        let serialized = if self.pretty {
            serde_json::to_string_pretty(view)
        } else {
            serde_json::to_string(view)
        };
        let document = serialized
            .map_err(|e| ChartError::Serialization(format!("failed to serialize chart view: {e}")))?;
        trace!(bytes = document.len(), "serialized chart view");
        self.last_document = Some(document);
        Ok(())
    }
}

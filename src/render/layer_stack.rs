use serde::{Deserialize, Serialize};

use crate::core::ImageLayer;

/// Drawing layers of a feature chart view, back to front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewLayer {
    Background,
    MaskStrip,
    Series,
    BusyOverlay,
}

/// Ordered list of layers present in one view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewLayerStack {
    pub layers: Vec<ViewLayer>,
}

impl ViewLayerStack {
    /// Canonical back-to-front order with masks below the bars.
    #[must_use]
    pub fn canonical() -> Self {
        Self {
            layers: vec![
                ViewLayer::Background,
                ViewLayer::MaskStrip,
                ViewLayer::Series,
                ViewLayer::BusyOverlay,
            ],
        }
    }

    /// Stack for a view with the given mask stacking and busy state.
    #[must_use]
    pub fn for_view(has_masks: bool, mask_layer: ImageLayer, busy: bool) -> Self {
        let mut layers = vec![ViewLayer::Background];
        match (has_masks, mask_layer) {
            (true, ImageLayer::Below) => {
                layers.push(ViewLayer::MaskStrip);
                layers.push(ViewLayer::Series);
            }
            (true, ImageLayer::Above) => {
                layers.push(ViewLayer::Series);
                layers.push(ViewLayer::MaskStrip);
            }
            (false, _) => layers.push(ViewLayer::Series),
        }
        if busy {
            layers.push(ViewLayer::BusyOverlay);
        }
        Self { layers }
    }

    #[must_use]
    pub fn position(&self, layer: ViewLayer) -> Option<usize> {
        self.layers.iter().position(|candidate| *candidate == layer)
    }

    #[must_use]
    pub fn is_topmost(&self, layer: ViewLayer) -> bool {
        self.layers.last() == Some(&layer)
    }
}

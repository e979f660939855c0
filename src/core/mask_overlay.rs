use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Maps a feature index to the URI of its mask image.
///
/// Implementations must be deterministic: the same index always yields the
/// same reference.
pub trait MaskAssetResolver {
    fn resolve(&self, index: usize) -> String;
}

impl<F> MaskAssetResolver for F
where
    F: Fn(usize) -> String,
{
    fn resolve(&self, index: usize) -> String {
        self(index)
    }
}

/// Resolves masks under `<base_path>bin/hlac_mask/<index>.png`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasePathMaskResolver {
    base_path: String,
}

impl BasePathMaskResolver {
    pub const MASK_DIR: &'static str = "bin/hlac_mask";

    /// `base_path` is the deployment base; a trailing `/` is added when missing.
    #[must_use]
    pub fn new(base_path: impl Into<String>) -> Self {
        let mut base_path = base_path.into();
        if !base_path.ends_with('/') {
            base_path.push('/');
        }
        Self { base_path }
    }

    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }
}

impl Default for BasePathMaskResolver {
    fn default() -> Self {
        Self::new("/")
    }
}

impl MaskAssetResolver for BasePathMaskResolver {
    fn resolve(&self, index: usize) -> String {
        format!("{}{}/{index}.png", self.base_path, Self::MASK_DIR)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum XAnchor {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YAnchor {
    Top,
    Middle,
    Bottom,
}

/// Stacking of an image relative to the plotted data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageLayer {
    Below,
    Above,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageSizing {
    Fill,
    Contain,
    Stretch,
}

/// Shared geometry of the mask strip drawn beneath the x-axis.
///
/// `paper_y` is in normalized plot-area coordinates, so a small negative
/// value lands under the tick labels inside the bottom margin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaskStripGeometry {
    pub paper_y: f64,
    pub size_x: f64,
    pub size_y: f64,
    pub x_anchor: XAnchor,
    pub y_anchor: YAnchor,
    pub layer: ImageLayer,
    pub sizing: ImageSizing,
}

impl Default for MaskStripGeometry {
    fn default() -> Self {
        Self {
            paper_y: -0.06,
            size_x: 0.9,
            size_y: 0.5,
            x_anchor: XAnchor::Center,
            y_anchor: YAnchor::Middle,
            layer: ImageLayer::Below,
            sizing: ImageSizing::Contain,
        }
    }
}

impl MaskStripGeometry {
    /// The strip must stay outside the plot area and behind the bars.
    pub fn validate(self) -> ChartResult<Self> {
        if !self.paper_y.is_finite() || self.paper_y >= 0.0 {
            return Err(ChartError::InvalidConfig(
                "mask strip paper_y must be finite and < 0".to_owned(),
            ));
        }
        if self.layer != ImageLayer::Below {
            return Err(ChartError::InvalidConfig(
                "mask strip must be layered below the bars".to_owned(),
            ));
        }
        for (name, value) in [("size_x", self.size_x), ("size_y", self.size_y)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "mask strip {name} must be finite and > 0"
                )));
            }
        }
        Ok(self)
    }
}

/// Where one mask image sits: `x` in data coordinates, `y` in paper coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaskPlacement {
    pub x: f64,
    pub y: f64,
    pub geometry: MaskStripGeometry,
}

/// Mask image annotation for one feature index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaskOverlay {
    pub index: usize,
    pub image_ref: String,
    pub placement: MaskPlacement,
}

/// Builds one mask overlay per display index, centered under bar `index + 1`.
pub fn derive_mask_overlays<A>(
    len: usize,
    resolver: &A,
    geometry: MaskStripGeometry,
) -> Vec<MaskOverlay>
where
    A: MaskAssetResolver + ?Sized,
{
    (0..len)
        .map(|index| MaskOverlay {
            index,
            image_ref: resolver.resolve(index),
            placement: MaskPlacement {
                x: (index + 1) as f64,
                y: geometry.paper_y,
                geometry,
            },
        })
        .collect()
}

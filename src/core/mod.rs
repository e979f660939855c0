pub mod axis;
pub mod bar_series;
pub mod feature_vector;
pub mod mask_overlay;
pub mod model;
pub mod types;

pub use axis::AxisRange;
pub use bar_series::{BarDatum, BarPalette, BarTone, derive_bars};
pub use feature_vector::normalize_features;
pub use mask_overlay::{
    BasePathMaskResolver, ImageLayer, ImageSizing, MaskAssetResolver, MaskOverlay, MaskPlacement,
    MaskStripGeometry, XAnchor, YAnchor, derive_mask_overlays,
};
pub use model::{DerivationParams, FeatureChartModel};
pub use types::{DEFAULT_FEATURE_LEN, DEFAULT_FIXED_AXIS_MAX, FeatureLengthPolicy};

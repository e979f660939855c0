use serde::{Deserialize, Serialize};

use crate::core::{
    AxisRange, BarDatum, BarPalette, FeatureLengthPolicy, MaskAssetResolver, MaskOverlay,
    MaskStripGeometry, derive_bars, derive_mask_overlays, normalize_features,
};
use crate::error::ChartResult;

/// Inputs of the pure derivation besides the feature vector itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivationParams {
    pub expected_len: usize,
    pub length_policy: FeatureLengthPolicy,
    pub fixed_axis_max: f64,
    pub palette: BarPalette,
    pub mask_strip: MaskStripGeometry,
}

/// Engine-agnostic chart data for one render pass.
///
/// `display`, `bars` and `overlays` always have the same length and share
/// indices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureChartModel {
    pub display: Vec<f64>,
    pub bars: Vec<BarDatum>,
    pub overlays: Vec<MaskOverlay>,
    pub axis: AxisRange,
}

impl FeatureChartModel {
    pub fn derive<A>(features: &[f64], params: DerivationParams, resolver: &A) -> ChartResult<Self>
    where
        A: MaskAssetResolver + ?Sized,
    {
        let display = normalize_features(features, params.expected_len, params.length_policy)?;
        let axis = AxisRange::derive(&display, params.fixed_axis_max);
        let bars = derive_bars(&display, params.palette);
        let overlays = derive_mask_overlays(display.len(), resolver, params.mask_strip);
        Ok(Self {
            display,
            bars,
            overlays,
            axis,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.display.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.display.is_empty()
    }

    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        self.bars.iter().map(BarDatum::label).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{DerivationParams, FeatureChartModel};
    use crate::core::{
        AxisRange, BarPalette, BarTone, BasePathMaskResolver, FeatureLengthPolicy,
        MaskStripGeometry,
    };
    use crate::render::Color;

    fn params() -> DerivationParams {
        DerivationParams {
            expected_len: 25,
            length_policy: FeatureLengthPolicy::PassThrough,
            fixed_axis_max: 100.0,
            palette: BarPalette {
                positive: Color::rgb(0x21, 0x96, 0xF3),
                neutral: Color::rgb(0xE0, 0xE0, 0xE0),
            },
            mask_strip: MaskStripGeometry::default(),
        }
    }

    #[test]
    fn empty_input_derives_placeholder_model() {
        let model =
            FeatureChartModel::derive(&[], params(), &BasePathMaskResolver::default()).expect("derive");
        assert_eq!(model.len(), 25);
        assert_eq!(model.overlays.len(), 25);
        assert!(model.bars.iter().all(|bar| bar.tone == BarTone::Neutral && bar.value == 0.0));
        assert_eq!(model.axis.explicit(), Some([0.0, 100.0]));
    }

    #[test]
    fn large_first_feature_switches_axis_to_auto() {
        let mut features = vec![0.0; 25];
        features[0] = 150.0;
        let model = FeatureChartModel::derive(&features, params(), &BasePathMaskResolver::default())
            .expect("derive");
        assert_eq!(model.axis, AxisRange::AutoNonNegative);
        assert_eq!(model.bars[0].tone, BarTone::Positive);
        assert_eq!(model.labels()[0], "1");
    }
}

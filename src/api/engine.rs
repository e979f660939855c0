use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{BasePathMaskResolver, FeatureChartModel, MaskAssetResolver};
use crate::error::ChartResult;
use crate::render::{FeatureChartView, Renderer};

use super::FeatureChartConfig;
use super::chart_spec_builder::build_feature_chart_view;

/// Inputs of one render pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FeatureChartProps {
    pub features: Vec<f64>,
    pub is_loading: bool,
}

impl FeatureChartProps {
    #[must_use]
    pub fn new(features: Vec<f64>) -> Self {
        Self {
            features,
            is_loading: false,
        }
    }

    #[must_use]
    pub fn with_loading(mut self, is_loading: bool) -> Self {
        self.is_loading = is_loading;
        self
    }
}

/// Main facade consumed by host applications.
///
/// `FeatureChartRenderer` derives a `FeatureChartView` from props and hands
/// it to the backend. It keeps no state between passes besides its
/// configuration, so identical props always yield identical views.
pub struct FeatureChartRenderer<R: Renderer, A: MaskAssetResolver = BasePathMaskResolver> {
    renderer: R,
    resolver: A,
    config: FeatureChartConfig,
}

impl<R: Renderer> FeatureChartRenderer<R> {
    /// Uses the stock config and masks under `<base_path>bin/hlac_mask/`.
    pub fn with_base_path(renderer: R, base_path: impl Into<String>) -> ChartResult<Self> {
        Self::new(
            renderer,
            BasePathMaskResolver::new(base_path),
            FeatureChartConfig::default(),
        )
    }
}

impl<R: Renderer, A: MaskAssetResolver> FeatureChartRenderer<R, A> {
    pub fn new(renderer: R, resolver: A, config: FeatureChartConfig) -> ChartResult<Self> {
        let config = config.validate()?;
        Ok(Self {
            renderer,
            resolver,
            config,
        })
    }

    #[must_use]
    pub fn config(&self) -> &FeatureChartConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: FeatureChartConfig) -> ChartResult<()> {
        self.config = config.validate()?;
        Ok(())
    }

    #[must_use]
    pub fn resolver(&self) -> &A {
        &self.resolver
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Derives bars, mask overlays and axis range without chart chrome.
    pub fn derive_model(&self, features: &[f64]) -> ChartResult<FeatureChartModel> {
        FeatureChartModel::derive(features, self.config.derivation_params(), &self.resolver)
    }

    /// Pure derivation of the full view; the backend is not touched.
    pub fn derive(&self, props: &FeatureChartProps) -> ChartResult<FeatureChartView> {
        let model = self.derive_model(&props.features)?;
        debug!(
            input_len = props.features.len(),
            display_len = model.len(),
            is_loading = props.is_loading,
            auto_axis = model.axis.is_auto(),
            "derived feature chart view"
        );
        Ok(build_feature_chart_view(
            &model,
            props.is_loading,
            &self.config,
        ))
    }

    /// Derives the view, draws it with the backend and returns it.
    pub fn render(&mut self, props: &FeatureChartProps) -> ChartResult<FeatureChartView> {
        let view = self.derive(props)?;
        self.renderer.render(&view)?;
        Ok(view)
    }
}

#[cfg(test)]
mod tests {
    use super::{FeatureChartProps, FeatureChartRenderer};
    use crate::api::FeatureChartConfig;
    use crate::core::FeatureLengthPolicy;
    use crate::render::NullRenderer;

    #[test]
    fn props_deserialize_with_defaults() {
        let props: FeatureChartProps = serde_json::from_str("{}").expect("defaults");
        assert_eq!(props, FeatureChartProps::default());

        let props: FeatureChartProps =
            serde_json::from_str(r#"{"features":[1.5],"isLoading":true}"#).expect("camel case");
        assert_eq!(props.features, vec![1.5]);
        assert!(props.is_loading);
    }

    #[test]
    fn render_forwards_view_to_backend() {
        let mut chart =
            FeatureChartRenderer::with_base_path(NullRenderer::default(), "/").expect("init");
        let view = chart
            .render(&FeatureChartProps::default().with_loading(true))
            .expect("render");
        assert!(view.is_busy());
        assert_eq!(chart.renderer().render_count, 1);
        assert_eq!(chart.renderer().last_bar_count, 25);
        assert!(chart.renderer().last_busy);
    }

    #[test]
    fn set_config_rejects_invalid_and_keeps_previous() {
        let mut chart =
            FeatureChartRenderer::with_base_path(NullRenderer::default(), "/").expect("init");
        assert!(
            chart
                .set_config(FeatureChartConfig::new().with_expected_len(0))
                .is_err()
        );
        assert_eq!(chart.config().expected_len, 25);

        chart
            .set_config(FeatureChartConfig::new().with_length_policy(FeatureLengthPolicy::Strict))
            .expect("valid config");
        assert!(chart.derive(&FeatureChartProps::new(vec![1.0; 3])).is_err());
    }
}

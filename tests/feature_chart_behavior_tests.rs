use hlac_chart::api::{FeatureChartConfig, FeatureChartProps, FeatureChartRenderer};
use hlac_chart::core::{BarTone, FeatureLengthPolicy};
use hlac_chart::render::{Color, NullRenderer, ViewLayer};

fn chart() -> FeatureChartRenderer<NullRenderer> {
    FeatureChartRenderer::with_base_path(NullRenderer::default(), "/hlac/").expect("chart init")
}

fn positive() -> Color {
    Color::rgb(0x21, 0x96, 0xF3)
}

fn neutral() -> Color {
    Color::rgb(0xE0, 0xE0, 0xE0)
}

#[test]
fn empty_features_render_twenty_five_neutral_zero_bars() {
    let view = chart()
        .derive(&FeatureChartProps::default())
        .expect("derive");
    let trace = &view.chart.data[0];

    assert_eq!(trace.y.len(), 25);
    assert!(trace.y.iter().all(|value| *value == 0.0));
    assert!(trace.marker.color.iter().all(|color| *color == neutral()));
    assert_eq!(view.chart.layout.yaxis.range, Some([0.0, 100.0]));
    assert!(view.busy_overlay.is_none());
}

#[test]
fn large_first_feature_while_loading() {
    let mut features = vec![0.0; 25];
    features[0] = 150.0;
    let view = chart()
        .derive(&FeatureChartProps::new(features).with_loading(true))
        .expect("derive");
    let trace = &view.chart.data[0];

    assert_eq!(trace.x[0], "1");
    assert_eq!(trace.y[0], 150.0);
    assert_eq!(trace.marker.color[0], positive());
    assert_eq!(view.chart.layout.yaxis.range, None);

    let overlay = view.busy_overlay.as_ref().expect("busy overlay");
    assert_eq!(overlay.caption.text, "特徴量を計算中...");
    assert!(overlay.spinner.size_px > 0.0);
    assert!(view.layers().is_topmost(ViewLayer::BusyOverlay));
}

#[test]
fn axis_threshold_is_strict() {
    let chart = chart();
    let mut features = vec![0.0; 25];

    features[10] = 100.0;
    let at_threshold = chart
        .derive(&FeatureChartProps::new(features.clone()))
        .expect("derive");
    assert_eq!(at_threshold.chart.layout.yaxis.range, Some([0.0, 100.0]));

    features[10] = 101.0;
    let above = chart
        .derive(&FeatureChartProps::new(features))
        .expect("derive");
    assert_eq!(above.chart.layout.yaxis.range, None);
}

#[test]
fn color_rule_treats_zero_and_negative_as_neutral() {
    let model = chart()
        .derive_model(&[-1.0, 0.0, 0.5, 42.0])
        .expect("derive");
    let tones: Vec<BarTone> = model.bars.iter().map(|bar| bar.tone).collect();
    assert_eq!(
        tones,
        vec![
            BarTone::Neutral,
            BarTone::Neutral,
            BarTone::Positive,
            BarTone::Positive
        ]
    );
}

#[test]
fn mismatched_length_passes_through_by_default() {
    let view = chart()
        .derive(&FeatureChartProps::new(vec![3.0; 7]))
        .expect("derive");
    assert_eq!(view.chart.data[0].x.len(), 7);
    assert_eq!(view.chart.layout.images.len(), 7);
    assert_eq!(
        view.chart.layout.images[6].source,
        "/hlac/bin/hlac_mask/6.png"
    );
}

#[test]
fn fit_policy_pads_short_vectors_to_expected_length() {
    let chart = FeatureChartRenderer::new(
        NullRenderer::default(),
        |index: usize| format!("masks/{index}.png"),
        FeatureChartConfig::new().with_length_policy(FeatureLengthPolicy::Fit),
    )
    .expect("chart init");
    let view = chart
        .derive(&FeatureChartProps::new(vec![9.0; 5]))
        .expect("derive");

    assert_eq!(view.chart.data[0].y.len(), 25);
    assert_eq!(view.chart.data[0].y[5], 0.0);
    assert_eq!(view.chart.layout.images[24].source, "masks/24.png");
}

#[test]
fn nan_values_pass_through_without_error() {
    let mut chart = chart();
    let mut features = vec![1.0; 25];
    features[2] = f64::NAN;
    let view = chart
        .render(&FeatureChartProps::new(features))
        .expect("render");

    assert!(view.chart.data[0].y[2].is_nan());
    assert_eq!(view.chart.data[0].marker.color[2], neutral());
    assert_eq!(view.chart.layout.yaxis.range, Some([0.0, 100.0]));
}

#[test]
fn english_labels_and_custom_threshold() {
    let chart = FeatureChartRenderer::new(
        NullRenderer::default(),
        hlac_chart::core::BasePathMaskResolver::default(),
        FeatureChartConfig::new()
            .with_labels(hlac_chart::api::ChartLabels::english())
            .with_fixed_axis_max(10.0),
    )
    .expect("chart init");

    let view = chart
        .derive(&FeatureChartProps::new(vec![10.0; 25]).with_loading(true))
        .expect("derive");
    assert_eq!(view.chart.layout.title.text, "HLAC Features (25 dimensions)");
    assert_eq!(view.chart.layout.yaxis.range, Some([0.0, 10.0]));
    assert_eq!(
        view.busy_overlay.expect("overlay").caption.text,
        "Computing features..."
    );
}

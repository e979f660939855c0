use criterion::{Criterion, criterion_group, criterion_main};
use hlac_chart::api::{FeatureChartProps, FeatureChartRenderer};
use hlac_chart::render::{JsonRenderer, NullRenderer};
use std::hint::black_box;

fn bench_derive_stock_vector(c: &mut Criterion) {
    let chart =
        FeatureChartRenderer::with_base_path(NullRenderer::default(), "/").expect("chart init");
    let features: Vec<f64> = (0..25).map(|i| f64::from(i) * 7.5 - 20.0).collect();
    let props = FeatureChartProps::new(features).with_loading(true);

    c.bench_function("derive_feature_chart_view_25", |b| {
        b.iter(|| {
            let _ = chart.derive(black_box(&props)).expect("derive");
        })
    });
}

fn bench_render_to_json(c: &mut Criterion) {
    let mut chart =
        FeatureChartRenderer::with_base_path(JsonRenderer::default(), "/").expect("chart init");
    let props = FeatureChartProps::new(vec![42.0; 25]);

    c.bench_function("render_feature_chart_json_25", |b| {
        b.iter(|| {
            chart.render(black_box(&props)).expect("render");
        })
    });
}

criterion_group!(benches, bench_derive_stock_vector, bench_render_to_json);
criterion_main!(benches);

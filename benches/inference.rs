//! Inference benchmark: feature vector → scale → regress → clamp.

use adapt_engine::config::{DifficultyConfig, FeaturesConfig};
use adapt_engine::history::Attempt;
use adapt_engine::model::{LinearModel, RegressorParams, ScalerParams};
use adapt_engine::predictor::Predictor;
use adapt_engine::FEATURE_DIM;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn make_model() -> LinearModel {
    LinearModel::new(
        ScalerParams {
            mean: vec![0.5; FEATURE_DIM],
            scale: vec![0.2; FEATURE_DIM],
        },
        RegressorParams {
            coefficients: vec![0.1; FEATURE_DIM],
            intercept: 2.5,
        },
        None,
    )
    .unwrap()
}

fn make_history(n: usize) -> Vec<Attempt> {
    (0..n)
        .map(|i| Attempt {
            marks: (i % 11) as f64,
            max_marks: 10.0,
            difficulty: (i % 5 + 1) as u8,
        })
        .collect()
}

fn bench_predict(c: &mut Criterion) {
    let model = make_model();
    let predictor = Predictor::new(&FeaturesConfig::default(), DifficultyConfig::default());
    let history = make_history(100);

    c.bench_function("predict_100_attempts", |b| {
        b.iter(|| predictor.predict(black_box(&history), &model).unwrap())
    });
}

criterion_group!(benches, bench_predict);
criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use snake_features::features::{ExtractorConfig, FeatureExtractor};
use snake_features::game_fixture;
use snake_features::types::Move;
use snake_features::wire_representation::StepAction;

fn extractor() -> FeatureExtractor<String> {
    FeatureExtractor::new("me".to_string(), ExtractorConfig::new(20)).unwrap()
}

fn bench_collect(c: &mut Criterion) {
    let g = game_fixture(include_str!("../fixtures/four_snake_game.json"));
    let extractor = extractor();
    let step = StepAction::step(Move::Left);
    let dash = StepAction::dash(Move::Up, 2);
    c.bench_function("collect step", |b| {
        b.iter(|| black_box(&extractor).collect(black_box(&g), Some(&step)))
    });
    c.bench_function("collect dash", |b| {
        b.iter(|| black_box(&extractor).collect(black_box(&g), Some(&dash)))
    });
}

fn bench_materialize(c: &mut Criterion) {
    let g = game_fixture(include_str!("../fixtures/four_snake_game.json"));
    let extractor = extractor();
    let batch = g
        .legal_actions("me")
        .iter()
        .map(|a| extractor.collect(&g, Some(a)).unwrap())
        .collect::<Vec<_>>();
    c.bench_function("to dense", |b| {
        b.iter(|| extractor.to_dense(black_box(&batch[0])))
    });
    c.bench_function("to sparse batch", |b| {
        b.iter(|| extractor.to_sparse_batch(black_box(&batch)))
    });
}

fn bench_build(c: &mut Criterion) {
    c.bench_function("build tables", |b| {
        b.iter(|| FeatureExtractor::new(0u8, black_box(ExtractorConfig::new(20))))
    });
}

criterion_group!(benches, bench_build, bench_collect, bench_materialize);
criterion_main!(benches);

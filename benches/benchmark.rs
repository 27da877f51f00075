use criterion::{black_box, criterion_group, criterion_main, Criterion};
use record_search::{sample::sample_records, SearchConfig, SearchEngine};

fn fit_and_search_benchmark(c: &mut Criterion) {
    let records = sample_records(5_000, 42);

    c.bench_function("initialize_sequential", |b| {
        let config = SearchConfig {
            parallel_threshold: usize::MAX,
            ..SearchConfig::default()
        };
        b.iter(|| {
            let mut engine = SearchEngine::with_config(config.clone()).unwrap();
            engine.initialize(black_box(records.clone())).unwrap();
            engine
        });
    });

    c.bench_function("initialize_parallel", |b| {
        let config = SearchConfig {
            parallel_threshold: 0,
            ..SearchConfig::default()
        };
        b.iter(|| {
            let mut engine = SearchEngine::with_config(config.clone()).unwrap();
            engine.initialize(black_box(records.clone())).unwrap();
            engine
        });
    });

    let engine = SearchEngine::from_records(records).unwrap();

    c.bench_function("semantic_search", |b| {
        b.iter(|| engine.semantic_search(black_box("delhi public school physics"), 10).unwrap().len());
    });

    c.bench_function("search_with_filters", |b| {
        b.iter(|| {
            engine
                .search_with_filters(black_box("mumbai chemistry"), Some(true), Some(true), 20)
                .unwrap()
                .len()
        });
    });
}

criterion_group!(benches, fit_and_search_benchmark);
criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use partclass::prelude::*;

fn bench_classify(c: &mut Criterion) {
    let catalog = PartCatalog::new();

    c.bench_function("classify", |b| {
        b.iter(|| catalog.classify(black_box("ABM3-12.000MHZ-B2-T")));
    });
}

fn bench_find_handler(c: &mut Criterion) {
    let catalog = PartCatalog::new();

    c.bench_function("find_handler", |b| {
        b.iter(|| catalog.find_handler(black_box("SMAJ5.0A")));
    });

    c.bench_function("find_handler_miss", |b| {
        b.iter(|| catalog.find_handler(black_box("TOTALLY-UNKNOWN-01")));
    });
}

fn bench_replacement(c: &mut Criterion) {
    let catalog = PartCatalog::new();

    c.bench_function("is_official_replacement", |b| {
        b.iter(|| catalog.is_official_replacement(black_box("DSX321GA"), black_box("DSX321G")));
    });
}

criterion_group!(benches, bench_classify, bench_find_handler, bench_replacement);
criterion_main!(benches);

//! Criterion benchmarks for the vertex sampling kernel.
//!
//! Measures per-vertex cost across the placement modes and catalogue sizes
//! to characterise how the weighted selector and the active-volume
//! rejection loop scale.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use vertexgen_geometry::{BoundingBox, Cell, DetectorModel};
use vertexgen_sampler::{SamplerConfig, VertexMode, VertexSampler};

/// Generate a model of `n` equal-sized cells laid out along x, with masses
/// growing linearly so the selector has a non-trivial weight profile.
fn generate_model(n: usize) -> DetectorModel {
    let cells: Vec<Cell> = (0..n)
        .map(|i| {
            let x0 = 20.0 * i as f64;
            let bounds =
                BoundingBox::new([x0, -50.0, 0.0], [x0 + 10.0, 50.0, 200.0]).unwrap();
            Cell::new(format!("tpc{i:02}"), bounds, 100.0 + i as f64).unwrap()
        })
        .collect();
    DetectorModel::new(cells).unwrap()
}

/// Benchmark mass-weighted sampling as the catalogue grows.
fn bench_sampled_mode(c: &mut Criterion) {
    let mut group = c.benchmark_group("sampled_mode");

    for size in [2, 16, 64] {
        let model = generate_model(size);
        let config = SamplerConfig::builder().sigma_t(1.0).build().unwrap();

        group.bench_with_input(BenchmarkId::new("sample_vertex", size), &model, |b, model| {
            let mut sampler = VertexSampler::configured(42, model, config.clone()).unwrap();
            b.iter(|| black_box(sampler.sample_vertex().unwrap()));
        });
    }

    group.finish();
}

/// Benchmark the geometry-free placement modes.
fn bench_fixed_and_box_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("direct_modes");
    let model = generate_model(4);

    let fixed = SamplerConfig::builder()
        .mode(VertexMode::Fixed {
            position: [10.0, 0.0, 100.0],
        })
        .build()
        .unwrap();
    group.bench_function("fixed", |b| {
        let mut sampler = VertexSampler::configured(42, &model, fixed.clone()).unwrap();
        b.iter(|| black_box(sampler.sample_vertex().unwrap()));
    });

    let unchecked = SamplerConfig::builder()
        .mode(VertexMode::Box {
            min_position: [0.0, -50.0, 0.0],
            max_position: [70.0, 50.0, 200.0],
            check_active: false,
        })
        .build()
        .unwrap();
    group.bench_function("box_unchecked", |b| {
        let mut sampler = VertexSampler::configured(42, &model, unchecked.clone()).unwrap();
        b.iter(|| black_box(sampler.sample_vertex().unwrap()));
    });

    group.finish();
}

/// Benchmark the rejection loop with the region covering roughly twice the
/// active volume, so half of all draws get redrawn.
fn bench_checked_box_mode(c: &mut Criterion) {
    let mut group = c.benchmark_group("checked_box_mode");

    for size in [2, 16, 64] {
        let model = generate_model(size);
        let span = 20.0 * size as f64;
        let config = SamplerConfig::builder()
            .mode(VertexMode::Box {
                min_position: [0.0, -50.0, 0.0],
                max_position: [span, 50.0, 200.0],
                check_active: true,
            })
            .build()
            .unwrap();

        group.bench_with_input(BenchmarkId::new("sample_vertex", size), &model, |b, model| {
            let mut sampler = VertexSampler::configured(42, model, config.clone()).unwrap();
            b.iter(|| black_box(sampler.sample_vertex().unwrap()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_sampled_mode,
    bench_fixed_and_box_modes,
    bench_checked_box_mode
);
criterion_main!(benches);

// Benchmarks for ellipse stamping and full field generation
//
// Run with: cargo bench --bench fill_bench

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use feature_field::{FieldConfig, Grid, RasterFeature, generate};
use ndarray::Array2;

fn bench_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("ellipse_fill");

    for size in [64usize, 256, 1024] {
        let feature = RasterFeature::new(
            (size as f64 / 2.0, size as f64 / 2.0),
            (size as f64 * 0.3, size as f64 * 0.1),
            0.6,
        )
        .unwrap();
        let mut grid: Grid = Array2::zeros((size, size));

        group.bench_with_input(BenchmarkId::new("fill", format!("{size}x{size}")), &size, |b, _| {
            b.iter(|| feature.fill(black_box(&mut grid), 1))
        });
    }

    group.finish();
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    for levels in [1u32, 4, 16] {
        let config = FieldConfig {
            num_levels: levels,
            max_features_per_level: 10,
            num_x_pixels: 128,
            num_y_pixels: 256,
            seed: 123_456_789,
        };
        group.bench_with_input(BenchmarkId::new("levels", levels), &config, |b, cfg| {
            b.iter(|| generate(black_box(cfg)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_fill, bench_generate);
criterion_main!(benches);

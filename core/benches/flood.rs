use criterion::{criterion_group, criterion_main, Criterion};
use inundito_core::{ColorGrid, GameConfig, GridGenerator, Palette, RandomGridGenerator};
use std::hint::black_box;

fn uniform_grid(size: (u8, u8)) -> ColorGrid {
    let total = usize::from(size.0) * usize::from(size.1);
    ColorGrid::from_color_indices(size, &vec![0; total], Palette::default()).unwrap()
}

fn bench_blob_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("blob_at");

    // Worst case: the whole board is one blob.
    for size in [16u8, 64, 128] {
        let grid = uniform_grid((size, size));
        group.bench_function(format!("uniform_{size}x{size}"), |b| {
            b.iter(|| grid.blob_at(black_box((0, 0))).unwrap())
        });
    }

    // Typical case: a freshly generated board.
    let grid = RandomGridGenerator::new(42).generate(GameConfig::default());
    group.bench_function("random_16x16", |b| {
        b.iter(|| grid.blob_at(black_box((0, 0))).unwrap())
    });

    group.finish();
}

fn bench_flood(c: &mut Criterion) {
    c.bench_function("flood_from_uniform_64x64", |b| {
        b.iter_batched(
            || uniform_grid((64, 64)),
            |mut grid| grid.flood_from(black_box((0, 0))).unwrap(),
            criterion::BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_blob_search, bench_flood);
criterion_main!(benches);

//! Criterion benchmarks for the hull pipeline.
//! Focus sizes: n in {10, 100, 1000} points drawn from a fixed square.
//! Results land under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use octohull::api::{
    build_radial_path, convex_hull, draw_point_cloud, reduce_to_convex_path, CloudCfg,
    CloudReplay, PointCount,
};

fn cloud(n: usize, seed: u64) -> Vec<octohull::Point> {
    let cfg = CloudCfg {
        count: PointCount::Fixed(n),
        extent: 1_000,
    };
    draw_point_cloud(cfg, CloudReplay { seed, index: 0 })
}

fn bench_hull(c: &mut Criterion) {
    let mut group = c.benchmark_group("hull");
    for &n in &[10usize, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("convex_hull", n), &n, |b, &n| {
            b.iter_batched(
                || cloud(n, 43),
                |pts| {
                    let _hull = convex_hull(&pts).unwrap();
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("radial_path", n), &n, |b, &n| {
            b.iter_batched(
                || cloud(n, 44),
                |pts| {
                    let _path = build_radial_path(&pts).unwrap();
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("reduce", n), &n, |b, &n| {
            let path = build_radial_path(&cloud(n, 45)).unwrap();
            b.iter(|| {
                let _convex = reduce_to_convex_path(&path).unwrap();
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_hull);
criterion_main!(benches);

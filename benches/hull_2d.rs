//! Criterion benchmarks for 2D hull construction.
//! Focus sizes: n in {10, 100, 1000}, uniform square and circle clouds.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use glam::{dvec2, DVec2};
use quickhull2d::{ConvexHull2d, Distribution, HullConfig};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn square_cloud(n: usize, seed: u64) -> Vec<DVec2> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| dvec2(rng.gen_range(-200.0..200.0), rng.gen_range(-200.0..200.0)))
        .collect()
}

// Every point is a hull vertex, which is the worst case for the refinement loop.
fn circle_cloud(n: usize, seed: u64) -> Vec<DVec2> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let theta: f64 = rng.gen::<f64>() * std::f64::consts::TAU;
            dvec2(theta.cos(), theta.sin()) * 100.0
        })
        .collect()
}

fn bench_hull_2d(c: &mut Criterion) {
    let mut group = c.benchmark_group("hull_2d");
    for &n in &[10usize, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("square_outward", n), &n, |b, &n| {
            b.iter_batched(
                || square_cloud(n, 14),
                |points| {
                    let _hull = ConvexHull2d::try_from_points(&points).unwrap();
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("square_nearest_segment", n), &n, |b, &n| {
            let config = HullConfig::default().with_distribution(Distribution::NearestSegment);
            b.iter_batched(
                || square_cloud(n, 14),
                |points| {
                    let _res = ConvexHull2d::try_from_points_with(&points, config, &mut ());
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("circle_outward", n), &n, |b, &n| {
            b.iter_batched(
                || circle_cloud(n, 15),
                |points| {
                    let _hull = ConvexHull2d::try_from_points(&points).unwrap();
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_hull_2d);
criterion_main!(benches);

//! Criterion benchmarks for randgen_core.
//!
//! Benchmarks cover:
//! - Single draws per algorithm
//! - Batch draws into a pre-allocated buffer (1K, 10K, 100K)
//! - Gaussian draws through the rand adapter
//! - Generator creation, sequential and from rayon workers

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use randgen_core::factory::GeneratorFactory;
use randgen_core::rng::{Algorithm, UniformGenerator};
use rayon::prelude::*;

/// Benchmark `draw_one` throughput.
fn bench_single_draws(c: &mut Criterion) {
    let mut group = c.benchmark_group("draw_one");

    for algorithm in Algorithm::ALL {
        group.bench_function(BenchmarkId::from_parameter(algorithm), |b| {
            let mut gen = GeneratorFactory::new(algorithm, 42).stream(0).unwrap();
            b.iter(|| {
                let mut sum = 0.0;
                for _ in 0..1_000 {
                    sum += gen.draw_one();
                }
                black_box(sum)
            });
        });
    }

    group.finish();
}

/// Benchmark `draw_many` with varying batch sizes.
fn bench_batch_draws(c: &mut Criterion) {
    let mut group = c.benchmark_group("draw_many");

    for algorithm in Algorithm::ALL {
        for n_draws in [1_000, 10_000, 100_000] {
            group.bench_with_input(
                BenchmarkId::new(algorithm.name(), n_draws),
                &n_draws,
                |b, &n| {
                    let mut gen = GeneratorFactory::new(algorithm, 42).stream(0).unwrap();
                    let mut buffer = vec![0.0; n];
                    b.iter(|| {
                        gen.draw_many(&mut buffer, n).unwrap();
                        black_box(buffer.iter().sum::<f64>())
                    });
                },
            );
        }
    }

    group.finish();
}

/// Benchmark standard normal draws sampled through `rand_distr`.
fn bench_gaussian(c: &mut Criterion) {
    let mut group = c.benchmark_group("gaussian");

    for algorithm in Algorithm::ALL {
        group.bench_function(BenchmarkId::from_parameter(algorithm), |b| {
            let mut gen = GeneratorFactory::new(algorithm, 7).stream(0).unwrap();
            b.iter(|| {
                let mut sum = 0.0;
                for _ in 0..1_000 {
                    sum += gen.gaussian();
                }
                black_box(sum)
            });
        });
    }

    group.finish();
}

/// Benchmark generator creation. RANMAR pays for its 97-entry table.
fn bench_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("create_generator");

    for algorithm in Algorithm::ALL {
        group.bench_function(BenchmarkId::new("sequential", algorithm), |b| {
            let factory = GeneratorFactory::new(algorithm, 1);
            b.iter(|| black_box(factory.stream(black_box(17)).unwrap()));
        });
    }

    for n_workers in [1_000usize, 10_000] {
        group.bench_with_input(
            BenchmarkId::new("parallel_ranmar", n_workers),
            &n_workers,
            |b, &n| {
                b.iter(|| {
                    let factory = GeneratorFactory::new(Algorithm::Ranmar, 3);
                    let total: f64 = (0..n)
                        .into_par_iter()
                        .map(|_| factory.create_generator().unwrap().draw_one())
                        .sum();
                    black_box(total)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_single_draws,
    bench_batch_draws,
    bench_gaussian,
    bench_creation
);
criterion_main!(benches);

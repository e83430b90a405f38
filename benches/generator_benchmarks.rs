//! Generator Benchmarks with 95% Confidence Intervals
//!
//! Reproducible performance measurements across the six generator
//! strategies, so the per-strategy timings in the comparison report can
//! be checked against controlled measurements.
//!
//! Statistical rigor:
//! - Sample size: 100 iterations per benchmark
//! - Confidence intervals: 95% bootstrap CI
//!
//! Run with: cargo criterion

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mcbench::prelude::*;

/// Per-strategy π estimation at the default trial count.
///
/// The OS-backed strategy pays a syscall per draw, so its interval sits
/// well above the seeded ones.
fn bench_pi_per_strategy(c: &mut Criterion) {
    let mut group = c.benchmark_group("Pi_Estimation");

    // Configure for statistical significance
    group.sample_size(100); // 100 samples for narrow CI
    group.confidence_level(0.95); // 95% confidence interval

    for generator in Generator::ALL {
        group.bench_with_input(
            BenchmarkId::new("estimate_pi", generator.name()),
            &generator,
            |b, &generator| {
                let sampler = generator.sampler().unwrap();
                b.iter(|| {
                    let mut rng = McRng::new(42);
                    black_box(estimate_pi(10_000, &sampler, &mut rng))
                });
            },
        );
    }

    group.finish();
}

/// Per-strategy integral estimation at the default trial count.
fn bench_integral_per_strategy(c: &mut Criterion) {
    let mut group = c.benchmark_group("Integral_Estimation");
    group.sample_size(100);
    group.confidence_level(0.95);

    for generator in Generator::ALL {
        group.bench_with_input(
            BenchmarkId::new("estimate_integral", generator.name()),
            &generator,
            |b, &generator| {
                let sampler = generator.sampler().unwrap();
                b.iter(|| {
                    let mut rng = McRng::new(42);
                    black_box(estimate_integral(10_000, &sampler, &mut rng))
                });
            },
        );
    }

    group.finish();
}

/// Trial-count scaling for the plain uniform strategy.
///
/// Wall time should scale linearly in the trial count while the error
/// shrinks at O(1/sqrt(n)).
fn bench_pi_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("Pi_Scaling");
    group.sample_size(100);
    group.confidence_level(0.95);

    for samples in [1000, 10_000, 100_000].iter() {
        group.bench_with_input(BenchmarkId::new("uniform", samples), samples, |b, &n| {
            let sampler = Generator::Uniform.sampler().unwrap();
            b.iter(|| {
                let mut rng = McRng::new(42);
                black_box(estimate_pi(n, &sampler, &mut rng))
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_pi_per_strategy,
    bench_integral_per_strategy,
    bench_pi_scaling
);
criterion_main!(benches);

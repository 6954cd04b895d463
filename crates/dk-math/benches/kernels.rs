//! Criterion benchmarks for `dk-math`.
//!
//! Focus on the kernels that sit inside normalization and sampling loops.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use dk_math::math::sample::categorical;
use dk_math::{log_add_exp, log_normalize, log_sum_exp, normalize};

fn bench_log_kernels(c: &mut Criterion) {
    let mut group = c.benchmark_group("log_domain");

    group.bench_function("log_add_exp", |b| {
        b.iter(|| black_box(log_add_exp(black_box(-3.2), black_box(-1.7))));
    });

    for n in [8usize, 64, 512] {
        let v: Vec<f64> = (0..n).map(|i| -(i as f64) * 0.37).collect();
        group.bench_with_input(BenchmarkId::new("log_sum_exp", n), &v, |b, v| {
            b.iter(|| black_box(log_sum_exp(black_box(v))));
        });
        group.bench_with_input(BenchmarkId::new("log_normalize", n), &v, |b, v| {
            b.iter(|| {
                let mut w = v.clone();
                log_normalize(black_box(&mut w)).unwrap();
                black_box(w)
            });
        });
    }

    group.finish();
}

fn bench_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("sampling");

    for n in [8usize, 64, 512] {
        let mut p: Vec<f64> = (1..=n).map(|i| i as f64).collect();
        normalize(&mut p).unwrap();
        group.bench_with_input(BenchmarkId::new("categorical", n), &p, |b, p| {
            let mut rng = SmallRng::seed_from_u64(17);
            b.iter(|| black_box(categorical(&mut rng, black_box(p))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_log_kernels, bench_sampling);
criterion_main!(benches);

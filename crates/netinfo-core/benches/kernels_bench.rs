//! Benchmarks for the streaming reduction kernels

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use netinfo_core::kernels::{exact_extrema, mean_abs, zero_seeded_extrema};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn make_data(n: usize) -> Vec<f32> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..n).map(|_| rng.gen_range(-1.0..1.0)).collect()
}

fn bench_kernels(c: &mut Criterion) {
    let mut group = c.benchmark_group("kernels");

    for &n in &[1_000usize, 100_000, 1_000_000] {
        let data = make_data(n);

        group.bench_with_input(BenchmarkId::new("mean_abs", n), &data, |b, data| {
            b.iter(|| mean_abs(black_box(data)))
        });
        group.bench_with_input(
            BenchmarkId::new("zero_seeded_extrema", n),
            &data,
            |b, data| b.iter(|| zero_seeded_extrema(black_box(data))),
        );
        group.bench_with_input(BenchmarkId::new("exact_extrema", n), &data, |b, data| {
            b.iter(|| exact_extrema(black_box(data)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_kernels);
criterion_main!(benches);

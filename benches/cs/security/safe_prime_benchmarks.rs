//! Safe-prime group generation and exchange timings.
//!
//! The 64 byte case is the size the demo binary runs with; it doubles as a
//! regression check that generation stays in bounded wall-clock time.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use safe_dh::security::{public_key, run_exchange, RandomByteSource, SafePrimeGenerator};
use safe_dh::DhConfig;

fn bench_safe_prime_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("safe_prime_generation");
    group.sample_size(10);

    for byte_length in [16usize, 32, 64] {
        let config = DhConfig::with_byte_length(byte_length);
        let generator = SafePrimeGenerator::new(&config).unwrap();
        let mut source = RandomByteSource::open(&config.entropy_path, config.randomness).unwrap();

        group.bench_with_input(
            BenchmarkId::from_parameter(byte_length),
            &byte_length,
            |b, _| b.iter(|| black_box(generator.generate(&mut source).unwrap())),
        );
    }

    group.finish();
}

fn bench_modpow(c: &mut Criterion) {
    let config = DhConfig::default();
    let mut source = RandomByteSource::open(&config.entropy_path, config.randomness).unwrap();
    let dh = SafePrimeGenerator::new(&config)
        .unwrap()
        .generate(&mut source)
        .unwrap();
    let private = safe_dh::security::private_key(&mut source, config.byte_length).unwrap();

    c.bench_function("public_key_512_bit", |b| {
        b.iter(|| black_box(public_key(&dh.g, &private, &dh.p)))
    });
}

fn bench_full_exchange(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_exchange");
    group.sample_size(10);
    group.bench_function("default", |b| {
        b.iter(|| black_box(run_exchange(&DhConfig::default()).unwrap()))
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_safe_prime_generation,
    bench_modpow,
    bench_full_exchange
);
criterion_main!(benches);

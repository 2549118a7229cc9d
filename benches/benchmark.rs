//! Benchmarks for MULTI2 cipher operations.
//!
//! Measures key schedule setup, single-block encrypt/decrypt throughput,
//! and encrypt throughput scaling across different round counts.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use multi2::{Multi2, BLOCK_SIZE, KEY_SIZE};

/// Key used consistently across all benchmarks.
const BENCH_KEY: [u8; KEY_SIZE] = [
    0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xAA, 0xBB, 0xCC, 0xDD, 0xEE,
    0xFF, 0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF, 0xFE, 0xDC, 0xBA, 0x98, 0x76, 0x54,
    0x32, 0x10, 0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF,
];

/// Block used consistently across all benchmarks.
const BENCH_BLOCK: [u8; BLOCK_SIZE] = [0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF];

/// Benchmarks `Multi2::new()`: key split plus the nine-round schedule.
fn bench_key_setup(c: &mut Criterion) {
    c.bench_function("key_setup", |b| {
        b.iter(|| Multi2::new(black_box(&BENCH_KEY)).unwrap());
    });
}

/// Benchmarks single-block `encrypt_block()` with the default 128 rounds.
fn bench_encrypt(c: &mut Criterion) {
    let cipher = Multi2::new(&BENCH_KEY).unwrap();

    let mut group = c.benchmark_group("encrypt_single_block");
    group.throughput(Throughput::Bytes(BLOCK_SIZE as u64));
    group.bench_function("128_rounds", |b| {
        b.iter(|| cipher.encrypt_block(black_box(&BENCH_BLOCK)));
    });
    group.finish();
}

/// Benchmarks single-block `decrypt_block()` with the default 128 rounds.
fn bench_decrypt(c: &mut Criterion) {
    let cipher = Multi2::new(&BENCH_KEY).unwrap();

    let mut group = c.benchmark_group("decrypt_single_block");
    group.throughput(Throughput::Bytes(BLOCK_SIZE as u64));
    group.bench_function("128_rounds", |b| {
        b.iter(|| cipher.decrypt_block(black_box(&BENCH_BLOCK)));
    });
    group.finish();
}

/// Benchmarks `encrypt_block()` across different round counts.
///
/// Includes counts that stop partway through a group of four.
fn bench_encrypt_round_scaling(c: &mut Criterion) {
    let round_counts: &[u32] = &[9, 32, 128, 255];

    let mut group = c.benchmark_group("encrypt_round_scaling");
    group.throughput(Throughput::Bytes(BLOCK_SIZE as u64));

    for &rounds in round_counts {
        let cipher = Multi2::with_rounds(&BENCH_KEY, rounds).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(rounds), &rounds, |b, _| {
            b.iter(|| cipher.encrypt_block(black_box(&BENCH_BLOCK)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_key_setup,
    bench_encrypt,
    bench_decrypt,
    bench_encrypt_round_scaling,
);
criterion_main!(benches);

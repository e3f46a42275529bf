// Copyright (c) 2024 Botho Foundation

//! Benchmarks for the super-thin codec.
//!
//! Run with: cargo bench --bench superthin_benchmarks
//!
//! These benchmarks measure:
//! - Interpolation-search lookup cost over sorted mempools of varying size
//! - Full encode throughput
//! - Full decode throughput, with and without planted receiver divergence

use bth_superthin::{config::CodecConfig, decode, encode, finder, sizing, txid::Txid};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sha2::{Digest, Sha256};

/// Build a deterministic mempool of `n` SHA-256-derived txids.
fn synthetic_mempool(n: usize) -> Vec<Txid> {
    (0..n)
        .map(|i| {
            let mut hasher = Sha256::new();
            hasher.update((i as u64).to_le_bytes());
            let digest: [u8; 32] = hasher.finalize().into();
            Txid::from_raw(&digest)
        })
        .collect()
}

fn bench_finder_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("finder lookup");

    for size in [1_000usize, 10_000, 100_000] {
        let mut sorted = synthetic_mempool(size);
        sorted.sort();
        let sl = sizing::start_length(sorted.len());
        let target = sorted[size / 2];

        group.bench_with_input(BenchmarkId::new("members", size), &size, |b, _| {
            b.iter(|| black_box(finder::find(&sorted, target.as_hex(), sl, 400)))
        });
    }

    group.finish();
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    let config = CodecConfig::default();

    for size in [100usize, 1_000, 10_000] {
        let mempool = synthetic_mempool(size);
        group.bench_with_input(BenchmarkId::new("txids", size), &size, |b, _| {
            b.iter(|| black_box(encode(&mempool, &config).unwrap()))
        });
    }

    group.finish();
}

fn bench_decode_exact_match(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode exact match");
    let config = CodecConfig::default();

    for size in [100usize, 1_000, 10_000] {
        let mempool = synthetic_mempool(size);
        let (prefixes, commitment, _) = encode(&mempool, &config).unwrap();
        group.bench_with_input(BenchmarkId::new("txids", size), &size, |b, _| {
            b.iter(|| black_box(decode(&mempool, &prefixes, commitment, &config, None).unwrap()))
        });
    }

    group.finish();
}

fn bench_decode_with_receiver_divergence(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode with receiver extras");
    let config = CodecConfig::default();

    let mempool = synthetic_mempool(1_000);
    let (prefixes, commitment, _) = encode(&mempool, &config).unwrap();

    let mut receiver = mempool.clone();
    receiver.extend(synthetic_mempool(30).into_iter().map(|t| {
        // Re-derive with an offset so these don't collide with the sender's set.
        let mut hasher = Sha256::new();
        hasher.update(t.to_raw());
        hasher.update(b"receiver-only");
        let digest: [u8; 32] = hasher.finalize().into();
        Txid::from_raw(&digest)
    }));

    group.bench_function("1000 sender + 30 receiver-only", |b| {
        b.iter(|| black_box(decode(&receiver, &prefixes, commitment, &config, None).unwrap()))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_finder_lookup,
    bench_encode,
    bench_decode_exact_match,
    bench_decode_with_receiver_divergence,
);
criterion_main!(benches);

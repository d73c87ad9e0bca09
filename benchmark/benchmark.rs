// Copyright (c) 2025-present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;

use helixscan::interleave::Interleaved;
use helixscan::near_palindrome::{find_complement_palindrome, find_near_palindrome};
use helixscan::radius::{RadiusProfile, one_mismatch_radii, zero_mismatch_radii};
use helixscan::reference::longest_within;

/// Package version from Cargo.toml
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Print benchmark header with version and timestamp
fn print_benchmark_header() {
    use std::sync::Once;
    static ONCE: Once = Once::new();
    ONCE.call_once(|| {
        let now = chrono::Utc::now();
        eprintln!("\n╔════════════════════════════════════════════════════════════╗");
        eprintln!(
            "║ helixscan benchmark v{}                                  ║",
            VERSION
        );
        eprintln!(
            "║ Run date: {}                              ║",
            now.format("%Y-%m-%d %H:%M:%S UTC")
        );
        eprintln!("║ Platform: {:<49} ║", std::env::consts::ARCH);
        eprintln!("╚════════════════════════════════════════════════════════════╝\n");
    });
}

// ============================================================================
// Input Generators
// ============================================================================

/// Uniformly random ACGT with a fixed seed so runs are comparable.
fn random_sequence(len: usize, seed: u64) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| b"ACGT"[rng.gen_range(0..4)]).collect()
}

/// A single base repeated: no base pairs with its neighbours.
fn homopolymer(len: usize) -> Vec<u8> {
    vec![b'A'; len]
}

/// Alternating A/T: the whole sequence is one complement palindrome (even
/// lengths), which maximises mirroring.
fn complementary_run(len: usize) -> Vec<u8> {
    (0..len).map(|i| b"AT"[i % 2]).collect()
}

/// Complementary arms separated by a single mismatched base every `spacing`
/// bases, so the one-mismatch pass keeps inheriting spent budgets.
fn punctuated_run(len: usize, spacing: usize) -> Vec<u8> {
    (0..len)
        .map(|i| if i % spacing == spacing - 1 { b'G' } else { b"AT"[i % 2] })
        .collect()
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_near_palindrome(c: &mut Criterion) {
    print_benchmark_header();
    let mut group = c.benchmark_group("near_palindrome");

    for size in [16, 256, 4096, 65536, 1_000_000] {
        group.throughput(Throughput::Bytes(size as u64));

        let inputs = [
            ("random", random_sequence(size, 42)),
            ("homopolymer", homopolymer(size)),
            ("complementary", complementary_run(size)),
            ("punctuated", punctuated_run(size, 101)),
            // arms grow with the input
            ("sparse", punctuated_run(size, (size / 4).max(1))),
        ];
        for (name, sequence) in &inputs {
            group.bench_with_input(BenchmarkId::new(*name, size), sequence, |b, seq| {
                b.iter(|| find_near_palindrome(black_box(seq)));
            });
        }
    }

    group.finish();
}

fn bench_exact_palindrome(c: &mut Criterion) {
    let mut group = c.benchmark_group("complement_palindrome");

    for size in [256, 4096, 65536, 1_000_000] {
        let sequence = random_sequence(size, 7);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("random", size), &sequence, |b, seq| {
            b.iter(|| find_complement_palindrome(black_box(seq)));
        });
    }

    group.finish();
}

fn bench_radius_passes(c: &mut Criterion) {
    let mut group = c.benchmark_group("radius_passes");

    for size in [4096, 65536] {
        let sequence = random_sequence(size, 1234);
        let interleaved = Interleaved::from_ascii(&sequence).expect("generated input is ACGT");
        let zero = zero_mismatch_radii(&interleaved);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("interleave", size), &sequence, |b, seq| {
            b.iter(|| Interleaved::from_ascii(black_box(seq)));
        });

        group.bench_with_input(
            BenchmarkId::new("zero_mismatch", size),
            &interleaved,
            |b, seq| {
                b.iter(|| zero_mismatch_radii(black_box(seq)));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("one_mismatch", size),
            &(&interleaved, &zero),
            |b, (seq, zero)| {
                b.iter(|| one_mismatch_radii(black_box(seq), black_box(zero)));
            },
        );

        group.bench_with_input(BenchmarkId::new("both", size), &interleaved, |b, seq| {
            b.iter(|| RadiusProfile::compute(black_box(seq)));
        });
    }

    group.finish();
}

/// Linear scan against the brute-force checker on sizes the checker can handle.
fn bench_versus_reference(c: &mut Criterion) {
    let mut group = c.benchmark_group("versus_reference");

    for size in [16, 64, 256, 1024] {
        let sequence = random_sequence(size, 99);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("linear", size), &sequence, |b, seq| {
            b.iter(|| find_near_palindrome(black_box(seq)));
        });

        group.bench_with_input(BenchmarkId::new("reference", size), &sequence, |b, seq| {
            b.iter(|| longest_within(black_box(seq), 1));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_near_palindrome,
    bench_exact_palindrome,
    bench_radius_passes,
    bench_versus_reference
);
criterion_main!(benches);

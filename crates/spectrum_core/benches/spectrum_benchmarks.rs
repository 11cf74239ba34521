//! Criterion benchmarks for the indicator generators.
//!
//! Measures the prime finder and the three T generators across bounds to
//! characterise how the progression walk, the packed sieve and the
//! per-index test scale against each other.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use spectrum_core::indicator::{indicator_at, mark_progressions, sieve_spectrum};
use spectrum_core::sieve::primes_upto;
use spectrum_core::types::odd_value;

/// Benchmark the bounded prime finder.
fn bench_prime_finder(c: &mut Criterion) {
    let mut group = c.benchmark_group("prime_finder");

    for limit in [1_000, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::new("primes_upto", limit), &limit, |b, &limit| {
            b.iter(|| primes_upto(black_box(limit)));
        });
    }

    group.finish();
}

/// Benchmark the three full-array generators against each other.
fn bench_generators(c: &mut Criterion) {
    let mut group = c.benchmark_group("indicator_generators");

    for bound in [1_000, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::new("odd_sieve", bound), &bound, |b, &bound| {
            b.iter(|| sieve_spectrum(black_box(bound)));
        });

        group.bench_with_input(
            BenchmarkId::new("progression_default_cutoff", bound),
            &bound,
            |b, &bound| {
                b.iter(|| mark_progressions(black_box(bound), None));
            },
        );

        // The oversized default cutoff dominates progression marking;
        // the minimal covering cutoff isolates the marking walk itself.
        let cutoff = odd_value(bound).isqrt() as usize + 1;
        group.bench_with_input(
            BenchmarkId::new("progression_minimal_cutoff", bound),
            &bound,
            |b, &bound| {
                b.iter(|| mark_progressions(black_box(bound), Some(black_box(cutoff))));
            },
        );

        // Bulk formula testing with a shared prime list (the documented
        // calling convention for range work).
        let shared = primes_upto(cutoff);
        group.bench_with_input(BenchmarkId::new("formula_bulk", bound), &bound, |b, &bound| {
            b.iter(|| {
                (0..=bound)
                    .map(|n| indicator_at(black_box(n), Some(&shared)))
                    .collect::<Vec<u8>>()
            });
        });
    }

    group.finish();
}

/// Benchmark a single formula call: shared list versus per-call sieving.
fn bench_formula_single(c: &mut Criterion) {
    let mut group = c.benchmark_group("formula_single");

    let n = 99_991; // o_n = 199_983
    let shared = primes_upto(odd_value(n).isqrt() as usize + 1);

    group.bench_function("shared_primes", |b| {
        b.iter(|| indicator_at(black_box(n), Some(&shared)));
    });

    group.bench_function("self_sufficient", |b| {
        b.iter(|| indicator_at(black_box(n), None));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_prime_finder,
    bench_generators,
    bench_formula_single
);
criterion_main!(benches);

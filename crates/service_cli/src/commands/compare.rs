//! Compare command: the triangulation harness.
//!
//! Runs all three generators over the same bound and verifies their
//! outputs are bit-identical. The three methods share nothing beyond the
//! prime finder, so agreement here is strong evidence that each one is
//! right; disagreement is reported with the first diverging index.

use std::time::Instant;

use spectrum_core::indicator::{indicator_at, mark_progressions, sieve_spectrum};
use spectrum_core::sieve::primes_upto;
use spectrum_core::types::odd_value;
use tracing::info;

use crate::{CliError, Result};

/// Index of the first entry where two indicator sequences differ.
fn first_divergence(a: &[u8], b: &[u8]) -> Option<usize> {
    a.iter().zip(b.iter()).position(|(x, y)| x != y)
}

/// Runs all three generators and cross-validates their output.
pub fn run(bound: usize) -> Result<()> {
    println!("Cross-validating T[0..={}] across all three methods", bound);

    let started = Instant::now();
    let exact = sieve_spectrum(bound);
    info!("odd-only sieve finished in {:?}", started.elapsed());

    let started = Instant::now();
    let marked = mark_progressions(bound, None);
    info!("progression marking finished in {:?}", started.elapsed());

    let started = Instant::now();
    let shared = primes_upto(odd_value(bound).isqrt() as usize + 1);
    let formula: Vec<u8> = (0..=bound)
        .map(|n| indicator_at(n, Some(&shared)))
        .collect();
    info!(
        "formula test over the full range finished in {:?} ({} shared primes)",
        started.elapsed(),
        shared.len()
    );

    if let Some(n) = first_divergence(exact.values(), marked.values()) {
        return Err(CliError::Disagreement(format!(
            "sieve and progression marking diverge at n = {} (o_n = {})",
            n,
            odd_value(n)
        )));
    }
    if let Some(n) = first_divergence(exact.values(), &formula) {
        return Err(CliError::Disagreement(format!(
            "sieve and formula test diverge at n = {} (o_n = {})",
            n,
            odd_value(n)
        )));
    }

    println!();
    println!("All three methods agree on {} entries", exact.len());
    println!(
        "{} of the odd values up to {} are prime",
        exact.prime_count(),
        2 * bound + 1
    );

    Ok(())
}

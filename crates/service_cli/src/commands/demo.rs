//! Demo command: fixed-parameter walkthrough of all three methods.
//!
//! This command runs the three generators with small, fixed parameters:
//! - Exact odd-only sieve at bound 50
//! - Progression marking with an explicit prime cutoff of 200
//! - Single-index formula tests against a shared prime list up to 1000
//!
//! Key verification points:
//! - Both sample tables are identical (sieve vs progression marking)
//! - Every formula spot check matches the exact sieve

use spectrum_core::indicator::{indicator_at, mark_progressions, sieve_spectrum};
use spectrum_core::sieve::primes_upto;
use spectrum_core::types::odd_value;

use crate::render::sample_table;
use crate::Result;

const DEMO_BOUND: usize = 50;
const DEMO_CUTOFF: usize = 200;
const DEMO_PRIME_LIMIT: usize = 1_000;

/// Runs the fixed-parameter demonstration.
pub fn run() -> Result<()> {
    println!("========================================");
    println!("Odd Prime Spectrum Demo");
    println!("========================================");
    println!();

    // Step 1: Exact odd-only sieve
    println!("[Demo] Exact odd-only sieve (bound = {})", DEMO_BOUND);
    let exact = sieve_spectrum(DEMO_BOUND);
    print!("{}", sample_table(&exact, 40));
    println!();

    // Step 2: Progression marking with an explicit cutoff
    println!(
        "[Demo] Progression marking (bound = {}, prime cutoff = {})",
        DEMO_BOUND, DEMO_CUTOFF
    );
    let marked = mark_progressions(DEMO_BOUND, Some(DEMO_CUTOFF));
    print!("{}", sample_table(&marked, 40));
    println!();

    // Step 3: Single-index formula spot checks
    println!(
        "[Demo] Single-index formula tests (shared primes up to {})",
        DEMO_PRIME_LIMIT
    );
    let shared = primes_upto(DEMO_PRIME_LIMIT);
    for n in [1usize, 5, 10, 20] {
        println!(
            "n = {:2}, o_n = {:2}, formula = {}, sieve = {}",
            n,
            odd_value(n),
            indicator_at(n, Some(&shared)),
            exact.indicator(n)
        );
    }
    println!();

    println!("========================================");
    println!("Demo completed successfully!");
    println!("========================================");

    Ok(())
}

//! Primes command: list all primes up to a limit.

use std::time::Instant;

use spectrum_core::sieve::primes_upto;
use tracing::info;

use crate::Result;

const COLUMNS: usize = 10;

/// Runs the bounded prime finder and prints the result.
pub fn run(limit: usize) -> Result<()> {
    let started = Instant::now();
    let primes = primes_upto(limit);
    info!("sieved primes up to {} in {:?}", limit, started.elapsed());

    println!("pi({}) = {}", limit, primes.len());
    if primes.is_empty() {
        return Ok(());
    }
    println!();
    for row in primes.chunks(COLUMNS) {
        let line: Vec<String> = row.iter().map(|p| format!("{:6}", p)).collect();
        println!("{}", line.join(" "));
    }

    Ok(())
}

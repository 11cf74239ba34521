//! Sieve command: build T with the packed odd-only sieve.

use std::time::Instant;

use serde::Serialize;
use spectrum_core::indicator::sieve_spectrum;
use spectrum_core::types::Spectrum;
use tracing::info;

use crate::render::sample_table;
use crate::{CliError, Result};

/// Machine-readable sieve report for `--format json`.
#[derive(Serialize)]
struct SieveReport<'a> {
    bound: usize,
    prime_count: usize,
    spectrum: &'a Spectrum,
}

/// Runs the packed odd-only sieve and renders the result.
pub fn run(bound: usize, format: &str, sample_rows: usize) -> Result<()> {
    let started = Instant::now();
    let spectrum = sieve_spectrum(bound);
    info!("sieved T[0..={}] in {:?}", bound, started.elapsed());

    match format {
        "table" => {
            println!("Odd-only sieve (bound = {})", bound);
            println!();
            print!("{}", sample_table(&spectrum, sample_rows));
            println!();
            println!(
                "{} of {} odd values up to {} are prime",
                spectrum.prime_count(),
                spectrum.len(),
                2 * bound + 1
            );
        }
        "json" => {
            let report = SieveReport {
                bound,
                prime_count: spectrum.prime_count(),
                spectrum: &spectrum,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        other => {
            return Err(CliError::InvalidArgument(format!(
                "unknown output format '{}' (expected table or json)",
                other
            )))
        }
    }

    Ok(())
}

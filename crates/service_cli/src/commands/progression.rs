//! Progression command: build T by marking composite progressions.

use std::time::Instant;

use spectrum_core::indicator::mark_progressions;
use spectrum_core::types::odd_value;
use tracing::info;

use crate::render::sample_table;
use crate::{CliError, Result};

/// Runs the progression-marking generator and renders a sample table.
///
/// A supplied prime cutoff is validated here against the coverage
/// precondition of the generator, so an under-sized cutoff becomes a CLI
/// error rather than silently wrong output.
pub fn run(bound: usize, prime_cutoff: Option<usize>, sample_rows: usize) -> Result<()> {
    if let Some(cutoff) = prime_cutoff {
        let required = odd_value(bound).isqrt();
        if (cutoff as u64) < required {
            return Err(CliError::InvalidArgument(format!(
                "prime cutoff {} does not cover isqrt({}) = {}",
                cutoff,
                odd_value(bound),
                required
            )));
        }
    }

    let started = Instant::now();
    let spectrum = mark_progressions(bound, prime_cutoff);
    info!(
        "marked progressions for T[0..={}] in {:?}",
        bound,
        started.elapsed()
    );

    match prime_cutoff {
        Some(cutoff) => println!(
            "Progression marking (bound = {}, prime cutoff = {})",
            bound, cutoff
        ),
        None => println!(
            "Progression marking (bound = {}, prime cutoff = default {})",
            bound,
            2 * bound + 1
        ),
    }
    println!();
    print!("{}", sample_table(&spectrum, sample_rows));
    println!();
    println!(
        "{} of {} odd values up to {} are prime",
        spectrum.prime_count(),
        spectrum.len(),
        2 * bound + 1
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cutoff_runs() {
        assert!(run(20, None, 10).is_ok());
    }

    #[test]
    fn test_covering_cutoff_runs() {
        assert!(run(50, Some(200), 10).is_ok());
    }

    #[test]
    fn test_under_sized_cutoff_is_rejected() {
        // isqrt(2 * 1000 + 1) = 44, so a cutoff of 10 cannot be correct.
        let result = run(1_000, Some(10), 10);
        assert!(matches!(result, Err(CliError::InvalidArgument(_))));
    }
}

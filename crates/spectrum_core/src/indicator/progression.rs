//! Bulk generator that marks composite progressions.

use crate::sieve::primes_upto;
use crate::types::{odd_value, progression_base, Spectrum};

/// Build T[0..=bound] by marking, for each prime `p >= 3`, the arithmetic
/// progression of indices whose odd value is a proper multiple of `p`.
///
/// This is the array analogue of
/// [`indicator_at`](crate::indicator::indicator_at): instead of testing
/// one index against all primes, every prime's progression walk is
/// amortised across the whole array. Entries start at 1 with `T[0] = 0`
/// set explicitly (`o_0 = 1`), and the prime loop stops at the first
/// `base_p > bound` since bases grow with `p`.
///
/// # Arguments
///
/// * `bound` - Largest index `N` to produce
/// * `prime_cutoff` - Largest prime used for marking. `None` defaults to
///   `2 * bound + 1`, which is safely oversized: a larger prime list in
///   exchange for guaranteed correctness.
///
/// # Preconditions
///
/// A supplied cutoff must be at least `isqrt(2 * bound + 1)` or composite
/// indices beyond its coverage stay marked 1. This is a caller contract,
/// checked only by a debug assertion.
///
/// # Examples
///
/// ```
/// use spectrum_core::indicator::mark_progressions;
///
/// let spectrum = mark_progressions(10, None);
/// assert_eq!(spectrum.values(), &[0, 1, 1, 1, 0, 1, 1, 0, 1, 1, 0]);
///
/// // An explicit cutoff covering isqrt(21) gives the same result
/// assert_eq!(mark_progressions(10, Some(5)), spectrum);
/// ```
pub fn mark_progressions(bound: usize, prime_cutoff: Option<usize>) -> Spectrum {
    let mut values = vec![1u8; bound + 1];
    values[0] = 0; // o_0 = 1
    let cutoff = match prime_cutoff {
        Some(cutoff) => {
            debug_assert!(
                cutoff as u64 >= odd_value(bound).isqrt(),
                "prime cutoff {} does not cover isqrt({})",
                cutoff,
                odd_value(bound)
            );
            cutoff
        }
        None => 2 * bound + 1,
    };
    for p in primes_upto(cutoff) {
        if p < 3 {
            continue;
        }
        let base = progression_base(p);
        if base > bound {
            break;
        }
        for n in (base..=bound).step_by(p) {
            values[n] = 0;
        }
    }
    Spectrum::from_values(values)
}

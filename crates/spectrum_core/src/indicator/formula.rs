//! Per-index progression-membership test.

use crate::sieve::primes_upto;
use crate::types::{odd_value, progression_base};

/// Indicator for a single index: `1` iff `o_n = 2n + 1` is prime.
///
/// The test checks whether `n` lies on any prime's composite progression
/// `base_p + k * p`. Progression bases grow strictly with `p`, so the scan
/// stops at the first prime with `base_p > n`; this cutoff is exact, not
/// an approximation.
///
/// Two conventions are hard-coded:
/// - `n < 1` returns `0` (`o_0 = 1` is not prime).
/// - `n == 1` (`o_n = 3`) returns `1`; 3 sits below every progression
///   base and is special-cased rather than scanned.
///
/// # Arguments
///
/// * `n` - Index to test
/// * `primes` - Optional shared prime list, ascending. With `None` the
///   function sieves primes up to `isqrt(o_n) + 1` itself, which makes a
///   single call self-sufficient but costs a fresh sieve per call; bulk
///   callers should sieve once and pass the slice.
///
/// # Preconditions
///
/// A supplied list must contain every prime `<= isqrt(o_n)`. A truncated
/// list is not detected at runtime and may yield a false `1`.
///
/// # Examples
///
/// ```
/// use spectrum_core::indicator::indicator_at;
/// use spectrum_core::sieve::primes_upto;
///
/// assert_eq!(indicator_at(0, None), 0);  // o_0 = 1
/// assert_eq!(indicator_at(4, None), 0);  // o_4 = 9 = 3 * 3
///
/// let shared = primes_upto(100);
/// assert_eq!(indicator_at(8, Some(&shared)), 1); // o_8 = 17
/// ```
pub fn indicator_at(n: usize, primes: Option<&[usize]>) -> u8 {
    if n < 1 {
        return 0;
    }
    let odd = odd_value(n);
    if odd == 3 {
        return 1;
    }
    let owned;
    let primes: &[usize] = match primes {
        Some(list) => list,
        None => {
            let cover = (odd.isqrt() + 1) as usize;
            owned = primes_upto(cover.max(3));
            &owned
        }
    };
    for &p in primes {
        if p < 3 {
            continue;
        }
        let base = progression_base(p);
        if base > n {
            break;
        }
        if (n - base) % p == 0 {
            // n = base_p + k * p, so o_n = p * (2k + 3)
            return 0;
        }
    }
    1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_zero_is_composite_by_convention() {
        assert_eq!(indicator_at(0, None), 0);
        assert_eq!(indicator_at(0, Some(&[2, 3, 5])), 0);
    }

    #[test]
    fn test_three_is_hard_coded_prime() {
        assert_eq!(indicator_at(1, None), 1);
        // The base case must not depend on the supplied list at all.
        assert_eq!(indicator_at(1, Some(&[])), 1);
    }

    #[test]
    fn test_known_values_self_sufficient() {
        // o_n = 1, 3, 5, 7, 9, 11, 13, 15, 17, 19, 21, 23, 25
        let expected = [0, 1, 1, 1, 0, 1, 1, 0, 1, 1, 0, 1, 0];
        for (n, &t) in expected.iter().enumerate() {
            assert_eq!(indicator_at(n, None), t, "T[{}] for o_n = {}", n, 2 * n + 1);
        }
    }

    #[test]
    fn test_shared_list_matches_self_sufficient() {
        let shared = primes_upto(100);
        for n in 0..=2_000 {
            assert_eq!(indicator_at(n, Some(&shared)), indicator_at(n, None), "n = {}", n);
        }
    }

    #[test]
    fn test_prime_squares_are_composite() {
        // o_n = p^2 for odd p; n = (p^2 - 1) / 2
        for p in [3u64, 5, 7, 11, 13] {
            let n = ((p * p - 1) / 2) as usize;
            assert_eq!(indicator_at(n, None), 0, "o_n = {}", p * p);
        }
    }

    #[test]
    fn test_truncated_list_yields_false_positive() {
        // o_12 = 25 needs p = 5; a list stopping at 3 violates the
        // documented precondition and reports prime.
        assert_eq!(indicator_at(12, Some(&[2, 3])), 1);
        assert_eq!(indicator_at(12, Some(&[2, 3, 5])), 0);
    }

    #[test]
    fn test_even_primes_in_list_are_skipped() {
        // 2 never divides an odd value; its presence must not change results.
        let with_two = primes_upto(50);
        let without_two: Vec<usize> = with_two.iter().copied().filter(|&p| p != 2).collect();
        for n in 0..=500 {
            assert_eq!(
                indicator_at(n, Some(&with_two)),
                indicator_at(n, Some(&without_two))
            );
        }
    }
}

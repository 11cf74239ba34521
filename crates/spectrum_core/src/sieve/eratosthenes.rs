//! Sieve of Eratosthenes over the full integer range.

/// All primes `p` with `2 <= p <= limit`, ascending.
///
/// Standard Eratosthenes sieve: composites are marked from `p * p` in
/// steps of `p`, for `p` up to `isqrt(limit)`. Returns an empty Vec for
/// `limit < 2`. Deterministic; allocation of the `limit + 1` working
/// buffer is the only resource bound.
///
/// # Examples
/// ```
/// use spectrum_core::sieve::primes_upto;
///
/// assert_eq!(primes_upto(30), vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
/// ```
pub fn primes_upto(limit: usize) -> Vec<usize> {
    if limit < 2 {
        return Vec::new();
    }
    let mut is_prime = vec![true; limit + 1];
    is_prime[0] = false;
    is_prime[1] = false;
    for p in 2..=limit.isqrt() {
        if is_prime[p] {
            for multiple in (p * p..=limit).step_by(p) {
                is_prime[multiple] = false;
            }
        }
    }
    is_prime
        .iter()
        .enumerate()
        .filter_map(|(value, &prime)| prime.then_some(value))
        .collect()
}

//! Bounded prime generation.
//!
//! The prime finder is the shared subroutine of the crate: the formula
//! test and the progression-marking generator both consume its output,
//! while the packed odd-only sieve in [`crate::indicator`] is
//! self-contained by construction.
//!
//! ## Examples
//!
//! ```
//! use spectrum_core::sieve::primes_upto;
//!
//! assert_eq!(primes_upto(20), vec![2, 3, 5, 7, 11, 13, 17, 19]);
//! assert!(primes_upto(1).is_empty());
//! ```

mod eratosthenes;

pub use eratosthenes::primes_upto;

//! The three indicator generators.
//!
//! Each generator computes the same predicate (`T[n] = 1` iff
//! `o_n = 2n + 1` is prime) by a genuinely different route:
//!
//! - [`indicator_at`]: per-index test against composite progressions,
//!   with an optional injected prime list. O(pi(sqrt(o_n))) per call.
//! - [`mark_progressions`]: bulk generator that walks each prime's
//!   progression of composite indices across the whole array.
//! - [`sieve_spectrum`]: packed odd-only Eratosthenes sieve. Exact by
//!   construction with no prime-bound parameter; the recommended method
//!   for large bounds.
//!
//! The three must agree bit for bit on every bound; the integration tests
//! hold them to that.
//!
//! ## Examples
//!
//! ```
//! use spectrum_core::indicator::{indicator_at, mark_progressions, sieve_spectrum};
//!
//! let exact = sieve_spectrum(20);
//! let marked = mark_progressions(20, None);
//! assert_eq!(exact, marked);
//! assert_eq!(indicator_at(20, None), exact[20]); // o_20 = 41, prime
//! ```

mod formula;
mod odd_sieve;
mod progression;

pub use formula::indicator_at;
pub use odd_sieve::sieve_spectrum;
pub use progression::mark_progressions;

//! # spectrum_core: Indicator Kernels for the Odd Prime Spectrum
//!
//! ## Foundation Layer Role
//!
//! spectrum_core is the bottom layer of the workspace, providing:
//! - The bounded prime finder (`sieve::primes_upto`)
//! - Three independent generators for the indicator sequence T
//!   (`indicator`)
//! - Shared value types: `Spectrum`, `PackedBits` (`types`)
//!
//! The sequence under study maps every index `n` to the odd number
//! `o_n = 2n + 1` and asks whether `o_n` is prime: `T[n] = 1` iff it is.
//! `o_0 = 1` is not prime, so `T[0] = 0` by convention.
//!
//! ## Triangulation
//!
//! The three generators are deliberately redundant. They attack the same
//! predicate from different directions (per-index progression test, bulk
//! progression marking, packed odd-only sieve) and must produce
//! bit-identical `Spectrum` values for every bound. The redundancy is the
//! point: each method cross-validates the other two.
//!
//! ## Minimal Dependencies
//!
//! The foundation layer is pure computation: no I/O, no logging, no error
//! surface (every operation is a total function over its documented
//! domain). The only external dependency is optional serde support.
//!
//! ## Usage Examples
//!
//! ```rust
//! use spectrum_core::indicator::{mark_progressions, sieve_spectrum};
//! use spectrum_core::sieve::primes_upto;
//!
//! // Exact indicator sequence for o_n = 1, 3, 5, ..., 21
//! let exact = sieve_spectrum(10);
//! assert_eq!(exact.values(), &[0, 1, 1, 1, 0, 1, 1, 0, 1, 1, 0]);
//!
//! // Progression marking agrees bit for bit
//! let marked = mark_progressions(10, None);
//! assert_eq!(exact, marked);
//!
//! // The shared prime finder
//! assert_eq!(primes_upto(100).len(), 25);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for `Spectrum`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod indicator;
pub mod sieve;
pub mod types;

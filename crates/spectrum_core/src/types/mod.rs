//! Shared value types for the indicator generators.
//!
//! This module provides:
//! - [`Spectrum`]: the owned indicator sequence T[0..=N]
//! - [`PackedBits`]: a word-packed bit vector (one bit per odd candidate)
//! - [`odd_value`] / [`progression_base`]: index arithmetic shared by the
//!   formula and progression generators

mod bits;
mod index;
mod spectrum;

pub use bits::PackedBits;
pub use index::{odd_value, progression_base};
pub use spectrum::Spectrum;

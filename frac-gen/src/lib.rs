//! Random fractions and their equal or inequal variants.
//!
//! Meant for generating question/answer pairs: take a
//! [random fraction](generator::random_fraction), then ask it for an
//! [equal](primitives::Fraction::get_equal_fraction) or an
//! [inequal](primitives::Fraction::get_inequal_fraction) one.

pub mod generator;
pub mod primitives;

pub use generator::{FracConfig, FracRng};
pub use primitives::{Fraction, FractionError, FractionResult};

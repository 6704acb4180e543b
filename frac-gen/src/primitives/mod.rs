//! Fraction value type and the integer tools it is built on.
//!
//! A [Fraction] is a numerator/denominator pair. It is not reduced on
//! construction: `2/4` stays `2/4` until [Fraction::get_reduced] is asked
//! for. Equality is still by value, so `2/4 == 1/2`.

pub mod fraction;
pub mod fraction_tools;

pub use self::fraction::Fraction;
pub use self::fraction_tools::{common_factors, gcd, reduce};

#[derive(Debug, thiserror::Error)]
pub enum FractionError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Division by zero: greatest common divisor of 0 and 0")]
    DivisionByZero,
    #[error("No matching fraction found after {0} attempts")]
    ExhaustedRetries(u32),
}
pub type FractionResult<T> = Result<T, FractionError>;

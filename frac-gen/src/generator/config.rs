use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::primitives::{FractionError, FractionResult};

/// Ranges and chances used by [super::FracRng].
///
/// The default values produce fractions like `3/8` or `5/2`: numerators
/// in `1..=6`, denominators in `2..=11`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FracConfig {
    pub numerator_range: RangeInclusive<u64>,
    pub denominator_range: RangeInclusive<u64>,
    /// scale for equal fractions
    pub multiple_range: RangeInclusive<u64>,
    /// probability of simplifying instead of scaling an equal fraction
    pub chance_simplified: f64,
    /// probability of taking the improper branch of a random fraction
    pub chance_improper: f64,
    /// If false, the improper branch keeps whatever pair was drawn first.
    /// If true, it redraws until `numerator >= denominator`.
    pub enforce_improper: bool,
    /// attempts allowed when searching for an inequal fraction
    pub max_retries: u32,
}
impl Default for FracConfig {
    fn default() -> Self {
        Self {
            numerator_range: 1..=6,
            denominator_range: 2..=11,
            multiple_range: 1..=3,
            chance_simplified: 0.2,
            chance_improper: 0.45,
            enforce_improper: false,
            max_retries: 1000,
        }
    }
}
impl FracConfig {
    /// Check that every draw made with this config can terminate.
    pub fn validate(&self) -> FractionResult<()> {
        non_empty("numerator_range", &self.numerator_range)?;
        non_empty("denominator_range", &self.denominator_range)?;
        non_empty("multiple_range", &self.multiple_range)?;
        if *self.denominator_range.start() == 0 {
            return Err(invalid("denominator_range can not contain zero"));
        }
        if *self.multiple_range.start() == 0 {
            return Err(invalid("multiple_range can not contain zero"));
        }
        probability("chance_simplified", self.chance_simplified)?;
        probability("chance_improper", self.chance_improper)?;
        // proper branch redraws the denominator until it exceeds the
        // numerator, whatever numerator was drawn
        if self.denominator_range.end() <= self.numerator_range.end() {
            return Err(invalid(format!(
                "denominator_range {:?} must reach past numerator_range {:?}",
                self.denominator_range, self.numerator_range
            )));
        }
        if self.enforce_improper
            && self.numerator_range.end() < self.denominator_range.start()
        {
            return Err(invalid(format!(
                "no numerator in {:?} reaches a denominator in {:?}",
                self.numerator_range, self.denominator_range
            )));
        }
        if self.max_retries == 0 {
            return Err(invalid("max_retries can not be zero"));
        }
        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> FractionError {
    FractionError::InvalidArgument(message.into())
}

fn non_empty(name: &str, range: &RangeInclusive<u64>) -> FractionResult<()> {
    match range.is_empty() {
        true => Err(invalid(format!("{} {:?} is empty", name, range))),
        false => Ok(()),
    }
}

fn probability(name: &str, value: f64) -> FractionResult<()> {
    match (0.0..=1.0).contains(&value) {
        true => Ok(()),
        false => Err(invalid(format!(
            "{} must be within [0, 1], got {}",
            name, value
        ))),
    }
}

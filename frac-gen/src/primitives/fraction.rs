use std::{
    fmt::{self, Display},
    hash::{Hash, Hasher},
};

use serde::{Deserialize, Serialize};

use crate::generator::{with_default_generator, FracRng};

use super::{common_factors, gcd, FractionError, FractionResult};

/// Numerator/denominator pair, not necessarily reduced.
///
/// The denominator is never zero: [Fraction::new] rejects it, and the
/// fields can not be changed afterwards.
///
/// # Example
///
/// ```
/// # use frac_gen::primitives::Fraction;
/// let half = Fraction::new(2, 4).unwrap();
/// assert_eq!(half.to_string(), "2/4");
/// assert_eq!(half.get_reduced().to_string(), "1/2");
/// assert_eq!(half, Fraction::new(3, 6).unwrap());
/// assert_eq!(Fraction::new(5, 1).unwrap().to_string(), "5");
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "(u64, u64)", into = "(u64, u64)")]
pub struct Fraction {
    numerator: u64,
    denominator: u64,
}
impl Fraction {
    /// Fraction as given, without reducing it.
    ///
    /// # Errors
    ///
    /// [FractionError::InvalidArgument] if `denominator` is zero.
    pub fn new(numerator: u64, denominator: u64) -> FractionResult<Self> {
        if denominator == 0 {
            return Err(FractionError::InvalidArgument(format!(
                "denominator of {}/{} can not be zero",
                numerator, denominator
            )));
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }

    /// Caller guarantees a nonzero denominator.
    pub(crate) fn from_parts(numerator: u64, denominator: u64) -> Self {
        debug_assert_ne!(denominator, 0);
        Self {
            numerator,
            denominator,
        }
    }

    pub fn numerator(&self) -> u64 {
        self.numerator
    }
    pub fn denominator(&self) -> u64 {
        self.denominator
    }

    pub fn is_proper(&self) -> bool {
        self.numerator < self.denominator
    }
    pub fn is_improper(&self) -> bool {
        !self.is_proper()
    }

    pub fn can_be_reduced(&self) -> bool {
        gcd(self.numerator, self.denominator) > 1
    }

    /// New fraction with numerator and denominator divided by their
    /// greatest common divisor.
    pub fn get_reduced(&self) -> Self {
        // denominator is nonzero, so g >= 1
        let g = gcd(self.numerator, self.denominator);
        Self {
            numerator: self.numerator / g,
            denominator: self.denominator / g,
        }
    }

    /// Ascending common factors in `[2, max(numerator, denominator))`.
    pub fn get_common_factors(&self) -> Vec<u64> {
        common_factors(self.numerator, self.denominator)
    }

    /// Numerically equal fraction, drawn from the default generator.
    pub fn get_equal_fraction(&self) -> Self {
        with_default_generator(|rng| self.get_equal_fraction_with(rng))
    }

    /// Numerically equal fraction, drawn from `rng`.
    ///
    /// Usually both parts are multiplied by a random multiple. With
    /// `chance_simplified` both are divided by a random common factor
    /// instead, if the fraction has any.
    pub fn get_equal_fraction_with(&self, rng: &mut FracRng) -> Self {
        let multiple = rng.random_multiple();
        let chance_simplified = rng.config().chance_simplified;
        if rng.chance(chance_simplified) {
            if let Some(factor) = rng.pick(&self.get_common_factors()) {
                log::trace!("simplifying {} by {}", self, factor);
                return Self {
                    numerator: self.numerator / factor,
                    denominator: self.denominator / factor,
                };
            }
        }
        match (
            self.numerator.checked_mul(multiple),
            self.denominator.checked_mul(multiple),
        ) {
            (Some(numerator), Some(denominator)) => Self {
                numerator,
                denominator,
            },
            _ => {
                log::trace!("{} can not be scaled by {}", self, multiple);
                *self
            }
        }
    }

    /// Random fraction of a different value, drawn from the default
    /// generator.
    pub fn get_inequal_fraction(&self) -> FractionResult<Self> {
        with_default_generator(|rng| self.get_inequal_fraction_with(rng))
    }

    /// Draw random fractions from `rng` until one differs in value.
    ///
    /// # Errors
    ///
    /// [FractionError::ExhaustedRetries] if `max_retries` draws all were
    /// equal to `self`.
    pub fn get_inequal_fraction_with(
        &self,
        rng: &mut FracRng,
    ) -> FractionResult<Self> {
        let max_retries = rng.config().max_retries;
        for attempt in 1..=max_retries {
            let candidate = rng.random_fraction();
            if candidate != *self {
                log::trace!(
                    "inequal to {}: {} after {} attempt(s)",
                    self,
                    candidate,
                    attempt
                );
                return Ok(candidate);
            }
        }
        log::warn!(
            "could not find a fraction inequal to {} in {} attempts",
            self,
            max_retries
        );
        Err(FractionError::ExhaustedRetries(max_retries))
    }

    /// Exact value as [fraction::Fraction].
    pub fn as_exact(&self) -> fraction::Fraction {
        fraction::Fraction::new(self.numerator, self.denominator)
    }
}
impl Default for Fraction {
    fn default() -> Self {
        Self {
            numerator: 1,
            denominator: 1,
        }
    }
}
impl Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.denominator {
            1 => write!(f, "{}", self.numerator),
            _ => write!(f, "{}/{}", self.numerator, self.denominator),
        }
    }
}
impl PartialEq for Fraction {
    fn eq(&self, other: &Self) -> bool {
        let (a, b) = (self.get_reduced(), other.get_reduced());
        a.numerator == b.numerator && a.denominator == b.denominator
    }
}
impl Eq for Fraction {}
impl Hash for Fraction {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let reduced = self.get_reduced();
        reduced.numerator.hash(state);
        reduced.denominator.hash(state);
    }
}
impl TryFrom<(u64, u64)> for Fraction {
    type Error = FractionError;
    fn try_from(value: (u64, u64)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1)
    }
}
impl From<Fraction> for (u64, u64) {
    fn from(value: Fraction) -> Self {
        (value.numerator, value.denominator)
    }
}
impl From<Fraction> for fraction::Fraction {
    fn from(value: Fraction) -> Self {
        value.as_exact()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::generator::FracRng;
    use crate::primitives::{Fraction, FractionError};

    fn frac(numerator: u64, denominator: u64) -> Fraction {
        Fraction::new(numerator, denominator).unwrap()
    }

    #[test]
    fn test_new() {
        assert_eq!(Fraction::default(), frac(1, 1));
        assert_eq!(Fraction::default().numerator(), 1);
        assert!(matches!(
            Fraction::new(3, 0),
            Err(FractionError::InvalidArgument(_))
        ));
        assert!(Fraction::try_from((0, 0)).is_err());
        assert_eq!(<(u64, u64)>::from(frac(2, 4)), (2, 4));
    }

    #[test]
    fn test_reduced() {
        let reduced = frac(2, 4).get_reduced();
        assert_eq!((reduced.numerator(), reduced.denominator()), (1, 2));
        let zero = frac(0, 9).get_reduced();
        assert_eq!((zero.numerator(), zero.denominator()), (0, 1));
        assert!(frac(12, 18).can_be_reduced());
        assert!(!frac(2, 3).can_be_reduced());
        for n in 0_u64..30 {
            for d in 1_u64..30 {
                let f = frac(n, d);
                assert_eq!(f.get_reduced(), f);
                assert!(!f.get_reduced().can_be_reduced());
                assert_eq!(f.get_reduced().as_exact(), f.as_exact());
            }
        }
    }

    #[test]
    fn test_eq() {
        assert_eq!(frac(3, 5), frac(6, 10));
        assert_ne!(frac(1, 2), frac(1, 3));
        // same reduced numerator, different reduced denominator
        assert_ne!(frac(2, 4), frac(1, 3));
        assert_ne!(frac(4, 3), frac(4, 6));
        let set: HashSet<Fraction> =
            [frac(1, 2), frac(2, 4), frac(3, 6), frac(2, 3)].into();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_display() {
        assert_eq!(frac(5, 1).to_string(), "5");
        assert_eq!(frac(3, 4).to_string(), "3/4");
        assert_eq!(frac(4, 2).to_string(), "4/2");
    }

    #[test]
    fn test_proper() {
        assert!(frac(3, 4).is_proper());
        assert!(frac(4, 4).is_improper());
        assert!(frac(7, 4).is_improper());
    }

    #[test]
    fn test_common_factors() {
        assert_eq!(frac(12, 18).get_common_factors(), vec![2, 3, 6]);
        assert!(frac(5, 7).get_common_factors().is_empty());
    }

    #[test]
    fn test_equal_fraction_simplifies() {
        let mut rng = FracRng::seeded(7);
        let base = frac(12, 18);
        let variants: Vec<Fraction> =
            (0..200).map(|_| base.get_equal_fraction_with(&mut rng)).collect();
        assert!(variants.iter().all(|f| *f == base));
        assert!(variants.iter().any(|f| f.denominator() < 18));
        assert!(variants.iter().any(|f| f.denominator() > 18));
    }

    #[test]
    fn test_equal_fraction_does_not_overflow() {
        let mut rng = FracRng::seeded(1);
        let huge = frac(u64::MAX - 1, u64::MAX);
        for _ in 0..50 {
            assert_eq!(huge.get_equal_fraction_with(&mut rng), huge);
        }
    }

    #[test]
    fn test_equal_fraction_large_common_factor() {
        let mut rng = FracRng::seeded(4);
        let big = frac(1 << 40, 3 << 40);
        for _ in 0..50 {
            assert_eq!(big.get_equal_fraction_with(&mut rng), big);
        }
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&frac(2, 4)).unwrap();
        assert_eq!(json, "[2,4]");
        let back: Fraction = serde_json::from_str(&json).unwrap();
        assert_eq!(<(u64, u64)>::from(back), (2, 4));
        assert!(serde_json::from_str::<Fraction>("[3,0]").is_err());
    }

    #[test]
    fn test_inequal_fraction() {
        let mut rng = FracRng::seeded(3);
        let base = frac(1, 2);
        for _ in 0..200 {
            assert_ne!(base.get_inequal_fraction_with(&mut rng).unwrap(), base);
        }
    }
}

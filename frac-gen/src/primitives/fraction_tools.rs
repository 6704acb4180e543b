//! Integer tools behind fraction reduction.

use super::{FractionError, FractionResult};

/// Greatest common divisor by the Euclidean algorithm.
///
/// `gcd(a, 0)` is `a`, so `gcd(0, 0)` is `0`. Callers that divide by the
/// result have to treat zero as "undefined". [reduce] does that.
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Divide numerator and denominator by their greatest common divisor.
///
/// # Errors
///
/// [FractionError::DivisionByZero] if both values are zero.
///
/// # Example
///
/// ```
/// # use frac_gen::primitives::reduce;
/// assert_eq!(reduce(12, 18).unwrap(), (2, 3));
/// assert!(reduce(0, 0).is_err());
/// ```
pub fn reduce(numerator: u64, denominator: u64) -> FractionResult<(u64, u64)> {
    match gcd(numerator, denominator) {
        0 => Err(FractionError::DivisionByZero),
        g => Ok((numerator / g, denominator / g)),
    }
}

/// All integers in `[2, max(numerator, denominator))` dividing both values.
///
/// The upper bound is exclusive, so `6/6` yields `[2, 3]`, not `[2, 3, 6]`.
pub fn common_factors(numerator: u64, denominator: u64) -> Vec<u64> {
    // common factors are exactly the divisors of the gcd
    let g = gcd(numerator, denominator);
    let upper = numerator.max(denominator);
    let mut factors = Vec::new();
    if g >= 2 {
        factors.push(g);
    }
    let mut x = 2;
    while x <= g / x {
        if g % x == 0 {
            factors.push(x);
            if x != g / x {
                factors.push(g / x);
            }
        }
        x += 1;
    }
    factors.retain(|x| *x < upper);
    factors.sort_unstable();
    factors
}

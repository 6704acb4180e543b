//! Random fractions for quiz-like content.
//!
//! Every draw goes through a [FracRng]. Tests and callers that need a
//! reproducible sequence build their own with [FracRng::seeded]. The free
//! functions of this module share one process-wide generator, seeded from
//! the current UTC time on first use.
//!
//! ```
//! use frac_gen::generator::FracRng;
//!
//! let mut rng = FracRng::seeded(42);
//! let question = rng.random_fraction();
//! let right = question.get_equal_fraction_with(&mut rng);
//! let wrong = question.get_inequal_fraction_with(&mut rng).unwrap();
//! assert_eq!(question, right);
//! assert_ne!(question, wrong);
//! ```

use std::sync::{Mutex, PoisonError};

use chrono::Utc;
use once_cell::sync::Lazy;
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

use crate::primitives::{Fraction, FractionResult};

pub mod config;

pub use config::FracConfig;

/// Current UTC time in whole seconds.
pub fn time_seed() -> u64 {
    Utc::now().timestamp().unsigned_abs()
}

static DEFAULT_GENERATOR: Lazy<Mutex<FracRng>> =
    Lazy::new(|| Mutex::new(FracRng::from_time()));

/// Seeded source of random fraction parts.
#[derive(Debug, Clone)]
pub struct FracRng {
    rng: StdRng,
    seed: u64,
    config: FracConfig,
}
impl FracRng {
    /// Seed from the current UTC time, in whole seconds.
    pub fn from_time() -> Self {
        Self::seeded(time_seed())
    }

    /// Default config, reproducible sequence.
    pub fn seeded(seed: u64) -> Self {
        log::debug!("seeding fraction generator with {}", seed);
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
            config: FracConfig::default(),
        }
    }

    pub fn with_config(seed: u64, config: FracConfig) -> FractionResult<Self> {
        if let Err(err) = config.validate() {
            log::debug!("rejecting generator config {:?}: {}", config, err);
            return Err(err);
        }
        Ok(Self {
            config,
            ..Self::seeded(seed)
        })
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
    pub fn config(&self) -> &FracConfig {
        &self.config
    }

    pub fn random_numerator(&mut self) -> u64 {
        self.rng.gen_range(self.config.numerator_range.clone())
    }
    pub fn random_denominator(&mut self) -> u64 {
        self.rng.gen_range(self.config.denominator_range.clone())
    }
    pub fn random_multiple(&mut self) -> u64 {
        self.rng.gen_range(self.config.multiple_range.clone())
    }

    /// True with the given probability.
    pub fn chance(&mut self, probability: f64) -> bool {
        self.rng.gen::<f64>() < probability
    }

    /// Uniformly chosen item, `None` for an empty slice.
    pub fn pick(&mut self, items: &[u64]) -> Option<u64> {
        items.choose(&mut self.rng).copied()
    }

    /// Random fraction, proper or improper.
    ///
    /// With `chance_improper` the first draw is kept as is, unless
    /// `enforce_improper` is set: then both parts are redrawn until the
    /// numerator reaches the denominator. Otherwise the denominator is
    /// redrawn until it exceeds the numerator.
    pub fn random_fraction(&mut self) -> Fraction {
        let mut numerator = self.random_numerator();
        let mut denominator = self.random_denominator();
        let chance_improper = self.config.chance_improper;
        if self.chance(chance_improper) {
            if self.config.enforce_improper {
                while numerator < denominator {
                    log::trace!(
                        "redrawing proper {}/{}",
                        numerator,
                        denominator
                    );
                    numerator = self.random_numerator();
                    denominator = self.random_denominator();
                }
            }
        } else {
            while numerator >= denominator {
                log::trace!(
                    "redrawing improper {}/{}",
                    numerator,
                    denominator
                );
                denominator = self.random_denominator();
            }
        }
        Fraction::from_parts(numerator, denominator)
    }
}

/// Run `f` with the process-wide generator locked.
///
/// Do not call other default-generator functions from inside `f`: the lock
/// is not reentrant.
pub fn with_default_generator<T>(f: impl FnOnce(&mut FracRng) -> T) -> T {
    let mut rng = DEFAULT_GENERATOR
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    f(&mut *rng)
}

pub fn random_numerator() -> u64 {
    with_default_generator(FracRng::random_numerator)
}

pub fn random_denominator() -> u64 {
    with_default_generator(FracRng::random_denominator)
}

pub fn random_fraction() -> Fraction {
    with_default_generator(FracRng::random_fraction)
}

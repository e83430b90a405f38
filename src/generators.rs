//! The fixed table of random generator strategies.
//!
//! Six named strategies feed the estimators. Exactly one (`random_1`)
//! takes explicit bounds; the calling convention is captured by the
//! [`Sampler`] union and dispatched by variant, never by name.
//!
//! The normalization constants of the transformed strategies (shift 3,
//! scale 6, power exponent 3, Poisson mean 3, divisor 10) are fixed
//! behavior and must not be adjusted.

use std::fmt;

use rand::prelude::*;
use rand::rngs::OsRng;
use rand_distr::Poisson;

use crate::error::{McError, McResult};
use crate::rng::McRng;

/// Shift added to the standard normal draw in `random_3`.
const NORMAL_SHIFT: f64 = 3.0;
/// Divisor applied after the shift in `random_3`.
const NORMAL_SCALE: f64 = 6.0;
/// Exponent of the power-law density in `random_5`.
const POWER_EXPONENT: f64 = 3.0;
/// Mean of the Poisson draw in `random_6`.
const POISSON_MEAN: f64 = 3.0;
/// Divisor applied to the Poisson draw in `random_6`.
const POISSON_SCALE: f64 = 10.0;

/// Draw function for strategies called without arguments.
pub type NullaryDraw = Box<dyn Fn(&mut McRng) -> f64>;

/// Draw function for strategies called with explicit (lower, upper) bounds.
pub type BoundedDraw = Box<dyn Fn(&mut McRng, f64, f64) -> f64>;

/// A strategy's draw callable, tagged by calling convention.
///
/// Estimators match on the variant to decide how a sample is requested;
/// there is no flag or name inspection anywhere on the draw path.
pub enum Sampler {
    /// Called as `f(rng)`, producing one sample per call.
    Nullary(NullaryDraw),
    /// Called as `f(rng, lower, upper)`.
    Bounded(BoundedDraw),
}

impl fmt::Debug for Sampler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nullary(_) => f.write_str("Sampler::Nullary"),
            Self::Bounded(_) => f.write_str("Sampler::Bounded"),
        }
    }
}

/// The six generator strategies, in their fixed comparison order.
///
/// Identity is the name string returned by [`Generator::name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Generator {
    /// `random_1`: uniform draw with explicit (lower, upper) bounds.
    BoundedUniform,
    /// `random_2`: uniform draw on [0, 1).
    Uniform,
    /// `random_3`: standard normal draw, shifted by 3 and divided by 6.
    ShiftedNormal,
    /// `random_4`: uniform draw on [0, 1) from OS entropy; bypasses the
    /// seeded source entirely.
    OsUniform,
    /// `random_5`: power-law draw with exponent 3 (density 3x² on [0, 1)).
    PowerLaw,
    /// `random_6`: Poisson draw with mean 3, divided by 10.
    ScaledPoisson,
}

impl Generator {
    /// All strategies in insertion order.
    pub const ALL: [Self; 6] = [
        Self::BoundedUniform,
        Self::Uniform,
        Self::ShiftedNormal,
        Self::OsUniform,
        Self::PowerLaw,
        Self::ScaledPoisson,
    ];

    /// The strategy's identity string.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::BoundedUniform => "random_1",
            Self::Uniform => "random_2",
            Self::ShiftedNormal => "random_3",
            Self::OsUniform => "random_4",
            Self::PowerLaw => "random_5",
            Self::ScaledPoisson => "random_6",
        }
    }

    /// Construct the strategy's draw callable.
    ///
    /// Draws themselves are infallible; the only fallible step is
    /// distribution construction, which happens here.
    ///
    /// # Errors
    ///
    /// Returns [`McError::Generator`] if a distribution parameter is
    /// rejected by `rand_distr`.
    pub fn sampler(self) -> McResult<Sampler> {
        match self {
            Self::BoundedUniform => Ok(Sampler::Bounded(Box::new(
                |rng: &mut McRng, lower: f64, upper: f64| rng.gen_range_f64(lower, upper),
            ))),
            Self::Uniform => Ok(Sampler::Nullary(Box::new(|rng: &mut McRng| {
                rng.gen_f64()
            }))),
            Self::ShiftedNormal => Ok(Sampler::Nullary(Box::new(|rng: &mut McRng| {
                (rng.gen_standard_normal() + NORMAL_SHIFT) / NORMAL_SCALE
            }))),
            Self::OsUniform => Ok(Sampler::Nullary(Box::new(|_: &mut McRng| {
                OsRng.gen::<f64>()
            }))),
            Self::PowerLaw => Ok(Sampler::Nullary(Box::new(|rng: &mut McRng| {
                // Inverse CDF of the density a*x^(a-1) on [0, 1)
                rng.gen_f64().powf(1.0 / POWER_EXPONENT)
            }))),
            Self::ScaledPoisson => {
                let poisson = Poisson::new(POISSON_MEAN)
                    .map_err(|e| McError::generator(format!("poisson(mean {POISSON_MEAN}): {e}")))?;
                Ok(Sampler::Nullary(Box::new(move |rng: &mut McRng| {
                    poisson.sample(rng) / POISSON_SCALE
                })))
            }
        }
    }
}

impl fmt::Display for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

//! Monte Carlo estimators for π and for ∫₀^π sin(x) dx.
//!
//! Both estimators run a fixed number of independent trials against a
//! caller-supplied [`Sampler`] and an explicit seeded source, and report
//! the estimate together with the wall-clock duration of the trial loop.

use std::f64::consts::PI;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::generators::Sampler;
use crate::rng::McRng;

/// An immutable estimation outcome.
///
/// Produced once per (strategy, estimator) combination and never
/// mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    /// The estimated value.
    pub value: f64,
    /// Wall-clock duration of the trial loop, in seconds.
    pub elapsed_seconds: f64,
}

impl Estimate {
    /// Create a new estimate.
    #[must_use]
    pub const fn new(value: f64, elapsed_seconds: f64) -> Self {
        Self {
            value,
            elapsed_seconds,
        }
    }
}

/// Estimate π by hit-or-miss sampling of the unit quarter disc.
///
/// Each trial draws two independent samples x, y. Bounded samplers
/// receive the bounds (0, 1); nullary samplers are called as-is. The
/// trial counts as inside when x² + y² ≤ 1, and the estimate is
/// 4 · inside / n.
///
/// There is no guard against `n = 0`: the ratio is then NaN and the NaN
/// estimate is returned unchanged.
#[must_use]
pub fn estimate_pi(n: usize, sampler: &Sampler, rng: &mut McRng) -> Estimate {
    let mut inside = 0usize;
    let start = Instant::now();

    for _ in 0..n {
        let (x, y) = match sampler {
            Sampler::Bounded(f) => (f(rng, 0.0, 1.0), f(rng, 0.0, 1.0)),
            Sampler::Nullary(f) => (f(rng), f(rng)),
        };

        if x * x + y * y <= 1.0 {
            inside += 1;
        }
    }

    let value = 4.0 * (inside as f64 / n as f64);
    Estimate::new(value, start.elapsed().as_secs_f64())
}

/// Estimate ∫₀^π sin(x) dx (true value 2) by mean-value sampling.
///
/// Each trial draws one sample in [0, π): bounded samplers receive the
/// bounds (0, π); a nullary sampler's [0, 1)-like output is multiplied
/// by π. The estimate is (π / n) · Σ sin(x).
///
/// Same `n = 0` behavior as [`estimate_pi`].
#[must_use]
pub fn estimate_integral(n: usize, sampler: &Sampler, rng: &mut McRng) -> Estimate {
    let mut sum_fx = 0.0;
    let start = Instant::now();

    for _ in 0..n {
        let x = match sampler {
            Sampler::Bounded(f) => f(rng, 0.0, PI),
            Sampler::Nullary(f) => f(rng) * PI,
        };
        sum_fx += x.sin();
    }

    let value = (PI / n as f64) * sum_fx;
    Estimate::new(value, start.elapsed().as_secs_f64())
}

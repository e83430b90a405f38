//! Side-by-side comparison drivers.
//!
//! Runs every registered generator strategy through both estimators,
//! collecting estimates in registration order. A single seeded source
//! is threaded through the entire run so results are reproducible from
//! the master seed alone.

use crate::config::BenchConfig;
use crate::error::McResult;
use crate::estimators::{estimate_integral, estimate_pi, Estimate};
use crate::generators::Generator;
use crate::rng::McRng;

/// Estimates keyed by generator strategy, in insertion order.
///
/// Order is preserved so tables and charts list strategies the way they
/// were registered. Inserting a strategy twice replaces the earlier
/// estimate in place.
#[derive(Debug, Clone, Default)]
pub struct GeneratorResults {
    entries: Vec<(Generator, Estimate)>,
}

impl GeneratorResults {
    /// Create an empty result set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert or replace the estimate for a strategy.
    pub fn insert(&mut self, generator: Generator, estimate: Estimate) {
        if let Some(entry) = self.entries.iter_mut().find(|(g, _)| *g == generator) {
            entry.1 = estimate;
        } else {
            self.entries.push((generator, estimate));
        }
    }

    /// Look up the estimate for a strategy.
    #[must_use]
    pub fn get(&self, generator: Generator) -> Option<&Estimate> {
        self.entries
            .iter()
            .find(|(g, _)| *g == generator)
            .map(|(_, estimate)| estimate)
    }

    /// Number of strategies with an estimate.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no estimates have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (Generator, &Estimate)> {
        self.entries.iter().map(|(generator, estimate)| (*generator, estimate))
    }

    /// Strategy names in insertion order.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|(generator, _)| generator.name()).collect()
    }

    /// Estimated values in insertion order.
    #[must_use]
    pub fn values(&self) -> Vec<f64> {
        self.entries.iter().map(|(_, estimate)| estimate.value).collect()
    }

    /// Wall-clock timings in insertion order, in seconds.
    #[must_use]
    pub fn timings(&self) -> Vec<f64> {
        self.entries
            .iter()
            .map(|(_, estimate)| estimate.elapsed_seconds)
            .collect()
    }
}

/// Complete outcome of a comparison run: both estimate tables plus the
/// parameters that produced them.
#[derive(Debug, Clone)]
pub struct ComparisonReport {
    /// Trials per estimate.
    pub samples: usize,
    /// Master seed of the run.
    pub seed: u64,
    /// π estimates per strategy.
    pub pi: GeneratorResults,
    /// Integral estimates per strategy.
    pub integral: GeneratorResults,
}

/// Run the hit-or-miss π estimator once per registered strategy.
///
/// Strategies run in registration order against the shared `rng`.
///
/// # Errors
///
/// Returns an error if a strategy's sampler cannot be constructed.
pub fn compare_pi(samples: usize, rng: &mut McRng) -> McResult<GeneratorResults> {
    let mut results = GeneratorResults::new();

    for generator in Generator::ALL {
        let sampler = generator.sampler()?;
        results.insert(generator, estimate_pi(samples, &sampler, rng));
    }

    Ok(results)
}

/// Run the mean-value integral estimator once per registered strategy.
///
/// # Errors
///
/// Returns an error if a strategy's sampler cannot be constructed.
pub fn compare_integral(samples: usize, rng: &mut McRng) -> McResult<GeneratorResults> {
    let mut results = GeneratorResults::new();

    for generator in Generator::ALL {
        let sampler = generator.sampler()?;
        results.insert(generator, estimate_integral(samples, &sampler, rng));
    }

    Ok(results)
}

/// Run both comparisons with a single seeded source.
///
/// One [`McRng`] seeded from `config.seed` feeds the π phase and then
/// the integral phase, so the integral estimates depend on the stream
/// position left behind by the π phase.
///
/// # Errors
///
/// Returns an error if any sampler construction fails.
pub fn run_comparison(config: &BenchConfig) -> McResult<ComparisonReport> {
    let mut rng = McRng::new(config.seed);
    let pi = compare_pi(config.samples, &mut rng)?;
    let integral = compare_integral(config.samples, &mut rng)?;

    Ok(ComparisonReport {
        samples: config.samples,
        seed: config.seed,
        pi,
        integral,
    })
}

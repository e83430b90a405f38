//! # mcbench
//!
//! Monte Carlo estimation benchmark across six random generator
//! strategies.
//!
//! Estimates π (hit-or-miss over the unit quarter disc) and
//! ∫₀^π sin(x) dx (mean-value sampling, true value 2) once per
//! strategy, recording accuracy and wall-clock time, then renders both
//! estimate tables side by side as bar charts. Every strategy except
//! the OS-backed one draws from a single seeded source, so a run is
//! reproducible from its master seed.
//!
//! ## Example
//!
//! ```rust
//! use mcbench::prelude::*;
//!
//! // Configure a small deterministic run
//! let config = BenchConfig::builder()
//!     .samples(1_000)
//!     .seed(42)
//!     .build();
//!
//! let report = run_comparison(&config)?;
//! assert_eq!(report.pi.len(), 6);
//! # Ok::<(), McError>(())
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::similar_names,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::suspicious_operation_groupings,  // False positive for variance = E[X²] - E[X]²
    clippy::suboptimal_flops,  // Manual Horner's method is intentional
    clippy::imprecise_flops,   // Numerical code choices are intentional
    clippy::no_effect_underscore_binding,
    clippy::too_many_lines,
    clippy::missing_const_for_fn,  // Many functions can't be const in stable Rust
    clippy::needless_range_loop,   // Sometimes range loops are clearer
    clippy::manual_midpoint,       // Manual midpoint is intentional in numerical code
)]

pub mod cli;
pub mod compare;
pub mod config;
pub mod error;
pub mod estimators;
pub mod generators;
pub mod rng;
pub mod visualization;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::compare::{run_comparison, ComparisonReport, GeneratorResults};
    pub use crate::config::{BenchConfig, BenchConfigBuilder};
    pub use crate::error::{McError, McResult};
    pub use crate::estimators::{estimate_integral, estimate_pi, Estimate};
    pub use crate::generators::{Generator, Sampler};
    pub use crate::rng::McRng;
}

/// Re-export for public API
pub use error::{McError, McResult};

//! CLI output formatting.
//!
//! This module contains all output formatting functions for the CLI.
//! Extracted to enable testing of output generation.

use crate::compare::{ComparisonReport, GeneratorResults};
use crate::visualization::{INTEGRAL_REFERENCE, PI_REFERENCE};

/// Print version information.
pub fn print_version() {
    println!("mcbench {}", env!("CARGO_PKG_VERSION"));
}

/// Print help message.
pub fn print_help() {
    println!(
        r"mcbench - Monte Carlo estimation benchmark across random generator strategies

USAGE:
    mcbench [OPTIONS]

OPTIONS:
    --config <file.yaml>    Load run configuration from a YAML file
    --samples <N>           Trials per estimate (default: 10000)
    --seed <N>              Master seed for the seeded strategies (default: 42)
    --chart <file.png>      Chart output path (default: generator_comparison.png)
    --json <file.json>      Also export the full report as JSON

    -h, --help              Show this help message
    -V, --version           Show version information

EXAMPLES:
    mcbench
    mcbench --samples 100000 --seed 7
    mcbench --config bench.yaml --json report.json

ESTIMATES:
    pi        Hit-or-miss sampling of the unit quarter disc: 4 * inside / N
    integral  Mean-value estimate of the integral of sin(x) over [0, pi]

Six strategies take part, named random_1 through random_6: a bounded
uniform, a plain uniform, a shifted normal, an OS-backed uniform, a
power-law draw and a scaled Poisson draw. Every strategy except the
OS-backed one draws from a single seeded source, so runs reproduce
exactly from the master seed.
"
    );
}

/// Print both comparison tables.
///
/// # Arguments
///
/// * `report` - The comparison report to display
pub fn print_report(report: &ComparisonReport) {
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Monte Carlo Generator Comparison");
    println!("Samples: {}", report.samples);
    println!("Seed:    {}", report.seed);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");

    println!("Pi Estimates (true value {PI_REFERENCE}):");
    print_table(&report.pi, PI_REFERENCE);

    println!("\nIntegral Estimates (true value {INTEGRAL_REFERENCE}):");
    print_table(&report.integral, INTEGRAL_REFERENCE);

    println!();
}

fn print_table(results: &GeneratorResults, reference: f64) {
    println!(
        "  {:<10} {:>12} {:>12} {:>12}",
        "Generator", "Estimate", "Abs Error", "Seconds"
    );

    for (generator, estimate) in results.iter() {
        println!(
            "  {:<10} {:>12.6} {:>12.6} {:>12.6}",
            generator.name(),
            estimate.value,
            (estimate.value - reference).abs(),
            estimate.elapsed_seconds
        );
    }
}

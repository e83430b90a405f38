//! CLI command handlers.
//!
//! This module contains the execution logic for each CLI command.
//! Extracted to enable comprehensive testing of command behavior.

use std::path::PathBuf;
use std::process::ExitCode;

use validator::Validate;

use crate::compare::run_comparison;
use crate::config::BenchConfig;
use crate::error::McResult;
use crate::visualization::{export_json, render_comparison};

use super::output::{print_help, print_report, print_version};
use super::{Args, Command};

/// Main CLI entry point.
///
/// Dispatches to the appropriate command handler based on parsed arguments.
#[must_use]
pub fn run_cli(args: Args) -> ExitCode {
    match args.command {
        Command::Run {
            config,
            samples,
            seed,
            chart,
            json,
        } => run_benchmark(config, samples, seed, chart, json),
        Command::Help => {
            print_help();
            ExitCode::SUCCESS
        }
        Command::Version => {
            print_version();
            ExitCode::SUCCESS
        }
    }
}

/// Run the full comparison and write the configured outputs.
///
/// # Arguments
///
/// * `config_path` - Optional YAML configuration file
/// * `samples` - Optional trials-per-estimate override
/// * `seed` - Optional master seed override
/// * `chart` - Optional chart output path override
/// * `json` - Optional JSON report path override
#[must_use]
pub fn run_benchmark(
    config_path: Option<PathBuf>,
    samples: Option<usize>,
    seed: Option<u64>,
    chart: Option<PathBuf>,
    json: Option<PathBuf>,
) -> ExitCode {
    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║          mcbench - Monte Carlo Generator Comparison           ║");
    println!("╚═══════════════════════════════════════════════════════════════╝\n");

    let config = match build_config(config_path, samples, seed, chart, json) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::from(1);
        }
    };

    match execute(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}

/// Merge CLI overrides over the loaded or default configuration.
fn build_config(
    config_path: Option<PathBuf>,
    samples: Option<usize>,
    seed: Option<u64>,
    chart: Option<PathBuf>,
    json: Option<PathBuf>,
) -> McResult<BenchConfig> {
    let mut config = match config_path {
        Some(path) => BenchConfig::load(path)?,
        None => BenchConfig::default(),
    };

    if let Some(samples) = samples {
        config.samples = samples;
    }

    if let Some(seed) = seed {
        config.seed = seed;
    }

    if let Some(chart) = chart {
        config.chart_path = chart;
    }

    if let Some(json) = json {
        config.json_path = Some(json);
    }

    // Overrides skip the YAML path; the merged result gets the same
    // two-layer validation.
    config.validate()?;
    config.validate_semantic()?;

    Ok(config)
}

fn execute(config: &BenchConfig) -> McResult<()> {
    let report = run_comparison(config)?;
    print_report(&report);

    render_comparison(&report, &config.chart_path)?;
    println!("✓ Chart written to: {}", config.chart_path.display());

    if let Some(ref json_path) = config.json_path {
        export_json(&report, json_path)?;
        println!("✓ Report written to: {}", json_path.display());
    }

    Ok(())
}

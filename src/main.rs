//! mcbench CLI - Monte Carlo generator comparison.
//!
//! Command-line interface for the estimation benchmark.

use std::process::ExitCode;

use mcbench::cli::{run_cli, Args};

fn main() -> ExitCode {
    run_cli(Args::parse())
}

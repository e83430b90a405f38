//! CLI argument parsing.
//!
//! This module provides the argument parser for the mcbench CLI.
//! Extracted to enable comprehensive testing of argument parsing logic.

use std::path::PathBuf;

/// CLI arguments container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    /// The command to execute.
    pub command: Command,
}

/// Available CLI commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run the full comparison
    Run {
        /// Optional configuration file path.
        config: Option<PathBuf>,
        /// Optional trials-per-estimate override.
        samples: Option<usize>,
        /// Optional master seed override.
        seed: Option<u64>,
        /// Optional chart output path override.
        chart: Option<PathBuf>,
        /// Optional JSON report path override.
        json: Option<PathBuf>,
    },
    /// Show help
    Help,
    /// Show version
    Version,
}

impl Command {
    /// A run with no overrides: defaults or config-file values apply.
    #[must_use]
    pub const fn default_run() -> Self {
        Self::Run {
            config: None,
            samples: None,
            seed: None,
            chart: None,
            json: None,
        }
    }
}

impl Args {
    /// Parse command-line arguments from an iterator.
    ///
    /// This method is testable as it accepts any iterator of strings,
    /// not just `std::env::args()`.
    #[must_use]
    pub fn parse_from<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();
        Self::parse_from_vec(&args)
    }

    /// Parse command-line arguments from the environment.
    #[must_use]
    pub fn parse() -> Self {
        Self::parse_from(std::env::args())
    }

    /// Internal parsing from a vector of strings.
    fn parse_from_vec(args: &[String]) -> Self {
        if args.len() < 2 {
            return Self {
                command: Command::default_run(),
            };
        }

        let command = match args[1].as_str() {
            "-h" | "--help" | "help" => Command::Help,
            "-V" | "--version" | "version" => Command::Version,
            _ => Self::parse_run_flags(args),
        };

        Self { command }
    }

    /// Parse the run flags. Values that fail to parse as numbers leave
    /// the corresponding override unset.
    fn parse_run_flags(args: &[String]) -> Command {
        let mut config = None;
        let mut samples = None;
        let mut seed = None;
        let mut chart = None;
        let mut json = None;

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--config" => {
                    if i + 1 < args.len() {
                        config = Some(PathBuf::from(&args[i + 1]));
                        i += 2;
                    } else {
                        i += 1;
                    }
                }
                "--samples" => {
                    if i + 1 < args.len() {
                        if let Ok(n) = args[i + 1].parse() {
                            samples = Some(n);
                        }
                        i += 2;
                    } else {
                        i += 1;
                    }
                }
                "--seed" => {
                    if i + 1 < args.len() {
                        if let Ok(s) = args[i + 1].parse() {
                            seed = Some(s);
                        }
                        i += 2;
                    } else {
                        i += 1;
                    }
                }
                "--chart" => {
                    if i + 1 < args.len() {
                        chart = Some(PathBuf::from(&args[i + 1]));
                        i += 2;
                    } else {
                        i += 1;
                    }
                }
                "--json" => {
                    if i + 1 < args.len() {
                        json = Some(PathBuf::from(&args[i + 1]));
                        i += 2;
                    } else {
                        i += 1;
                    }
                }
                unknown => {
                    eprintln!("Unknown option: {unknown}");
                    return Command::Help;
                }
            }
        }

        Command::Run {
            config,
            samples,
            seed,
            chart,
            json,
        }
    }
}

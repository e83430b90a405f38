//! Run configuration with YAML schema and validation.
//!
//! Mistake-proofing happens in two layers: serde schema checks at parse
//! time, then semantic validation of values the schema cannot express.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use validator::Validate;

use crate::error::{McError, McResult};

/// Raster formats the chart backend can write.
const SUPPORTED_CHART_FORMATS: [&str; 4] = ["png", "bmp", "jpg", "jpeg"];

/// Top-level benchmark configuration.
///
/// Loaded from YAML files with full schema validation, or constructed
/// programmatically through [`BenchConfig::builder`].
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct BenchConfig {
    /// Trials per estimate.
    #[validate(range(min = 1))]
    #[serde(default = "default_samples")]
    pub samples: usize,

    /// Master seed for the seeded generator strategies.
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Output path for the comparison chart.
    #[serde(default = "default_chart_path")]
    pub chart_path: PathBuf,

    /// Optional output path for the JSON report.
    #[serde(default)]
    pub json_path: Option<PathBuf>,
}

const fn default_samples() -> usize {
    10_000
}

const fn default_seed() -> u64 {
    42
}

fn default_chart_path() -> PathBuf {
    PathBuf::from("generator_comparison.png")
}

impl BenchConfig {
    /// Load configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File cannot be read
    /// - YAML parsing fails
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> McResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML string.
    ///
    /// # Errors
    ///
    /// Returns error if parsing or validation fails.
    pub fn from_yaml(yaml: &str) -> McResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;

        // Schema constraints first, then semantics the schema cannot
        // express.
        config.validate()?;
        config.validate_semantic()?;

        Ok(config)
    }

    /// Create a builder for configuration.
    #[must_use]
    pub fn builder() -> BenchConfigBuilder {
        BenchConfigBuilder::default()
    }

    /// Validate semantic constraints beyond schema.
    pub(crate) fn validate_semantic(&self) -> McResult<()> {
        match self.chart_path.extension().and_then(|e| e.to_str()) {
            Some(ext) if SUPPORTED_CHART_FORMATS.contains(&ext.to_ascii_lowercase().as_str()) => {
                Ok(())
            }
            Some(ext) => Err(McError::config(format!(
                "Unsupported chart image format '{ext}' (expected one of: png, bmp, jpg, jpeg)"
            ))),
            None => Err(McError::config(
                "Chart path must carry a raster image extension (png, bmp, jpg, jpeg)",
            )),
        }
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            samples: default_samples(),
            seed: default_seed(),
            chart_path: default_chart_path(),
            json_path: None,
        }
    }
}

/// Configuration builder for programmatic construction.
#[derive(Debug, Default)]
pub struct BenchConfigBuilder {
    samples: Option<usize>,
    seed: Option<u64>,
    chart_path: Option<PathBuf>,
    json_path: Option<PathBuf>,
}

impl BenchConfigBuilder {
    /// Set the number of trials per estimate.
    #[must_use]
    pub const fn samples(mut self, samples: usize) -> Self {
        self.samples = Some(samples);
        self
    }

    /// Set the master seed.
    #[must_use]
    pub const fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the chart output path.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)] // PathBuf doesn't impl Copy
    pub fn chart_path(mut self, path: PathBuf) -> Self {
        self.chart_path = Some(path);
        self
    }

    /// Set the JSON report output path.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)] // PathBuf doesn't impl Copy
    pub fn json_path(mut self, path: PathBuf) -> Self {
        self.json_path = Some(path);
        self
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> BenchConfig {
        let mut config = BenchConfig::default();

        if let Some(samples) = self.samples {
            config.samples = samples;
        }

        if let Some(seed) = self.seed {
            config.seed = seed;
        }

        if let Some(path) = self.chart_path {
            config.chart_path = path;
        }

        if let Some(path) = self.json_path {
            config.json_path = Some(path);
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = BenchConfig::default();

        assert_eq!(config.samples, 10_000);
        assert_eq!(config.seed, 42);
        assert_eq!(config.chart_path, PathBuf::from("generator_comparison.png"));
        assert!(config.json_path.is_none());
    }

    #[test]
    fn test_config_builder() {
        let config = BenchConfig::builder()
            .samples(50_000)
            .seed(12_345)
            .chart_path(PathBuf::from("out/chart.png"))
            .json_path(PathBuf::from("out/report.json"))
            .build();

        assert_eq!(config.samples, 50_000);
        assert_eq!(config.seed, 12_345);
        assert_eq!(config.chart_path, PathBuf::from("out/chart.png"));
        assert_eq!(config.json_path, Some(PathBuf::from("out/report.json")));
    }

    #[test]
    fn test_config_yaml_parse() {
        let yaml = r"
samples: 50000
seed: 7
";
        let config = BenchConfig::from_yaml(yaml);
        assert!(config.is_ok());

        let config = config.ok();
        assert!(config.is_some());
        assert_eq!(config.as_ref().map(|c| c.samples), Some(50_000));
        assert_eq!(config.map(|c| c.seed), Some(7));
    }

    #[test]
    fn test_config_yaml_all_fields() {
        let yaml = r"
samples: 1000
seed: 99
chart_path: out/comparison.png
json_path: out/report.json
";
        let config = BenchConfig::from_yaml(yaml);
        assert!(config.is_ok());

        let config = config.ok();
        assert_eq!(
            config.as_ref().map(|c| c.chart_path.clone()),
            Some(PathBuf::from("out/comparison.png"))
        );
        assert_eq!(
            config.and_then(|c| c.json_path),
            Some(PathBuf::from("out/report.json"))
        );
    }

    #[test]
    fn test_config_empty_document_uses_defaults() {
        let config = BenchConfig::from_yaml("{}");
        assert!(config.is_ok());
        assert_eq!(config.map(|c| c.samples).ok(), Some(10_000));
    }

    #[test]
    fn test_config_rejects_unknown_field() {
        let yaml = r"
samples: 1000
trials: 5
";
        let config = BenchConfig::from_yaml(yaml);
        assert!(config.is_err());
    }

    #[test]
    fn test_config_rejects_zero_samples() {
        let config = BenchConfig::from_yaml("samples: 0");
        assert!(config.is_err());
    }

    #[test]
    fn test_config_rejects_unsupported_chart_format() {
        let config = BenchConfig::from_yaml("chart_path: chart.svg");
        assert!(config.is_err());
    }

    #[test]
    fn test_config_rejects_extensionless_chart_path() {
        let config = BenchConfig::from_yaml("chart_path: chart");
        assert!(config.is_err());
    }

    #[test]
    fn test_config_accepts_uppercase_extension() {
        let config = BenchConfig::from_yaml("chart_path: CHART.PNG");
        assert!(config.is_ok());
    }

    #[test]
    fn test_config_load_from_file() {
        let dir = match tempfile::tempdir() {
            Ok(dir) => dir,
            Err(e) => panic!("tempdir failed: {e}"),
        };
        let path = dir.path().join("bench.yaml");
        if let Err(e) = std::fs::write(&path, "samples: 250\nseed: 3\n") {
            panic!("write failed: {e}");
        }

        let config = BenchConfig::load(&path);
        assert!(config.is_ok());
        assert_eq!(config.map(|c| c.samples).ok(), Some(250));
    }

    #[test]
    fn test_config_load_missing_file() {
        let config = BenchConfig::load("no/such/config.yaml");
        assert!(matches!(config, Err(McError::Io(_))));
    }
}

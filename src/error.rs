//! Error types for mcbench.
//!
//! All fallible operations return `Result<T, McError>` instead of
//! panicking; errors propagate to the CLI boundary.

use thiserror::Error;

/// Result type alias for mcbench operations.
pub type McResult<T> = Result<T, McError>;

/// Unified error type for all mcbench operations.
#[derive(Debug, Error)]
pub enum McError {
    /// Invalid configuration parameter.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    /// YAML parsing error.
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    /// Generator strategy construction error.
    #[error("Generator error: {0}")]
    Generator(String),

    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Chart rendering error.
    #[error("Render error: {0}")]
    Render(String),
}

impl McError {
    /// Create a configuration error with a message.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a generator construction error.
    #[must_use]
    pub fn generator(message: impl Into<String>) -> Self {
        Self::Generator(message.into())
    }

    /// Create a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }

    /// Create a chart rendering error.
    #[must_use]
    pub fn render(message: impl Into<String>) -> Self {
        Self::Render(message.into())
    }
}

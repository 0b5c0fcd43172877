//! Configuration structures for the clock benchmark.
//!
//! Supports TOML deserialization; every field has a default matching
//! the stock benchmark (100 000 trials, shrinking to 10 000).

use crate::error::MicrotimeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Top-level benchmark configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    /// Trial budgets for the resolution measurement.
    pub trials: TrialBudget,

    /// Which OS clock backs the readings.
    pub clock: ClockConfig,

    /// How results are rendered.
    pub output: OutputConfig,
}

/// Trial budgets for the resolution measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrialBudget {
    /// Upper bound on trials before any positive difference is seen.
    pub initial: u64,

    /// Bound that replaces `initial` once a positive difference is seen.
    pub reduced: u64,
}

impl Default for TrialBudget {
    fn default() -> Self {
        Self {
            initial: 100_000,
            reduced: 10_000,
        }
    }
}

impl TrialBudget {
    /// Create a budget with explicit bounds.
    #[must_use]
    pub const fn new(initial: u64, reduced: u64) -> Self {
        Self { initial, reduced }
    }

    /// Check that the reduced budget does not exceed the initial one.
    ///
    /// Stricter than the loop itself needs: a larger `reduced` would let a
    /// found minimum extend the run, so it is refused rather than honored.
    ///
    /// # Errors
    ///
    /// Returns [`MicrotimeError::Config`] if `reduced > initial`.
    pub fn validate(&self) -> Result<(), MicrotimeError> {
        if self.reduced > self.initial {
            return Err(MicrotimeError::Config(format!(
                "reduced trial budget ({}) exceeds initial budget ({})",
                self.reduced, self.initial
            )));
        }
        Ok(())
    }
}

/// Clock source selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    /// System call used to read the wall clock.
    pub source: ClockSource,
}

/// OS facility used to read the wall clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClockSource {
    /// `gettimeofday(2)`, microsecond native.
    #[default]
    Gettimeofday,
    /// `clock_gettime(CLOCK_REALTIME)`, truncated to microseconds.
    Realtime,
}

impl fmt::Display for ClockSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gettimeofday => write!(f, "gettimeofday"),
            Self::Realtime => write!(f, "realtime"),
        }
    }
}

/// Output settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Rendering format for stdout.
    pub format: OutputFormat,
}

/// Rendering format for benchmark results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human readable lines.
    #[default]
    Text,
    /// Pretty-printed JSON document.
    Json,
}

impl BenchConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::Parse)
    }

    /// Serialize configuration to TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(ConfigError::Serialize)
    }

    /// Validate cross-field constraints.
    ///
    /// # Errors
    ///
    /// Returns an error if the trial budgets are inconsistent.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.trials.validate().map_err(ConfigError::Invalid)
    }
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File I/O error.
    #[error("failed to read config file {path}: {source}")]
    Io {
        /// Path to the configuration file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// TOML parsing error.
    #[error("failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("failed to serialize TOML: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Values parsed but violate a constraint.
    #[error(transparent)]
    Invalid(MicrotimeError),
}

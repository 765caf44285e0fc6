//! Configuration system for ColorForge.
//!
//! Load search configuration from TOML or YAML files to control pruning
//! strategies, termination and benchmarking without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use colorforge_config::SolverConfig;
//! use std::time::Duration;
//!
//! let config = SolverConfig::from_toml_str(r#"
//!     palette = ["yellow", "green", "red", "blue"]
//!
//!     [search]
//!     forward_checking = true
//!     propagation = true
//!     heuristics = true
//!
//!     [termination]
//!     seconds_spent_limit = 30
//!     backtrack_count_limit = 100000
//! "#).unwrap();
//!
//! assert_eq!(config.time_limit(), Some(Duration::from_secs(30)));
//! assert!(config.search.forward_checking);
//! assert_eq!(config.palette.as_ref().map(Vec::len), Some(4));
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use colorforge_config::SolverConfig;
//!
//! let config = SolverConfig::load("colorforge.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main solver configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SolverConfig {
    /// Random seed for reproducible node-order shuffles.
    #[serde(default)]
    pub random_seed: Option<u64>,

    /// Pruning and ordering strategies.
    #[serde(default)]
    pub search: SearchConfig,

    /// Candidate palette, in try-order.
    #[serde(default)]
    pub palette: Option<Vec<String>>,

    /// Termination configuration.
    #[serde(default)]
    pub termination: Option<TerminationConfig>,

    /// Benchmark configuration.
    #[serde(default)]
    pub benchmark: Option<BenchmarkSettings>,
}

impl SolverConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks cross-field constraints that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(palette) = &self.palette {
            if palette.is_empty() {
                return Err(ConfigError::Invalid("palette must not be empty".into()));
            }
        }
        if let Some(benchmark) = &self.benchmark {
            if benchmark.run_count == 0 {
                return Err(ConfigError::Invalid(
                    "benchmark run_count must be at least 1".into(),
                ));
            }
        }
        Ok(())
    }

    /// Sets the termination time limit.
    pub fn with_termination_seconds(mut self, seconds: u64) -> Self {
        self.termination = Some(TerminationConfig {
            seconds_spent_limit: Some(seconds),
            ..self.termination.unwrap_or_default()
        });
        self
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Sets the search strategies.
    pub fn with_search(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }

    /// Sets the candidate palette.
    pub fn with_palette<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.palette = Some(colors.into_iter().map(Into::into).collect());
        self
    }

    /// Returns the termination time limit, if configured.
    ///
    /// Convenience method that delegates to `termination.time_limit()`.
    pub fn time_limit(&self) -> Option<Duration> {
        self.termination.as_ref().and_then(|t| t.time_limit())
    }
}

/// Search strategy toggles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SearchConfig {
    /// Remove an assigned color from unassigned neighbors' domains.
    #[serde(default)]
    pub forward_checking: bool,

    /// Force singleton domains after forward checking.
    #[serde(default)]
    pub propagation: bool,

    /// Order variables by MRV + degree and values by LCV.
    #[serde(default)]
    pub heuristics: bool,

    /// Depths at which ordering heuristics apply.
    #[serde(default)]
    pub heuristic_scope: HeuristicScope,
}

/// Depths at which the ordering heuristics are used.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HeuristicScope {
    /// Every decision of the search.
    #[default]
    EveryDepth,

    /// Only the first decision; deeper levels use input order.
    RootOnly,
}

/// Termination configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TerminationConfig {
    /// Maximum seconds to spend searching.
    pub seconds_spent_limit: Option<u64>,

    /// Maximum milliseconds to spend searching.
    pub millis_spent_limit: Option<u64>,

    /// Maximum number of search nodes (variable selections).
    pub step_count_limit: Option<u64>,

    /// Maximum number of backtracks.
    pub backtrack_count_limit: Option<u64>,
}

impl TerminationConfig {
    /// Returns the time limit as a Duration, if any.
    pub fn time_limit(&self) -> Option<Duration> {
        let millis =
            self.seconds_spent_limit.unwrap_or(0) * 1000 + self.millis_spent_limit.unwrap_or(0);
        if millis > 0 {
            Some(Duration::from_millis(millis))
        } else {
            None
        }
    }

    /// Returns true if no limit is configured.
    pub fn is_unbounded(&self) -> bool {
        self.time_limit().is_none()
            && self.step_count_limit.is_none()
            && self.backtrack_count_limit.is_none()
    }
}

/// Benchmark configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct BenchmarkSettings {
    /// Unmeasured runs before measurement.
    #[serde(default)]
    pub warmup_count: usize,

    /// Measured runs per strategy.
    #[serde(default = "default_run_count")]
    pub run_count: usize,

    /// Shuffle node order before every run.
    #[serde(default = "default_shuffle_nodes")]
    pub shuffle_nodes: bool,

    /// CSV export path.
    #[serde(default)]
    pub csv_output: Option<String>,

    /// Markdown report path.
    #[serde(default)]
    pub markdown_output: Option<String>,
}

fn default_run_count() -> usize {
    5
}

fn default_shuffle_nodes() -> bool {
    true
}

impl Default for BenchmarkSettings {
    fn default() -> Self {
        Self {
            warmup_count: 0,
            run_count: default_run_count(),
            shuffle_nodes: default_shuffle_nodes(),
            csv_output: None,
            markdown_output: None,
        }
    }
}

#[cfg(test)]
mod tests;

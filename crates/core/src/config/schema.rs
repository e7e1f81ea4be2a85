//! Configuration schema definitions

use fastmatch_search::{MatchOptions, Threshold};
use serde::{Deserialize, Serialize};

/// Root configuration schema
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigSchema {
    #[serde(default)]
    pub search: SearchConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Defaults for keyword searches
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Normalization applied to keywords and probes
    #[serde(default)]
    pub options: MatchOptions,

    /// Minimum similarity in percent
    #[serde(default = "default_percentage")]
    pub percentage: f64,

    /// Maximum edit distance; when set, searches use it instead of `percentage`
    #[serde(default)]
    pub max_distance: Option<usize>,

    /// Maximum results to print (0 for all)
    #[serde(default)]
    pub limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            options: MatchOptions::default(),
            percentage: default_percentage(),
            max_distance: None,
            limit: 0,
        }
    }
}

impl SearchConfig {
    /// Threshold implied by this configuration
    pub fn threshold(&self) -> Threshold {
        match self.max_distance {
            Some(max) => Threshold::EditDistance(max),
            None => Threshold::Percentage(self.percentage),
        }
    }
}

fn default_percentage() -> f64 {
    75.0
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default level filter, overridden by `RUST_LOG`
    #[serde(default = "default_level")]
    pub level: String,

    /// Include the event target in log lines
    #[serde(default)]
    pub show_target: bool,

    /// Emit JSON log lines instead of the compact format
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            show_target: false,
            json: false,
        }
    }
}

fn default_level() -> String {
    "warn".to_string()
}

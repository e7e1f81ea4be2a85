//! Configuration file loading

use super::schema::ConfigSchema;
use crate::error::{Error, Result, ResultExt};
use std::path::Path;

/// Candidate file names, checked in order in the working directory
const CONFIG_CANDIDATES: [&str; 3] = [".fastmatch.toml", "fastmatch.toml", ".config/fastmatch.toml"];

/// Configuration wrapper
#[derive(Debug, Clone)]
pub struct Config {
    pub schema: ConfigSchema,
    pub path: Option<String>,
}

impl Config {
    /// Load configuration from a file path or use defaults
    ///
    /// An explicit path must exist; without one the standard locations are
    /// searched and defaults are used when none is present.
    pub fn load(path: Option<&str>) -> Result<Self> {
        if let Some(p) = path {
            if !Path::new(p).exists() {
                return Err(Error::config_not_found(p));
            }
        }

        let config_path = path.map(String::from).or_else(find_config_file);

        let schema = if let Some(ref p) = config_path {
            load_config_file(p)?
        } else {
            ConfigSchema::default()
        };

        let config = Self {
            schema,
            path: config_path,
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        let schema: ConfigSchema = toml::from_str(content)?;
        let config = Self { schema, path: None };
        config.validate()?;
        Ok(config)
    }

    /// Load with defaults only (no file)
    pub fn default() -> Self {
        Self {
            schema: ConfigSchema::default(),
            path: None,
        }
    }

    /// Check values that deserialize fine but make no sense
    pub fn validate(&self) -> Result<()> {
        let search = &self.schema.search;
        if !search.percentage.is_finite() {
            return Err(Error::invalid_config_value(
                "search.percentage",
                format!("{} is not a finite number", search.percentage),
            )
            .with_suggestion("Use a percentage between 0 and 100"));
        }

        if self.schema.logging.level.trim().is_empty() {
            return Err(Error::invalid_config_value("logging.level", "must not be empty")
                .with_suggestion("Use one of error, warn, info, debug, trace"));
        }

        Ok(())
    }
}

/// Find configuration file in standard locations
fn find_config_file() -> Option<String> {
    CONFIG_CANDIDATES
        .iter()
        .find(|candidate| Path::new(candidate).exists())
        .map(|candidate| candidate.to_string())
}

/// Load and parse a TOML configuration file
fn load_config_file(path: &str) -> Result<ConfigSchema> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::config(format!("Failed to read config file {}: {}", path, e)).with_source(e))?;

    toml::from_str::<ConfigSchema>(&content)
        .map_err(Error::from)
        .context(format!("While loading {}", path))
}

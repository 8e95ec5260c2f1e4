//! Redex configuration
//!
//! # Configuration hierarchy
//!
//! ```text
//! Priority (high → low):
//! 1. Environment variables (REDEX_FUEL, REDEX_PARALLEL)
//! 2. RON file passed to `ReduceConfig::load`
//! 3. Default values
//! ```
//!
//! # Usage
//!
//! ```rust
//! use redex::util::config::ReduceConfig;
//!
//! let config = ReduceConfig::from_ron_str("(fuel: 64)").unwrap();
//! assert_eq!(config.fuel, 64);
//! assert!(!config.parallel);
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable overriding [`ReduceConfig::fuel`]
pub const FUEL_ENV: &str = "REDEX_FUEL";

/// Environment variable overriding [`ReduceConfig::parallel`]
pub const PARALLEL_ENV: &str = "REDEX_PARALLEL";

/// Reduction settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReduceConfig {
    /// Step budget used by `Reducer::normalize`
    #[serde(default = "default_fuel")]
    pub fuel: usize,
    /// Step wide argument lists on the rayon pool
    #[serde(default)]
    pub parallel: bool,
    /// Emit a trace event for every reduction step
    #[serde(default)]
    pub log_steps: bool,
}

fn default_fuel() -> usize {
    10_000
}

impl Default for ReduceConfig {
    fn default() -> Self {
        Self {
            fuel: default_fuel(),
            parallel: false,
            log_steps: false,
        }
    }
}

impl ReduceConfig {
    /// Parse a RON document; missing fields take their defaults
    pub fn from_ron_str(source: &str) -> Result<Self, ConfigError> {
        Ok(ron::from_str(source)?)
    }

    /// Load from a RON file, then apply environment overrides
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Self::load_with(path, |key| std::env::var(key).ok())
    }

    /// Load from a RON file, then apply overrides from `lookup`
    pub fn load_with(
        path: &Path,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ron_str(&content)?.with_overrides(lookup)
    }

    /// Apply overrides from an arbitrary lookup (the environment in production)
    pub fn with_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(raw) = lookup(FUEL_ENV) {
            self.fuel = raw.trim().parse().map_err(|_| ConfigError::InvalidOverride {
                key: FUEL_ENV,
                value: raw.clone(),
            })?;
        }
        if let Some(raw) = lookup(PARALLEL_ENV) {
            self.parallel = match raw.trim() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => {
                    return Err(ConfigError::InvalidOverride {
                        key: PARALLEL_ENV,
                        value: raw,
                    })
                }
            };
        }
        Ok(self)
    }

    /// Render as pretty RON
    pub fn to_ron_string(&self) -> Result<String, ConfigError> {
        Ok(ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())?)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Config parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("Config serialize error: {0}")]
    Serialize(#[from] ron::Error),
    #[error("Invalid value {value:?} for {key}")]
    InvalidOverride { key: &'static str, value: String },
}

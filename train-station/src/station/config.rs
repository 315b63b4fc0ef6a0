//! Station configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::catalog::{CatalogError, WagonCatalog, WagonClass, default_classes};

/// Environment variable naming a JSON configuration file.
pub const CONFIG_PATH_VAR: &str = "STATION_CONFIG";

/// Environment variable overriding the ticket-sale seed.
pub const SEED_VAR: &str = "STATION_SEED";

/// Errors from loading the configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file could not be read
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Configuration file is not valid JSON for this schema
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Seed override is not an unsigned integer
    #[error("invalid seed {value:?}: expected an unsigned integer")]
    InvalidSeed { value: String },
}

/// Configuration for a station session.
///
/// Every field is optional in the JSON form; missing fields take their
/// default. `wagon_classes`, when given, replaces the whole catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StationConfig {
    /// Seed for ticket sales. `None` seeds from OS entropy.
    pub seed: Option<u64>,

    /// Wagon classes, in the order tickets are sold.
    pub wagon_classes: Vec<WagonClass>,
}

impl StationConfig {
    /// Create a configuration with the given seed and catalog entries.
    pub fn new(seed: Option<u64>, wagon_classes: Vec<WagonClass>) -> Self {
        Self {
            seed,
            wagon_classes,
        }
    }

    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load configuration from `STATION_CONFIG` and `STATION_SEED`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let path = std::env::var_os(CONFIG_PATH_VAR).map(PathBuf::from);
        let seed = std::env::var(SEED_VAR).ok();
        Self::load(path.as_deref(), seed.as_deref())
    }

    /// Load configuration from an optional file, then apply an optional seed override.
    pub fn load(path: Option<&Path>, seed: Option<&str>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => {
                let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })?;
                Self::from_json(&json)?
            }
            None => Self::default(),
        };

        if let Some(seed) = seed {
            let parsed = seed.trim().parse().map_err(|_| ConfigError::InvalidSeed {
                value: seed.to_string(),
            })?;
            config.seed = Some(parsed);
        }

        Ok(config)
    }

    /// Build the validated wagon catalog.
    pub fn catalog(&self) -> Result<WagonCatalog, CatalogError> {
        WagonCatalog::new(self.wagon_classes.clone())
    }
}

impl Default for StationConfig {
    fn default() -> Self {
        Self {
            seed: None,
            wagon_classes: default_classes(),
        }
    }
}

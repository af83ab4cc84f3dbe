//! Store configuration
//!
//! Optional TOML file naming the data directory, database file and table.
//! A missing file yields the defaults.

use crate::error::CoreError;
use crate::paths::Paths;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default database file name inside the data directory
pub const DEFAULT_DATABASE: &str = "tornillos.db";

/// Default reference table name
pub const DEFAULT_TABLE: &str = "tamano_llaves";

/// Where the reference table lives
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    /// Data directory (falls back to [`Paths::resolve`] when unset)
    pub data_dir: Option<PathBuf>,
    /// Database file name
    pub database: String,
    /// Table name
    pub table: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            database: DEFAULT_DATABASE.to_string(),
            table: DEFAULT_TABLE.to_string(),
        }
    }
}

impl StoreConfig {
    /// Load from a TOML file. Returns defaults when the file does not exist.
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(CoreError::ConfigRead {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, CoreError> {
        let config: Self = toml::from_str(content).map_err(|e| CoreError::InvalidConfig {
            message: e.message().to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), CoreError> {
        if self.database.trim().is_empty() {
            return Err(CoreError::InvalidConfig {
                message: "database must not be empty".to_string(),
            });
        }
        if self.table.trim().is_empty() {
            return Err(CoreError::InvalidConfig {
                message: "table must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Resolve the data directory for this config
    pub fn paths(&self) -> Result<Paths, CoreError> {
        Paths::resolve(self.data_dir.clone())
    }
}

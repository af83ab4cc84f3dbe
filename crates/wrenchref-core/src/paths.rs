//! Data directory resolution
//!
//! Resolution order: explicit directory, `WRENCHREF_DATA_DIR`, then
//! `<platform data dir>/wrenchref`.

use crate::error::CoreError;
use std::path::{Path, PathBuf};

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "WRENCHREF_DATA_DIR";

/// Location of the reference data files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    data_dir: PathBuf,
}

impl Paths {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Resolve from an optional explicit directory, falling back to the
    /// environment and then the platform data directory
    pub fn resolve(explicit: Option<PathBuf>) -> Result<Self, CoreError> {
        let from_env = std::env::var_os(DATA_DIR_ENV).map(PathBuf::from);
        Self::resolve_with(explicit, from_env, dirs::data_dir())
    }

    fn resolve_with(
        explicit: Option<PathBuf>,
        from_env: Option<PathBuf>,
        platform: Option<PathBuf>,
    ) -> Result<Self, CoreError> {
        explicit
            .or(from_env.filter(|p| !p.as_os_str().is_empty()))
            .or_else(|| platform.map(|d| d.join("wrenchref")))
            .map(Self::new)
            .ok_or(CoreError::DataDirNotFound)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path of a database file inside the data directory
    pub fn database_path(&self, file_name: &str) -> PathBuf {
        self.data_dir.join(file_name)
    }
}

//! Cached accessor over the wrench-size reference table
//!
//! The table is read through a [`TableLoader`] on first access and kept in a
//! one-time cell for the lifetime of the accessor. Concurrent first access
//! performs a single load; a failed load leaves the cell empty.

use crate::config::StoreConfig;
use crate::error::CoreError;
use crate::loader::{SqliteTableLoader, TableLoader};
use crate::paths::Paths;
use crate::schema;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};
use wrenchref_types::{WrenchSizeRow, WrenchSizeTable};

/// Read accessors for the wrench-size table
///
/// Thread-safe: `&self` methods may be called from several threads; only the
/// first successful call performs I/O.
pub struct WrenchSizes<L = SqliteTableLoader> {
    loader: L,

    /// Database file holding the table
    db_path: PathBuf,

    /// Table name inside the database
    table: String,

    /// Loaded table (set once, never invalidated)
    cache: OnceCell<Arc<WrenchSizeTable>>,
}

impl WrenchSizes<SqliteTableLoader> {
    /// Accessor over a SQLite database file
    pub fn new(db_path: impl Into<PathBuf>, table: impl Into<String>) -> Self {
        Self::with_loader(SqliteTableLoader::new(), db_path, table)
    }

    /// Accessor for `<data_dir>/<database>` as named by the config
    pub fn from_config(config: &StoreConfig, paths: &Paths) -> Self {
        Self::new(paths.database_path(&config.database), config.table.clone())
    }
}

impl<L: TableLoader> WrenchSizes<L> {
    pub fn with_loader(loader: L, db_path: impl Into<PathBuf>, table: impl Into<String>) -> Self {
        Self {
            loader,
            db_path: db_path.into(),
            table: table.into(),
            cache: OnceCell::new(),
        }
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    pub fn table_name(&self) -> &str {
        &self.table
    }

    /// Whether the table has been loaded
    pub fn is_loaded(&self) -> bool {
        self.cache.get().is_some()
    }

    /// Load the table on first call, return the cached copy afterwards
    pub fn load(&self) -> Result<Arc<WrenchSizeTable>, CoreError> {
        if let Some(table) = self.cache.get() {
            debug!(table = %self.table, "Cache hit");
            return Ok(Arc::clone(table));
        }

        let table = self.cache.get_or_try_init(|| {
            debug!(path = %self.db_path.display(), table = %self.table, "Cache miss, loading");
            let raw = self.loader.load_table(&self.db_path, &self.table)?;
            let table = schema::map_table(&self.table, &raw)?;
            info!(table = %self.table, rows = table.len(), "Reference table loaded");
            Ok::<_, CoreError>(Arc::new(table))
        })?;

        Ok(Arc::clone(table))
    }

    /// `metric` column in stored order
    pub fn metrics(&self) -> Result<Vec<String>, CoreError> {
        Ok(self.load()?.metrics())
    }

    /// `nominal_diameter_mm` column in stored order
    pub fn nominal_diameters(&self) -> Result<Vec<f64>, CoreError> {
        Ok(self.load()?.nominal_diameters())
    }

    /// Nominal diameter (mm) of one metric
    pub fn nominal_diameter(&self, metric: &str) -> Result<f64, CoreError> {
        self.row(metric).map(|r| r.nominal_diameter_mm)
    }

    /// `wrench_size_mm` column in stored order
    pub fn wrench_sizes(&self) -> Result<Vec<f64>, CoreError> {
        Ok(self.load()?.wrench_sizes())
    }

    /// Wrench size (mm) of one metric; `0` when unknown
    pub fn wrench_size(&self, metric: &str) -> Result<f64, CoreError> {
        self.row(metric).map(|r| r.wrench_size_mm)
    }

    /// All rows in stored order
    pub fn rows(&self) -> Result<Vec<WrenchSizeRow>, CoreError> {
        Ok(self.load()?.rows().to_vec())
    }

    /// The single row for `metric`
    ///
    /// Fails with [`CoreError::NotFound`] when no row matches and
    /// [`CoreError::Ambiguous`] when several do.
    pub fn row(&self, metric: &str) -> Result<WrenchSizeRow, CoreError> {
        let table = self.load()?;
        let mut matches = table.matching(metric);

        let Some(first) = matches.next() else {
            return Err(CoreError::NotFound {
                metric: metric.to_string(),
            });
        };

        let extra = matches.count();
        if extra > 0 {
            return Err(CoreError::Ambiguous {
                metric: metric.to_string(),
                count: extra + 1,
            });
        }

        Ok(first.clone())
    }
}

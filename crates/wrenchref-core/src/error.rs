//! Error types for wrenchref-core
//!
//! Provides the error hierarchy with thiserror. Lookup errors are surfaced to the
//! caller as-is; store and schema errors propagate unmodified from the load.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for wrenchref operations
#[derive(Error, Debug)]
pub enum CoreError {
    // ===================
    // Lookup Errors
    // ===================
    #[error("Metric not found: {metric}")]
    NotFound { metric: String },

    #[error("Ambiguous metric {metric}: {count} rows match")]
    Ambiguous { metric: String, count: usize },

    // ===================
    // Store Errors
    // ===================
    #[error("Database not found: {path}")]
    DatabaseNotFound { path: PathBuf },

    #[error("Failed to open database: {path}")]
    DatabaseOpen {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Failed to read table {table}")]
    Query {
        table: String,
        #[source]
        source: rusqlite::Error,
    },

    // ===================
    // Schema Errors
    // ===================
    #[error("Table {table} is missing columns: {}", missing.join(", "))]
    Schema { table: String, missing: Vec<String> },

    #[error("Unexpected value in column {column}, row {row}: expected {expected}")]
    CellType {
        column: String,
        row: usize,
        expected: &'static str,
    },

    // ===================
    // Config Errors
    // ===================
    #[error("Data directory could not be determined")]
    DataDirNotFound,

    #[error("Failed to read config file: {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl CoreError {
    /// Actionable hint for the user, if one applies
    pub fn suggestion(&self) -> Option<String> {
        match self {
            CoreError::NotFound { .. } => {
                Some("List available metrics with: wrenchref metrics".to_string())
            }
            CoreError::Ambiguous { metric, .. } => Some(format!(
                "Metric values must be unique; remove duplicate '{}' rows from the table",
                metric
            )),
            CoreError::DatabaseNotFound { path } => Some(format!(
                "Check the data directory (--data-dir or WRENCHREF_DATA_DIR): ls {}",
                path.display()
            )),
            CoreError::Schema { table, .. } => Some(format!(
                "Inspect the table columns: sqlite3 <db> 'PRAGMA table_info(\"{}\")'",
                table
            )),
            CoreError::DataDirNotFound => {
                Some("Set WRENCHREF_DATA_DIR or pass --data-dir".to_string())
            }
            _ => None,
        }
    }
}

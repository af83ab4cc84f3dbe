//! Table loading
//!
//! A [`TableLoader`] reads one named table from a database file and returns it
//! untyped, as named columns plus rows of [`CellValue`]s. Mapping to the
//! fixed-schema record happens in [`crate::schema`].

pub mod sqlite;

pub use sqlite::SqliteTableLoader;

use crate::error::CoreError;
use std::path::Path;

/// Dynamically typed cell, mirroring SQLite storage classes
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl CellValue {
    /// Numeric value for INTEGER or REAL cells
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Integer(i) => Some(*i as f64),
            CellValue::Real(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }
}

/// Full contents of one table, columns in declared order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl RawTable {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        Self { columns, rows }
    }

    /// Index of a column by exact name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }
}

/// Reads a whole table from a database file.
///
/// Implementations return every row without filtering or pagination.
pub trait TableLoader {
    fn load_table(&self, db_path: &Path, table: &str) -> Result<RawTable, CoreError>;
}

//! wrenchref-core - Core library for wrenchref
//!
//! Loads the ISO metric wrench-size reference table from its SQLite store,
//! caches it, and answers lookups by column and by metric.

pub mod config;
pub mod error;
pub mod loader;
pub mod paths;
pub mod schema;
pub mod store;

pub use config::StoreConfig;
pub use error::CoreError;
pub use loader::{CellValue, RawTable, SqliteTableLoader, TableLoader};
pub use paths::Paths;
pub use store::WrenchSizes;
pub use wrenchref_types::{WrenchSizeRow, WrenchSizeTable};

//! wrenchref-types - Shared data types for wrenchref
//!
//! This crate contains pure data structures without heavy dependencies.
//! No database driver, no I/O - just serde-serializable types.
//!
//! Used by:
//! - wrenchref-core (loading and lookups)
//! - wrenchref (CLI output)

pub mod models;

pub use models::wrench_size::UNKNOWN_WRENCH_SIZE;
pub use models::{WrenchSizeRow, WrenchSizeTable};

//! Data models for the wrench-size reference table

pub mod wrench_size;

pub use wrench_size::{WrenchSizeRow, WrenchSizeTable};

//! Mapping from an untyped [`RawTable`] to [`WrenchSizeTable`]
//!
//! The column set is checked once, at load time. Column names are the ones the
//! reference database stores.

use crate::error::CoreError;
use crate::loader::{CellValue, RawTable};
use wrenchref_types::{WrenchSizeRow, WrenchSizeTable, UNKNOWN_WRENCH_SIZE};

/// Metric designation column
pub const METRIC_COLUMN: &str = "Métrica";
/// Nominal diameter column (mm)
pub const NOMINAL_DIAMETER_COLUMN: &str = "dnom_mm";
/// Wrench size column (mm), `0` when unknown
pub const WRENCH_SIZE_COLUMN: &str = "s_mm";

/// Build the typed table, failing fast on missing columns or mistyped cells.
///
/// Extra columns are ignored. A NULL wrench size is read as the unknown sentinel.
pub fn map_table(table_name: &str, raw: &RawTable) -> Result<WrenchSizeTable, CoreError> {
    let lookup = |name: &str| raw.column_index(name).ok_or_else(|| name.to_string());
    let indexes = [
        lookup(METRIC_COLUMN),
        lookup(NOMINAL_DIAMETER_COLUMN),
        lookup(WRENCH_SIZE_COLUMN),
    ];

    let missing: Vec<String> = indexes
        .iter()
        .filter_map(|r| r.as_ref().err().cloned())
        .collect();
    if !missing.is_empty() {
        return Err(CoreError::Schema {
            table: table_name.to_string(),
            missing,
        });
    }

    let [metric_idx, dnom_idx, s_idx] = indexes.map(|r| r.unwrap_or_default());

    raw.rows
        .iter()
        .enumerate()
        .map(|(row, cells)| -> Result<WrenchSizeRow, CoreError> {
            let cell = |idx: usize| cells.get(idx).unwrap_or(&CellValue::Null);

            let metric = cell(metric_idx)
                .as_str()
                .ok_or_else(|| cell_type(METRIC_COLUMN, row, "text"))?;

            let nominal_diameter_mm = cell(dnom_idx)
                .as_f64()
                .ok_or_else(|| cell_type(NOMINAL_DIAMETER_COLUMN, row, "number"))?;

            let wrench_size_mm = match cell(s_idx) {
                CellValue::Null => UNKNOWN_WRENCH_SIZE,
                other => other
                    .as_f64()
                    .ok_or_else(|| cell_type(WRENCH_SIZE_COLUMN, row, "number or NULL"))?,
            };

            Ok(WrenchSizeRow::new(metric, nominal_diameter_mm, wrench_size_mm))
        })
        .collect::<Result<Vec<_>, CoreError>>()
        .map(WrenchSizeTable::new)
}

fn cell_type(column: &str, row: usize, expected: &'static str) -> CoreError {
    CoreError::CellType {
        column: column.to_string(),
        row,
        expected,
    }
}

use serde::{Deserialize, Serialize};

/// Sentinel stored in `wrench_size_mm` when the across-flats size is unknown
pub const UNKNOWN_WRENCH_SIZE: f64 = 0.0;

/// One row of the wrench-size reference table.
///
/// Sizes follow the ISO metric screw thread tables:
/// - `metric`: thread designation, e.g. "M8"
/// - `nominal_diameter_mm`: major diameter of the thread
/// - `wrench_size_mm`: across-flats size of the head, `0` when unknown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WrenchSizeRow {
    /// Thread designation (lookup key)
    pub metric: String,
    /// Nominal (major) diameter in mm
    pub nominal_diameter_mm: f64,
    /// Wrench size across flats in mm
    pub wrench_size_mm: f64,
}

impl WrenchSizeRow {
    pub fn new(metric: impl Into<String>, nominal_diameter_mm: f64, wrench_size_mm: f64) -> Self {
        Self {
            metric: metric.into(),
            nominal_diameter_mm,
            wrench_size_mm,
        }
    }

    /// Wrench size, or `None` when the unknown sentinel is stored
    ///
    /// # Examples
    ///
    /// ```
    /// use wrenchref_types::WrenchSizeRow;
    ///
    /// assert_eq!(WrenchSizeRow::new("M8", 8.0, 13.0).wrench_size_known(), Some(13.0));
    /// assert_eq!(WrenchSizeRow::new("M1", 1.0, 0.0).wrench_size_known(), None);
    /// ```
    pub fn wrench_size_known(&self) -> Option<f64> {
        if self.wrench_size_mm == UNKNOWN_WRENCH_SIZE {
            None
        } else {
            Some(self.wrench_size_mm)
        }
    }
}

/// Full reference table in stored row order.
///
/// Immutable once built. Column projections preserve row order, so index `i`
/// of `metrics()`, `nominal_diameters()` and `wrench_sizes()` always refer to
/// the same row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WrenchSizeTable {
    rows: Vec<WrenchSizeRow>,
}

impl WrenchSizeTable {
    pub fn new(rows: Vec<WrenchSizeRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[WrenchSizeRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// `metric` column
    pub fn metrics(&self) -> Vec<String> {
        self.rows.iter().map(|r| r.metric.clone()).collect()
    }

    /// `nominal_diameter_mm` column
    pub fn nominal_diameters(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.nominal_diameter_mm).collect()
    }

    /// `wrench_size_mm` column (unknown sizes stay as `0`)
    pub fn wrench_sizes(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.wrench_size_mm).collect()
    }

    /// All rows whose `metric` equals the key exactly (case-sensitive)
    pub fn matching<'a>(
        &'a self,
        metric: &'a str,
    ) -> impl Iterator<Item = &'a WrenchSizeRow> + 'a {
        self.rows.iter().filter(move |r| r.metric == metric)
    }
}

impl From<Vec<WrenchSizeRow>> for WrenchSizeTable {
    fn from(rows: Vec<WrenchSizeRow>) -> Self {
        Self::new(rows)
    }
}

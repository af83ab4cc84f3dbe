//! CLI output for the wrench-size table
//!
//! Table, lookup and metric-list formatters, plus the user-facing error type.

use comfy_table::{Cell, CellAlignment, Color, ContentArrangement, Row, Table};
use wrenchref_core::{CoreError, WrenchSizeRow};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug)]
pub enum CliError {
    Core(CoreError),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Core(e) => {
                write!(f, "{}", e)?;
                if let Some(hint) = e.suggestion() {
                    write!(f, "\n  hint: {}", hint)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Core(e) => std::error::Error::source(e),
        }
    }
}

impl From<CoreError> for CliError {
    fn from(e: CoreError) -> Self {
        CliError::Core(e)
    }
}

// ============================================================================
// Formatters
// ============================================================================

const HEADERS: [&str; 3] = ["Métrica", "Diámetro (mm)", "Llave (mm)"];

/// Format all rows as a table (human) or JSON array
pub fn format_table(rows: &[WrenchSizeRow], json: bool, no_color: bool) -> String {
    if json {
        return serde_json::to_string_pretty(rows).unwrap_or_else(|_| "[]".to_string());
    }

    if rows.is_empty() {
        return "No rows in table.".to_string();
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    if no_color {
        table.set_header(HEADERS.to_vec());
    } else {
        table.set_header(
            HEADERS
                .iter()
                .map(|h| Cell::new(h).fg(Color::Cyan))
                .collect::<Vec<_>>(),
        );
    }

    for row in rows {
        table.add_row(Row::from(vec![
            Cell::new(&row.metric),
            Cell::new(format_mm(row.nominal_diameter_mm)).set_alignment(CellAlignment::Right),
            Cell::new(format_wrench(row)).set_alignment(CellAlignment::Right),
        ]));
    }

    table.to_string()
}

/// Format a single row lookup (human or JSON)
pub fn format_lookup(row: &WrenchSizeRow, json: bool) -> String {
    if json {
        return serde_json::to_string_pretty(row).unwrap_or_else(|_| "{}".to_string());
    }

    let mut lines = vec![];
    lines.push(format!("Metric:           {}", row.metric));
    lines.push(format!(
        "Nominal diameter: {} mm",
        format_mm(row.nominal_diameter_mm)
    ));
    lines.push(match row.wrench_size_known() {
        Some(s) => format!("Wrench size:      {} mm", format_mm(s)),
        None => "Wrench size:      unknown".to_string(),
    });

    lines.join("\n")
}

/// One metric per line
pub fn format_metrics(metrics: &[String]) -> String {
    metrics.join("\n")
}

// ============================================================================
// Utilities
// ============================================================================

/// Millimetres without trailing zeros ("13", "5.5", "3.2")
fn format_mm(value: f64) -> String {
    let s = format!("{:.3}", value);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

fn format_wrench(row: &WrenchSizeRow) -> String {
    row.wrench_size_known()
        .map(format_mm)
        .unwrap_or_else(|| "-".to_string())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<WrenchSizeRow> {
        vec![
            WrenchSizeRow::new("M1", 1.0, 0.0),
            WrenchSizeRow::new("M3", 3.0, 5.5),
            WrenchSizeRow::new("M8", 8.0, 13.0),
        ]
    }

    #[test]
    fn test_format_mm() {
        assert_eq!(format_mm(13.0), "13");
        assert_eq!(format_mm(5.5), "5.5");
        assert_eq!(format_mm(1.6), "1.6");
        assert_eq!(format_mm(0.0), "0");
    }

    #[test]
    fn test_table_contains_headers_and_rows() {
        let out = format_table(&rows(), false, true);

        for header in HEADERS {
            assert!(out.contains(header), "missing header {header}");
        }
        assert!(out.contains("M8"));
        assert!(out.contains("13"));
        assert!(out.contains("5.5"));
    }

    #[test]
    fn test_table_marks_unknown_wrench() {
        let out = format_table(&rows()[..1], false, true);
        let m1_line = out.lines().find(|l| l.contains("M1")).unwrap();
        assert!(m1_line.contains('-'));
    }

    #[test]
    fn test_table_json() {
        let out = format_table(&rows(), true, false);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value.as_array().unwrap().len(), 3);
        assert_eq!(value[2]["metric"], "M8");
        // Sentinel stays numeric in JSON
        assert_eq!(value[0]["wrench_size_mm"], 0.0);
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(format_table(&[], false, false), "No rows in table.");
        assert_eq!(format_table(&[], true, false), "[]");
    }

    #[test]
    fn test_format_lookup() {
        let out = format_lookup(&WrenchSizeRow::new("M8", 8.0, 13.0), false);
        assert!(out.contains("Metric:           M8"));
        assert!(out.contains("Nominal diameter: 8 mm"));
        assert!(out.contains("Wrench size:      13 mm"));

        let out = format_lookup(&WrenchSizeRow::new("M1", 1.0, 0.0), false);
        assert!(out.contains("Wrench size:      unknown"));
    }

    #[test]
    fn test_cli_error_includes_hint() {
        let err = CliError::from(CoreError::NotFound {
            metric: "M999".into(),
        });
        let msg = err.to_string();

        assert!(msg.starts_with("Metric not found: M999"));
        assert!(msg.contains("hint: List available metrics"));
    }
}

//! SQLite table loader
//!
//! Opens the database read-only for each load and reads the table with a
//! plain `SELECT *`, keeping the stored row order.

use super::{CellValue, RawTable, TableLoader};
use crate::error::CoreError;
use rusqlite::types::ValueRef;
use rusqlite::{Connection, OpenFlags};
use std::path::Path;
use tracing::debug;

/// Loads tables from a local SQLite file
#[derive(Debug, Clone, Copy, Default)]
pub struct SqliteTableLoader;

impl SqliteTableLoader {
    pub fn new() -> Self {
        Self
    }

    fn open(db_path: &Path) -> Result<Connection, CoreError> {
        if !db_path.is_file() {
            return Err(CoreError::DatabaseNotFound {
                path: db_path.to_path_buf(),
            });
        }

        Connection::open_with_flags(
            db_path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|source| CoreError::DatabaseOpen {
            path: db_path.to_path_buf(),
            source,
        })
    }
}

impl TableLoader for SqliteTableLoader {
    fn load_table(&self, db_path: &Path, table: &str) -> Result<RawTable, CoreError> {
        let conn = Self::open(db_path)?;
        let query_err = |source| CoreError::Query {
            table: table.to_string(),
            source,
        };

        let sql = format!("SELECT * FROM {}", quote_identifier(table));
        let mut stmt = conn.prepare(&sql).map_err(query_err)?;

        let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();
        let width = columns.len();

        let mut rows = Vec::new();
        let mut cursor = stmt.query([]).map_err(query_err)?;
        while let Some(row) = cursor.next().map_err(query_err)? {
            let mut cells = Vec::with_capacity(width);
            for (i, column) in columns.iter().enumerate() {
                let value = row.get_ref(i).map_err(query_err)?;
                let cell = to_cell(value).ok_or_else(|| CoreError::CellType {
                    column: column.clone(),
                    row: rows.len(),
                    expected: "UTF-8 text",
                })?;
                cells.push(cell);
            }
            rows.push(cells);
        }

        debug!(
            path = %db_path.display(),
            table,
            rows = rows.len(),
            "Loaded table"
        );

        Ok(RawTable::new(columns, rows))
    }
}

/// Owned cell for a borrowed SQLite value; `None` for TEXT that is not valid UTF-8
fn to_cell(value: ValueRef<'_>) -> Option<CellValue> {
    let cell = match value {
        ValueRef::Null => CellValue::Null,
        ValueRef::Integer(i) => CellValue::Integer(i),
        ValueRef::Real(f) => CellValue::Real(f),
        ValueRef::Text(_) => CellValue::Text(value.as_str().ok()?.to_string()),
        ValueRef::Blob(bytes) => CellValue::Blob(bytes.to_vec()),
    };
    Some(cell)
}

/// Quote an SQL identifier, doubling embedded quotes
fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn create_db(path: &Path) {
        let conn = Connection::open(path).unwrap();
        conn.execute_batch(
            r#"
            CREATE TABLE tamano_llaves ("Métrica" TEXT, dnom_mm REAL, s_mm REAL);
            INSERT INTO tamano_llaves VALUES ('M6', 6, 10.0);
            INSERT INTO tamano_llaves VALUES ('M8', 8.0, 13.0);
            INSERT INTO tamano_llaves VALUES ('M1', 1.0, NULL);
            "#,
        )
        .unwrap();
    }

    #[test]
    fn test_load_table_columns_and_rows() {
        let dir = tempdir().unwrap();
        let db = dir.path().join("tornillos.db");
        create_db(&db);

        let table = SqliteTableLoader::new()
            .load_table(&db, "tamano_llaves")
            .unwrap();

        assert_eq!(table.columns, vec!["Métrica", "dnom_mm", "s_mm"]);
        assert_eq!(table.rows.len(), 3);
        assert_eq!(table.rows[0][0], CellValue::Text("M6".into()));
        // REAL affinity stores the integer literal as a real
        assert_eq!(table.rows[0][1].as_f64(), Some(6.0));
        assert_eq!(table.rows[1][2], CellValue::Real(13.0));
        assert!(table.rows[2][2].is_null());
    }

    #[test]
    fn test_missing_database_file() {
        let dir = tempdir().unwrap();
        let db = dir.path().join("missing.db");

        let err = SqliteTableLoader::new()
            .load_table(&db, "tamano_llaves")
            .unwrap_err();

        assert!(matches!(err, CoreError::DatabaseNotFound { .. }));
        // Read-only open must not create the file
        assert!(!db.exists());
    }

    #[test]
    fn test_missing_table() {
        let dir = tempdir().unwrap();
        let db = dir.path().join("tornillos.db");
        create_db(&db);

        let err = SqliteTableLoader::new()
            .load_table(&db, "no_such_table")
            .unwrap_err();

        assert!(matches!(err, CoreError::Query { ref table, .. } if table == "no_such_table"));
    }

    #[test]
    fn test_invalid_utf8_text_rejected() {
        let dir = tempdir().unwrap();
        let db = dir.path().join("tornillos.db");
        let conn = Connection::open(&db).unwrap();
        conn.execute_batch(
            r#"
            CREATE TABLE tamano_llaves ("Métrica" TEXT, dnom_mm REAL, s_mm REAL);
            INSERT INTO tamano_llaves VALUES ('M6', 6.0, 10.0);
            INSERT INTO tamano_llaves VALUES (CAST(X'4DFF38' AS TEXT), 8.0, 13.0);
            "#,
        )
        .unwrap();
        drop(conn);

        let err = SqliteTableLoader::new()
            .load_table(&db, "tamano_llaves")
            .unwrap_err();

        assert!(matches!(
            err,
            CoreError::CellType { ref column, row: 1, .. } if column == "Métrica"
        ));
    }

    #[test]
    fn test_quote_identifier() {
        assert_eq!(quote_identifier("tamano_llaves"), "\"tamano_llaves\"");
        assert_eq!(quote_identifier("a\"b"), "\"a\"\"b\"");
    }
}

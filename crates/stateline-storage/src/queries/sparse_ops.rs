//! DDL and population for the derived sparse state table.
//!
//! The output table is a rebuilt-wholesale artifact: dropped and
//! recreated on every build, never updated in place.

use rusqlite::types::Value;
use rusqlite::Connection;

use stateline_core::errors::StateResult;
use stateline_core::models::SparseRow;
use tracing::debug;

use crate::identifiers::{validate_identifier, validate_label};
use crate::to_storage_err;

/// Drop and recreate the output table with one boolean column per
/// label. Destructive: any previous table of the same name (and its
/// indexes) is gone afterwards.
pub fn create_sparse_table(conn: &Connection, table: &str, labels: &[String]) -> StateResult<()> {
    validate_identifier(table)?;
    for label in labels {
        validate_label(label)?;
    }

    conn.execute_batch(&format!("DROP TABLE IF EXISTS {table}"))
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut columns = String::from("entity_id INTEGER NOT NULL, as_of_date TEXT NOT NULL");
    for label in labels {
        columns.push_str(&format!(", {label} INTEGER NOT NULL DEFAULT 0"));
    }
    conn.execute_batch(&format!("CREATE TABLE {table} ({columns})"))
        .map_err(|e| to_storage_err(e.to_string()))?;

    debug!(table, labels = labels.len(), "sparse table recreated");
    Ok(())
}

/// Populate the output table inside a single transaction.
/// Returns the number of rows written.
pub fn insert_rows(
    conn: &Connection,
    table: &str,
    labels: &[String],
    rows: &[SparseRow],
) -> StateResult<usize> {
    validate_identifier(table)?;
    for label in labels {
        validate_label(label)?;
    }

    let columns: Vec<&str> = std::iter::once("entity_id")
        .chain(std::iter::once("as_of_date"))
        .chain(labels.iter().map(String::as_str))
        .collect();
    let placeholders: Vec<String> = (1..=columns.len()).map(|i| format!("?{i}")).collect();
    let sql = format!(
        "INSERT INTO {table} ({}) VALUES ({})",
        columns.join(", "),
        placeholders.join(", ")
    );

    conn.execute_batch("BEGIN IMMEDIATE")
        .map_err(|e| to_storage_err(e.to_string()))?;

    let write = || -> StateResult<()> {
        let mut stmt = conn
            .prepare(&sql)
            .map_err(|e| to_storage_err(e.to_string()))?;
        for row in rows {
            debug_assert_eq!(row.flags.len(), labels.len());
            let mut values: Vec<Value> = Vec::with_capacity(columns.len());
            values.push(Value::Integer(row.entity_id));
            values.push(Value::Text(row.as_of_date.to_rfc3339()));
            values.extend(row.flags.iter().map(|&flag| Value::Integer(flag as i64)));
            stmt.execute(rusqlite::params_from_iter(values))
                .map_err(|e| to_storage_err(e.to_string()))?;
        }
        Ok(())
    };

    match write() {
        Ok(()) => {
            conn.execute_batch("COMMIT")
                .map_err(|e| to_storage_err(e.to_string()))?;
            debug!(table, rows = rows.len(), "sparse table populated");
            Ok(rows.len())
        }
        Err(e) => {
            let _ = conn.execute_batch("ROLLBACK");
            Err(e)
        }
    }
}

/// Create the two mandatory indexes: every downstream consumer filters
/// or joins on `entity_id` and `as_of_date`, independently and together.
pub fn create_indexes(conn: &Connection, table: &str) -> StateResult<()> {
    validate_identifier(table)?;
    conn.execute_batch(&format!(
        "CREATE INDEX IF NOT EXISTS idx_{table}_entity ON {table}(entity_id);
         CREATE INDEX IF NOT EXISTS idx_{table}_as_of ON {table}(as_of_date);"
    ))
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// True if some index on `table` leads with `column`.
pub fn has_index_on(conn: &Connection, table: &str, column: &str) -> StateResult<bool> {
    validate_identifier(table)?;

    let mut stmt = conn
        .prepare(&format!("PRAGMA index_list({table})"))
        .map_err(|e| to_storage_err(e.to_string()))?;
    let index_names: Vec<String> = stmt
        .query_map([], |row| row.get::<_, String>(1))
        .map_err(|e| to_storage_err(e.to_string()))?
        .collect::<Result<_, _>>()
        .map_err(|e| to_storage_err(e.to_string()))?;

    for name in index_names {
        let mut info = conn
            .prepare(&format!("PRAGMA index_info({name})"))
            .map_err(|e| to_storage_err(e.to_string()))?;
        let leads: bool = info
            .query_map([], |row| {
                Ok((row.get::<_, i64>(0)?, row.get::<_, String>(2)?))
            })
            .map_err(|e| to_storage_err(e.to_string()))?
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| to_storage_err(e.to_string()))?
            .iter()
            .any(|(seqno, col)| *seqno == 0 && col == column);
        if leads {
            return Ok(true);
        }
    }
    Ok(false)
}

/// True if a table with this name exists.
pub fn table_exists(conn: &Connection, table: &str) -> StateResult<bool> {
    let exists = conn
        .prepare("SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1")
        .and_then(|mut stmt| stmt.exists([table]))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(exists)
}

//! Raw SQL operations over a caller-owned dense interval table.

use rusqlite::Connection;

use stateline_core::errors::StateResult;
use stateline_core::models::IntervalFact;

use crate::identifiers::validate_identifier;
use crate::queries::parse_timestamp;
use crate::to_storage_err;

/// Load every interval fact from the dense source table.
pub fn load_intervals(conn: &Connection, table: &str) -> StateResult<Vec<IntervalFact>> {
    validate_identifier(table)?;

    let mut stmt = conn
        .prepare(&format!(
            "SELECT entity_id, state, start_time, end_time FROM {table}
             ORDER BY entity_id, state, start_time"
        ))
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map([], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
            ))
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut facts = Vec::new();
    for row in rows {
        let (entity_id, state, start, end) = row.map_err(|e| to_storage_err(e.to_string()))?;
        facts.push(IntervalFact {
            entity_id,
            state,
            start_time: parse_timestamp(&start)?,
            end_time: parse_timestamp(&end)?,
        });
    }
    Ok(facts)
}

/// Distinct state labels present in the source, alphabetical.
///
/// Schema discovery is its own query so phase 1 of a build (determine
/// the output columns) is testable independent of population.
pub fn distinct_state_labels(conn: &Connection, table: &str) -> StateResult<Vec<String>> {
    validate_identifier(table)?;

    let mut stmt = conn
        .prepare(&format!(
            "SELECT DISTINCT state FROM {table} ORDER BY state"
        ))
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map([], |row| row.get::<_, String>(0))
        .map_err(|e| to_storage_err(e.to_string()))?;

    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))
}

//! Raw SQL operations over a caller-owned binary-outcome events table.

use rusqlite::Connection;

use stateline_core::errors::StateResult;
use stateline_core::models::EventFact;

use crate::identifiers::validate_identifier;
use crate::queries::parse_timestamp;
use crate::to_storage_err;

/// Load every event fact from the events source table.
pub fn load_events(conn: &Connection, table: &str) -> StateResult<Vec<EventFact>> {
    validate_identifier(table)?;

    let mut stmt = conn
        .prepare(&format!(
            "SELECT entity_id, event_time, outcome FROM {table}
             ORDER BY entity_id, event_time"
        ))
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map([], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, bool>(2)?,
            ))
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut events = Vec::new();
    for row in rows {
        let (entity_id, event_time, outcome) = row.map_err(|e| to_storage_err(e.to_string()))?;
        events.push(EventFact {
            entity_id,
            event_time: parse_timestamp(&event_time)?,
            outcome,
        });
    }
    Ok(events)
}

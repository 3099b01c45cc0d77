//! Event materialization: monotonic OR over timestamped outcomes.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};

use stateline_core::models::{EventFact, SparseRow};

/// One row per (entity, as-of date) for every entity in the events
/// source — the full cross product. `active` is true iff any
/// true-outcome event exists at or before the date; a later false
/// outcome never clears it (monotonic accumulation).
pub fn materialize(events: &[EventFact], as_of_dates: &[DateTime<Utc>]) -> Vec<SparseRow> {
    let entities: BTreeSet<i64> = events.iter().map(|e| e.entity_id).collect();

    let mut rows = Vec::with_capacity(entities.len() * as_of_dates.len());
    for &entity_id in &entities {
        for &as_of_date in as_of_dates {
            let active = events
                .iter()
                .any(|e| e.entity_id == entity_id && e.outcome && e.event_time <= as_of_date);
            rows.push(SparseRow {
                entity_id,
                as_of_date,
                flags: vec![active],
            });
        }
    }
    rows
}

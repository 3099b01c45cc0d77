//! One output row of the sparse state table.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A materialized (entity, as-of date) row. `flags` is positionally
/// aligned with the label set the row was built against (a single
/// `active` flag in event mode).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SparseRow {
    pub entity_id: i64,
    pub as_of_date: DateTime<Utc>,
    pub flags: Vec<bool>,
}

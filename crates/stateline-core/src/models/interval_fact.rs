//! Dense interval fact: an entity held a labeled state over a time range.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One row of the dense interval source: `entity_id` held `state` for
/// `[start_time, end_time)`. Multiple facts per entity, with distinct
/// or overlapping labels and ranges, are permitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntervalFact {
    pub entity_id: i64,
    pub state: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

impl IntervalFact {
    /// Containment check: start-inclusive, end-exclusive.
    pub fn contains(&self, as_of: DateTime<Utc>) -> bool {
        self.start_time <= as_of && as_of < self.end_time
    }
}

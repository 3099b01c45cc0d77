//! Event fact: a timestamped boolean flip for an entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One row of the event source: at `event_time`, the entity's monitored
/// boolean flipped to `outcome`. Events may arrive in any temporal
/// order; ordering never matters because the sparse table accumulates
/// them with a monotonic OR.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventFact {
    pub entity_id: i64,
    pub event_time: DateTime<Utc>,
    pub outcome: bool,
}

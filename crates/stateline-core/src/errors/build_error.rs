/// Invalid-input conditions raised while materializing a sparse state
/// table. All of these abort the build before any table is created.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("source table '{table}' is empty: cannot determine the output schema")]
    EmptySource { table: String },

    #[error("no as-of dates supplied")]
    NoAsOfDates,

    #[error("malformed interval for entity {entity_id} ('{state}'): start {start} >= end {end}")]
    MalformedInterval {
        entity_id: i64,
        state: String,
        start: String,
        end: String,
    },

    #[error("invalid identifier: '{name}'")]
    InvalidIdentifier { name: String },
}

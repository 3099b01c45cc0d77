//! SQLite PRAGMA configuration.
//!
//! Called on every connection immediately after opening.

use rusqlite::Connection;

use stateline_core::errors::StateResult;

use crate::to_storage_err;

/// Configure a read-write connection.
///
/// WAL keeps readers live during a rebuild; busy_timeout handles lock
/// contention; NORMAL synchronous is the WAL durability trade-off.
pub fn configure_connection(conn: &Connection) -> StateResult<()> {
    conn.execute_batch(
        "
        PRAGMA journal_mode = WAL;
        PRAGMA synchronous = NORMAL;
        PRAGMA foreign_keys = ON;
        PRAGMA busy_timeout = 5000;
        PRAGMA cache_size = -8000;
        PRAGMA temp_store = MEMORY;
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Configure a reader connection: same PRAGMAs plus `query_only = ON`
/// so no writes can ever go through a reader.
pub fn configure_readonly_connection(conn: &Connection) -> StateResult<()> {
    conn.execute_batch(
        "
        PRAGMA journal_mode = WAL;
        PRAGMA synchronous = NORMAL;
        PRAGMA foreign_keys = ON;
        PRAGMA busy_timeout = 5000;
        PRAGMA cache_size = -8000;
        PRAGMA temp_store = MEMORY;
        PRAGMA query_only = ON;
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

//! ConnectionPool — writer + read pool with round-robin selection.
//!
//! The only place in the workspace that holds `Mutex<Connection>`.
//! Everything else reaches SQLite through `with_writer` / `with_reader`
//! closures, so one build owns the shared storage handle for its whole
//! read-compute-write sequence.

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use rusqlite::Connection;

use stateline_core::errors::{StateResult, StorageError};

use crate::pragmas;
use crate::to_storage_err;

/// Default number of reader connections.
const DEFAULT_READ_POOL_SIZE: usize = 2;

/// Connection pool: 1 writer + N read-only readers, WAL mode on all
/// connections, round-robin reader selection via atomic counter.
pub struct ConnectionPool {
    writer: Mutex<Connection>,
    readers: Vec<Mutex<Connection>>,
    read_index: AtomicUsize,
}

impl ConnectionPool {
    /// Open a file-backed pool with `read_pool_size` readers
    /// (0 falls back to the default).
    pub fn open(path: &Path, read_pool_size: usize) -> StateResult<Self> {
        let pool_size = if read_pool_size == 0 {
            DEFAULT_READ_POOL_SIZE
        } else {
            read_pool_size
        };

        let writer = Connection::open(path).map_err(|e| to_storage_err(e.to_string()))?;
        pragmas::configure_connection(&writer)?;

        let mut readers = Vec::with_capacity(pool_size);
        for _ in 0..pool_size {
            let reader = Connection::open_with_flags(
                path,
                rusqlite::OpenFlags::SQLITE_OPEN_READ_ONLY
                    | rusqlite::OpenFlags::SQLITE_OPEN_NO_MUTEX,
            )
            .map_err(|e| to_storage_err(e.to_string()))?;
            pragmas::configure_readonly_connection(&reader)?;
            readers.push(Mutex::new(reader));
        }

        Ok(Self {
            writer: Mutex::new(writer),
            readers,
            read_index: AtomicUsize::new(0),
        })
    }

    /// Open an in-memory pool (for testing).
    ///
    /// Separate in-memory connections cannot see each other's data, so
    /// no readers are created; `with_reader` falls back to the writer.
    pub fn open_in_memory() -> StateResult<Self> {
        let writer = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        pragmas::configure_connection(&writer)?;

        Ok(Self {
            writer: Mutex::new(writer),
            readers: Vec::new(),
            read_index: AtomicUsize::new(0),
        })
    }

    /// Execute a closure with the writer connection.
    pub fn with_writer<F, T>(&self, f: F) -> StateResult<T>
    where
        F: FnOnce(&Connection) -> StateResult<T>,
    {
        let conn = self.writer.lock().map_err(|e| {
            StorageError::LockPoisoned {
                message: e.to_string(),
            }
        })?;
        f(&conn)
    }

    /// Execute a closure with a reader connection (round-robin).
    /// Falls back to the writer if no readers exist (in-memory mode).
    pub fn with_reader<F, T>(&self, f: F) -> StateResult<T>
    where
        F: FnOnce(&Connection) -> StateResult<T>,
    {
        if self.readers.is_empty() {
            return self.with_writer(f);
        }

        let index = self.read_index.fetch_add(1, Ordering::Relaxed) % self.readers.len();
        let conn = self.readers[index].lock().map_err(|e| {
            StorageError::LockPoisoned {
                message: e.to_string(),
            }
        })?;
        f(&conn)
    }

    /// Check WAL mode on the writer connection.
    pub fn is_wal_mode(&self) -> bool {
        self.with_writer(|conn| {
            let mode: String = conn
                .query_row("PRAGMA journal_mode", [], |row| row.get(0))
                .unwrap_or_default();
            Ok(mode.to_lowercase() == "wal")
        })
        .unwrap_or(false)
    }
}

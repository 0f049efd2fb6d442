//! Connection pooling for the SQLite store.
//!
//! Each pooled connection is configured once when it is opened: foreign keys
//! are enforced and lock waits are bounded by `busy_timeout`. A connection is
//! checked out for exactly one unit of work and returned when it is dropped.

use super::error::StoreError;
use crate::libs::config::DatabaseConfig;
use r2d2::{ManageConnection, Pool};
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Pool of SQLite connections to one database file.
pub type DbPool = Pool<SqliteManager>;

/// Opens and validates connections for [`DbPool`].
#[derive(Debug, Clone)]
pub struct SqliteManager {
    path: PathBuf,
    busy_timeout: Duration,
}

impl SqliteManager {
    pub fn new(path: impl Into<PathBuf>, busy_timeout: Duration) -> Self {
        Self {
            path: path.into(),
            busy_timeout,
        }
    }
}

impl ManageConnection for SqliteManager {
    type Connection = Connection;
    type Error = rusqlite::Error;

    fn connect(&self) -> Result<Connection, rusqlite::Error> {
        let conn = Connection::open(&self.path)?;
        conn.busy_timeout(self.busy_timeout)?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        Ok(conn)
    }

    fn is_valid(&self, conn: &mut Connection) -> Result<(), rusqlite::Error> {
        conn.query_row("SELECT 1", [], |_| Ok(()))
    }

    fn has_broken(&self, _conn: &mut Connection) -> bool {
        false
    }
}

/// Builds a pool for the database file at `path`.
///
/// # Errors
/// Returns [`StoreError::Unavailable`] if the initial connections cannot be
/// opened within `connection_timeout_ms`.
pub fn create_pool(path: &Path, config: &DatabaseConfig) -> Result<DbPool, StoreError> {
    let manager = SqliteManager::new(path, Duration::from_millis(config.busy_timeout_ms));
    Pool::builder()
        .max_size(config.pool_size.max(1))
        .connection_timeout(Duration::from_millis(config.connection_timeout_ms.max(1)))
        .build(manager)
        .map_err(StoreError::from)
}

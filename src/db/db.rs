use super::error::StoreError;
use super::migrations::init_with_migrations;
use super::pool::{create_pool, DbPool, SqliteManager};
use crate::libs::config::{Config, DatabaseConfig};
use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use r2d2::PooledConnection;
use rusqlite::{Transaction, TransactionBehavior};
use std::env;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const DB_FILE_NAME: &str = "rollcall.db";

/// Environment variable that overrides the configured database path.
pub const DB_PATH_ENV: &str = "ROLLCALL_DB";

/// Handle to the record store.
///
/// Cloning is cheap; clones share one connection pool. Every operation goes
/// through [`Db::unit_of_work`] or [`Db::read_unit`], which check out a
/// connection for the duration of a single transaction.
#[derive(Clone)]
pub struct Db {
    pool: DbPool,
}

impl Db {
    /// Opens the database described by the saved configuration.
    pub fn new() -> Result<Db> {
        let config = Config::read()?;
        let path = Self::resolve_path(&config.database)?;
        Self::open(&path, &config.database)
    }

    /// Opens the database file at `path` and applies pending migrations.
    pub fn open(path: &Path, config: &DatabaseConfig) -> Result<Db> {
        let db = Self::open_without_migrations(path, config)?;
        let mut conn = db.connection()?;
        init_with_migrations(&mut conn)?;
        Ok(db)
    }

    pub fn open_without_migrations(path: &Path, config: &DatabaseConfig) -> Result<Db> {
        let pool = create_pool(path, config)?;
        debug!(path = %path.display(), pool_size = config.pool_size, "database pool ready");
        Ok(Db { pool })
    }

    /// Resolves the database location: `ROLLCALL_DB`, then the configured
    /// path, then `rollcall.db` in the application data directory.
    pub fn resolve_path(config: &DatabaseConfig) -> Result<PathBuf> {
        if let Ok(path) = env::var(DB_PATH_ENV) {
            if !path.trim().is_empty() {
                return Ok(PathBuf::from(path));
            }
        }
        match &config.path {
            Some(path) => Ok(path.clone()),
            None => DataStorage::new().get_path(DB_FILE_NAME),
        }
    }

    /// Checks out a raw pooled connection.
    pub fn connection(&self) -> Result<PooledConnection<SqliteManager>, StoreError> {
        Ok(self.pool.get()?)
    }

    /// Runs `work` inside a write transaction.
    ///
    /// The transaction starts with `BEGIN IMMEDIATE`, so the write lock is
    /// held from the first statement. It commits when `work` returns `Ok`
    /// and rolls back otherwise; the connection goes back to the pool on
    /// every path.
    pub fn unit_of_work<T, F>(&self, work: F) -> Result<T, StoreError>
    where
        F: FnOnce(&Transaction<'_>) -> Result<T, StoreError>,
    {
        self.run(TransactionBehavior::Immediate, work)
    }

    /// Runs `work` inside a deferred, read-only-by-convention transaction.
    pub fn read_unit<T, F>(&self, work: F) -> Result<T, StoreError>
    where
        F: FnOnce(&Transaction<'_>) -> Result<T, StoreError>,
    {
        self.run(TransactionBehavior::Deferred, work)
    }

    fn run<T, F>(&self, behavior: TransactionBehavior, work: F) -> Result<T, StoreError>
    where
        F: FnOnce(&Transaction<'_>) -> Result<T, StoreError>,
    {
        let mut conn = self.connection()?;
        let tx = conn.transaction_with_behavior(behavior)?;
        debug!("unit of work started");

        match work(&tx) {
            Ok(value) => {
                tx.commit()?;
                debug!("unit of work committed");
                Ok(value)
            }
            Err(err) => {
                if let Err(rollback_err) = tx.rollback() {
                    warn!(error = %rollback_err, "rollback failed");
                }
                warn!(error = %err, "unit of work rolled back");
                Err(err)
            }
        }
    }
}

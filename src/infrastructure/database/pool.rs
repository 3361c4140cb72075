use crate::config::constants::MIGRATIONS;
use crate::domain::errors::repository_error::RepositoryError;
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool, PooledConnection};
use diesel_migrations::MigrationHarness;
use std::sync::Arc;
use tracing::info;

type DieselPool = Pool<ConnectionManager<SqliteConnection>>;
pub type DieselConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

/// Per-connection setup. SQLite PRAGMAs are connection scoped, so every pooled
/// connection needs them, not only the first one.
#[derive(Debug)]
struct SqliteConnectionCustomizer;

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for SqliteConnectionCustomizer {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        conn.batch_execute(
            "PRAGMA foreign_keys = ON; PRAGMA busy_timeout = 5000; PRAGMA synchronous = NORMAL;",
        )
        .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Core database pool and infrastructure for `SQLite` repositories.
///
/// Handles connection pooling, foreign key constraints and migrations.
pub struct SqliteRepositoryPool {
    pool: DieselPool,
}

impl SqliteRepositoryPool {
    /// Opens the database at `database_url` and applies pending migrations.
    ///
    /// # Errors
    ///
    /// Returns a [`RepositoryError`] if:
    /// - A [`ConnectionPool`](RepositoryError::ConnectionPool) error occurs while building the pool.
    /// - A [`Database`](RepositoryError::Database) error occurs while switching to WAL.
    /// - A [`Migration`](RepositoryError::Migration) error occurs while applying migrations.
    pub fn new(database_url: &str) -> Result<Arc<Self>, RepositoryError> {
        let pool = Self::create_pool(database_url)?;
        {
            let mut conn = pool.get().map_err(RepositoryError::ConnectionPool)?;
            Self::enable_wal(&mut conn)?;
            Self::run_migrations(&mut conn)?;
        }
        info!(database_url, "database ready");
        Ok(Arc::new(Self { pool }))
    }

    fn create_pool(database_url: &str) -> Result<DieselPool, RepositoryError> {
        let manager = ConnectionManager::<SqliteConnection>::new(database_url);
        Pool::builder()
            .connection_customizer(Box::new(SqliteConnectionCustomizer))
            .build(manager)
            .map_err(RepositoryError::ConnectionPool)
    }

    // Journal mode is persisted in the database file, once is enough.
    fn enable_wal(conn: &mut SqliteConnection) -> Result<(), RepositoryError> {
        conn.batch_execute("PRAGMA journal_mode = WAL;")
            .map_err(RepositoryError::Database)
    }

    fn run_migrations(conn: &mut SqliteConnection) -> Result<(), RepositoryError> {
        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|err| RepositoryError::Migration(err.to_string()))?;
        if !applied.is_empty() {
            info!(count = applied.len(), "applied pending migrations");
        }
        Ok(())
    }

    /// Gets a connection from the pool.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::ConnectionPool`] if no connection can be acquired.
    pub fn get_connection(&self) -> Result<DieselConnection, RepositoryError> {
        self.pool.get().map_err(RepositoryError::ConnectionPool)
    }

    /// Executes a database operation with automatic connection management.
    pub(crate) fn execute_db_operation<F, R>(&self, operation: F) -> Result<R, RepositoryError>
    where
        F: FnOnce(&mut DieselConnection) -> Result<R, RepositoryError>,
    {
        let mut conn = self.get_connection()?;
        operation(&mut conn)
    }
}

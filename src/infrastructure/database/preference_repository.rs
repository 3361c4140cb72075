use crate::domain::errors::repository_error::RepositoryError;
use crate::domain::ports::secondary::preference_store::PreferenceStore;
use crate::infrastructure::database::pool::SqliteRepositoryPool;
use crate::infrastructure::database::schema::settings;
use diesel::prelude::*;
use diesel::{OptionalExtension, RunQueryDsl};
use std::sync::Arc;

/// [`PreferenceStore`] backed by the `settings` table.
pub struct SqlitePreferenceRepository {
    pool: Arc<SqliteRepositoryPool>,
}

impl SqlitePreferenceRepository {
    #[must_use]
    /// Creates a new [`SqlitePreferenceRepository`] with the given pool.
    pub const fn new(pool: Arc<SqliteRepositoryPool>) -> Self {
        Self { pool }
    }
}

impl PreferenceStore for SqlitePreferenceRepository {
    /// Retrieves the value stored under `key`, `None` when it was never set.
    ///
    /// # Errors
    ///
    /// Returns a [`RepositoryError`] if:
    /// - A [`ConnectionPool`](RepositoryError::ConnectionPool) error occurs while acquiring a connection.
    /// - A [`Database`](RepositoryError::Database) error occurs during query execution.
    fn get(&self, key: &str) -> Result<Option<String>, RepositoryError> {
        self.pool.execute_db_operation(|conn| {
            let value = settings::table
                .filter(settings::key.eq(key))
                .select(settings::value)
                .first::<String>(conn)
                .optional()?;
            Ok(value)
        })
    }

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`RepositoryError`] if:
    /// - A [`ConnectionPool`](RepositoryError::ConnectionPool) error occurs while acquiring a connection.
    /// - A [`Database`](RepositoryError::Database) error occurs during the update operation.
    fn set(&self, key: &str, value: &str) -> Result<(), RepositoryError> {
        self.pool.execute_db_operation(|conn| {
            diesel::replace_into(settings::table)
                .values((settings::key.eq(key), settings::value.eq(value)))
                .execute(conn)?;
            Ok(())
        })
    }
}

use crate::domain::errors::repository_error::RepositoryError;

/// Persistent key-value settings surviving across sessions.
pub trait PreferenceStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, RepositoryError>;
    fn set(&self, key: &str, value: &str) -> Result<(), RepositoryError>;
}

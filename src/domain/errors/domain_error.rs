use crate::domain::errors::catalog_error::CatalogError;
use crate::domain::errors::repository_error::RepositoryError;

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
    #[error("Translation catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

use crate::domain::entities::catalog::TranslationCatalog;
use crate::domain::errors::catalog_error::CatalogError;

pub trait TranslationLoader: Send + Sync {
    fn load_catalog(&self) -> Result<TranslationCatalog, CatalogError>;
}

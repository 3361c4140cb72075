use crate::config::settings::AppConfig;
use crate::domain::errors::domain_error::DomainError;
use crate::domain::ports::primary::translation_use_case::TranslationUseCase;
use crate::domain::ports::secondary::preference_store::PreferenceStore;
use crate::domain::ports::secondary::translation_loader::TranslationLoader;
use crate::domain::services::translation_service::TranslationService;
use crate::infrastructure::database::pool::SqliteRepositoryPool;
use crate::infrastructure::database::preference_repository::SqlitePreferenceRepository;
use crate::infrastructure::i18n::json_translation_loader::JsonTranslationLoader;
use std::sync::Arc;
use tracing::info;

pub struct AtelierAppService {
    pub pool: Arc<SqliteRepositoryPool>,
    pub translation_use_case: Arc<dyn TranslationUseCase>,
}

impl AtelierAppService {
    /// Opens the database, loads the translation catalog and restores the saved language.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] if:
    /// - A [`Repository`](DomainError::Repository) error occurs while opening or migrating the database,
    ///   or while reading the saved language.
    /// - A [`Catalog`](DomainError::Catalog) error occurs while loading translations.
    pub fn create(config: &AppConfig) -> Result<Self, DomainError> {
        let pool = SqliteRepositoryPool::new(&config.database_url)?;
        let preference_store: Arc<dyn PreferenceStore> =
            Arc::new(SqlitePreferenceRepository::new(pool.clone()));

        let translation_loader = match &config.translations_dir {
            Some(dir) => JsonTranslationLoader::from_dir(dir),
            None => JsonTranslationLoader::bundled(),
        };
        let catalog = Arc::new(translation_loader.load_catalog()?);

        let translation_service = TranslationService::new(catalog, Some(preference_store))?;
        info!(
            language = translation_service.current_language().code(),
            "application services ready"
        );

        Ok(Self {
            pool,
            translation_use_case: Arc::new(translation_service),
        })
    }
}

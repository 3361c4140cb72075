use crate::config::constants::LANGUAGE_SETTING_KEY;
use crate::domain::entities::catalog::TranslationCatalog;
use crate::domain::entities::language::{AvailableLanguage, Language};
use crate::domain::entities::translation::Translation;
use crate::domain::errors::domain_error::DomainError;
use crate::domain::ports::primary::translation_use_case::TranslationUseCase;
use crate::domain::ports::secondary::preference_store::PreferenceStore;
use crate::domain::services::resolver::resolve;
use crate::utils::translation::interpolate;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::debug;

pub struct TranslationService {
    catalog: Arc<TranslationCatalog>,
    preference_store: Option<Arc<dyn PreferenceStore>>,
    current_language: RwLock<Language>,
}

impl TranslationService {
    /// Creates the service, starting in the saved language when the store holds a supported one.
    ///
    /// Without a store, or with an unknown saved code, the service starts in
    /// [`Language::FALLBACK`].
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] if:
    /// - A [`Repository`](DomainError::Repository) error occurs while reading the saved preference.
    pub fn new(
        catalog: Arc<TranslationCatalog>,
        preference_store: Option<Arc<dyn PreferenceStore>>,
    ) -> Result<Self, DomainError> {
        let saved = match &preference_store {
            Some(store) => store.get(LANGUAGE_SETTING_KEY)?,
            None => None,
        };
        let initial = saved
            .as_deref()
            .and_then(Language::from_code)
            .unwrap_or(Language::FALLBACK);
        debug!(
            saved = saved.as_deref(),
            language = initial.code(),
            "initial language selected"
        );

        Ok(Self {
            catalog,
            preference_store,
            current_language: RwLock::new(initial),
        })
    }

    fn language(&self) -> Language {
        *self
            .current_language
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl TranslationUseCase for TranslationService {
    fn translate(&self, key: &str) -> String {
        self.lookup(key).to_display_string()
    }

    fn translate_with(&self, key: &str, params: &[(&str, &str)]) -> String {
        interpolate(&self.translate(key), params)
    }

    fn lookup<'a>(&'a self, key: &'a str) -> Translation<'a> {
        resolve(&self.catalog, self.language(), key)
    }

    fn current_language(&self) -> Language {
        self.language()
    }

    fn set_language(&self, code: &str) -> Result<(), DomainError> {
        let Some(language) = Language::from_code(code) else {
            debug!(code, "ignoring unsupported language");
            return Ok(());
        };

        {
            let mut current = self
                .current_language
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            debug!(from = current.code(), to = language.code(), "language changed");
            *current = language;
        }

        if let Some(store) = &self.preference_store {
            store.set(LANGUAGE_SETTING_KEY, language.code())?;
        }
        Ok(())
    }

    fn available_languages(&self) -> &'static [AvailableLanguage] {
        Language::available()
    }
}

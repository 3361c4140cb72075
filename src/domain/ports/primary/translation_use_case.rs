use crate::domain::entities::language::{AvailableLanguage, Language};
use crate::domain::entities::translation::Translation;
use crate::domain::errors::domain_error::DomainError;

pub trait TranslationUseCase: Send + Sync {
    /// Resolves `key` against the current language, then the fallback language.
    ///
    /// Returns the key itself when neither language knows it. Never fails.
    fn translate(&self, key: &str) -> String;

    /// Same as [`translate`](Self::translate), then replaces every `{name}` placeholder
    /// with its value from `params`.
    fn translate_with(&self, key: &str, params: &[(&str, &str)]) -> String;

    /// Typed resolution result, distinguishing text, nested tables and missing keys.
    fn lookup<'a>(&'a self, key: &'a str) -> Translation<'a>;

    /// Language currently used by [`translate`](Self::translate).
    fn current_language(&self) -> Language;

    /// Switches to the language identified by `code` and persists the choice.
    ///
    /// Unsupported codes are ignored: nothing changes and nothing is written.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] if:
    /// - A [`Repository`](DomainError::Repository) error occurs while saving the preference.
    fn set_language(&self, code: &str) -> Result<(), DomainError>;

    /// Supported languages in picker order.
    fn available_languages(&self) -> &'static [AvailableLanguage];
}

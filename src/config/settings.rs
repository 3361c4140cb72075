use crate::config::constants::{DATABASE_URL_ENV, DEFAULT_DATABASE_URL, TRANSLATIONS_DIR_ENV};
use std::env;
use std::path::PathBuf;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub database_url: String,
    /// Directory holding `{code}.json` catalogs. `None` uses the bundled catalogs.
    pub translations_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            translations_dir: None,
        }
    }
}

impl AppConfig {
    /// Reads the configuration from `ATELIER_*` environment variables, using defaults for
    /// anything unset or empty.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        Self {
            database_url: non_empty(DATABASE_URL_ENV)
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            translations_dir: non_empty(TRANSLATIONS_DIR_ENV).map(PathBuf::from),
        }
    }
}

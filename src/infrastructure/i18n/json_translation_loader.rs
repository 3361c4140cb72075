use crate::domain::entities::catalog::TranslationCatalog;
use crate::domain::entities::language::Language;
use crate::domain::entities::translation::TranslationNode;
use crate::domain::errors::catalog_error::CatalogError;
use crate::domain::ports::secondary::translation_loader::TranslationLoader;
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::warn;

enum Source {
    Bundled,
    Directory(PathBuf),
}

/// Loads `{code}.json` translation trees, either compiled in or from a directory.
pub struct JsonTranslationLoader {
    source: Source,
}

impl JsonTranslationLoader {
    /// Catalogs shipped inside the binary.
    #[must_use]
    pub const fn bundled() -> Self {
        Self {
            source: Source::Bundled,
        }
    }

    /// Catalogs read from `dir` at load time. Only the fallback language file is mandatory.
    #[must_use]
    pub fn from_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            source: Source::Directory(dir.into()),
        }
    }

    const fn bundled_json(language: Language) -> &'static str {
        match language {
            Language::English => include_str!("../../../translations/en.json"),
            Language::Romanian => include_str!("../../../translations/ro.json"),
            Language::Russian => include_str!("../../../translations/ru.json"),
        }
    }

    fn read_file(dir: &Path, language: Language) -> Result<Option<String>, CatalogError> {
        let path = dir.join(format!("{}.json", language.code()));
        match fs::read_to_string(&path) {
            Ok(data) => Ok(Some(data)),
            Err(source) if source.kind() == ErrorKind::NotFound && language != Language::FALLBACK => {
                warn!(path = %path.display(), "translation file missing, using fallback language");
                Ok(None)
            }
            Err(source) => Err(CatalogError::Io { path, source }),
        }
    }

    fn parse(language: Language, data: &str) -> Result<TranslationNode, CatalogError> {
        let value: Value = serde_json::from_str(data).map_err(|source| CatalogError::Json {
            language: language.code(),
            source,
        })?;
        TranslationNode::try_from(value)
    }
}

impl TranslationLoader for JsonTranslationLoader {
    fn load_catalog(&self) -> Result<TranslationCatalog, CatalogError> {
        let mut trees = HashMap::new();
        for language in Language::ALL {
            let data = match &self.source {
                Source::Bundled => Some(Self::bundled_json(language).to_string()),
                Source::Directory(dir) => Self::read_file(dir, language)?,
            };
            if let Some(data) = data {
                trees.insert(language, Self::parse(language, &data)?);
            }
        }
        TranslationCatalog::new(trees)
    }
}

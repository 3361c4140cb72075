use crate::domain::entities::language::Language;
use crate::domain::entities::translation::TranslationNode;
use crate::domain::errors::catalog_error::CatalogError;
use std::collections::HashMap;

/// Immutable set of translation trees, one per language.
///
/// The fallback language tree is always present; other languages may be partial or absent.
#[derive(Clone, Debug)]
pub struct TranslationCatalog {
    trees: HashMap<Language, TranslationNode>,
}

impl TranslationCatalog {
    /// Builds a catalog from per-language trees.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::MissingFallback`] if `trees` has no entry for [`Language::FALLBACK`].
    pub fn new(trees: HashMap<Language, TranslationNode>) -> Result<Self, CatalogError> {
        if !trees.contains_key(&Language::FALLBACK) {
            return Err(CatalogError::MissingFallback(Language::FALLBACK.code()));
        }
        Ok(Self { trees })
    }

    /// Tree for `language`, `None` when the catalog ships nothing for it.
    #[must_use]
    pub fn tree(&self, language: Language) -> Option<&TranslationNode> {
        self.trees.get(&language)
    }

    #[must_use]
    pub fn fallback_tree(&self) -> &TranslationNode {
        // Presence is checked in `new`.
        self.trees
            .get(&Language::FALLBACK)
            .unwrap_or(&EMPTY_TREE)
    }

    #[must_use]
    pub fn has_language(&self, language: Language) -> bool {
        self.trees.contains_key(&language)
    }
}

static EMPTY_TREE: TranslationNode = TranslationNode::Branch(std::collections::BTreeMap::new());

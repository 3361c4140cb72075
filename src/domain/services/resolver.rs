use crate::domain::entities::catalog::TranslationCatalog;
use crate::domain::entities::language::Language;
use crate::domain::entities::translation::Translation;
use tracing::{debug, trace};

/// Separator between the segments of a translation key.
pub const KEY_SEPARATOR: char = '.';

/// Resolves a dotted `key` in `language`, falling back to [`Language::FALLBACK`].
///
/// Every segment must name a nested table of the previous one; stopping on a display
/// string or on an unknown segment abandons that language. When the fallback walk fails
/// too, the key itself comes back as [`Translation::Missing`].
pub fn resolve<'a>(
    catalog: &'a TranslationCatalog,
    language: Language,
    key: &'a str,
) -> Translation<'a> {
    let segments = || key.split(KEY_SEPARATOR);

    if let Some(node) = catalog
        .tree(language)
        .and_then(|tree| tree.descend(segments()))
    {
        trace!(key, language = language.code(), "translation resolved");
        return Translation::from_node(node);
    }

    match catalog.fallback_tree().descend(segments()) {
        Some(node) => {
            debug!(
                key,
                language = language.code(),
                fallback = Language::FALLBACK.code(),
                "translation missing, using fallback language"
            );
            Translation::from_node(node)
        }
        None => {
            debug!(key, language = language.code(), "translation missing");
            Translation::Missing(key)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::translation::TranslationNode;
    use serde_json::json;
    use std::collections::HashMap;

    fn catalog() -> TranslationCatalog {
        let mut trees = HashMap::new();
        trees.insert(
            Language::English,
            TranslationNode::try_from(json!({
                "greeting": { "hello": "Hello", "bye": "Goodbye" },
                "menu": { "file": { "open": "Open" } },
                "flat": "Flat"
            }))
            .unwrap(),
        );
        trees.insert(
            Language::Romanian,
            TranslationNode::try_from(json!({
                "greeting": { "bye": "La revedere" },
                "menu": "Meniu"
            }))
            .unwrap(),
        );
        TranslationCatalog::new(trees).unwrap()
    }

    #[test]
    fn resolves_in_active_language() {
        let catalog = catalog();
        assert_eq!(
            resolve(&catalog, Language::Romanian, "greeting.bye"),
            Translation::Text("La revedere")
        );
    }

    #[test]
    fn falls_back_when_segment_is_missing() {
        let catalog = catalog();
        assert_eq!(
            resolve(&catalog, Language::Romanian, "greeting.hello"),
            Translation::Text("Hello")
        );
    }

    #[test]
    fn falls_back_when_active_language_stops_on_a_string() {
        let catalog = catalog();
        assert_eq!(
            resolve(&catalog, Language::Romanian, "menu.file.open"),
            Translation::Text("Open")
        );
    }

    #[test]
    fn falls_back_when_language_has_no_tree() {
        let catalog = catalog();
        assert_eq!(
            resolve(&catalog, Language::Russian, "greeting.hello"),
            Translation::Text("Hello")
        );
    }

    #[test]
    fn returns_key_when_no_language_knows_it() {
        let catalog = catalog();
        assert_eq!(
            resolve(&catalog, Language::Romanian, "foo.bar"),
            Translation::Missing("foo.bar")
        );
        assert_eq!(
            resolve(&catalog, Language::English, "greeting.hello.extra"),
            Translation::Missing("greeting.hello.extra")
        );
    }

    #[test]
    fn empty_segments_are_looked_up_literally() {
        let catalog = catalog();
        assert_eq!(
            resolve(&catalog, Language::English, "greeting..hello"),
            Translation::Missing("greeting..hello")
        );
        assert_eq!(resolve(&catalog, Language::English, ""), Translation::Missing(""));
    }

    #[test]
    fn nested_table_is_returned_as_is() {
        let catalog = catalog();
        let resolved = resolve(&catalog, Language::English, "menu.file");
        match resolved {
            Translation::Subtree(node) => {
                assert_eq!(node.child("open"), Some(&TranslationNode::Leaf("Open".into())));
            }
            other => panic!("expected a subtree, got {other:?}"),
        }
    }

    #[test]
    fn active_language_subtree_wins_over_fallback_string() {
        let catalog = catalog();
        assert!(matches!(
            resolve(&catalog, Language::Romanian, "greeting"),
            Translation::Subtree(_)
        ));
    }
}

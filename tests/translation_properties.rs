use atelier::config::constants::LANGUAGE_SETTING_KEY;
use atelier::domain::entities::catalog::TranslationCatalog;
use atelier::domain::entities::language::Language;
use atelier::domain::entities::translation::TranslationNode;
use atelier::domain::ports::primary::translation_use_case::TranslationUseCase;
use atelier::domain::ports::secondary::preference_store::PreferenceStore;
use atelier::domain::services::translation_service::TranslationService;
use atelier::infrastructure::memory::memory_preference_store::InMemoryPreferenceStore;
use proptest::prelude::*;
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

type Entries = BTreeMap<(String, String), String>;

fn tree_from(entries: &Entries) -> TranslationNode {
    let mut root = Map::new();
    for ((section, name), text) in entries {
        let section = root
            .entry(section.clone())
            .or_insert_with(|| Value::Object(Map::new()));
        if let Value::Object(children) = section {
            children.insert(name.clone(), Value::String(text.clone()));
        }
    }
    TranslationNode::try_from(Value::Object(root)).expect("generated tree is valid")
}

fn service(
    english: &Entries,
    romanian: &Entries,
    store: &Arc<InMemoryPreferenceStore>,
) -> TranslationService {
    let mut trees = HashMap::new();
    trees.insert(Language::English, tree_from(english));
    trees.insert(Language::Romanian, tree_from(romanian));
    let catalog = Arc::new(TranslationCatalog::new(trees).expect("fallback tree present"));
    let store: Arc<dyn PreferenceStore> = store.clone();
    TranslationService::new(catalog, Some(store)).expect("in-memory store never fails")
}

fn entries() -> impl Strategy<Value = Entries> {
    prop::collection::btree_map(("[a-d]", "[a-d]"), "[A-Za-z ]{1,12}", 1..12)
}

proptest! {
    #[test]
    fn fallback_language_returns_stored_leaf(english in entries()) {
        let store = Arc::new(InMemoryPreferenceStore::default());
        let service = service(&english, &Entries::new(), &store);

        for ((section, name), text) in &english {
            prop_assert_eq!(service.translate(&format!("{section}.{name}")), text.clone());
        }
    }

    #[test]
    fn keys_missing_from_active_language_use_fallback(
        english in entries(),
        keep in prop::collection::vec(any::<bool>(), 12),
    ) {
        let romanian: Entries = english
            .iter()
            .zip(keep.iter().cycle())
            .filter(|(_, keep)| **keep)
            .map(|((path, text), _)| (path.clone(), format!("ro:{text}")))
            .collect();
        let store = Arc::new(InMemoryPreferenceStore::with_entry(LANGUAGE_SETTING_KEY, "ro"));
        let service = service(&english, &romanian, &store);

        for (path, text) in &english {
            let key = format!("{}.{}", path.0, path.1);
            let expected = romanian.get(path).unwrap_or(text);
            prop_assert_eq!(service.translate(&key), expected.clone());
        }
    }

    #[test]
    fn unknown_keys_come_back_unchanged(
        english in entries(),
        key in "[e-z]{1,6}(\\.[a-z]{1,6}){0,3}",
        active in prop::sample::select(vec!["en", "ro", "ru"]),
    ) {
        let store = Arc::new(InMemoryPreferenceStore::with_entry(LANGUAGE_SETTING_KEY, active));
        let service = service(&english, &english, &store);

        prop_assert_eq!(service.translate(&key), key);
    }

    #[test]
    fn only_supported_codes_change_language(code in "[a-z]{0,3}") {
        let store = Arc::new(InMemoryPreferenceStore::default());
        let service = service(&Entries::new(), &Entries::new(), &store);

        service.set_language(&code).expect("in-memory store never fails");

        match Language::from_code(&code) {
            Some(language) => {
                prop_assert_eq!(service.current_language(), language);
                prop_assert_eq!(store.value(LANGUAGE_SETTING_KEY), Some(code.clone()));
            }
            None => {
                prop_assert_eq!(service.current_language(), Language::English);
                prop_assert_eq!(store.value(LANGUAGE_SETTING_KEY), None);
                prop_assert_eq!(store.write_count(), 0);
            }
        }
    }

    #[test]
    fn repeating_a_language_change_is_idempotent(
        code in prop::sample::select(vec!["en", "ro", "ru"]),
    ) {
        let once = Arc::new(InMemoryPreferenceStore::default());
        let twice = Arc::new(InMemoryPreferenceStore::default());
        let service_once = service(&Entries::new(), &Entries::new(), &once);
        let service_twice = service(&Entries::new(), &Entries::new(), &twice);

        service_once.set_language(code).unwrap();
        service_twice.set_language(code).unwrap();
        service_twice.set_language(code).unwrap();

        prop_assert_eq!(service_once.current_language(), service_twice.current_language());
        prop_assert_eq!(once.value(LANGUAGE_SETTING_KEY), twice.value(LANGUAGE_SETTING_KEY));
    }
}

#[test]
fn saved_preference_wins_over_default_only_when_supported() {
    for (saved, expected) in [
        (Some("ru"), Language::Russian),
        (Some("ro"), Language::Romanian),
        (Some("de"), Language::English),
        (None, Language::English),
    ] {
        let store = Arc::new(match saved {
            Some(code) => InMemoryPreferenceStore::with_entry(LANGUAGE_SETTING_KEY, code),
            None => InMemoryPreferenceStore::default(),
        });
        let service = service(&Entries::new(), &Entries::new(), &store);
        assert_eq!(service.current_language(), expected, "saved {saved:?}");
    }
}

//! Integration tests for loading locale documents and resolving through them

use lingua_common::test_utils::{create_locale_dir, init_test_logging, write_locale, SCENARIO_EN, SCENARIO_ES};
use lingua_i18n::{I18nError, Language, Resolution, ResourceRegistry, Resolver};
use std::fs;

#[test]
fn test_scenario_from_disk() {
    init_test_logging();
    let dir = create_locale_dir(&[("es", SCENARIO_ES), ("en", SCENARIO_EN)]);

    let registry = ResourceRegistry::from_dir(dir.path()).unwrap();
    assert_eq!(registry.languages(), [Language::Spanish, Language::English]);

    let resolver = Resolver::new();
    resolver.initialize(registry, "common", Language::Spanish).unwrap();
    assert_eq!(resolver.lookup("hello"), "hola");

    resolver.set_active_language(Language::English).unwrap();
    assert_eq!(resolver.lookup("hello"), "hello");
    assert_eq!(resolver.lookup("missing"), "missing");
}

#[test]
fn test_from_dir_skips_absent_languages_and_unknown_files() {
    let dir = create_locale_dir(&[("fr", r#"{ "common": { "hello": "bonjour" } }"#)]);
    write_locale(dir.path(), "de", r#"{ "common": { "hello": "hallo" } }"#);
    fs::write(dir.path().join("README.md"), "locales").unwrap();

    let registry = ResourceRegistry::from_dir(dir.path()).unwrap();
    assert_eq!(registry.languages(), [Language::French]);
}

#[test]
fn test_from_dir_without_documents() {
    let dir = tempfile::tempdir().unwrap();
    let err = ResourceRegistry::from_dir(dir.path()).unwrap_err();
    assert!(matches!(err, I18nError::Configuration { .. }));

    let err = ResourceRegistry::from_dir(dir.path().join("does-not-exist")).unwrap_err();
    assert!(matches!(err, I18nError::Configuration { .. }));
}

#[test]
fn test_from_dir_rejects_malformed_documents() {
    let dir = create_locale_dir(&[
        ("es", SCENARIO_ES),
        ("en", r#"{ "common": { "hello": ["hello"] } }"#),
    ]);
    let err = ResourceRegistry::from_dir(dir.path()).unwrap_err();
    assert!(matches!(err, I18nError::ResourceParse { ref language, .. } if language == "en"));
}

#[test]
fn test_from_dir_reports_unreadable_documents() {
    // A directory in place of the document cannot be read as a file
    let dir = create_locale_dir(&[("es", SCENARIO_ES)]);
    fs::create_dir(dir.path().join("en.json")).unwrap();

    let err = ResourceRegistry::from_dir(dir.path()).unwrap_err();
    assert!(matches!(err, I18nError::ResourceLoad { .. }));
}

#[test]
fn test_namespaced_lookup_and_fallback() {
    let dir = create_locale_dir(&[
        ("es", r#"{ "common": { "hello": "hola" }, "room": { "join": "Unirse", "leave": "Salir" } }"#),
        ("pt", r#"{ "common": { "hello": "olá" }, "room": { "join": "Entrar" } }"#),
    ]);
    let resolver = Resolver::new();
    resolver
        .initialize(ResourceRegistry::from_dir(dir.path()).unwrap(), "common", Language::Spanish)
        .unwrap();
    resolver.set_active_language_code("pt-BR").unwrap();

    assert_eq!(resolver.lookup_in("room", "join"), "Entrar");
    assert_eq!(resolver.resolve(Some("room"), "leave"), Resolution::Fallback("Salir"));
    assert_eq!(resolver.lookup_in("room", "hello"), "hello");
    assert_eq!(resolver.lookup_in("auth", "sign_in"), "sign_in");
}

mod properties {
    use super::*;
    use lingua_i18n::ResourceTable;
    use proptest::prelude::*;
    use std::collections::BTreeMap;

    fn table(entries: &BTreeMap<String, String>) -> ResourceTable {
        let mut table = ResourceTable::new();
        table.ensure_namespace("common");
        for (key, value) in entries {
            table.insert("common", key.as_str(), value.as_str());
        }
        table
    }

    fn entries() -> impl Strategy<Value = BTreeMap<String, String>> {
        prop::collection::btree_map("[a-d]{1,2}", "[A-Z]{1,6}", 0..8)
    }

    proptest! {
        #[test]
        fn lookup_follows_active_then_fallback_then_key(
            fallback in entries(),
            active in entries(),
            key in "[a-d]{1,2}",
        ) {
            let resolver = Resolver::new();
            let registry = ResourceRegistry::new()
                .with_table(Language::Spanish, table(&fallback))
                .with_table(Language::English, table(&active));
            resolver.initialize(registry, "common", Language::Spanish).unwrap();
            resolver.set_active_language(Language::English).unwrap();

            let expected = active
                .get(&key)
                .or_else(|| fallback.get(&key))
                .map_or(key.as_str(), String::as_str);
            prop_assert_eq!(resolver.lookup(&key), expected);
        }

        #[test]
        fn stored_values_are_returned_exactly(active in entries()) {
            let resolver = Resolver::new();
            let registry = ResourceRegistry::new()
                .with_table(Language::French, table(&BTreeMap::new()))
                .with_table(Language::English, table(&active));
            resolver.initialize(registry, "common", Language::French).unwrap();
            resolver.set_active_language(Language::English).unwrap();

            for (key, value) in &active {
                prop_assert_eq!(resolver.lookup_in("common", key), value.as_str());
            }
        }

        #[test]
        fn failed_switch_keeps_lookups_unchanged(key in "[a-d]{1,2}", values in entries()) {
            let resolver = Resolver::new();
            let registry = ResourceRegistry::new().with_table(Language::Spanish, table(&values));
            resolver.initialize(registry, "common", Language::Spanish).unwrap();

            let before = resolver.lookup(&key).to_string();
            prop_assert!(resolver.set_active_language(Language::Portuguese).is_err());
            prop_assert_eq!(resolver.active_language(), Some(Language::Spanish));
            prop_assert_eq!(resolver.lookup(&key), before.as_str());
        }
    }
}

//! Namespaced translation tables

use crate::error::{I18nError, I18nResult};
use crate::Language;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Namespace -> key -> translated value for one language.
///
/// Serialized as the on-disk document shape: a JSON object per namespace
/// whose members are string values. Anything nested is rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceTable {
    namespaces: BTreeMap<String, BTreeMap<String, String>>,
}

impl ResourceTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a locale document
    pub fn from_json_str(language: Language, document: &str) -> I18nResult<Self> {
        serde_json::from_str(document).map_err(|source| I18nError::ResourceParse {
            language: language.code().to_string(),
            source,
        })
    }

    /// Builder-style insert, mainly for assembling tables in code
    #[must_use]
    pub fn with(mut self, namespace: &str, key: &str, value: &str) -> Self {
        self.insert(namespace, key, value);
        self
    }

    /// Insert or replace a single translation
    pub fn insert(
        &mut self,
        namespace: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.namespaces
            .entry(namespace.into())
            .or_default()
            .insert(key.into(), value.into());
    }

    /// Make sure `namespace` exists, even when it has no keys yet
    pub fn ensure_namespace(&mut self, namespace: impl Into<String>) {
        self.namespaces.entry(namespace.into()).or_default();
    }

    /// Translated value for `key` within `namespace`
    pub fn get(&self, namespace: &str, key: &str) -> Option<&str> {
        self.namespaces
            .get(namespace)
            .and_then(|entries| entries.get(key))
            .map(String::as_str)
    }

    pub fn has_namespace(&self, namespace: &str) -> bool {
        self.namespaces.contains_key(namespace)
    }

    /// Namespace names in sorted order
    pub fn namespaces(&self) -> impl Iterator<Item = &str> {
        self.namespaces.keys().map(String::as_str)
    }

    /// Key/value pairs of one namespace in sorted key order
    pub fn entries(&self, namespace: &str) -> impl Iterator<Item = (&str, &str)> {
        self.namespaces
            .get(namespace)
            .into_iter()
            .flat_map(|entries| entries.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }

    /// Total number of translations across namespaces
    pub fn len(&self) -> usize {
        self.namespaces.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_document() {
        let table = ResourceTable::from_json_str(
            Language::Spanish,
            r#"{ "common": { "hello": "hola", "welcome": "Hola, {{name}}" }, "auth": {} }"#,
        )
        .unwrap();

        assert_eq!(table.get("common", "hello"), Some("hola"));
        assert_eq!(table.get("common", "missing"), None);
        assert_eq!(table.get("other", "hello"), None);
        assert!(table.has_namespace("auth"));
        assert_eq!(table.namespaces().collect::<Vec<_>>(), ["auth", "common"]);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_nested_values_are_rejected() {
        let err = ResourceTable::from_json_str(
            Language::English,
            r#"{ "common": { "menu": { "open": "Open" } } }"#,
        )
        .unwrap_err();
        assert!(matches!(err, I18nError::ResourceParse { language, .. } if language == "en"));

        assert!(ResourceTable::from_json_str(Language::English, r#"{ "common": { "n": 1 } }"#).is_err());
        assert!(ResourceTable::from_json_str(Language::English, r#"["common"]"#).is_err());
    }

    #[test]
    fn test_builder_and_entries() {
        let table = ResourceTable::new()
            .with("common", "b", "2")
            .with("common", "a", "1")
            .with("common", "a", "one");

        let entries: Vec<_> = table.entries("common").collect();
        assert_eq!(entries, [("a", "one"), ("b", "2")]);
        assert_eq!(table.entries("nope").count(), 0);
        assert!(!table.is_empty());
    }

    #[test]
    fn test_ensure_namespace() {
        let mut table = ResourceTable::new();
        assert!(table.is_empty());
        table.ensure_namespace("common");
        assert!(table.has_namespace("common"));
        assert!(table.is_empty());
    }
}

//! Assembly of the language -> table registry

use crate::error::{I18nError, I18nResult};
use crate::table::ResourceTable;
use crate::Language;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, info};

/// Locale documents compiled into the binary, in catalog order.
const BUNDLED: [(Language, &str); 4] = [
    (Language::Spanish, include_str!("../locales/es.json")),
    (Language::English, include_str!("../locales/en.json")),
    (Language::Portuguese, include_str!("../locales/pt.json")),
    (Language::French, include_str!("../locales/fr.json")),
];

/// Translation tables keyed by language.
///
/// Built once before the resolver is initialized and never mutated after
/// it has been handed over.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceRegistry {
    tables: HashMap<Language, ResourceTable>,
}

impl ResourceRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    #[must_use]
    pub fn with_table(mut self, language: Language, table: ResourceTable) -> Self {
        self.insert(language, table);
        self
    }

    /// Register or replace the table of a language
    pub fn insert(&mut self, language: Language, table: ResourceTable) -> Option<ResourceTable> {
        self.tables.insert(language, table)
    }

    pub fn get(&self, language: Language) -> Option<&ResourceTable> {
        self.tables.get(&language)
    }

    pub fn contains(&self, language: Language) -> bool {
        self.tables.contains_key(&language)
    }

    /// Registered languages in catalog order
    pub fn languages(&self) -> Vec<Language> {
        Language::all()
            .iter()
            .copied()
            .filter(|language| self.contains(*language))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Parse one document per language
    pub fn from_documents<'a, I>(documents: I) -> I18nResult<Self>
    where
        I: IntoIterator<Item = (Language, &'a str)>,
    {
        let mut registry = Self::new();
        for (language, document) in documents {
            let table = ResourceTable::from_json_str(language, document)?;
            debug!(
                "Parsed {} translations for {}",
                table.len(),
                language.code()
            );
            registry.insert(language, table);
        }
        Ok(registry)
    }

    /// Registry built from the documents shipped inside the binary
    pub fn bundled() -> I18nResult<Self> {
        Self::from_documents(BUNDLED)
    }

    /// Load `<code>.json` for every known language present in `dir`.
    ///
    /// Languages without a document are skipped; a directory holding no
    /// document at all is a configuration error.
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> I18nResult<Self> {
        let dir = dir.as_ref();
        let mut registry = Self::new();

        for language in Language::all().iter().copied() {
            let path = dir.join(language.resource_file());
            let document = match fs::read_to_string(&path) {
                Ok(document) => document,
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    debug!("No resource file for {} at {:?}", language.code(), path);
                    continue;
                }
                Err(source) => return Err(I18nError::ResourceLoad { path, source }),
            };

            registry.insert(language, ResourceTable::from_json_str(language, &document)?);
        }

        if registry.is_empty() {
            return Err(I18nError::configuration(format!(
                "no locale documents found in {}",
                dir.display()
            )));
        }

        info!(
            "Loaded {} locale documents from {:?}",
            registry.len(),
            dir
        );
        Ok(registry)
    }
}

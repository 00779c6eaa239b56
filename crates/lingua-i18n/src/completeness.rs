//! Cross-language completeness checks for a registry.
//!
//! Missing keys are never fatal at runtime, since lookups fall back, but
//! they are worth reporting before shipping a set of locale documents.

use crate::placeholder::placeholders;
use crate::registry::ResourceRegistry;
use crate::Language;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

/// A single (language, namespace, key) position
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct EntryRef {
    pub language: Language,
    pub namespace: String,
    pub key: String,
}

impl fmt::Display for EntryRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}:{}", self.language, self.namespace, self.key)
    }
}

/// Placeholder sets that differ from the reference translation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaceholderMismatch {
    pub entry: EntryRef,
    pub expected: BTreeSet<String>,
    pub found: BTreeSet<String>,
}

/// Result of comparing every registered language with a reference language
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletenessReport {
    pub reference: Language,
    /// Present in the reference, absent in the language
    pub missing: Vec<EntryRef>,
    /// Present in the language, absent in the reference
    pub extra: Vec<EntryRef>,
    pub placeholder_mismatches: Vec<PlaceholderMismatch>,
}

impl CompletenessReport {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty() && self.extra.is_empty() && self.placeholder_mismatches.is_empty()
    }
}

impl fmt::Display for CompletenessReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_complete() {
            return writeln!(f, "All languages match '{}'", self.reference);
        }
        for entry in &self.missing {
            writeln!(f, "missing  {entry}")?;
        }
        for entry in &self.extra {
            writeln!(f, "extra    {entry}")?;
        }
        for mismatch in &self.placeholder_mismatches {
            writeln!(
                f,
                "params   {}: expected {:?}, found {:?}",
                mismatch.entry, mismatch.expected, mismatch.found
            )?;
        }
        Ok(())
    }
}

fn owned(set: BTreeSet<&str>) -> BTreeSet<String> {
    set.into_iter().map(str::to_string).collect()
}

impl ResourceRegistry {
    /// Compare each registered language against `reference`.
    ///
    /// An unregistered reference yields a report listing every other
    /// language's keys as extra.
    pub fn completeness_report(&self, reference: Language) -> CompletenessReport {
        let mut report = CompletenessReport {
            reference,
            missing: Vec::new(),
            extra: Vec::new(),
            placeholder_mismatches: Vec::new(),
        };
        let reference_table = self.get(reference);

        for language in self.languages() {
            if language == reference {
                continue;
            }
            let Some(table) = self.get(language) else {
                continue;
            };
            let entry = |namespace: &str, key: &str| EntryRef {
                language,
                namespace: namespace.to_string(),
                key: key.to_string(),
            };

            if let Some(reference_table) = reference_table {
                for namespace in reference_table.namespaces() {
                    for (key, expected) in reference_table.entries(namespace) {
                        match table.get(namespace, key) {
                            None => report.missing.push(entry(namespace, key)),
                            Some(found) => {
                                let expected = placeholders(expected);
                                let found = placeholders(found);
                                if expected != found {
                                    report.placeholder_mismatches.push(PlaceholderMismatch {
                                        entry: entry(namespace, key),
                                        expected: owned(expected),
                                        found: owned(found),
                                    });
                                }
                            }
                        }
                    }
                }
            }

            for namespace in table.namespaces() {
                for (key, _) in table.entries(namespace) {
                    let known = reference_table.is_some_and(|r| r.get(namespace, key).is_some());
                    if !known {
                        report.extra.push(entry(namespace, key));
                    }
                }
            }
        }

        report
    }
}

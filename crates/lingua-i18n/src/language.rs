//! The closed catalog of supported languages

use crate::error::{I18nError, I18nResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use unic_langid::LanguageIdentifier;

/// Supported languages, in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Language {
    Spanish,
    English,
    Portuguese,
    French,
}

const ALL: [Language; 4] = [
    Language::Spanish,
    Language::English,
    Language::Portuguese,
    Language::French,
];

impl Language {
    /// Every supported language in declaration order
    pub const fn all() -> &'static [Self] {
        &ALL
    }

    /// Short code, also the stem of the resource document name
    pub const fn code(self) -> &'static str {
        match self {
            Self::Spanish => "es",
            Self::English => "en",
            Self::Portuguese => "pt",
            Self::French => "fr",
        }
    }

    /// English name of the language
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Spanish => "Spanish",
            Self::English => "English",
            Self::Portuguese => "Portuguese",
            Self::French => "French",
        }
    }

    /// Name of the language in the language itself
    pub const fn native_display_name(self) -> &'static str {
        match self {
            Self::Spanish => "Español",
            Self::English => "English",
            Self::Portuguese => "Português",
            Self::French => "Français",
        }
    }

    /// Parse a language from a code or a BCP-47 tag.
    ///
    /// Matching uses the primary language subtag, so `es`, `es-MX`, `ES`
    /// and `es_AR` all map to [`Language::Spanish`].
    pub fn from_code(code: &str) -> Option<Self> {
        let langid: LanguageIdentifier = code.trim().replace('_', "-").parse().ok()?;
        let primary = langid.language.as_str();
        ALL.iter().copied().find(|language| language.code() == primary)
    }

    /// Catalog entry for this language
    pub const fn info(self) -> LanguageInfo {
        LanguageInfo {
            code: self.code(),
            display_name: self.display_name(),
            native_display_name: self.native_display_name(),
        }
    }

    /// File name of the resource document for this language
    pub fn resource_file(self) -> String {
        format!("{}.json", self.code())
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = I18nError;

    fn from_str(s: &str) -> I18nResult<Self> {
        Self::from_code(s).ok_or_else(|| I18nError::unknown_language(s))
    }
}

impl TryFrom<String> for Language {
    type Error = I18nError;

    fn try_from(value: String) -> I18nResult<Self> {
        value.parse()
    }
}

impl From<Language> for String {
    fn from(language: Language) -> Self {
        language.code().to_string()
    }
}

/// Catalog entry shown by language pickers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LanguageInfo {
    pub code: &'static str,
    pub display_name: &'static str,
    pub native_display_name: &'static str,
}

/// The full language catalog, in declaration order.
pub fn list_available_languages() -> Vec<LanguageInfo> {
    ALL.iter().map(|language| language.info()).collect()
}

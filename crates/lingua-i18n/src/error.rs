//! Error types for localization operations

use lingua_common::LinguaError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the resolver and the resource loaders.
///
/// Lookups never produce an error; only initialization, language switches
/// and loading resources before initialization can fail.
#[derive(Error, Debug)]
pub enum I18nError {
    /// Double initialization, incomplete registry, or use before initialization
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Switching to a language absent from the registry or the catalog
    #[error("Unknown language: {code}")]
    UnknownLanguage { code: String },

    /// Failed to read a locale document
    #[error("Failed to load resource file {path}: {source}")]
    ResourceLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A locale document is not a namespace -> key -> string object
    #[error("Malformed resource document for {language}: {source}")]
    ResourceParse {
        language: String,
        #[source]
        source: serde_json::Error,
    },
}

impl I18nError {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an unknown language error
    pub fn unknown_language(code: impl Into<String>) -> Self {
        Self::UnknownLanguage { code: code.into() }
    }
}

impl From<I18nError> for LinguaError {
    fn from(err: I18nError) -> Self {
        match err {
            I18nError::Configuration { message } => LinguaError::config(message),
            I18nError::UnknownLanguage { code } => {
                LinguaError::localization_with_locale("unknown language", code)
            }
            err @ I18nError::ResourceLoad { .. } => {
                LinguaError::localization_with_source("failed to load resources", None, err)
            }
            I18nError::ResourceParse { language, source } => LinguaError::localization_with_source(
                "malformed resource document",
                Some(language),
                source,
            ),
        }
    }
}

/// Result type for localization operations
pub type I18nResult<T> = Result<T, I18nError>;

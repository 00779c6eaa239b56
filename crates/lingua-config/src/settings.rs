//! Application configuration structures

use lingua_common::{LogFormat, LoggingConfig};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use validator::Validate;

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct Config {
    /// Language selection and resource location
    #[validate]
    pub localization: LocalizationConfig,

    /// Logging output
    #[validate]
    pub logging: LoggingSettings,
}

/// Localization configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LocalizationConfig {
    /// Language consulted when the active language lacks a key
    #[validate(custom(
        function = "crate::validation::validate_language_code",
        message = "Fallback language must be a language code such as 'es' or 'pt-BR'"
    ))]
    pub fallback_language: String,

    /// Language activated right after startup, e.g. a restored user preference
    #[validate(custom(
        function = "crate::validation::validate_language_code",
        message = "Initial language must be a language code such as 'es' or 'pt-BR'"
    ))]
    pub initial_language: Option<String>,

    /// Namespace used when lookups do not name one
    #[validate(length(min = 1, message = "Default namespace cannot be empty"))]
    #[validate(custom(
        function = "crate::validation::validate_namespace",
        message = "Default namespace may only contain letters, digits, '_', '.' and '-'"
    ))]
    pub default_namespace: String,

    /// Directory of `<code>.json` documents; the bundled documents are used when unset
    pub locales_dir: Option<PathBuf>,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LoggingSettings {
    /// Filter directive, e.g. `info` or `lingua_i18n=debug`
    #[validate(custom(
        function = "crate::validation::validate_log_level",
        message = "Log level must be a tracing filter such as 'info' or 'lingua_i18n=debug'"
    ))]
    pub level: String,

    /// Line format
    pub format: LogFormat,

    /// Append log lines to this file instead of stderr
    pub file: Option<String>,
}

impl Default for LocalizationConfig {
    fn default() -> Self {
        Self {
            fallback_language: "es".to_string(),
            initial_language: None,
            default_namespace: "common".to_string(),
            locales_dir: None,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
            file: None,
        }
    }
}

impl LoggingSettings {
    /// Settings for [`lingua_common::init_logging`]
    pub fn to_logging_config(&self) -> LoggingConfig {
        LoggingConfig {
            level: self.level.clone(),
            format: self.format,
            file_path: self.file.clone(),
            ..LoggingConfig::default()
        }
    }
}

impl Config {
    /// Validate the whole configuration tree
    pub fn validate_all(&self) -> Result<(), validator::ValidationErrors> {
        self.validate()
    }
}

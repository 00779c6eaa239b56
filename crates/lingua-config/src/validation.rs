//! Validation utilities and regex patterns

use std::sync::LazyLock;

use regex::Regex;
use tracing_subscriber::EnvFilter;
use validator::ValidationError;

/// Language code or BCP-47 style tag (`es`, `pt-BR`, `en_US`)
pub static LANGUAGE_CODE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z]{2,3}([-_][A-Za-z0-9]{2,8})*$").expect("Invalid language code regex pattern")
});

/// Namespace names, matching the keys used in locale documents
pub static NAMESPACE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_.\-]+$").expect("Invalid namespace regex pattern")
});

/// Validate a language code
pub fn validate_language_code(code: &str) -> Result<(), ValidationError> {
    if code.is_empty() {
        return Err(ValidationError::new("empty_language_code"));
    }
    if LANGUAGE_CODE_REGEX.is_match(code) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_language_code"))
    }
}

/// Validate a namespace name
pub fn validate_namespace(namespace: &str) -> Result<(), ValidationError> {
    if NAMESPACE_REGEX.is_match(namespace) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_namespace"))
    }
}

/// Validate a tracing filter directive such as `info` or `lingua_i18n=debug,warn`
pub fn validate_log_level(level: &str) -> Result<(), ValidationError> {
    if level.trim().is_empty() {
        return Err(ValidationError::new("empty_log_level"));
    }
    match EnvFilter::try_new(level) {
        Ok(_) => Ok(()),
        Err(_) => Err(ValidationError::new("invalid_log_level")),
    }
}

//! Configuration management for Lingua
//!
//! Loads the YAML configuration, applies `LINGUA_*` environment overrides
//! and validates the result.

pub mod loader;
pub mod settings;
pub mod validation;

pub use loader::{ConfigError, ConfigLoader};
pub use settings::{Config, LocalizationConfig, LoggingSettings};

//! Configuration loading utilities

use crate::Config;
use lingua_common::{LinguaError, LogFormat, Result as LinguaResult};
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Environment variable naming the configuration file
pub const CONFIG_PATH_VAR: &str = "LINGUA_CONFIG_PATH";

/// Files probed in the working directory when no path is given
pub const DEFAULT_CONFIG_FILES: [&str; 2] = ["lingua.yaml", "lingua.yml"];

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading configuration file
    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML configuration: {0}")]
    ParseError(#[from] serde_yaml::Error),

    /// Configuration validation error
    #[error("Configuration validation failed: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    /// Environment variable parsing error
    #[error("Failed to parse environment variable '{var}': {source}")]
    EnvParseError {
        var: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl From<ConfigError> for LinguaError {
    fn from(err: ConfigError) -> Self {
        LinguaError::config_with_source("failed to load configuration", err)
    }
}

/// Configuration loader for the application
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a YAML file with environment variable overrides
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        debug!("Reading configuration from {:?}", path.as_ref());
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml_with(&content, |var| env::var(var).ok())
    }

    /// Parse YAML, apply overrides from `lookup` and validate
    pub fn from_yaml_with<F>(content: &str, lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // An empty document means "all defaults"
        let mut config: Config = if content.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(content)?
        };

        Self::apply_overrides(&mut config, lookup)?;
        config.validate_all()?;
        Ok(config)
    }

    /// Load configuration from environment variables and files
    pub fn load() -> LinguaResult<Config> {
        match Self::discover_path(|var| env::var(var).ok(), |path| path.exists()) {
            Some(path) => Self::load_from_file(path),
            None => {
                info!("No configuration file found, using defaults");
                Ok(Self::from_yaml_with("", |var| env::var(var).ok())?)
            }
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> LinguaResult<Config> {
        let config = Self::load_config(path.as_ref())?;
        info!("Loaded configuration from {:?}", path.as_ref());
        Ok(config)
    }

    /// Resolve the configuration file: the env variable wins over the default names
    fn discover_path<V, E>(lookup: V, exists: E) -> Option<PathBuf>
    where
        V: Fn(&str) -> Option<String>,
        E: Fn(&Path) -> bool,
    {
        if let Some(path) = lookup(CONFIG_PATH_VAR) {
            return Some(PathBuf::from(path));
        }
        DEFAULT_CONFIG_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| exists(path))
    }

    /// Apply `LINGUA_*` overrides read through `lookup`
    pub fn apply_overrides<F>(config: &mut Config, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let localization = &mut config.localization;

        if let Some(fallback) = lookup("LINGUA_FALLBACK_LANGUAGE") {
            localization.fallback_language = fallback;
        }

        if let Some(language) = lookup("LINGUA_LANGUAGE") {
            localization.initial_language = Some(language).filter(|value| !value.is_empty());
        }

        if let Some(namespace) = lookup("LINGUA_DEFAULT_NAMESPACE") {
            localization.default_namespace = namespace;
        }

        if let Some(dir) = lookup("LINGUA_LOCALES_DIR") {
            localization.locales_dir = Some(PathBuf::from(dir)).filter(|dir| !dir.as_os_str().is_empty());
        }

        if let Some(level) = lookup("LINGUA_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Some(format) = lookup("LINGUA_LOG_FORMAT") {
            config.logging.format = format.parse::<LogFormat>().map_err(|e| ConfigError::EnvParseError {
                var: "LINGUA_LOG_FORMAT".to_string(),
                source: Box::new(e),
            })?;
        }

        Ok(())
    }
}

//! Structured logging infrastructure for Lingua

use crate::error::{LinguaError, Result};
use serde::{Deserialize, Serialize};
use std::fmt as std_fmt;
use std::io;
use std::str::FromStr;
use std::sync::Arc;
use tracing_subscriber::{
    fmt::{self, writer::BoxMakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Output format of the log lines
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Multi-line, human oriented output
    #[default]
    Pretty,
    /// Single-line output
    Compact,
    /// Newline-delimited JSON objects
    Json,
}

impl FromStr for LogFormat {
    type Err = LinguaError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "compact" => Ok(Self::Compact),
            "json" => Ok(Self::Json),
            other => Err(LinguaError::validation_field(
                format!("unknown log format '{other}', expected pretty, compact or json"),
                "format",
            )),
        }
    }
}

impl std_fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std_fmt::Formatter<'_>) -> std_fmt::Result {
        let name = match self {
            Self::Pretty => "pretty",
            Self::Compact => "compact",
            Self::Json => "json",
        };
        f.write_str(name)
    }
}

/// Configuration for the logging system
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "lingua_i18n=debug")
    pub level: String,
    /// Line format
    pub format: LogFormat,
    /// Optional file path; lines are appended instead of written to stderr
    pub file_path: Option<String>,
    /// Whether to include target module information
    pub include_targets: bool,
    /// Whether to include thread ids
    pub include_thread_ids: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
            file_path: None,
            include_targets: true,
            include_thread_ids: false,
        }
    }
}

/// Initialize the global tracing subscriber with the given configuration.
///
/// Fails when the filter directive is invalid, the log file cannot be
/// opened, or a global subscriber is already installed.
pub fn init_logging(config: LoggingConfig) -> Result<()> {
    let env_filter = EnvFilter::try_new(&config.level).map_err(|e| {
        LinguaError::validation_field(format!("invalid log level '{}': {e}", config.level), "level")
    })?;

    let (writer, ansi) = match &config.file_path {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            (BoxMakeWriter::new(Arc::new(file)), false)
        }
        None => (BoxMakeWriter::new(io::stderr), true),
    };

    let registry = tracing_subscriber::registry().with(env_filter);
    let base = fmt::layer()
        .with_writer(writer)
        .with_target(config.include_targets)
        .with_thread_ids(config.include_thread_ids);

    let result = match config.format {
        LogFormat::Pretty => registry.with(base.pretty().with_ansi(ansi)).try_init(),
        LogFormat::Compact => registry.with(base.compact().with_ansi(ansi)).try_init(),
        LogFormat::Json => registry.with(base.json().with_ansi(false)).try_init(),
    };

    result.map_err(|e| LinguaError::config(format!("failed to install tracing subscriber: {e}")))
}

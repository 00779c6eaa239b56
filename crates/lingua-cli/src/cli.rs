//! Command line arguments

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Inspect and query localization resources
#[derive(Parser, Debug)]
#[command(name = "lingua", author, version, about, long_about = None)]
pub struct Args {
    /// Configuration file path (defaults to $LINGUA_CONFIG_PATH, then lingua.yaml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level, overriding the configuration
    #[arg(short, long)]
    pub log_level: Option<String>,

    /// Locale directory, overriding the configuration
    #[arg(long)]
    pub locales_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List the supported languages in catalog order
    Languages {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Resolve a translation key
    Lookup {
        /// Translation key
        key: String,

        /// Namespace; the configured default namespace when omitted
        #[arg(short, long)]
        namespace: Option<String>,

        /// Language to activate before resolving
        #[arg(short = 'L', long)]
        language: Option<String>,

        /// Substitute a {{name}} placeholder, as name=value
        #[arg(short, long = "arg", value_parser = parse_key_value)]
        args: Vec<(String, String)>,
    },

    /// Compare all languages against a reference language
    Check {
        /// Reference language; the fallback language when omitted
        #[arg(short, long)]
        reference: Option<String>,
    },
}

fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(name, value)| (name.trim().to_string(), value.to_string()))
        .filter(|(name, _)| !name.is_empty())
        .ok_or_else(|| format!("expected name=value, got '{raw}'"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_lookup() {
        let args = Args::try_parse_from([
            "lingua", "--log-level", "debug", "lookup", "welcome", "-n", "common", "-L", "en", "--arg", "name=Ana",
        ])
        .unwrap();
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert_eq!(
            args.command,
            Command::Lookup {
                key: "welcome".to_string(),
                namespace: Some("common".to_string()),
                language: Some("en".to_string()),
                args: vec![("name".to_string(), "Ana".to_string())],
            }
        );
    }

    #[test]
    fn test_parse_key_value() {
        assert_eq!(parse_key_value("a=b=c").unwrap(), ("a".to_string(), "b=c".to_string()));
        assert!(parse_key_value("novalue").is_err());
        assert!(parse_key_value("=x").is_err());
    }
}

//! Command execution against an initialized resolver

use crate::cli::Command;
use anyhow::{Context, Result};
use lingua_i18n::{interpolate, I18nError, Language, Resolution, Resolver};
use std::io::Write;
use tracing::debug;

/// How a command finished, mapped to the process exit code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// `check` found differences between languages
    Incomplete,
}

/// Run `command` and write its output to `out`
pub fn execute<W: Write>(command: &Command, resolver: &Resolver, out: &mut W) -> Result<Outcome> {
    match command {
        Command::Languages { json } => {
            let languages = resolver.list_available_languages();
            if *json {
                writeln!(out, "{}", serde_json::to_string_pretty(&languages)?)?;
            } else {
                let active = resolver.active_language().map(Language::code);
                for info in &languages {
                    let marker = if active == Some(info.code) { '*' } else { ' ' };
                    writeln!(
                        out,
                        "{marker} {:<4} {:<12} {}",
                        info.code, info.display_name, info.native_display_name
                    )?;
                }
            }
            Ok(Outcome::Success)
        }

        Command::Lookup {
            key,
            namespace,
            language,
            args,
        } => {
            if let Some(code) = language {
                resolver.set_active_language_code(code)?;
            }

            let resolution = resolver.resolve(namespace.as_deref(), key);
            match resolution {
                Resolution::Active(_) => debug!("Resolved '{}' in the active language", key),
                Resolution::Fallback(_) => debug!("Resolved '{}' through the fallback language", key),
                Resolution::Placeholder(_) => debug!("'{}' has no translation", key),
            }

            let pairs: Vec<(&str, &str)> = args
                .iter()
                .map(|(name, value)| (name.as_str(), value.as_str()))
                .collect();
            writeln!(out, "{}", interpolate(resolution.as_str(), &pairs))?;
            Ok(Outcome::Success)
        }

        Command::Check { reference } => {
            let reference = match reference {
                Some(code) => code.parse::<Language>()?,
                None => resolver
                    .fallback_language()
                    .context("resolver is not initialized")?,
            };
            let registry = resolver.registry().context("resolver is not initialized")?;
            if !registry.contains(reference) {
                return Err(I18nError::unknown_language(reference.code()).into());
            }

            let report = registry.completeness_report(reference);
            write!(out, "{report}")?;
            Ok(if report.is_complete() {
                Outcome::Success
            } else {
                Outcome::Incomplete
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lingua_i18n::{ResourceRegistry, ResourceTable};

    fn resolver() -> Resolver {
        let registry = ResourceRegistry::new()
            .with_table(
                Language::Spanish,
                ResourceTable::new()
                    .with("common", "hello", "hola")
                    .with("common", "welcome", "Hola, {{name}}"),
            )
            .with_table(
                Language::English,
                ResourceTable::new().with("common", "hello", "hello"),
            );
        let resolver = Resolver::new();
        resolver.initialize(registry, "common", Language::Spanish).unwrap();
        resolver
    }

    fn run(command: Command, resolver: &Resolver) -> (Outcome, String) {
        let mut out = Vec::new();
        let outcome = execute(&command, resolver, &mut out).unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_languages_table_marks_active() {
        let (outcome, output) = run(Command::Languages { json: false }, &resolver());
        assert_eq!(outcome, Outcome::Success);
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), Language::all().len());
        assert!(lines[0].starts_with("* es"));
        assert!(lines[1].starts_with("  en"));
    }

    #[test]
    fn test_languages_json() {
        let (_, output) = run(Command::Languages { json: true }, &resolver());
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value[0]["code"], "es");
        assert_eq!(value[0]["native_display_name"], "Español");
        assert_eq!(value[3]["code"], "fr");
    }

    #[test]
    fn test_lookup_with_language_and_args() {
        let resolver = resolver();
        let lookup = |key: &str, language: Option<&str>, args: Vec<(String, String)>| Command::Lookup {
            key: key.to_string(),
            namespace: None,
            language: language.map(str::to_string),
            args,
        };

        let (_, output) = run(lookup("hello", Some("en"), Vec::new()), &resolver);
        assert_eq!(output, "hello\n");

        let args = vec![("name".to_string(), "Ana".to_string())];
        let (_, output) = run(lookup("welcome", None, args), &resolver);
        assert_eq!(output, "Hola, Ana\n");

        let (_, output) = run(lookup("missing", None, Vec::new()), &resolver);
        assert_eq!(output, "missing\n");
    }

    #[test]
    fn test_lookup_unknown_language_fails() {
        let resolver = resolver();
        let command = Command::Lookup {
            key: "hello".to_string(),
            namespace: None,
            language: Some("fr".to_string()),
            args: Vec::new(),
        };
        assert!(execute(&command, &resolver, &mut Vec::new()).is_err());
        assert_eq!(resolver.active_language(), Some(Language::Spanish));
    }

    #[test]
    fn test_check_reports_incomplete_languages() {
        let (outcome, output) = run(Command::Check { reference: None }, &resolver());
        assert_eq!(outcome, Outcome::Incomplete);
        assert!(output.contains("missing  en: common:welcome"));

        let (outcome, _) = run(
            Command::Check {
                reference: Some("en".to_string()),
            },
            &resolver(),
        );
        // Spanish has every English key plus one extra
        assert_eq!(outcome, Outcome::Incomplete);
    }

    #[test]
    fn test_check_rejects_unregistered_reference() {
        let command = Command::Check {
            reference: Some("pt".to_string()),
        };
        let mut out = Vec::new();
        let err = execute(&command, &resolver(), &mut out).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<I18nError>(),
            Some(I18nError::UnknownLanguage { code }) if code == "pt"
        ));
        assert!(out.is_empty());
    }
}

//! `{{name}}` placeholder helpers for the rendering side.
//!
//! The resolver returns values verbatim; substitution happens here, after
//! lookup, when the caller has the arguments at hand.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::BTreeSet;

static PLACEHOLDER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{\{\s*([A-Za-z0-9_.\-]+)\s*\}\}").expect("Invalid placeholder regex pattern")
});

/// Names of the placeholders used in `value`
pub fn placeholders(value: &str) -> BTreeSet<&str> {
    PLACEHOLDER_REGEX
        .captures_iter(value)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .collect()
}

/// Substitute `{{name}}` tokens with the matching argument.
///
/// Tokens without an argument are left in place so the gap stays visible.
pub fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    PLACEHOLDER_REGEX
        .replace_all(template, |caps: &Captures<'_>| {
            let name = &caps[1];
            args.iter()
                .find(|(key, _)| *key == name)
                .map_or_else(|| caps[0].to_string(), |(_, value)| (*value).to_string())
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholders() {
        let names = placeholders("{{user}} joined {{ room }} with {{user}}");
        assert_eq!(names.into_iter().collect::<Vec<_>>(), ["room", "user"]);
        assert!(placeholders("no tokens, {single} braces").is_empty());
    }

    #[test]
    fn test_interpolate() {
        assert_eq!(
            interpolate("Hola, {{name}}! Tienes {{ count }} mensajes", &[("name", "Ana"), ("count", "3")]),
            "Hola, Ana! Tienes 3 mensajes"
        );
        assert_eq!(interpolate("Hi {{name}}", &[]), "Hi {{name}}");
        assert_eq!(interpolate("plain", &[("name", "x")]), "plain");
    }
}

//! Test utilities and shared fixtures for the Lingua workspace.

use std::fs;
use std::path::Path;
use std::sync::Once;
use tempfile::TempDir;
use tracing_subscriber::{fmt, EnvFilter};

static INIT: Once = Once::new();

/// Initialize logging for tests. Safe to call from every test.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// Spanish document used by the resolver scenario tests.
pub const SCENARIO_ES: &str = r#"{ "common": { "hello": "hola" } }"#;

/// English document used by the resolver scenario tests.
pub const SCENARIO_EN: &str = r#"{ "common": { "hello": "hello", "bye": "adios" } }"#;

/// Create a temporary locales directory holding one `<code>.json` per entry.
pub fn create_locale_dir(documents: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temporary directory");
    for (code, body) in documents {
        write_locale(dir.path(), code, body);
    }
    dir
}

/// Write a single locale document into `dir`.
pub fn write_locale(dir: &Path, code: &str, body: &str) {
    fs::write(dir.join(format!("{code}.json")), body).expect("Failed to write locale document");
}

/// Create a temporary file with the given contents and extension.
pub fn create_temp_file(contents: &str, suffix: &str) -> tempfile::NamedTempFile {
    let file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("Failed to create temporary file");
    fs::write(file.path(), contents).expect("Failed to write temporary file");
    file
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_locale_dir() {
        let dir = create_locale_dir(&[("es", SCENARIO_ES), ("en", SCENARIO_EN)]);
        assert!(dir.path().join("es.json").exists());
        assert!(dir.path().join("en.json").exists());
    }

    #[test]
    fn test_init_test_logging_is_idempotent() {
        init_test_logging();
        init_test_logging();
    }
}

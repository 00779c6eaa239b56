//! Localization resource resolver for Lingua
//!
//! Translations are grouped per language into namespaced tables. A
//! [`Resolver`] picks the active language, falls back to a fixed fallback
//! language for missing keys, and renders the key itself when nothing
//! matches, so lookups never fail.
//!
//! - Language catalog with code and display names
//! - Resource tables loaded from JSON documents or bundled in the binary
//! - One-shot initialization with registry validation
//! - A process-wide instance and the [`t!`] macro for UI code
//! - Placeholder helpers and completeness reports for locale authors
//!
//! # Example
//!
//! ```rust
//! use lingua_i18n::{Language, ResourceRegistry, ResourceTable, Resolver};
//!
//! # fn example() -> Result<(), lingua_i18n::I18nError> {
//! let registry = ResourceRegistry::new()
//!     .with_table(Language::Spanish, ResourceTable::new().with("common", "hello", "hola"))
//!     .with_table(Language::English, ResourceTable::new().with("common", "hello", "hello"));
//!
//! let resolver = Resolver::new();
//! resolver.initialize(registry, "common", Language::Spanish)?;
//! assert_eq!(resolver.lookup("hello"), "hola");
//!
//! resolver.set_active_language(Language::English)?;
//! assert_eq!(resolver.lookup("hello"), "hello");
//! assert_eq!(resolver.lookup("missing"), "missing");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod completeness;
pub mod error;
pub mod global;
pub mod language;
pub mod placeholder;
pub mod registry;
pub mod resolver;
pub mod table;

pub use completeness::{CompletenessReport, EntryRef, PlaceholderMismatch};
pub use error::{I18nError, I18nResult};
pub use language::{list_available_languages, Language, LanguageInfo};
pub use placeholder::{interpolate, placeholders};
pub use registry::ResourceRegistry;
pub use resolver::{Resolution, Resolver};
pub use table::ResourceTable;

//! The process-wide resolver used by UI code.
//!
//! Hosts call [`initialize`] once at startup; everything else reads through
//! the free functions below or the [`t!`](crate::t) macro.

use crate::error::I18nResult;
use crate::language::LanguageInfo;
use crate::registry::ResourceRegistry;
use crate::resolver::Resolver;
use crate::Language;
use once_cell::sync::Lazy;

static GLOBAL: Lazy<Resolver> = Lazy::new(Resolver::new);

/// The process-wide resolver
pub fn resolver() -> &'static Resolver {
    &GLOBAL
}

/// Initialize the process-wide resolver. Succeeds at most once.
pub fn initialize(
    registry: ResourceRegistry,
    default_namespace: impl Into<String>,
    fallback: Language,
) -> I18nResult<()> {
    GLOBAL.initialize(registry, default_namespace, fallback)
}

pub fn set_active_language(language: Language) -> I18nResult<()> {
    GLOBAL.set_active_language(language)
}

pub fn active_language() -> Option<Language> {
    GLOBAL.active_language()
}

/// Look `key` up in the default namespace
pub fn lookup(key: &str) -> &str {
    GLOBAL.lookup(key)
}

/// Look `key` up in `namespace`
pub fn lookup_in<'a>(namespace: &str, key: &'a str) -> &'a str {
    GLOBAL.lookup_in(namespace, key)
}

pub fn list_available_languages() -> Vec<LanguageInfo> {
    GLOBAL.list_available_languages()
}

/// Translate through the process-wide resolver.
///
/// `t!("hello")` uses the default namespace, `t!("auth", "sign_in")` an
/// explicit one.
#[macro_export]
macro_rules! t {
    ($key:expr) => {
        $crate::global::lookup($key)
    };
    ($namespace:expr, $key:expr) => {
        $crate::global::lookup_in($namespace, $key)
    };
}

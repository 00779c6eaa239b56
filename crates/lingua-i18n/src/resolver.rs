//! The localization resolver
//!
//! A [`Resolver`] is initialized exactly once with a [`ResourceRegistry`],
//! a default namespace and a fallback language. Lookups walk the active
//! language, then the fallback language, and finally return the key itself
//! so rendering never has to branch on a missing translation.

use crate::error::{I18nError, I18nResult};
use crate::language::{self, LanguageInfo};
use crate::registry::ResourceRegistry;
use crate::Language;
use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use tracing::{debug, info, warn};

#[derive(Debug)]
struct State {
    registry: ResourceRegistry,
    default_namespace: String,
    fallback: Language,
    active: RwLock<Language>,
}

impl State {
    fn translation(&self, language: Language, namespace: &str, key: &str) -> Option<&str> {
        self.registry
            .get(language)
            .and_then(|table| table.get(namespace, key))
    }
}

/// Where a looked-up string came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// Found in the active language
    Active(&'a str),
    /// Missing in the active language, found in the fallback language
    Fallback(&'a str),
    /// Found nowhere; carries the key itself
    Placeholder(&'a str),
}

impl<'a> Resolution<'a> {
    /// The text to display
    pub const fn as_str(self) -> &'a str {
        match self {
            Self::Active(value) | Self::Fallback(value) | Self::Placeholder(value) => value,
        }
    }

    pub const fn is_placeholder(self) -> bool {
        matches!(self, Self::Placeholder(_))
    }
}

/// Localization context: registry, default namespace, fallback and
/// active language.
///
/// Independent instances do not share state; the process-wide instance
/// lives in [`crate::global`].
#[derive(Debug, Default)]
pub struct Resolver {
    state: OnceCell<State>,
}

impl Resolver {
    /// Create an uninitialized resolver
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the registry, default namespace and fallback language.
    ///
    /// The active language starts as `fallback`. Fails when called a second
    /// time, when `registry` has no table for `fallback`, or when a
    /// registered table lacks `default_namespace`. A failed call leaves the
    /// resolver untouched.
    pub fn initialize(
        &self,
        registry: ResourceRegistry,
        default_namespace: impl Into<String>,
        fallback: Language,
    ) -> I18nResult<()> {
        if self.state.get().is_some() {
            return Err(I18nError::configuration("already initialized"));
        }

        let default_namespace = default_namespace.into();
        if !registry.contains(fallback) {
            return Err(I18nError::configuration(format!(
                "registry has no resources for fallback language '{fallback}'"
            )));
        }
        if let Some(language) = registry.languages().into_iter().find(|language| {
            !registry
                .get(*language)
                .is_some_and(|table| table.has_namespace(&default_namespace))
        }) {
            return Err(I18nError::configuration(format!(
                "language '{language}' has no '{default_namespace}' namespace"
            )));
        }

        let languages = registry.len();
        let state = State {
            registry,
            default_namespace,
            fallback,
            active: RwLock::new(fallback),
        };
        self.state
            .set(state)
            .map_err(|_| I18nError::configuration("already initialized"))?;

        info!(
            "Resolver initialized with {} languages, fallback '{}'",
            languages, fallback
        );
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.state.get().is_some()
    }

    /// Switch the language used by subsequent lookups.
    ///
    /// The previous language stays active when `language` has no registry
    /// entry.
    pub fn set_active_language(&self, language: Language) -> I18nResult<()> {
        let state = self.state()?;
        if !state.registry.contains(language) {
            warn!("Refusing to switch to unregistered language '{}'", language);
            return Err(I18nError::unknown_language(language.code()));
        }

        let previous = std::mem::replace(&mut *state.active.write(), language);
        if previous != language {
            info!("Active language changed from '{}' to '{}'", previous, language);
        }
        Ok(())
    }

    /// Switch the active language by code or BCP-47 tag
    pub fn set_active_language_code(&self, code: &str) -> I18nResult<()> {
        // Surface configuration errors before parsing errors
        self.state()?;
        let language = code.parse::<Language>()?;
        self.set_active_language(language)
    }

    /// Look `key` up in the default namespace
    pub fn lookup<'a>(&'a self, key: &'a str) -> &'a str {
        self.resolve(None, key).as_str()
    }

    /// Look `key` up in `namespace`
    pub fn lookup_in<'a>(&'a self, namespace: &str, key: &'a str) -> &'a str {
        self.resolve(Some(namespace), key).as_str()
    }

    /// Resolve `key`, reporting which step of the fallback chain answered.
    ///
    /// `None` selects the default namespace.
    pub fn resolve<'a>(&'a self, namespace: Option<&str>, key: &'a str) -> Resolution<'a> {
        let Some(state) = self.state.get() else {
            debug!("Lookup of '{}' before the resolver was initialized", key);
            return Resolution::Placeholder(key);
        };

        let namespace = namespace.unwrap_or(state.default_namespace.as_str());
        let active = *state.active.read();

        if let Some(value) = state.translation(active, namespace, key) {
            return Resolution::Active(value);
        }

        if active != state.fallback {
            if let Some(value) = state.translation(state.fallback, namespace, key) {
                debug!(
                    "'{}:{}' missing for '{}', using fallback '{}'",
                    namespace, key, active, state.fallback
                );
                return Resolution::Fallback(value);
            }
        }

        debug!("No translation for '{}:{}', rendering the key", namespace, key);
        Resolution::Placeholder(key)
    }

    pub fn active_language(&self) -> Option<Language> {
        self.state.get().map(|state| *state.active.read())
    }

    pub fn fallback_language(&self) -> Option<Language> {
        self.state.get().map(|state| state.fallback)
    }

    pub fn default_namespace(&self) -> Option<&str> {
        self.state.get().map(|state| state.default_namespace.as_str())
    }

    /// The registry handed to [`Resolver::initialize`]
    pub fn registry(&self) -> Option<&ResourceRegistry> {
        self.state.get().map(|state| &state.registry)
    }

    /// The static language catalog, independent of the active language
    pub fn list_available_languages(&self) -> Vec<LanguageInfo> {
        language::list_available_languages()
    }

    fn state(&self) -> I18nResult<&State> {
        self.state
            .get()
            .ok_or_else(|| I18nError::configuration("resolver is not initialized"))
    }
}

//! Application startup: registry assembly and resolver initialization

use anyhow::{Context, Result};
use lingua_config::{Config, LocalizationConfig};
use lingua_i18n::{I18nResult, Language, ResourceRegistry, Resolver};
use tracing::info;

/// Build the registry from the configured directory, or the bundled documents
pub fn build_registry(config: &LocalizationConfig) -> I18nResult<ResourceRegistry> {
    match &config.locales_dir {
        Some(dir) => ResourceRegistry::from_dir(dir),
        None => {
            info!("Using bundled locale documents");
            ResourceRegistry::bundled()
        }
    }
}

/// Initialize `resolver` from configuration and activate the initial language
pub fn bootstrap(config: &Config, resolver: &Resolver) -> Result<()> {
    let localization = &config.localization;
    let registry = build_registry(localization).context("failed to load locale documents")?;

    let fallback: Language = localization
        .fallback_language
        .parse()
        .context("invalid fallback language")?;
    resolver
        .initialize(registry, &localization.default_namespace, fallback)
        .context("failed to initialize the resolver")?;

    if let Some(initial) = &localization.initial_language {
        resolver
            .set_active_language_code(initial)
            .with_context(|| format!("cannot activate initial language '{initial}'"))?;
    }
    Ok(())
}

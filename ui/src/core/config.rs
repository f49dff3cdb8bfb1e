//! Site configuration embedded at compile time.
//!
//! `assets/catalog.json` carries everything that is content rather than code:
//! the option catalog, the contact block and the locale the page starts in.

use once_cell::sync::Lazy;
use serde::Deserialize;

use super::catalog::{Catalog, ConfigError, LogoOption};
use super::locale::Locale;

const EMBEDDED_JSON: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/catalog.json"));

static EMBEDDED: Lazy<Result<SiteConfig, ConfigError>> = Lazy::new(|| {
    let loaded = SiteConfig::from_json(EMBEDDED_JSON);
    match &loaded {
        Ok(config) => tracing::info!(
            options = config.catalog.len(),
            images = config.catalog.image_count(),
            "site configuration loaded"
        ),
        Err(err) => tracing::error!("site configuration rejected: {err}"),
    }
    loaded
});

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub default_locale: Locale,
    pub contact: ContactInfo,
    pub catalog: Catalog,
}

#[derive(Deserialize)]
struct RawSiteConfig {
    #[serde(default)]
    default_locale: Locale,
    contact: ContactInfo,
    #[serde(default)]
    options: Vec<LogoOption>,
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let parsed: RawSiteConfig = serde_json::from_str(raw)?;
        Ok(Self {
            default_locale: parsed.default_locale,
            contact: parsed.contact,
            catalog: Catalog::new(parsed.options)?,
        })
    }
}

/// The configuration shipped with the crate, parsed on first access.
pub fn embedded() -> Result<&'static SiteConfig, &'static ConfigError> {
    EMBEDDED.as_ref()
}

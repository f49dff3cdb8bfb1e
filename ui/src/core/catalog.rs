//! Logo option catalog.
//!
//! The catalog is the fixed, ordered list of logo-design options shown on the
//! page. It is built once at startup and never mutated afterwards. Option order
//! and gallery order are significant: together they define the global image
//! sequence the lightbox walks through (see `core::flatten`).

use std::collections::{HashMap, HashSet};

use serde::Deserialize;
use thiserror::Error;

/// One logo-design variant.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LogoOption {
    pub id: u32,
    /// Canonical (fallback-language) title. Localized titles are looked up by
    /// catalog position, see `i18n::option_title`.
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Opaque image references (URLs or relative paths), in display order.
    #[serde(default)]
    pub gallery: Vec<String>,
}

impl LogoOption {
    pub fn new<T: Into<String>>(id: u32, title: T, gallery: Vec<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: None,
            gallery,
        }
    }

    pub fn with_description<T: Into<String>>(mut self, description: T) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("site configuration is not valid JSON: {0}")]
    Parse(String),
    #[error("option id {0} is used more than once")]
    DuplicateOptionId(u32),
    #[error("image `{url}` appears in option {first} and option {second}")]
    DuplicateImageUrl { url: String, first: u32, second: u32 },
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

/// Validated, immutable option list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    options: Vec<LogoOption>,
}

impl Catalog {
    /// Validates uniqueness of option ids and image urls.
    ///
    /// Image identity in the lightbox is url equality, so a url shared between
    /// two options would alias them. That is rejected here instead of being
    /// resolved at navigation time.
    pub fn new(options: Vec<LogoOption>) -> Result<Self, ConfigError> {
        validate(&options)?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &[LogoOption] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Total number of images across every gallery.
    pub fn image_count(&self) -> usize {
        self.options.iter().map(|o| o.gallery.len()).sum()
    }
}

fn validate(options: &[LogoOption]) -> Result<(), ConfigError> {
    let mut ids = HashSet::with_capacity(options.len());
    let mut urls: HashMap<&str, u32> = HashMap::new();

    for option in options {
        if !ids.insert(option.id) {
            return Err(ConfigError::DuplicateOptionId(option.id));
        }
        for url in &option.gallery {
            if let Some(first) = urls.insert(url.as_str(), option.id) {
                return Err(ConfigError::DuplicateImageUrl {
                    url: url.clone(),
                    first,
                    second: option.id,
                });
            }
        }
    }
    Ok(())
}

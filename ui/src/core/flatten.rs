//! Flattens per-option galleries into one global image sequence.
//!
//! Order is option order, then gallery order. The lightbox relies on this
//! ordering for next/previous, so stepping past the last image of one option
//! lands on the first image of the next.

use super::catalog::{Catalog, LogoOption};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlattenedImageEntry {
    pub url: String,
    /// Zero-based position of the owning option in the catalog. Used to
    /// resolve the localized option title.
    pub option_position: usize,
    /// Canonical title of the owning option, captured at flatten time.
    pub option_title: String,
    /// 1-based position inside the owning option's gallery.
    pub image_index: usize,
    pub total_images: usize,
}

pub fn flatten(options: &[LogoOption]) -> Vec<FlattenedImageEntry> {
    options
        .iter()
        .enumerate()
        .flat_map(|(position, option)| {
            let total = option.gallery.len();
            option
                .gallery
                .iter()
                .enumerate()
                .map(move |(index, url)| FlattenedImageEntry {
                    url: url.clone(),
                    option_position: position,
                    option_title: option.title.clone(),
                    image_index: index + 1,
                    total_images: total,
                })
        })
        .collect()
}

pub fn flatten_catalog(catalog: &Catalog) -> Vec<FlattenedImageEntry> {
    flatten(catalog.options())
}

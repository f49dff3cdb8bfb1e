//! Internationalization (i18n) support for `brightbuds-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (language selection + asset loading)
//! - `fluent` (message formatting)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en/brightbuds_ui.ftl   (fallback/reference, left-to-right)
//!   ar/brightbuds_ui.ftl   (right-to-left)
//! ```
//!
//! The active bundle follows the page's `LocaleState`: every locale change is
//! pushed through `core::platform::HostDocument`, which calls `set_language`.
//! Every key must exist in both files; there is no per-key fallback at runtime
//! (the completeness tests enforce this).
//!
//! Public API surface:
//! - `init()` – load the fallback bundle (safe to call multiple times).
//! - `set_language(tag: &str)` – switch language at runtime.
//! - `available_languages()` – discover embedded language tags.
//! - `option_title(position)` / `option_description(position)` – catalog text
//!   looked up by catalog position.
//! - `fl` macro re-export and `t!` wrapper.
//! - `LOADER` – global `FluentLanguageLoader` consumed by helpers & `fl!` macro.
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Ergonomic translation macro.
/// Examples:
///     t!("contact-heading")
///     t!("lightbox-counter", index = 1, total = 3)
///
/// This expands to `fl!(&*LOADER, ...)` keeping callsites short while
/// ensuring all lookups route through the shared loader.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain": the crate name as `fl!` sees it (underscored), which is
/// also the FTL filename.
///
/// Fallback file path must be: `i18n/en/{DOMAIN}.ftl`
const DOMAIN: &str = "brightbuds_ui";

const FALLBACK: &str = "en";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = FALLBACK.parse().expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Initialize i18n (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let fallback: LanguageIdentifier = match FALLBACK.parse() {
            Ok(l) => l,
            Err(_) => return,
        };
        if let Err(err) = select(&LOADER, &[fallback]) {
            tracing::error!("[i18n] failed selecting fallback language ({err})");
        }
    });
}

/// Loads `languages` into `loader` with Unicode bidi isolation turned off.
///
/// Placeables here are digits and option titles already written in the
/// surrounding script, so FSI/PDI marks would only leak into `alt` and
/// `aria-label` text.
fn select(
    loader: &FluentLanguageLoader,
    languages: &[LanguageIdentifier],
) -> Result<(), i18n_embed::I18nEmbedError> {
    i18n_embed::select(loader, &Localizations, languages)?;
    loader.set_use_isolating(false);
    Ok(())
}

/// Switch language at runtime. If `tag` cannot be parsed it is ignored (Ok returned).
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    init();
    let lang: LanguageIdentifier = match tag.parse() {
        Ok(l) => l,
        Err(_) => return Ok(()), // Silently ignore invalid tags.
    };
    select(&LOADER, &[lang])
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

/// Message id for the title of the option at `position` (0-based).
pub fn option_title_key(position: usize) -> String {
    format!("option-{}-title", position + 1)
}

/// Message id for the description of the option at `position` (0-based).
pub fn option_description_key(position: usize) -> String {
    format!("option-{}-description", position + 1)
}

pub fn option_title(position: usize) -> String {
    LOADER.get(&option_title_key(position))
}

pub fn option_description(position: usize) -> String {
    LOADER.get(&option_description_key(position))
}

//! Page-wide state container, provided through Dioxus context.
//!
//! `Showcase` creates it once from the site configuration; components read it
//! with `use_page_state()` instead of reaching for globals.

use dioxus::prelude::*;

use crate::core::config::SiteConfig;
use crate::core::lightbox::Lightbox;
use crate::core::locale::LocaleState;
use crate::core::platform::HostDocument;

#[derive(Clone, Copy, PartialEq)]
pub struct PageState {
    pub config: &'static SiteConfig,
    pub locale: Signal<LocaleState>,
    pub lightbox: Signal<Lightbox>,
}

impl PageState {
    /// Flips the active locale and settles its side effects right away, so the
    /// string table is already switched when the re-render happens.
    pub fn toggle_locale(&mut self) {
        self.locale.with_mut(|state| state.toggle());
        let state = *self.locale.peek();
        state.apply(&mut HostDocument);
        tracing::info!(locale = state.active.tag(), "locale switched");
    }
}

/// Creates the signals and provides the container to descendants.
pub fn use_page_state_provider(config: &'static SiteConfig) -> PageState {
    let locale = use_signal(|| LocaleState::new(config.default_locale));
    let lightbox = use_signal(|| Lightbox::from_catalog(&config.catalog));
    use_context_provider(|| PageState {
        config,
        locale,
        lightbox,
    })
}

pub fn use_page_state() -> PageState {
    use_context::<PageState>()
}

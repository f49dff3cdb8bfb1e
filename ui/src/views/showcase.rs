use dioxus::prelude::*;

use crate::components::{ContactCard, LightboxOverlay, LocaleToggle, OptionGallery};
use crate::core::config::{self, SiteConfig};
use crate::core::platform::HostDocument;
use crate::i18n;
use crate::state::{use_page_state, use_page_state_provider};
use crate::t;

/// The single page: header, one section per catalog option, contact block,
/// and the lightbox overlay on top.
#[component]
pub fn Showcase() -> Element {
    i18n::init();

    match config::embedded() {
        Ok(config) => rsx! {
            ShowcasePage { config }
        },
        Err(err) => rsx! {
            section { class: "page page-error",
                h1 { {t!("config-error-title")} }
                p { class: "page-error__detail", "{err}" }
            }
        },
    }
}

#[component]
fn ShowcasePage(config: &'static SiteConfig) -> Element {
    let page = use_page_state_provider(config);
    let locale = page.locale;

    // Initial settle: direction, language attribute and string table for the
    // configured default locale, before any child renders.
    use_hook(move || locale.peek().apply(&mut HostDocument));

    rsx! {
        ShowcaseBody {}
    }
}

/// Page markup under an already provided `PageState`.
///
/// Every component that renders localized text reads the locale signal
/// itself, so a toggle re-renders exactly those components.
#[component]
pub fn ShowcaseBody() -> Element {
    let page = use_page_state();
    let state = (page.locale)();
    let active = state.active;
    let font_class = if state.is_rtl() { "showcase--arabic" } else { "" };

    tracing::debug!(locale = active.tag(), "showcase render");

    rsx! {
        div {
            class: "showcase {font_class}",
            dir: state.direction().as_attr(),
            lang: active.tag(),

            LocaleToggle {}

            div { class: "showcase__content",
                header { class: "showcase__header",
                    h1 { class: "showcase__title", {t!("brand-title")} }
                    p { class: "showcase__intro", {t!("intro-text")} }
                }

                main { class: "showcase__main",
                    div { class: "showcase__options",
                        for position in 0..page.config.catalog.len() {
                            OptionGallery { key: "{position}", position }
                        }
                    }
                    ContactCard {}
                }

                LightboxOverlay {}
            }
        }
    }
}

use dioxus::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::core::lightbox::Lightbox;
use crate::i18n;
use crate::state::use_page_state;
use crate::t;

/// One catalog option: localized heading, optional description and a grid of
/// thumbnails. Clicking a thumbnail opens it in the lightbox.
#[component]
pub fn OptionGallery(position: usize) -> Element {
    let page = use_page_state();
    // Subscribe: titles and alt text come from the active string table.
    let _locale = page.locale.read().active;
    let Some(option) = page.config.catalog.options().get(position) else {
        tracing::warn!(position, "no catalog option at position");
        return rsx! {};
    };

    let title = i18n::option_title(position);
    let description = option
        .description
        .as_ref()
        .map(|_| i18n::option_description(position));

    rsx! {
        section { class: "option-card", id: "option-{option.id}",
            div { class: "option-card__header",
                div { class: "option-card__title-row",
                    Icon { kind: IconKind::Gallery, class: "option-card__icon" }
                    h2 { class: "option-card__title", "{title}" }
                }
                if let Some(text) = description {
                    p { class: "option-card__description", "{text}" }
                }
            }

            div { class: "option-card__grid",
                for (index, url) in option.gallery.iter().enumerate() {
                    {thumbnail(page.lightbox, url.clone(), &title, index + 1)}
                }
            }
        }
    }
}

fn thumbnail(mut lightbox: Signal<Lightbox>, url: String, title: &str, number: usize) -> Element {
    let alt = t!("gallery-image-alt", title = title, index = number);
    let target = url.clone();
    rsx! {
        div {
            key: "{url}",
            class: "option-card__thumb",
            role: "button",
            tabindex: 0,
            onclick: move |_| lightbox.with_mut(|lb| lb.open(target.clone())),
            img { class: "option-card__image", src: "{url}", alt: "{alt}", loading: "lazy" }
            div { class: "option-card__overlay",
                span { class: "visually-hidden", {t!("gallery-open-hint")} }
                Icon { kind: IconKind::ExternalLink, class: "option-card__overlay-icon" }
            }
        }
    }
}

use dioxus::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::state::use_page_state;
use crate::t;

#[component]
pub fn ContactCard() -> Element {
    let page = use_page_state();
    // Subscribe: every label comes from the active string table.
    let _locale = page.locale.read().active;
    let config = page.config;
    let contact = &config.contact;
    let mailto = format!("mailto:{}", contact.email);
    let tel = format!("tel:{}", contact.phone.replace(' ', ""));

    rsx! {
        section { class: "contact-card",
            h2 { class: "contact-card__heading", {t!("contact-heading")} }
            div { class: "contact-card__grid",
                div { class: "contact-card__item",
                    Icon { kind: IconKind::Mail, class: "contact-card__icon" }
                    div {
                        h3 { class: "contact-card__label", {t!("contact-email")} }
                        a { class: "contact-card__value", href: "{mailto}", "{contact.email}" }
                    }
                }
                div { class: "contact-card__item",
                    Icon { kind: IconKind::Phone, class: "contact-card__icon" }
                    div {
                        h3 { class: "contact-card__label", {t!("contact-phone")} }
                        // Phone numbers stay left-to-right inside RTL layouts.
                        a { class: "contact-card__value", href: "{tel}", dir: "ltr", "{contact.phone}" }
                    }
                }
                div { class: "contact-card__item",
                    Icon { kind: IconKind::MapPin, class: "contact-card__icon" }
                    div {
                        h3 { class: "contact-card__label", {t!("contact-address")} }
                        p { class: "contact-card__value", "{contact.address}" }
                    }
                }
            }
        }
    }
}

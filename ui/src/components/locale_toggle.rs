use dioxus::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::state::use_page_state;
use crate::t;

/// Floating EN/AR switch showing the active locale's badge.
#[component]
pub fn LocaleToggle() -> Element {
    let mut page = use_page_state();
    let active = (page.locale)().active;

    rsx! {
        div { class: "locale-toggle",
            button {
                r#type: "button",
                class: "locale-toggle__button",
                title: t!("locale-toggle-label"),
                onclick: move |_| page.toggle_locale(),
                Icon { kind: IconKind::Globe, class: "locale-toggle__icon" }
                span { class: "locale-toggle__label", "{active.badge()}" }
            }
        }
    }
}

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use futures_util::StreamExt;

use crate::components::icons::{Icon, IconKind};
use crate::core::lightbox::{Direction, Lightbox, LightboxKey, OverlayTarget};
use crate::core::platform::KeyListener;
use crate::i18n;
use crate::state::use_page_state;
use crate::t;

/// Full-screen viewer for the selected image. Renders nothing while closed.
#[component]
pub fn LightboxOverlay() -> Element {
    let lightbox = use_page_state().lightbox;
    let open = lightbox.read().current_entry().is_some();

    rsx! {
        if open {
            LightboxViewer {}
        }
    }
}

/// Mounted only while an image from the sequence is selected. The window-level
/// key listener lives exactly as long as this component.
#[component]
fn LightboxViewer() -> Element {
    let page = use_page_state();
    let mut lightbox = page.lightbox;
    // Subscribe: title, counter and button labels follow the active locale.
    let _locale = page.locale.read().active;

    use_lightbox_keys(lightbox);

    let Some(entry) = lightbox.read().current_entry().cloned() else {
        return rsx! {};
    };

    let title = i18n::option_title(entry.option_position);
    let counter = t!(
        "lightbox-counter",
        index = entry.image_index,
        total = entry.total_images
    );

    let mut click = move |evt: MouseEvent, target: OverlayTarget| {
        let response = lightbox.with_mut(|lb| lb.handle_click(target));
        if response.stop_propagation {
            evt.stop_propagation();
        }
    };

    rsx! {
        div {
            class: "lightbox",
            role: "dialog",
            aria_modal: "true",
            aria_label: "{title}",
            onclick: move |evt| click(evt, OverlayTarget::Backdrop),

            div { class: "lightbox__info",
                h3 { class: "lightbox__title", "{title}" }
                p { class: "lightbox__counter", "{counter}" }
            }

            button {
                r#type: "button",
                class: "lightbox__close",
                aria_label: t!("lightbox-close"),
                onclick: move |evt| click(evt, OverlayTarget::CloseButton),
                Icon { kind: IconKind::Close }
            }

            button {
                r#type: "button",
                class: "lightbox__nav lightbox__nav--prev",
                aria_label: t!("lightbox-previous"),
                onclick: move |evt| click(evt, OverlayTarget::Nav(Direction::Previous)),
                Icon { kind: IconKind::ChevronLeft, class: "lightbox__chevron" }
            }

            button {
                r#type: "button",
                class: "lightbox__nav lightbox__nav--next",
                aria_label: t!("lightbox-next"),
                onclick: move |evt| click(evt, OverlayTarget::Nav(Direction::Next)),
                Icon { kind: IconKind::ChevronRight, class: "lightbox__chevron" }
            }

            img {
                key: "{entry.url}",
                class: "lightbox__image",
                src: "{entry.url}",
                alt: t!("lightbox-image-alt"),
                onclick: move |evt| click(evt, OverlayTarget::Image),
            }
        }
    }
}

/// Installs the window-level key listener for the calling component's lifetime.
///
/// The listener only forwards keys; the coroutine applies them to the signal
/// in order, inside the runtime, against the state current at that moment.
fn use_lightbox_keys(mut lightbox: Signal<Lightbox>) {
    let keys = use_coroutine(move |mut rx: UnboundedReceiver<LightboxKey>| async move {
        while let Some(key) = rx.next().await {
            let response = lightbox.with_mut(|lb| lb.handle_key(key));
            tracing::debug!(key = key.name(), handled = response.handled, "lightbox key");
        }
    });

    let listener = use_hook(move || Rc::new(RefCell::new(KeyListener::install(move |key| keys.send(key)))));

    use_drop(move || {
        if let Some(listener) = listener.borrow_mut().take() {
            listener.remove();
        }
    });
}

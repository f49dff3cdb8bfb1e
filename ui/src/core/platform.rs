//! Host document glue.
//!
//! - Web/WASM: talks to the DOM directly through `web-sys`.
//! - Desktop: the webview has no `web-sys`, so the same work goes through
//!   `document::eval`.
//!
//! Two concerns live here: locale side effects on `<html>` (the language tag
//! also selects the Fluent bundle) and the window-level `keydown` listener the
//! lightbox holds while it is open.

use crate::core::lightbox::LightboxKey;
use crate::core::locale::{DocumentSink, TextDirection};
use crate::i18n;

/// `DocumentSink` backed by the real document. Must be used from inside a
/// Dioxus runtime scope (hooks, event handlers).
#[derive(Debug, Default, Clone, Copy)]
pub struct HostDocument;

impl DocumentSink for HostDocument {
    fn set_direction(&mut self, direction: TextDirection) {
        set_root_attribute("dir", direction.as_attr());
    }

    fn set_language(&mut self, tag: &str) {
        if let Err(err) = i18n::set_language(tag) {
            tracing::warn!(%tag, "keeping previous string table: {err}");
        }
        set_root_attribute("lang", tag);
    }
}

#[cfg(target_arch = "wasm32")]
fn set_root_attribute(name: &str, value: &str) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        tracing::warn!(name, "no document element to update");
        return;
    };
    if let Err(err) = root.set_attribute(name, value) {
        tracing::warn!(name, value, "failed to set root attribute: {err:?}");
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn set_root_attribute(name: &str, value: &str) {
    use dioxus::prelude::{document, spawn};

    let js = format!("document.documentElement.setAttribute({name:?}, {value:?});");
    spawn(async move {
        if let Err(err) = document::eval(&js).await {
            tracing::warn!("failed to update document root: {err:?}");
        }
    });
}

/// Window-level `keydown` listener forwarding lightbox keys, whatever element
/// has focus. Default actions for keys that `LightboxKey::suppresses_default`
/// are cancelled as the event fires. Call `remove` to detach it.
#[cfg(target_arch = "wasm32")]
pub struct KeyListener {
    window: web_sys::Window,
    callback: wasm_bindgen::closure::Closure<dyn FnMut(web_sys::KeyboardEvent)>,
}

#[cfg(target_arch = "wasm32")]
impl KeyListener {
    pub fn install(forward: impl Fn(LightboxKey) + 'static) -> Option<Self> {
        use wasm_bindgen::closure::Closure;
        use wasm_bindgen::JsCast;

        let window = web_sys::window()?;
        let callback = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(
            move |evt: web_sys::KeyboardEvent| {
                let Some(key) = LightboxKey::from_key_name(&evt.key()) else {
                    return;
                };
                if key.suppresses_default() {
                    evt.prevent_default();
                }
                forward(key);
            },
        );
        if let Err(err) =
            window.add_event_listener_with_callback("keydown", callback.as_ref().unchecked_ref())
        {
            tracing::warn!("failed to install lightbox key listener: {err:?}");
            return None;
        }
        Some(Self { window, callback })
    }

    pub fn remove(self) {
        use wasm_bindgen::JsCast;

        if let Err(err) = self
            .window
            .remove_event_listener_with_callback("keydown", self.callback.as_ref().unchecked_ref())
        {
            tracing::warn!("failed to remove lightbox key listener: {err:?}");
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub struct KeyListener {
    task: dioxus::prelude::Task,
}

#[cfg(not(target_arch = "wasm32"))]
impl KeyListener {
    pub fn install(forward: impl Fn(LightboxKey) + 'static) -> Option<Self> {
        use dioxus::prelude::{document, spawn};

        let mut eval = document::eval(&install_script());
        let task = spawn(async move {
            loop {
                match eval.recv::<String>().await {
                    Ok(name) => {
                        if let Some(key) = LightboxKey::from_key_name(&name) {
                            forward(key);
                        }
                    }
                    Err(err) => {
                        tracing::warn!("lightbox key listener stopped: {err:?}");
                        break;
                    }
                }
            }
        });
        Some(Self { task })
    }

    pub fn remove(self) {
        self.task.cancel();
        dioxus::prelude::document::eval(REMOVE_SCRIPT);
    }
}

#[cfg(not(target_arch = "wasm32"))]
const LISTENER_SLOT: &str = "window.__brightbudsLightboxKeys";

#[cfg(not(target_arch = "wasm32"))]
const REMOVE_SCRIPT: &str = "if (window.__brightbudsLightboxKeys) { \
    window.removeEventListener('keydown', window.__brightbudsLightboxKeys); \
    delete window.__brightbudsLightboxKeys; }";

/// Webview side of the desktop listener. Replaces a listener left behind by a
/// previous mount before adding its own.
#[cfg(not(target_arch = "wasm32"))]
fn install_script() -> String {
    let quoted = |keys: Vec<LightboxKey>| {
        keys.iter()
            .map(|key| format!("{:?}", key.name()))
            .collect::<Vec<_>>()
            .join(", ")
    };
    let forwarded = quoted(LightboxKey::ALL.to_vec());
    let suppressed = quoted(
        LightboxKey::ALL
            .into_iter()
            .filter(|key| key.suppresses_default())
            .collect(),
    );
    format!(
        "{REMOVE_SCRIPT}
const forwarded = [{forwarded}];
const suppressed = [{suppressed}];
{LISTENER_SLOT} = (event) => {{
    if (!forwarded.includes(event.key)) return;
    if (suppressed.includes(event.key)) event.preventDefault();
    dioxus.send(event.key);
}};
window.addEventListener('keydown', {LISTENER_SLOT});"
    )
}

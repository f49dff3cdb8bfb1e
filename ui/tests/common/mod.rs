//! Server-side rendering harness for page-level tests.
//!
//! `Harness` provides a fresh `PageState` and renders the real page body under
//! it. The state is parked in a thread-local so a test can drive the signals
//! between renders, the same way event handlers would.

use std::cell::Cell;

use dioxus::dioxus_core::{ScopeId, VirtualDom};
use dioxus::prelude::*;
use ui::core::config;
use ui::state::{use_page_state_provider, PageState};
use ui::views::ShowcaseBody;

thread_local! {
    static PAGE: Cell<Option<PageState>> = const { Cell::new(None) };
}

#[component]
fn Harness() -> Element {
    ui::i18n::init();
    let config = config::embedded().expect("embedded config");
    let page = use_page_state_provider(config);
    PAGE.with(|slot| slot.set(Some(page)));
    rsx! {
        ShowcaseBody {}
    }
}

pub struct RenderedPage {
    dom: VirtualDom,
}

impl RenderedPage {
    pub fn new() -> Self {
        let mut dom = VirtualDom::new(Harness);
        dom.rebuild_in_place();
        Self { dom }
    }

    pub fn html(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    /// Runs `f` against the page state inside the runtime, then applies the
    /// resulting re-renders.
    pub fn update(&mut self, f: impl FnOnce(&mut PageState)) {
        let mut page = PAGE.with(|slot| slot.get()).expect("harness rendered");
        self.dom
            .in_runtime(|| ScopeId::ROOT.in_runtime(|| f(&mut page)));
        let _mutations = self.dom.render_immediate_to_vec();
    }
}

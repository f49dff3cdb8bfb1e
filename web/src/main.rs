use dioxus::prelude::*;

use ui::views::Showcase;

const MAIN_CSS_INLINE: &str = ui::theme::THEME_CSS;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Showcase {},
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    rsx! {
        // Global app resources
        document::Title { "Bright Buds" }
        document::Style { "{MAIN_CSS_INLINE}" }

        Router::<Route> {}
    }
}

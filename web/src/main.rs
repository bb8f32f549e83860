use dioxus::logger::tracing;
use dioxus::prelude::*;

use ui::i18n;
use ui::views::{LandingPage, NotFound};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Landing {},
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

const FAVICON: Asset = asset!("/assets/favicon.svg");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    i18n::init();

    // Global language code; the footer selector writes it, the keyed subtree below remounts on change.
    let lang_code = use_signal(i18n::current_language);
    use_context_provider(|| lang_code);
    tracing::debug!(lang = %lang_code(), "app render");

    let title = ui::t!("site-meta-title");
    let description = ui::t!("site-meta-description");

    rsx! {
        document::Title { "{title}" }
        document::Meta { name: "description", content: "{description}" }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        div {
            key: "{lang_code()}",
            lang: i18n::html_lang(&lang_code()).to_string(),
            Router::<Route> {}
        }
    }
}

#[component]
fn Landing() -> Element {
    rsx! { LandingPage {} }
}

#[component]
fn PageNotFound(segments: Vec<String>) -> Element {
    rsx! { NotFound { segments } }
}

#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use std::path::PathBuf;

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
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

#[cfg(feature = "desktop")]
fn main() {
    let resource_dir = resolve_resource_dir();

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title("Auswandern nach Medina")
                        .with_maximized(true),
                )
                .with_resource_directory(resource_dir),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    LaunchBuilder::server().launch(App);
}

#[component]
fn App() -> Element {
    i18n::init();

    // Footer language selector writes this; the keyed subtree remounts on change.
    let lang_code = use_signal(i18n::current_language);
    use_context_provider(|| lang_code);
    tracing::debug!(lang = %lang_code(), "desktop render");

    let title = ui::t!("site-meta-title");

    rsx! {
        // No asset server in packaged builds: always inline the theme.
        document::Style { "{ui::THEME_CSS_INLINE}" }
        document::Title { "{title}" }

        div {
            key: "{lang_code()}",
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

#[cfg(feature = "desktop")]
fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        // During `cargo run` / `dx serve` load directly from the crate.
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}

use dioxus::prelude::*;

use crate::config::SiteConfig;
use crate::i18n;
use crate::sections::{About, Audience, Footer, Hero, Join, Offerings, Values, VideoTeaser};

/// The whole page in reading order, wrapped in the configured skin.
#[component]
pub fn LandingPage() -> Element {
    i18n::init();

    // Subscribe to the launcher's language signal (if any) so copy re-renders on change.
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang = lang_code
        .as_ref()
        .map(|code| code())
        .unwrap_or_else(i18n::current_language);
    tracing::trace!(%lang, "landing render");

    let skin = SiteConfig::current().skin.css_class();

    rsx! {
        main {
            class: "{skin} min-h-screen flex flex-col bg-background text-foreground font-sans",
            lang: i18n::html_lang(&lang).to_string(),
            Hero {}
            About {}
            Audience {}
            Offerings {}
            Values {}
            VideoTeaser {}
            Join {}
            Footer {}
        }
    }
}

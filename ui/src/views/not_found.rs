use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, Section};
use crate::config::SiteConfig;
use crate::i18n;
use crate::t;

/// Catch-all for unknown paths. `segments` is the unmatched route, logged only.
#[component]
pub fn NotFound(#[props(default)] segments: Vec<String>) -> Element {
    i18n::init();
    tracing::debug!(path = %segments.join("/"), "unknown route");

    let skin = SiteConfig::current().skin.css_class();

    rsx! {
        main { class: "{skin} min-h-screen flex flex-col justify-center bg-background text-foreground font-sans",
            Section { class: "text-center",
                h1 { class: "text-4xl font-serif text-primary mb-6", {t!("not-found-title")} }
                p { class: "text-lg text-muted-foreground mb-10", {t!("not-found-body")} }
                Button { variant: ButtonVariant::Outline, class: "mx-auto w-full md:w-auto", href: "/",
                    {t!("not-found-back")}
                }
            }
        }
    }
}

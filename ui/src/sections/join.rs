use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, Reveal, Section};
use crate::config::SiteConfig;
use crate::t;

/// Closing call to action pointing at the community.
#[component]
pub fn Join() -> Element {
    let community_url = SiteConfig::current().community_url.clone();
    rsx! {
        Section { class: "bg-surface py-32",
            Reveal {
                div { class: "max-w-4xl mx-auto bg-accent/20 rounded-2xl p-8 md:p-16 text-center border border-primary/5",
                    h2 { class: "text-4xl md:text-5xl font-serif text-primary mb-6", {t!("join-title")} }
                    p { class: "text-lg text-muted-foreground mb-10 max-w-2xl mx-auto", {t!("join-body")} }
                    Button {
                        variant: ButtonVariant::Primary,
                        class: "text-lg px-10 py-5 mx-auto w-full md:w-auto",
                        href: community_url,
                        {t!("join-cta")}
                    }
                    p { class: "mt-6 text-xs text-muted-foreground uppercase tracking-wider", {t!("join-note")} }
                }
            }
        }
    }
}

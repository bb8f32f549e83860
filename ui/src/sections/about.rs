use dioxus::prelude::*;

use crate::components::{Reveal, Section};
use crate::config::SiteConfig;
use crate::t;

#[component]
pub fn About() -> Element {
    let anchor = SiteConfig::current().learn_more_target.clone();
    rsx! {
        Section { id: anchor, class: "bg-surface text-center",
            Reveal {
                div { class: "max-w-3xl mx-auto space-y-6",
                    h2 { class: "text-3xl md:text-4xl font-serif text-primary mb-6", {t!("about-title")} }
                    p { class: "text-lg md:text-xl text-muted-foreground leading-relaxed",
                        {t!("about-body")}
                    }
                }
            }
        }
    }
}

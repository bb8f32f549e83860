use dioxus::prelude::*;

use crate::components::{Card, Icon, Reveal, Section};
use crate::content;
use crate::t;

/// Four target groups and the closing quote.
#[component]
pub fn Audience() -> Element {
    let blocks = content::audience();
    rsx! {
        Section { class: "bg-accent/30",
            Reveal {
                h2 { class: "text-3xl font-serif text-primary text-center mb-16", {t!("audience-title")} }
                div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-8",
                    for (idx, block) in blocks.into_iter().enumerate() {
                        Card {
                            key: "{idx}",
                            class: "text-center hover:-translate-y-1 transition-transform duration-300",
                            div { class: "w-12 h-12 bg-primary/10 rounded-full flex items-center justify-center mx-auto mb-6 text-primary",
                                Icon { name: block.icon }
                            }
                            h3 { class: "text-xl font-serif text-primary mb-3", "{block.title}" }
                            p { class: "text-muted-foreground text-sm leading-relaxed", "{block.description}" }
                        }
                    }
                }
                p { class: "text-center text-muted-foreground mt-12 text-sm italic",
                    {t!("audience-quote")}
                }
            }
        }
    }
}

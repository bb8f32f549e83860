use std::time::Duration;

use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, Icon, IconName, Reveal, Section};
use crate::config::SiteConfig;
use crate::content;
use crate::core::reveal::stagger;
use crate::t;

const STAGGER_STEP: Duration = Duration::from_millis(100);

/// Intro column plus six offering rows entering one after another.
#[component]
pub fn Offerings() -> Element {
    let blocks = content::offerings();
    let community_url = SiteConfig::current().community_url.clone();
    rsx! {
        Section { class: "bg-surface",
            div { class: "flex flex-col lg:flex-row gap-16 items-start",
                div { class: "lg:w-1/3",
                    Reveal {
                        h2 { class: "text-3xl md:text-4xl font-serif text-primary mb-6 leading-tight",
                            {t!("offerings-title-line1")}
                            br {}
                            {t!("offerings-title-line2")}
                        }
                        p { class: "text-muted-foreground mb-8", {t!("offerings-intro")} }
                        Button { variant: ButtonVariant::Primary, href: community_url,
                            {t!("offerings-cta")}
                            Icon { name: IconName::ArrowRight, size: 16 }
                        }
                    }
                }

                div { class: "lg:w-2/3 grid grid-cols-1 md:grid-cols-2 gap-6",
                    for (idx, block) in blocks.into_iter().enumerate() {
                        Reveal {
                            key: "{idx}",
                            delay_ms: stagger(idx, STAGGER_STEP).as_millis() as u64,
                            div { class: "flex gap-4 p-4 rounded-lg hover:bg-accent/20 transition-colors",
                                div { class: "mt-1 text-secondary",
                                    Icon { name: block.icon }
                                }
                                div {
                                    h3 { class: "font-semibold text-primary mb-1", "{block.title}" }
                                    p { class: "text-sm text-muted-foreground", "{block.description}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

use dioxus::prelude::*;

use crate::components::{Icon, IconName, Reveal, Section};
use crate::t;

#[component]
pub fn Values() -> Element {
    rsx! {
        Section { class: "bg-primary text-white text-center py-32",
            Reveal {
                div { class: "max-w-3xl mx-auto space-y-8",
                    Icon { name: IconName::Heart, size: 48, class: "mx-auto text-secondary mb-6" }
                    h2 { class: "text-3xl md:text-5xl font-serif leading-tight",
                        {t!("values-title-line1")}
                        br {}
                        {t!("values-title-line2")}
                    }
                    p { class: "text-xl text-gray-300 leading-relaxed font-light", {t!("values-body")} }
                    div { class: "pt-8",
                        span { class: "inline-block border-t border-secondary pt-4 text-secondary uppercase tracking-widest text-sm font-medium",
                            {t!("values-motto")}
                        }
                    }
                }
            }
        }
    }
}

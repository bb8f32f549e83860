use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, Reveal};
use crate::config::SiteConfig;
use crate::t;

/// Full-height opener over the Medina photograph.
#[component]
pub fn Hero() -> Element {
    let config = SiteConfig::current();
    let image = format!("background-image:url('{}');", config.hero_image_url);
    // Plain in-page anchor; the theme's `scroll-behavior: smooth` animates it
    // in browsers and the desktop webview alike.
    let learn_more = learn_more_href(&config.learn_more_target);

    rsx! {
        div { class: "relative min-h-hero flex items-center justify-center text-center px-6 overflow-hidden",
            div { class: "absolute inset-0 bg-primary z-0",
                div {
                    class: "absolute inset-0 opacity-40 bg-cover bg-center mix-blend-overlay",
                    style: "{image}",
                }
                div { class: "absolute inset-0 hero-overlay" }
            }

            div { class: "relative z-10 max-w-4xl mx-auto text-white space-y-8 pt-20",
                Reveal {
                    h1 { class: "text-4xl md:text-6xl lg:text-7xl font-serif leading-tight mb-6",
                        {t!("hero-title-line1")}
                        br {}
                        span { class: "text-secondary", {t!("hero-title-line2")} }
                    }
                }
                Reveal { delay_ms: 200,
                    p { class: "text-lg md:text-xl text-gray-200 leading-relaxed max-w-2xl mx-auto font-light",
                        {t!("hero-subtitle")}
                    }
                }
                Reveal { delay_ms: 400,
                    div { class: "flex flex-col sm:flex-row items-center justify-center gap-4 mt-8",
                        Button {
                            variant: ButtonVariant::Secondary,
                            class: "w-full sm:w-auto text-base py-4",
                            href: config.community_url.clone(),
                            {t!("hero-cta-community")}
                        }
                        Button {
                            variant: ButtonVariant::Outline,
                            class: "w-full sm:w-auto text-base py-4 border-white text-white hover:bg-white/10",
                            href: learn_more,
                            {t!("hero-cta-learn-more")}
                        }
                    }
                }
            }
        }
    }
}

fn learn_more_href(target: &str) -> String {
    format!("#{}", target.trim_start_matches('#'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::render::render_to_string;

    #[test]
    fn learn_more_is_an_in_page_anchor() {
        assert_eq!(learn_more_href("worum-es-geht"), "#worum-es-geht");
        assert_eq!(learn_more_href("#worum-es-geht"), "#worum-es-geht");
    }

    #[test]
    fn both_calls_to_action_are_links() {
        crate::i18n::init();
        let html = render_to_string(Hero);
        let config = SiteConfig::current();
        assert!(html.contains(&format!("href=\"#{}\"", config.learn_more_target)), "{html}");
        assert!(html.contains(&format!("href=\"{}\"", config.community_url)), "{html}");
        assert!(!html.contains("<button"), "{html}");
    }
}

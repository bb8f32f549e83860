use dioxus::prelude::*;

use crate::config::SiteConfig;
use crate::core::platform;
use crate::i18n;
use crate::t;

/// Title, tagline, legal links and copyright. Shows a language selector when
/// more than one locale is embedded.
#[component]
pub fn Footer() -> Element {
    let config = SiteConfig::current();
    let year = platform::current_year().to_string();

    let mut current_lang = use_signal(i18n::current_language);
    let langs = i18n::available_languages();
    let show_switcher = langs.len() > 1;
    // Provided by the launcher; bumping it rebuilds the localized tree.
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();

    let on_change = move |evt: FormEvent| {
        let tag = evt.value();
        match i18n::set_language(&tag) {
            Ok(()) => {
                current_lang.set(tag.clone());
                if let Some(mut code) = lang_code_ctx {
                    code.set(tag);
                }
            }
            Err(err) => tracing::warn!(%err, %tag, "language switch failed"),
        }
    };

    rsx! {
        footer { class: "bg-white border-t border-gray-100 py-12",
            div { class: "max-w-7xl mx-auto px-6 text-center",
                h3 { class: "font-serif text-2xl text-primary mb-2", {t!("site-title")} }
                p { class: "text-muted-foreground mb-8", {t!("footer-tagline")} }
                div { class: "flex justify-center gap-6 text-sm text-gray-400",
                    a { class: "hover:text-primary transition-colors", href: "{config.imprint_url}",
                        {t!("footer-imprint")}
                    }
                    a { class: "hover:text-primary transition-colors", href: "{config.privacy_url}",
                        {t!("footer-privacy")}
                    }
                }
                if show_switcher {
                    div { class: "mt-6 flex justify-center items-center gap-2 text-sm text-gray-400",
                        label { r#for: "locale-select", {t!("footer-language-label")} }
                        select {
                            id: "locale-select",
                            class: "locale-select",
                            value: "{current_lang()}",
                            oninput: on_change,
                            for code in langs {
                                option { key: "{code}", value: "{code}", "{code}" }
                            }
                        }
                    }
                }
                p { class: "mt-8 text-xs text-gray-300", {t!("footer-copyright", year = year)} }
            }
        }
    }
}

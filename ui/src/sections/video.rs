use dioxus::prelude::*;

use crate::components::{Icon, IconName, Reveal, Section};
use crate::t;

/// Placeholder for the founder video; no player is embedded yet.
#[component]
pub fn VideoTeaser() -> Element {
    rsx! {
        Section { class: "bg-muted",
            Reveal {
                div { class: "max-w-4xl mx-auto text-center",
                    div {
                        class: "aspect-video bg-gray-200 rounded-xl shadow-lg flex items-center justify-center relative overflow-hidden mb-8",
                        role: "img",
                        aria_label: t!("video-placeholder-label"),
                        div { class: "absolute inset-0 bg-black/10" }
                        div { class: "relative w-20 h-20 bg-white rounded-full flex items-center justify-center shadow-xl",
                            Icon { name: IconName::Play, size: 32, class: "text-primary ml-1" }
                        }
                    }
                    p { class: "text-lg text-primary font-medium", {t!("video-caption")} }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::render::render_to_string;

    #[test]
    fn placeholder_does_not_pose_as_a_player() {
        crate::i18n::init();
        let html = render_to_string(VideoTeaser);
        assert!(!html.contains("cursor-pointer"), "{html}");
        assert!(!html.contains("<button"), "{html}");
        assert!(!html.contains("onclick"), "{html}");
        assert!(
            html.contains(&format!("aria-label=\"{}\"", t!("video-placeholder-label"))),
            "{html}"
        );
    }
}

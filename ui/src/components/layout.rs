use dioxus::prelude::*;

use crate::core::style;

/// Outer spacing shared by every content section.
pub const SECTION_BASE: &str = "py-20 px-6 md:px-12 lg:px-24";
/// Inner column width.
pub const SECTION_INNER: &str = "max-w-7xl mx-auto";
/// Surface panel used by grid items.
pub const CARD_BASE: &str = "bg-surface p-8 rounded-lg shadow-sm border border-primary/5";

/// Full-width band with consistent padding and a centred, width-capped column.
#[component]
pub fn Section(
    #[props(into, default)] id: String,
    #[props(into, default)] class: String,
    children: Element,
) -> Element {
    let classes = style::merge([SECTION_BASE, class.as_str()]);
    rsx! {
        section {
            id: if !id.is_empty() { "{id}" },
            class: "{classes}",
            div { class: SECTION_INNER, {children} }
        }
    }
}

#[component]
pub fn Card(#[props(into, default)] class: String, children: Element) -> Element {
    let classes = style::merge([CARD_BASE, class.as_str()]);
    rsx! {
        div { class: "{classes}", {children} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_padding_override() {
        let merged = style::merge([SECTION_BASE, "bg-surface py-32"]);
        assert_eq!(merged, "px-6 md:px-12 lg:px-24 bg-surface py-32");
    }

    #[test]
    fn card_keeps_base_without_overrides() {
        assert_eq!(style::merge([CARD_BASE, ""]), CARD_BASE);
    }
}

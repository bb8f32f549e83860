use dioxus::prelude::*;

use crate::core::style;

/// Shared geometry and typography for every button variant.
pub const BUTTON_BASE: &str = "px-8 py-3 rounded-md transition-all duration-300 font-medium text-sm tracking-wide flex items-center justify-center gap-2";

/// Closed set of visual presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Ghost,
}

impl ButtonVariant {
    pub const ALL: [ButtonVariant; 4] = [Self::Primary, Self::Secondary, Self::Outline, Self::Ghost];

    /// Colour, border and hover/active feedback for the variant.
    pub fn classes(self) -> &'static str {
        match self {
            Self::Primary => {
                "bg-primary text-white hover:bg-primary-hover shadow-md hover:shadow-lg active:shadow-sm"
            }
            Self::Secondary => {
                "bg-secondary text-white hover:bg-secondary-hover shadow-sm active:shadow-none"
            }
            Self::Outline => "border border-primary text-primary hover:bg-primary/5 active:bg-primary/10",
            Self::Ghost => "text-primary hover:bg-accent/20 active:bg-accent/30",
        }
    }

    /// The full class string of an un-customised button of this variant.
    pub fn canonical(self) -> String {
        style::merge([BUTTON_BASE, self.classes()])
    }
}

/// Base, variant and caller overrides in that precedence order.
pub fn button_classes(variant: ButtonVariant, extra: &str) -> String {
    style::merge([BUTTON_BASE, variant.classes(), extra])
}

/// Styled control. With `href` it renders as a link (off-site targets open in
/// a new tab); otherwise as a native `button`.
#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(into, default)] class: String,
    #[props(into)] href: Option<String>,
    #[props(into, default = "button".to_string())] button_type: String,
    #[props(default)] disabled: bool,
    onclick: Option<EventHandler<MouseEvent>>,
    onkeydown: Option<EventHandler<KeyboardEvent>>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    // Links have no native disabled state.
    let classes = style::merge([
        button_classes(variant, &class).as_str(),
        style::when(disabled && href.is_some(), "pointer-events-none opacity-60"),
    ]);

    let on_click = move |evt: MouseEvent| {
        if let Some(handler) = onclick {
            handler.call(evt);
        }
    };
    let on_keydown = move |evt: KeyboardEvent| {
        if let Some(handler) = onkeydown {
            handler.call(evt);
        }
    };

    match href {
        Some(href) => {
            let external = href.starts_with("http://") || href.starts_with("https://");
            rsx! {
                a {
                    class: "{classes}",
                    href: "{href}",
                    target: if external { "_blank" },
                    rel: if external { "noopener noreferrer" },
                    "data-variant": variant_name(variant),
                    aria_disabled: if disabled { "true" },
                    onclick: on_click,
                    onkeydown: on_keydown,
                    ..attributes,
                    {children}
                }
            }
        }
        None => rsx! {
            button {
                class: "{classes}",
                r#type: "{button_type}",
                disabled,
                "data-variant": variant_name(variant),
                onclick: on_click,
                onkeydown: on_keydown,
                ..attributes,
                {children}
            }
        },
    }
}

fn variant_name(variant: ButtonVariant) -> &'static str {
    match variant {
        ButtonVariant::Primary => "primary",
        ButtonVariant::Secondary => "secondary",
        ButtonVariant::Outline => "outline",
        ButtonVariant::Ghost => "ghost",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_without_extras_is_canonical() {
        assert_eq!(
            button_classes(ButtonVariant::Primary, ""),
            ButtonVariant::Primary.canonical()
        );
        assert_eq!(
            ButtonVariant::Primary.canonical(),
            format!("{BUTTON_BASE} {}", ButtonVariant::Primary.classes())
        );
    }

    #[test]
    fn outline_border_colour_can_be_overridden() {
        let classes = button_classes(
            ButtonVariant::Outline,
            "border-white text-white hover:bg-white/10",
        );
        let tokens: Vec<&str> = classes.split(' ').collect();
        assert!(tokens.contains(&"border-white"));
        assert!(!tokens.contains(&"border-primary"));
        assert!(tokens.contains(&"border"));
        assert!(tokens.contains(&"hover:bg-white/10"));
        assert!(!tokens.contains(&"hover:bg-primary/5"));
    }

    #[test]
    fn extra_padding_and_size_win() {
        let classes = button_classes(ButtonVariant::Primary, "text-lg px-10 py-5");
        assert!(classes.ends_with("text-lg px-10 py-5"));
        assert!(!classes.contains("px-8"));
        assert!(!classes.contains("py-3"));
        assert!(!classes.contains("text-sm"));
        assert!(classes.contains("text-white"));
    }

    #[test]
    fn variants_are_distinct() {
        let mut seen = std::collections::HashSet::new();
        for variant in ButtonVariant::ALL {
            assert!(seen.insert(variant.canonical()));
            assert!(!variant_name(variant).is_empty());
        }
    }
}

//! Shared UI crate for the Auswandern nach Medina landing page. Components,
//! page sections, content and styling logic live here; `web` and `desktop`
//! only launch it.

use dioxus::prelude::*;

pub mod config;
pub mod content;
pub mod core;
pub mod i18n;
pub mod sections;
pub mod views;

pub mod components {
    // Styled button / link (components/button.rs)
    pub mod button;
    pub use button::{button_classes, Button, ButtonVariant};

    // Inline SVG glyphs (components/icon.rs)
    pub mod icon;
    pub use icon::{Icon, IconName};

    // Section band and card surface (components/layout.rs)
    pub mod layout;
    pub use layout::{Card, Section};

    // Scroll-triggered entrance wrapper (components/reveal.rs)
    pub mod reveal;
    pub use reveal::Reveal;
}

/// Theme stylesheet: skin palettes plus every utility class the components use.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");
/// Same stylesheet inlined, for release desktop bundles without an asset server.
pub const THEME_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/main.css"
));

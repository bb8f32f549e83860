//! Internationalization (i18n) support for `medina-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (language selection + asset loading)
//! - `fluent` (message formatting)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   de-DE/medina-ui.ftl   (fallback/reference)
//!   en-US/medina-ui.ftl   (additional locale)
//! ```
//!
//! The page is German first: `de-DE` is the fallback and, unless
//! `site.toml` sets `locale = "auto"`, also the starting language.
//!
//! Usage in a component (after calling `i18n::init()` once at app start):
//! ```ignore
//! use crate::t;
//! let title = t!("hero-title-line1");
//! ```
//!
//! To add a new locale:
//! 1. Copy `de-DE/medina-ui.ftl` to `i18n/<lang-id>/medina-ui.ftl`.
//! 2. Translate each message value (keep IDs and variable placeholders identical).
//! 3. Register it in `tests/i18n_missing_keys.rs` and run the tests.
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::LanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

use crate::config::{LocalePolicy, SiteConfig};

pub use i18n_embed_fl::fl;

/// Ergonomic translation macro.
/// Examples:
///     t!("hero-title-line1")
///     t!("footer-copyright", year = 2026)
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain" (matches the fallback FTL filename).
const DOMAIN: &str = "medina-ui";

pub const FALLBACK_LANGUAGE: &str = "de-DE";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = FALLBACK_LANGUAGE
        .parse()
        .expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Initialize i18n (idempotent).
pub fn init() {
    INIT.call_once(|| {
        // Unicode isolation marks would end up inside plain text such as the copyright year.
        LOADER.set_use_isolating(false);
        let requested = match &SiteConfig::current().locale {
            LocalePolicy::Auto => requested_languages(),
            LocalePolicy::Fixed(tag) => tag.parse().map(|lang| vec![lang]).unwrap_or_default(),
        };
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            tracing::warn!(%err, "failed selecting languages; continuing with fallback");
        }
    });
}

/// Switch language at runtime. If `tag` cannot be parsed it is ignored (Ok returned).
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let lang: LanguageIdentifier = match tag.parse() {
        Ok(l) => l,
        Err(_) => return Ok(()),
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

/// Language tag currently used for lookups.
pub fn current_language() -> String {
    LOADER.current_language().to_string()
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

/// Two-letter code for `<html lang>`.
pub fn html_lang(tag: &str) -> &str {
    tag.split('-').next().unwrap_or(tag)
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fl;

    #[test]
    fn fallback_language_is_present() {
        assert!(available_languages().iter().any(|l| l == FALLBACK_LANGUAGE));
    }

    #[test]
    fn basic_lookup_works() {
        init();
        let s = fl!(&*LOADER, "site-title");
        assert_eq!(s, "Auswandern nach Medina");
    }

    #[test]
    fn dynamic_language_switch_reverts_on_failure() {
        init();
        let before = fl!(&*LOADER, "footer-imprint");
        let _ = set_language("zz-ZZ");
        let after = fl!(&*LOADER, "footer-imprint");
        assert_eq!(before, after);
    }

    #[test]
    fn html_lang_strips_region() {
        assert_eq!(html_lang("de-DE"), "de");
        assert_eq!(html_lang("en"), "en");
    }
}

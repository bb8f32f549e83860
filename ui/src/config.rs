//! Site configuration.
//!
//! The page ships with an embedded `site.toml` (crate root). Every field has a
//! default, so the file only needs to mention what differs. A config that
//! fails to parse or validate is logged and replaced by the defaults: the page
//! must always render.

use std::time::Duration;

use once_cell::sync::Lazy;
use serde::Deserialize;
use thiserror::Error;

use crate::core::reveal::RevealTiming;
use crate::core::visibility::ObserveOptions;

const EMBEDDED: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/site.toml"));

static CURRENT: Lazy<SiteConfig> = Lazy::new(|| match SiteConfig::from_toml_str(EMBEDDED) {
    Ok(config) => config,
    Err(err) => {
        tracing::warn!(%err, "invalid embedded site.toml; using defaults");
        SiteConfig::default()
    }
});

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse site config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Visual skin. Both skins share every component contract; only the palette
/// custom properties differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Skin {
    /// Deep green and gold.
    #[default]
    Medina,
    /// Warm sand tones with a terracotta accent.
    Sand,
}

impl Skin {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Medina => "skin-medina",
            Self::Sand => "skin-sand",
        }
    }
}

/// Which locale the page starts in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocalePolicy {
    /// Follow the browser / OS language list.
    Auto,
    /// Always start in this language tag.
    Fixed(String),
}

impl<'de> Deserialize<'de> for LocalePolicy {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(if raw.eq_ignore_ascii_case("auto") {
            Self::Auto
        } else {
            Self::Fixed(raw)
        })
    }
}

impl Default for LocalePolicy {
    fn default() -> Self {
        Self::Fixed("de-DE".to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealSettings {
    pub duration_ms: u64,
    pub offset_px: u32,
    pub fallback_ms: u64,
    pub threshold: f64,
    pub bottom_margin_px: u32,
}

impl Default for RevealSettings {
    fn default() -> Self {
        let timing = RevealTiming::default();
        let observe = ObserveOptions::default();
        Self {
            duration_ms: timing.duration.as_millis() as u64,
            offset_px: timing.offset_px,
            fallback_ms: timing.fallback.as_millis() as u64,
            threshold: observe.threshold,
            bottom_margin_px: observe.bottom_margin_px,
        }
    }
}

impl RevealSettings {
    pub fn timing(&self) -> RevealTiming {
        RevealTiming {
            duration: Duration::from_millis(self.duration_ms),
            offset_px: self.offset_px,
            fallback: Duration::from_millis(self.fallback_ms),
        }
    }

    pub fn observe_options(&self) -> ObserveOptions {
        ObserveOptions {
            threshold: self.threshold,
            bottom_margin_px: self.bottom_margin_px,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Off-site community platform.
    pub community_url: String,
    /// Element id the "learn more" button scrolls to.
    pub learn_more_target: String,
    pub hero_image_url: String,
    pub imprint_url: String,
    pub privacy_url: String,
    pub skin: Skin,
    pub locale: LocalePolicy,
    pub reveal: RevealSettings,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            community_url: "https://www.skool.com".to_string(),
            learn_more_target: "worum-es-geht".to_string(),
            hero_image_url: "https://images.unsplash.com/photo-1565552629477-ff441f77d338?q=80&w=2574&auto=format&fit=crop".to_string(),
            imprint_url: "#".to_string(),
            privacy_url: "#".to_string(),
            skin: Skin::default(),
            locale: LocalePolicy::default(),
            reveal: RevealSettings::default(),
        }
    }
}

impl SiteConfig {
    /// The embedded configuration (parsed once).
    pub fn current() -> &'static SiteConfig {
        &CURRENT
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_link("community_url", &self.community_url)?;
        check_link("hero_image_url", &self.hero_image_url)?;
        check_link("imprint_url", &self.imprint_url)?;
        check_link("privacy_url", &self.privacy_url)?;

        if self.learn_more_target.trim().is_empty() {
            return Err(invalid("learn_more_target", "must name an element id"));
        }
        if self.reveal.fallback_ms == 0 {
            return Err(invalid("reveal.fallback_ms", "must be greater than zero"));
        }
        if !(0.0..=1.0).contains(&self.reveal.threshold) {
            return Err(invalid(
                "reveal.threshold",
                format!("{} is outside 0.0..=1.0", self.reveal.threshold),
            ));
        }
        if let LocalePolicy::Fixed(tag) = &self.locale {
            if tag.parse::<unic_langid::LanguageIdentifier>().is_err() {
                return Err(invalid("locale", format!("`{tag}` is not a language tag")));
            }
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.into(),
    }
}

fn check_link(field: &'static str, value: &str) -> Result<(), ConfigError> {
    let ok = value.starts_with("https://")
        || value.starts_with("http://")
        || value.starts_with('#')
        || value.starts_with('/');
    if ok {
        Ok(())
    } else {
        Err(invalid(
            field,
            format!("`{value}` must be an http(s) URL, #anchor or /path"),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_is_valid() {
        SiteConfig::from_toml_str(EMBEDDED).unwrap();
    }

    #[test]
    fn empty_document_yields_defaults() {
        assert_eq!(SiteConfig::from_toml_str("").unwrap(), SiteConfig::default());
    }

    #[test]
    fn partial_reveal_table_keeps_other_defaults() {
        let config = SiteConfig::from_toml_str("[reveal]\nduration_ms = 900\n").unwrap();
        assert_eq!(config.reveal.duration_ms, 900);
        assert_eq!(config.reveal.fallback_ms, 1500);
        assert_eq!(config.reveal.timing().duration, Duration::from_millis(900));
    }

    #[test]
    fn skin_and_locale_parse() {
        let config = SiteConfig::from_toml_str("skin = \"sand\"\nlocale = \"auto\"\n").unwrap();
        assert_eq!(config.skin, Skin::Sand);
        assert_eq!(config.locale, LocalePolicy::Auto);
        assert_eq!(config.skin.css_class(), "skin-sand");
    }

    #[test]
    fn rejects_non_http_links() {
        let err = SiteConfig::from_toml_str("community_url = \"ftp://example.org\"").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "community_url",
                ..
            }
        ));
    }

    #[test]
    fn rejects_zero_fallback_and_bad_threshold() {
        assert!(SiteConfig::from_toml_str("[reveal]\nfallback_ms = 0\n").is_err());
        assert!(SiteConfig::from_toml_str("[reveal]\nthreshold = 1.5\n").is_err());
    }

    #[test]
    fn syntax_errors_surface_as_parse_errors() {
        let err = SiteConfig::from_toml_str("skin = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        let err = SiteConfig::from_toml_str("skin = \"neon\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}

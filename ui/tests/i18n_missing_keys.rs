use std::collections::{BTreeSet, HashSet};

/// Every non-fallback locale must provide at least the keys of the fallback
/// (de-DE) `medina-ui.ftl`, and no file may define a key twice.
///
/// To add a locale:
/// 1. Create `ui/i18n/<locale>/medina-ui.ftl` from `de-DE/medina-ui.ftl`.
/// 2. Register it in `LOCALES` below.
/// 3. Run `cargo test -p medina-ui`.
const DE_DE: &str = include_str!("../i18n/de-DE/medina-ui.ftl");
const EN_US: &str = include_str!("../i18n/en-US/medina-ui.ftl");

const LOCALES: &[(&str, &str)] = &[("en-US", EN_US)];

#[test]
fn all_locales_have_all_fallback_keys() {
    let fallback_keys: HashSet<String> = keys(DE_DE).into_iter().collect();
    assert!(!fallback_keys.is_empty(), "fallback (de-DE) contains no keys");
    assert_no_dup_keys(DE_DE, "de-DE");

    let mut failures = Vec::new();
    for (locale, src) in LOCALES {
        assert_no_dup_keys(src, locale);
        let present: HashSet<String> = keys(src).into_iter().collect();
        let missing: BTreeSet<&String> = fallback_keys.difference(&present).collect();
        if !missing.is_empty() {
            failures.push(format!("{locale} is missing {} key(s): {missing:?}", missing.len()));
        }
    }

    assert!(
        failures.is_empty(),
        "translation completeness check failed:\n{}\nHint: copy the missing keys from de-DE, then translate.",
        failures.join("\n")
    );
}

#[test]
fn copyright_keeps_its_year_placeholder() {
    for (locale, src) in [("de-DE", DE_DE), ("en-US", EN_US)] {
        let line = src
            .lines()
            .find(|line| line.starts_with("footer-copyright"))
            .unwrap_or_else(|| panic!("{locale}: footer-copyright missing"));
        assert!(line.contains("{ $year }"), "{locale}: {line}");
    }
}

/// Keys in definition order (duplicates included).
fn keys(src: &str) -> Vec<String> {
    src.lines()
        .filter(|line| !line.starts_with([' ', '\t']))
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with(['#', '.', '-']))
        .filter_map(|line| line.split_once('='))
        .map(|(key, _)| key.trim())
        .filter(|key| !key.is_empty() && !key.contains([' ', '\t', '[', '@']))
        .map(str::to_string)
        .collect()
}

fn assert_no_dup_keys(src: &str, locale: &str) {
    let mut seen = HashSet::new();
    let dups: BTreeSet<String> = keys(src)
        .into_iter()
        .filter(|key| !seen.insert(key.clone()))
        .collect();
    assert!(dups.is_empty(), "duplicate keys in {locale}: {dups:?}");
}

#[test]
fn fl_domain_matches_ftl_file_names() {
    let manifest_dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    let config: toml::Table =
        toml::from_str(include_str!("../i18n.toml")).expect("i18n.toml parses");
    let fallback = config["fallback_language"]
        .as_str()
        .expect("fallback_language is a string");
    let fluent = config["fluent"].as_table().expect("[fluent] table");
    let assets = fluent["assets_dir"].as_str().expect("assets_dir is a string");
    let domain = fluent
        .get("domain")
        .and_then(|value| value.as_str())
        .expect("[fluent] must set `domain`; the package name would become `medina_ui`");

    assert_eq!(domain, "medina-ui");
    let ftl = manifest_dir
        .join(assets)
        .join(fallback)
        .join(format!("{domain}.ftl"));
    assert!(ftl.is_file(), "fl! would look for {ftl:?}");
}

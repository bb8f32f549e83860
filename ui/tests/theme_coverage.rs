//! The hand-maintained theme must define every utility class the components
//! put on elements. A class without a rule renders silently unstyled, so this
//! test fails instead.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use ui::components::layout::{CARD_BASE, SECTION_BASE, SECTION_INNER};
use ui::components::{button::BUTTON_BASE, ButtonVariant};
use ui::THEME_CSS_INLINE;

/// `.md:px-12` is written `.md\:px-12` in CSS.
fn selector(class: &str) -> String {
    let mut out = String::from(".");
    for c in class.chars() {
        if matches!(c, ':' | '/' | '.' | '[' | ']') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

fn defined(css: &str, class: &str) -> bool {
    let needle = selector(class);
    css.match_indices(&needle).any(|(pos, _)| {
        css[pos + needle.len()..]
            .chars()
            .next()
            .is_some_and(|next| !(next.is_ascii_alphanumeric() || next == '-' || next == '_'))
    })
}

/// Static `class: "..."` literals in component sources (interpolated tokens skipped).
fn literal_classes(root: &Path) -> BTreeSet<String> {
    let mut found = BTreeSet::new();
    let mut stack = vec![root.to_path_buf()];
    let needle = "class: \"";

    while let Some(path) = stack.pop() {
        if path.is_dir() {
            if let Ok(entries) = fs::read_dir(&path) {
                stack.extend(entries.flatten().map(|entry| entry.path()));
            }
            continue;
        }
        if path.extension().and_then(|s| s.to_str()) != Some("rs") {
            continue;
        }
        let content = fs::read_to_string(&path).unwrap_or_default();
        let mut rest = content.as_str();
        while let Some(pos) = rest.find(needle) {
            rest = &rest[pos + needle.len()..];
            let Some(end) = rest.find('"') else { break };
            found.extend(
                rest[..end]
                    .split_whitespace()
                    .filter(|token| !token.contains(['{', '}']))
                    .map(str::to_string),
            );
            rest = &rest[end..];
        }
    }
    found
}

fn assert_all_defined<'a>(classes: impl IntoIterator<Item = &'a str>) {
    let missing: BTreeSet<&str> = classes
        .into_iter()
        .filter(|class| !defined(THEME_CSS_INLINE, class))
        .collect();
    assert!(missing.is_empty(), "classes without a theme rule: {missing:?}");
}

#[test]
fn button_variants_are_styled() {
    let mut classes: Vec<&str> = BUTTON_BASE.split_whitespace().collect();
    for variant in ButtonVariant::ALL {
        classes.extend(variant.classes().split_whitespace());
    }
    assert_all_defined(classes);
}

#[test]
fn layout_containers_are_styled() {
    assert_all_defined(
        [SECTION_BASE, SECTION_INNER, CARD_BASE]
            .iter()
            .flat_map(|s| s.split_whitespace()),
    );
}

#[test]
fn every_literal_class_in_sources_is_styled() {
    let src = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src");
    let classes = literal_classes(&src);
    assert!(classes.contains("font-serif"), "source scan found nothing");
    assert_all_defined(classes.iter().map(String::as_str));
}

#[test]
fn both_skins_define_the_palette() {
    for skin in [".skin-medina", ".skin-sand"] {
        let start = THEME_CSS_INLINE
            .find(&format!("{skin} {{"))
            .or_else(|| THEME_CSS_INLINE.find(&format!("{skin},")))
            .unwrap_or_else(|| panic!("{skin} missing"));
        let block = &THEME_CSS_INLINE[start..];
        let block = &block[..block.find('}').unwrap_or(block.len())];
        for token in ["--color-primary:", "--color-secondary:", "--color-surface:"] {
            assert!(block.contains(token), "{skin} lacks {token}");
        }
    }
}

#[test]
fn selector_escaping_matches_css_syntax() {
    assert_eq!(selector("hover:bg-primary/5"), ".hover\\:bg-primary\\/5");
    assert!(defined(".px-6 { }", "px-6"));
    assert!(!defined(".px-60 { }", "px-6"));
}

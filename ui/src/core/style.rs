//! Class-name composition for utility-styled components.
//!
//! `merge` joins ordered class fragments into a single class string. When two
//! tokens set the same utility property under the same modifier prefix
//! (`hover:`, `md:`, `md:hover:` ...), the token from the later fragment is
//! kept and the earlier one dropped. Shorthands also drop earlier longhands of
//! the same property: `px-2 p-4` becomes `p-4`, while `p-4 px-2` keeps both.
//!
//! Tokens the composer does not recognise never conflict with anything; only
//! exact duplicates collapse (to the last occurrence).
//!
//! ```
//! use ui::core::style::merge;
//!
//! let merged = merge(["px-8 py-3 bg-primary text-white", "", "py-4 bg-secondary"]);
//! assert_eq!(merged, "px-8 text-white py-4 bg-secondary");
//! ```

use std::collections::HashSet;

/// Merge ordered class fragments, later fragments winning conflicts.
pub fn merge<I, S>(fragments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let fragments: Vec<S> = fragments.into_iter().collect();
    let tokens: Vec<&str> = fragments
        .iter()
        .flat_map(|fragment| fragment.as_ref().split_whitespace())
        .collect();

    let mut seen: HashSet<&str> = HashSet::with_capacity(tokens.len());
    let mut claimed: HashSet<ConflictKey> = HashSet::new();
    let mut kept = Vec::with_capacity(tokens.len());

    // Walk from the back so the first claim on a property is the winning one.
    for &token in tokens.iter().rev() {
        if !seen.insert(token) {
            continue;
        }
        if let Some(key) = conflict_key(token) {
            if claimed.contains(&key) {
                continue;
            }
            for longhand in key.group.longhands() {
                claimed.insert(ConflictKey {
                    prefix: key.prefix.clone(),
                    group: *longhand,
                });
            }
            claimed.insert(key);
        }
        kept.push(token);
    }

    kept.reverse();
    kept.join(" ")
}

/// Returns `fragment` when `condition` holds, an empty fragment otherwise.
pub fn when(condition: bool, fragment: &str) -> &str {
    if condition {
        fragment
    } else {
        ""
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct ConflictKey {
    /// Modifier prefix including the important marker, e.g. `md:hover:!`.
    prefix: String,
    group: Group,
}

fn conflict_key(token: &str) -> Option<ConflictKey> {
    let (modifiers, utility) = split_modifiers(token);
    let (important, utility) = match utility.strip_prefix('!') {
        Some(rest) => (true, rest),
        None => (false, utility),
    };
    let utility = utility.strip_prefix('-').unwrap_or(utility);
    let group = group_of(utility)?;

    let mut prefix = modifiers.to_string();
    if important {
        prefix.push('!');
    }
    Some(ConflictKey { prefix, group })
}

/// Splits `md:hover:bg-white/10` into (`md:hover:`, `bg-white/10`). Colons
/// inside arbitrary values (`bg-[url(https://...)]`) are not modifier separators.
fn split_modifiers(token: &str) -> (&str, &str) {
    let mut depth = 0i32;
    let mut split = 0;
    for (idx, ch) in token.char_indices() {
        match ch {
            '[' => depth += 1,
            ']' => depth -= 1,
            ':' if depth == 0 => split = idx + 1,
            _ => {}
        }
    }
    token.split_at(split)
}

/// Utility properties that can conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Group {
    Display,
    Position,
    FlexDirection,
    FlexWrap,
    Flex,
    Grow,
    Shrink,
    Basis,
    Order,
    AlignItems,
    AlignSelf,
    AlignContent,
    JustifyContent,
    GridCols,
    GridRows,
    ColSpan,
    RowSpan,
    Gap,
    GapX,
    GapY,
    SpaceX,
    SpaceY,
    Padding,
    PaddingX,
    PaddingY,
    PaddingTop,
    PaddingRight,
    PaddingBottom,
    PaddingLeft,
    Margin,
    MarginX,
    MarginY,
    MarginTop,
    MarginRight,
    MarginBottom,
    MarginLeft,
    Width,
    Height,
    MinWidth,
    MinHeight,
    MaxWidth,
    MaxHeight,
    Inset,
    InsetX,
    InsetY,
    Top,
    Right,
    Bottom,
    Left,
    ZIndex,
    Overflow,
    OverflowX,
    OverflowY,
    FontSize,
    FontWeight,
    FontFamily,
    FontStyle,
    FontSmoothing,
    TextColor,
    TextAlign,
    TextWrap,
    TextTransform,
    TextDecoration,
    LineHeight,
    LetterSpacing,
    Whitespace,
    BgColor,
    BgImage,
    BgSize,
    BgPosition,
    BgRepeat,
    BgAttachment,
    GradientFrom,
    GradientVia,
    GradientTo,
    BorderWidth,
    BorderWidthX,
    BorderWidthY,
    BorderWidthTop,
    BorderWidthRight,
    BorderWidthBottom,
    BorderWidthLeft,
    BorderColor,
    BorderStyle,
    Radius,
    RadiusTop,
    RadiusRight,
    RadiusBottom,
    RadiusLeft,
    RadiusTopLeft,
    RadiusTopRight,
    RadiusBottomRight,
    RadiusBottomLeft,
    Shadow,
    ShadowColor,
    Opacity,
    BlendMode,
    Transition,
    Duration,
    Easing,
    Delay,
    TranslateX,
    TranslateY,
    Scale,
    ScaleX,
    ScaleY,
    Rotate,
    Cursor,
    Aspect,
    ScreenReader,
}

impl Group {
    /// Groups overridden by this one when it appears later.
    fn longhands(self) -> &'static [Group] {
        use Group::*;
        match self {
            Padding => &[
                PaddingX,
                PaddingY,
                PaddingTop,
                PaddingRight,
                PaddingBottom,
                PaddingLeft,
            ],
            PaddingX => &[PaddingRight, PaddingLeft],
            PaddingY => &[PaddingTop, PaddingBottom],
            Margin => &[
                MarginX,
                MarginY,
                MarginTop,
                MarginRight,
                MarginBottom,
                MarginLeft,
            ],
            MarginX => &[MarginRight, MarginLeft],
            MarginY => &[MarginTop, MarginBottom],
            Gap => &[GapX, GapY],
            Inset => &[InsetX, InsetY, Top, Right, Bottom, Left],
            InsetX => &[Right, Left],
            InsetY => &[Top, Bottom],
            Overflow => &[OverflowX, OverflowY],
            BorderWidth => &[
                BorderWidthX,
                BorderWidthY,
                BorderWidthTop,
                BorderWidthRight,
                BorderWidthBottom,
                BorderWidthLeft,
            ],
            BorderWidthX => &[BorderWidthRight, BorderWidthLeft],
            BorderWidthY => &[BorderWidthTop, BorderWidthBottom],
            Radius => &[
                RadiusTop,
                RadiusRight,
                RadiusBottom,
                RadiusLeft,
                RadiusTopLeft,
                RadiusTopRight,
                RadiusBottomRight,
                RadiusBottomLeft,
            ],
            RadiusTop => &[RadiusTopLeft, RadiusTopRight],
            RadiusRight => &[RadiusTopRight, RadiusBottomRight],
            RadiusBottom => &[RadiusBottomRight, RadiusBottomLeft],
            RadiusLeft => &[RadiusTopLeft, RadiusBottomLeft],
            Scale => &[ScaleX, ScaleY],
            _ => &[],
        }
    }
}

/// Prefix-dispatched utilities. Longer prefixes come first where one is a
/// prefix of another (`gap-x` before `gap`).
const PREFIXED: &[(&str, Group)] = &[
    ("min-w", Group::MinWidth),
    ("min-h", Group::MinHeight),
    ("max-w", Group::MaxWidth),
    ("max-h", Group::MaxHeight),
    ("gap-x", Group::GapX),
    ("gap-y", Group::GapY),
    ("gap", Group::Gap),
    ("space-x", Group::SpaceX),
    ("space-y", Group::SpaceY),
    ("px", Group::PaddingX),
    ("py", Group::PaddingY),
    ("pt", Group::PaddingTop),
    ("pr", Group::PaddingRight),
    ("pb", Group::PaddingBottom),
    ("pl", Group::PaddingLeft),
    ("p", Group::Padding),
    ("mx", Group::MarginX),
    ("my", Group::MarginY),
    ("mt", Group::MarginTop),
    ("mr", Group::MarginRight),
    ("mb", Group::MarginBottom),
    ("ml", Group::MarginLeft),
    ("m", Group::Margin),
    ("w", Group::Width),
    ("h", Group::Height),
    ("inset-x", Group::InsetX),
    ("inset-y", Group::InsetY),
    ("inset", Group::Inset),
    ("top", Group::Top),
    ("right", Group::Right),
    ("bottom", Group::Bottom),
    ("left", Group::Left),
    ("z", Group::ZIndex),
    ("items", Group::AlignItems),
    ("self", Group::AlignSelf),
    ("content", Group::AlignContent),
    ("justify", Group::JustifyContent),
    ("grid-cols", Group::GridCols),
    ("grid-rows", Group::GridRows),
    ("col-span", Group::ColSpan),
    ("row-span", Group::RowSpan),
    ("flex", Group::Flex),
    ("grow", Group::Grow),
    ("shrink", Group::Shrink),
    ("basis", Group::Basis),
    ("order", Group::Order),
    ("leading", Group::LineHeight),
    ("tracking", Group::LetterSpacing),
    ("whitespace", Group::Whitespace),
    ("opacity", Group::Opacity),
    ("mix-blend", Group::BlendMode),
    ("duration", Group::Duration),
    ("ease", Group::Easing),
    ("delay", Group::Delay),
    ("translate-x", Group::TranslateX),
    ("translate-y", Group::TranslateY),
    ("scale-x", Group::ScaleX),
    ("scale-y", Group::ScaleY),
    ("scale", Group::Scale),
    ("rotate", Group::Rotate),
    ("overflow-x", Group::OverflowX),
    ("overflow-y", Group::OverflowY),
    ("overflow", Group::Overflow),
    ("cursor", Group::Cursor),
    ("aspect", Group::Aspect),
    ("from", Group::GradientFrom),
    ("via", Group::GradientVia),
    ("to", Group::GradientTo),
];

fn group_of(utility: &str) -> Option<Group> {
    if let Some(group) = keyword_group(utility) {
        return Some(group);
    }
    if let Some(value) = utility.strip_prefix("text-") {
        return text_group(value);
    }
    if let Some(value) = utility.strip_prefix("font-") {
        return font_group(value);
    }
    if let Some(value) = utility.strip_prefix("bg-") {
        return background_group(value);
    }
    if let Some(value) = utility.strip_prefix("border-") {
        return border_group(value);
    }
    if let Some(value) = utility.strip_prefix("rounded-") {
        return radius_group(value);
    }
    if let Some(value) = utility.strip_prefix("shadow-") {
        return Some(if is_color(value) {
            Group::ShadowColor
        } else {
            Group::Shadow
        });
    }

    PREFIXED.iter().find_map(|(prefix, group)| {
        utility
            .strip_prefix(prefix)
            .and_then(|rest| rest.strip_prefix('-'))
            .filter(|value| !value.is_empty())
            .map(|_| *group)
    })
}

fn keyword_group(utility: &str) -> Option<Group> {
    let group = match utility {
        "block" | "inline-block" | "inline" | "flex" | "inline-flex" | "grid" | "inline-grid"
        | "hidden" | "contents" | "table" => Group::Display,
        "static" | "fixed" | "absolute" | "relative" | "sticky" => Group::Position,
        "flex-row" | "flex-row-reverse" | "flex-col" | "flex-col-reverse" => Group::FlexDirection,
        "flex-wrap" | "flex-nowrap" | "flex-wrap-reverse" => Group::FlexWrap,
        "grow" => Group::Grow,
        "shrink" => Group::Shrink,
        "italic" | "not-italic" => Group::FontStyle,
        "antialiased" | "subpixel-antialiased" => Group::FontSmoothing,
        "uppercase" | "lowercase" | "capitalize" | "normal-case" => Group::TextTransform,
        "underline" | "overline" | "line-through" | "no-underline" => Group::TextDecoration,
        "transition" | "transition-none" | "transition-all" | "transition-colors"
        | "transition-opacity" | "transition-shadow" | "transition-transform" => Group::Transition,
        "border" => Group::BorderWidth,
        "rounded" => Group::Radius,
        "shadow" => Group::Shadow,
        "sr-only" | "not-sr-only" => Group::ScreenReader,
        _ => return None,
    };
    Some(group)
}

fn text_group(value: &str) -> Option<Group> {
    match value {
        "xs" | "sm" | "base" | "lg" | "xl" | "2xl" | "3xl" | "4xl" | "5xl" | "6xl" | "7xl"
        | "8xl" | "9xl" => Some(Group::FontSize),
        "left" | "center" | "right" | "justify" | "start" | "end" => Some(Group::TextAlign),
        "wrap" | "nowrap" | "balance" | "pretty" => Some(Group::TextWrap),
        _ => match arbitrary(value) {
            Some(inner) if is_length(inner) => Some(Group::FontSize),
            _ if is_color(value) => Some(Group::TextColor),
            _ => None,
        },
    }
}

fn font_group(value: &str) -> Option<Group> {
    match value {
        "thin" | "extralight" | "light" | "normal" | "medium" | "semibold" | "bold"
        | "extrabold" | "black" => Some(Group::FontWeight),
        "sans" | "serif" | "mono" => Some(Group::FontFamily),
        _ => None,
    }
}

fn background_group(value: &str) -> Option<Group> {
    match value {
        "auto" | "cover" | "contain" => return Some(Group::BgSize),
        "bottom" | "center" | "left" | "left-bottom" | "left-top" | "right" | "right-bottom"
        | "right-top" | "top" => return Some(Group::BgPosition),
        "repeat" | "no-repeat" | "repeat-x" | "repeat-y" | "repeat-round" | "repeat-space" => {
            return Some(Group::BgRepeat)
        }
        "fixed" | "local" | "scroll" => return Some(Group::BgAttachment),
        "none" => return Some(Group::BgImage),
        _ => {}
    }
    if value.starts_with("gradient-to-") {
        return Some(Group::BgImage);
    }
    if let Some(inner) = arbitrary(value) {
        if inner.starts_with("url(") || inner.contains("gradient(") {
            return Some(Group::BgImage);
        }
    }
    is_color(value).then_some(Group::BgColor)
}

fn border_group(value: &str) -> Option<Group> {
    match value {
        "solid" | "dashed" | "dotted" | "double" | "hidden" | "none" => {
            return Some(Group::BorderStyle)
        }
        _ => {}
    }
    if is_width(value) {
        return Some(Group::BorderWidth);
    }

    let (side, rest) = match value.split_once('-') {
        Some((side, rest)) => (side, Some(rest)),
        None => (value, None),
    };
    let side_group = match side {
        "x" => Group::BorderWidthX,
        "y" => Group::BorderWidthY,
        "t" => Group::BorderWidthTop,
        "r" => Group::BorderWidthRight,
        "b" => Group::BorderWidthBottom,
        "l" => Group::BorderWidthLeft,
        _ => return is_color(value).then_some(Group::BorderColor),
    };
    match rest {
        None => Some(side_group),
        Some(width) if is_width(width) => Some(side_group),
        // Per-side colours are rare enough to pass through untouched.
        Some(_) => None,
    }
}

fn radius_group(value: &str) -> Option<Group> {
    const SIZES: &[&str] = &["none", "sm", "md", "lg", "xl", "2xl", "3xl", "full"];
    if SIZES.contains(&value) || arbitrary(value).is_some() {
        return Some(Group::Radius);
    }

    let (corner, size) = match value.split_once('-') {
        Some((corner, size)) => (corner, Some(size)),
        None => (value, None),
    };
    if let Some(size) = size {
        if !SIZES.contains(&size) && arbitrary(size).is_none() {
            return None;
        }
    }
    match corner {
        "t" => Some(Group::RadiusTop),
        "r" => Some(Group::RadiusRight),
        "b" => Some(Group::RadiusBottom),
        "l" => Some(Group::RadiusLeft),
        "tl" => Some(Group::RadiusTopLeft),
        "tr" => Some(Group::RadiusTopRight),
        "br" => Some(Group::RadiusBottomRight),
        "bl" => Some(Group::RadiusBottomLeft),
        _ => None,
    }
}

/// Theme colour tokens defined by the stylesheet.
const THEME_COLORS: &[&str] = &[
    "primary",
    "primary-hover",
    "secondary",
    "secondary-hover",
    "accent",
    "surface",
    "muted",
    "muted-foreground",
    "foreground",
    "background",
];

const SPECIAL_COLORS: &[&str] = &["inherit", "current", "transparent", "black", "white"];

const PALETTE: &[&str] = &[
    "slate", "gray", "zinc", "neutral", "stone", "red", "orange", "amber", "yellow", "lime",
    "green", "emerald", "teal", "cyan", "sky", "blue", "indigo", "violet", "purple", "fuchsia",
    "pink", "rose",
];

fn is_color(value: &str) -> bool {
    let value = strip_opacity(value);
    if let Some(inner) = arbitrary(value) {
        return inner.starts_with('#')
            || inner.starts_with("rgb")
            || inner.starts_with("hsl")
            || inner.starts_with("color:");
    }
    if THEME_COLORS.contains(&value) || SPECIAL_COLORS.contains(&value) {
        return true;
    }
    match value.split_once('-') {
        Some((hue, shade)) => {
            PALETTE.contains(&hue) && !shade.is_empty() && shade.bytes().all(|b| b.is_ascii_digit())
        }
        None => false,
    }
}

/// `primary/5` -> `primary`, `[#1A3C34]/80` -> `[#1A3C34]`.
fn strip_opacity(value: &str) -> &str {
    let closing = value.rfind(']');
    match value.rfind('/') {
        Some(slash) if closing.map_or(true, |close| slash > close) => &value[..slash],
        _ => value,
    }
}

fn arbitrary(value: &str) -> Option<&str> {
    value.strip_prefix('[')?.strip_suffix(']')
}

fn is_length(inner: &str) -> bool {
    inner.starts_with(|c: char| c.is_ascii_digit() || c == '.')
        || inner.starts_with("length:")
        || inner.starts_with("calc(")
        || inner.starts_with("clamp(")
}

fn is_width(value: &str) -> bool {
    (!value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()))
        || arbitrary(value).is_some_and(is_length)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_background_wins() {
        assert_eq!(merge(["bg-primary text-white", "bg-secondary"]), "text-white bg-secondary");
    }

    #[test]
    fn empty_and_whitespace_fragments_are_skipped() {
        assert_eq!(merge(["", "  px-4 ", "", "\tpy-2"]), "px-4 py-2");
        assert_eq!(merge(Vec::<String>::new()), "");
    }

    #[test]
    fn exact_duplicates_collapse_to_last_position() {
        assert_eq!(merge(["reveal card", "card extra"]), "reveal card extra");
    }

    #[test]
    fn text_size_colour_and_alignment_are_independent() {
        assert_eq!(
            merge(["text-sm text-white text-center", "text-lg"]),
            "text-white text-center text-lg"
        );
        assert_eq!(
            merge(["text-sm text-white", "text-primary/80"]),
            "text-sm text-primary/80"
        );
    }

    #[test]
    fn modifiers_scope_conflicts() {
        assert_eq!(
            merge(["bg-primary hover:bg-primary-hover", "hover:bg-white/10"]),
            "bg-primary hover:bg-white/10"
        );
        assert_eq!(merge(["px-6 md:px-12", "px-4"]), "md:px-12 px-4");
    }

    #[test]
    fn shorthand_overrides_earlier_longhand_only() {
        assert_eq!(merge(["px-2 py-1", "p-4"]), "p-4");
        assert_eq!(merge(["p-4", "px-2"]), "p-4 px-2");
        assert_eq!(merge(["rounded-t-md", "rounded-lg"]), "rounded-lg");
        assert_eq!(merge(["border-t", "border-2"]), "border-2");
    }

    #[test]
    fn border_width_and_colour_do_not_conflict() {
        assert_eq!(
            merge(["border border-primary text-primary", "border-white text-white"]),
            "border border-white text-white"
        );
    }

    #[test]
    fn background_image_size_and_colour_are_distinct() {
        let merged = merge([
            "bg-[#1A3C34] bg-cover bg-center",
            "bg-[url('https://images.example/medina.jpg')]",
        ]);
        assert_eq!(
            merged,
            "bg-[#1A3C34] bg-cover bg-center bg-[url('https://images.example/medina.jpg')]"
        );
        assert_eq!(merge(["bg-[#1A3C34]", "bg-surface"]), "bg-surface");
    }

    #[test]
    fn display_keywords_conflict() {
        assert_eq!(merge(["flex items-center", "hidden"]), "items-center hidden");
        assert_eq!(merge(["flex flex-col", "flex-row"]), "flex flex-row");
    }

    #[test]
    fn negative_values_share_the_positive_group() {
        assert_eq!(merge(["mt-4", "-mt-2"]), "-mt-2");
        assert_eq!(
            merge(["hover:-translate-y-1", "hover:translate-y-0"]),
            "hover:translate-y-0"
        );
    }

    #[test]
    fn important_marker_is_its_own_scope() {
        assert_eq!(merge(["!p-4", "p-2"]), "!p-4 p-2");
    }

    #[test]
    fn unknown_utilities_pass_through() {
        assert_eq!(merge(["group reveal", "font-custom"]), "group reveal font-custom");
    }

    #[test]
    fn conditional_fragments() {
        assert_eq!(merge(["card", when(false, "card--active")]), "card");
        assert_eq!(merge(["card", when(true, "card--active")]), "card card--active");
    }

    #[test]
    fn arbitrary_values_keep_inner_colons() {
        assert_eq!(
            split_modifiers("md:bg-[url(https://x.test/a.jpg)]"),
            ("md:", "bg-[url(https://x.test/a.jpg)]")
        );
    }
}

//! Width, height and their min/max bounds.

use super::{keyword, ParserContext};
use crate::style::{Category, ParsedValue, ResolvedStyle};

pub const PREFIXES: &[&str] = &["w-", "h-", "min-w-", "max-w-", "min-h-", "max-h-", "size-"];

const PROPERTIES: &[(&str, &str)] = &[
    ("min-w-", "minWidth"),
    ("max-w-", "maxWidth"),
    ("min-h-", "minHeight"),
    ("max-h-", "maxHeight"),
    ("size-", "size"),
    ("w-", "width"),
    ("h-", "height"),
];

const INTRINSIC: &[(&str, &str)] = &[
    ("auto", "auto"),
    ("min", "min-content"),
    ("max", "max-content"),
    ("fit", "fit-content"),
    ("none", "none"),
];

fn screen(property: &str) -> &'static str {
    if matches!(property, "height" | "minHeight" | "maxHeight") {
        "100vh"
    } else {
        "100vw"
    }
}

pub fn parse_value(base: &str, ctx: &ParserContext) -> Option<ResolvedStyle> {
    let (prop, val) = PROPERTIES
        .iter()
        .find_map(|(prefix, prop)| base.strip_prefix(prefix).map(|v| (*prop, v)))?;

    let parsed = match val {
        "screen" if prop != "size" => ParsedValue::preset(screen(prop)),
        "none" if !prop.starts_with("max") => return None,
        _ => match keyword(INTRINSIC, val) {
            Some(kw) => ParsedValue::preset(kw),
            None if prop == "maxWidth" => match ctx.preset.containers.get(val) {
                Some(px) => ParsedValue::preset(*px),
                None => ctx.length(val)?,
            },
            None => ctx.length(val)?,
        },
    };
    Some(ResolvedStyle::new(Category::Sizing, prop, parsed))
}

pub fn expand(property: &str) -> Option<&'static [&'static str]> {
    match property {
        "size" => Some(&["width", "height"]),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::parse;
    use super::*;
    use crate::style::StyleValue;

    #[test]
    fn widths_and_heights() {
        assert_eq!(parse(parse_value, "w-4"), Some(("width", StyleValue::Number(16.0))));
        assert_eq!(parse(parse_value, "h-full"), Some(("height", StyleValue::text("100%"))));
        assert_eq!(parse(parse_value, "w-1/3"), Some(("width", StyleValue::text("33.333333%"))));
        assert_eq!(parse(parse_value, "w-screen"), Some(("width", StyleValue::text("100vw"))));
        assert_eq!(parse(parse_value, "min-h-screen"), Some(("minHeight", StyleValue::text("100vh"))));
        assert_eq!(parse(parse_value, "w-fit"), Some(("width", StyleValue::text("fit-content"))));
        assert_eq!(parse(parse_value, "w-[calc(100%_-_2rem)]"), Some(("width", StyleValue::text("calc(100% - 2rem)"))));
    }

    #[test]
    fn max_width_containers() {
        assert_eq!(parse(parse_value, "max-w-md"), Some(("maxWidth", StyleValue::Number(448.0))));
        assert_eq!(parse(parse_value, "max-w-none"), Some(("maxWidth", StyleValue::text("none"))));
        assert_eq!(parse(parse_value, "w-none"), None);
        assert_eq!(parse(parse_value, "w-md"), None);
    }

    #[test]
    fn size_sets_both_axes() {
        assert_eq!(parse(parse_value, "size-8"), Some(("size", StyleValue::Number(32.0))));
        assert_eq!(expand("size"), Some(&["width", "height"][..]));
        assert_eq!(parse(parse_value, "size-screen"), None);
    }

    #[test]
    fn negative_widths_rejected() {
        assert_eq!(parse(parse_value, "-w-4"), None);
        assert_eq!(parse(parse_value, "w-[-4px]"), None);
    }
}

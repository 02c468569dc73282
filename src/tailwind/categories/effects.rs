//! Box shadows, opacity and blend modes.

use super::{keyword, ParserContext};
use crate::preset::DEFAULT_KEY;
use crate::style::{Category, ParsedValue, ResolvedStyle, StyleValue};
use crate::tailwind::value::ArbitraryOptions;

pub const PREFIXES: &[&str] = &["shadow", "shadow-", "opacity-", "mix-blend-", "bg-blend-"];

const BLEND_MODES: &[(&str, &str)] = &[
    ("normal", "normal"),
    ("multiply", "multiply"),
    ("screen", "screen"),
    ("overlay", "overlay"),
    ("darken", "darken"),
    ("lighten", "lighten"),
    ("color-dodge", "color-dodge"),
    ("color-burn", "color-burn"),
    ("hard-light", "hard-light"),
    ("soft-light", "soft-light"),
    ("difference", "difference"),
    ("exclusion", "exclusion"),
    ("hue", "hue"),
    ("saturation", "saturation"),
    ("color", "color"),
    ("luminosity", "luminosity"),
    ("plus-lighter", "plus-lighter"),
];

/// `shadow`, `shadow-md`, `shadow-none` → list of layers.
pub(crate) fn shadow_layers(key: &str, ctx: &ParserContext) -> Option<StyleValue> {
    if key == "none" {
        return Some(StyleValue::List(Vec::new()));
    }
    let layers = ctx.preset.shadows.get(key)?;
    Some(StyleValue::List(layers.iter().map(|layer| layer.to_value()).collect()))
}

fn style(prop: &'static str, parsed: ParsedValue) -> Option<ResolvedStyle> {
    Some(ResolvedStyle::new(Category::Effects, prop, parsed))
}

pub fn parse_value(base: &str, ctx: &ParserContext) -> Option<ResolvedStyle> {
    if base == "shadow" {
        return style("boxShadow", ParsedValue::preset(shadow_layers(DEFAULT_KEY, ctx)?));
    }
    if let Some(val) = base.strip_prefix("shadow-") {
        if let Some(layers) = shadow_layers(val, ctx) {
            return style("boxShadow", ParsedValue::preset(layers));
        }
        if let Some(color) = ctx.color(val) {
            return style("shadowColor", color);
        }
        return style("boxShadow", ctx.arbitrary_value(val, ArbitraryOptions::RAW)?);
    }
    if let Some(val) = base.strip_prefix("opacity-") {
        return style("opacity", opacity(val, ctx)?);
    }
    if let Some(val) = base.strip_prefix("mix-blend-") {
        return style("mixBlendMode", ParsedValue::preset(keyword(BLEND_MODES, val)?));
    }
    if let Some(val) = base.strip_prefix("bg-blend-") {
        return style("backgroundBlendMode", ParsedValue::preset(keyword(BLEND_MODES, val)?));
    }
    None
}

/// Opacity step (`50` → 0.5), arbitrary fraction or variable.
pub(crate) fn opacity(val: &str, ctx: &ParserContext) -> Option<ParsedValue> {
    if let Some(variable) = ctx.variable(val) {
        return Some(variable);
    }
    if val.starts_with('[') {
        let parsed = ctx.arbitrary_value(val, ArbitraryOptions::LENGTHS)?;
        return parsed
            .value
            .as_number()
            .filter(|n| (0.0..=1.0).contains(n))
            .map(|_| parsed);
    }
    ctx.preset.opacity.get(val).copied().map(ParsedValue::preset)
}

#[cfg(test)]
mod tests {
    use super::super::test_support::parse;
    use super::*;

    #[test]
    fn shadow_presets() {
        let (prop, value) = parse(parse_value, "shadow").unwrap();
        assert_eq!(prop, "boxShadow");
        let StyleValue::List(layers) = value else {
            panic!("expected a layer list");
        };
        assert_eq!(layers.len(), 2);
        assert_eq!(layers[0].get_path("type"), Some(&StyleValue::text("DROP_SHADOW")));

        let (_, inner) = parse(parse_value, "shadow-inner").unwrap();
        let StyleValue::List(layers) = inner else {
            panic!("expected a layer list");
        };
        assert_eq!(layers[0].get_path("type"), Some(&StyleValue::text("INNER_SHADOW")));

        assert_eq!(parse(parse_value, "shadow-none"), Some(("boxShadow", StyleValue::List(vec![]))));
    }

    #[test]
    fn shadow_color() {
        let (prop, value) = parse(parse_value, "shadow-red-500/25").unwrap();
        assert_eq!(prop, "shadowColor");
        assert_eq!(value.as_color().unwrap().opacity, Some(0.25));
        assert_eq!(parse(parse_value, "shadow-huge"), None);
    }

    #[test]
    fn opacity_steps() {
        assert_eq!(parse(parse_value, "opacity-50"), Some(("opacity", StyleValue::Number(0.5))));
        assert_eq!(parse(parse_value, "opacity-0"), Some(("opacity", StyleValue::Number(0.0))));
        assert_eq!(parse(parse_value, "opacity-[.67]"), Some(("opacity", StyleValue::Number(0.67))));
        assert_eq!(parse(parse_value, "opacity-[2]"), None);
        assert_eq!(parse(parse_value, "opacity-33"), None);
    }

    #[test]
    fn blend_modes() {
        assert_eq!(parse(parse_value, "mix-blend-multiply"), Some(("mixBlendMode", StyleValue::text("multiply"))));
        assert_eq!(parse(parse_value, "bg-blend-color-dodge"), Some(("backgroundBlendMode", StyleValue::text("color-dodge"))));
    }
}

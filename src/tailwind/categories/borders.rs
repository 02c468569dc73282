//! Border widths, colors and styles, corner radii and outlines.

use super::{keyword, ParserContext};
use crate::preset::DEFAULT_KEY;
use crate::style::{Category, ParsedValue, ResolvedStyle};
use crate::tailwind::value::{ArbitraryOptions, ArbitraryValue};

pub const PREFIXES: &[&str] = &["border", "border-", "rounded", "rounded-", "outline", "outline-"];

const BORDER_STYLES: &[(&str, &str)] = &[
    ("solid", "solid"),
    ("dashed", "dashed"),
    ("dotted", "dotted"),
    ("double", "double"),
    ("hidden", "hidden"),
    ("none", "none"),
];

/// Side suffix → (width property, color property).
const SIDES: &[(&str, &str, &str)] = &[
    ("x", "borderXWidth", "borderXColor"),
    ("y", "borderYWidth", "borderYColor"),
    ("t", "borderTopWidth", "borderTopColor"),
    ("r", "borderRightWidth", "borderRightColor"),
    ("b", "borderBottomWidth", "borderBottomColor"),
    ("l", "borderLeftWidth", "borderLeftColor"),
    ("s", "borderLeftWidth", "borderLeftColor"),
    ("e", "borderRightWidth", "borderRightColor"),
];

/// Corner suffix → comma-joined radius properties.
const CORNERS: &[(&str, &str)] = &[
    ("t", "borderTopLeftRadius, borderTopRightRadius"),
    ("r", "borderTopRightRadius, borderBottomRightRadius"),
    ("b", "borderBottomRightRadius, borderBottomLeftRadius"),
    ("l", "borderTopLeftRadius, borderBottomLeftRadius"),
    ("tl", "borderTopLeftRadius"),
    ("tr", "borderTopRightRadius"),
    ("br", "borderBottomRightRadius"),
    ("bl", "borderBottomLeftRadius"),
];

const OUTLINE_STYLES: &[(&str, &str)] = &[
    ("none", "none"),
    ("dashed", "dashed"),
    ("dotted", "dotted"),
    ("double", "double"),
];

fn style(prop: &'static str, parsed: ParsedValue) -> Option<ResolvedStyle> {
    Some(ResolvedStyle::new(Category::Borders, prop, parsed))
}

/// Preset border width (`""` is the default width) or an arbitrary length.
/// Design variables are colors here, never widths.
fn width(val: &str, ctx: &ParserContext) -> Option<ParsedValue> {
    let key = if val.is_empty() { DEFAULT_KEY } else { val };
    if let Some(px) = ctx.preset.border_widths.get(key) {
        return Some(ParsedValue::preset(*px));
    }
    match ctx.arbitrary(val, ArbitraryOptions::LENGTHS)? {
        ArbitraryValue::Length(px) => Some(ParsedValue::arbitrary(px)),
        _ => None,
    }
}

fn border(rest: &str, ctx: &ParserContext) -> Option<ResolvedStyle> {
    if let Some(kind) = keyword(BORDER_STYLES, rest) {
        return style("borderStyle", ParsedValue::preset(kind));
    }

    // `border-t`, `border-t-2`, `border-t-red-500`
    let side = SIDES.iter().find_map(|(suffix, width_prop, color_prop)| {
        if rest == *suffix {
            Some((*width_prop, *color_prop, ""))
        } else {
            rest.strip_prefix(suffix)?
                .strip_prefix('-')
                .map(|v| (*width_prop, *color_prop, v))
        }
    });
    let (width_prop, color_prop, val) = side.unwrap_or(("borderWidth", "borderColor", rest));
    if val.is_empty() && width_prop == "borderWidth" {
        return None;
    }

    if let Some(px) = width(val, ctx) {
        return style(width_prop, px);
    }
    style(color_prop, ctx.color(val)?)
}

fn radius(val: &str, ctx: &ParserContext) -> Option<ParsedValue> {
    let key = if val.is_empty() { DEFAULT_KEY } else { val };
    if let Some(px) = ctx.preset.radius.get(key) {
        return Some(ParsedValue::preset(*px));
    }
    if let Some(variable) = ctx.variable(val) {
        return Some(variable);
    }
    ctx.arbitrary_value(val, ArbitraryOptions::SIZES)
}

fn rounded(rest: &str, ctx: &ParserContext) -> Option<ResolvedStyle> {
    // `rest` is "" for `rounded`, otherwise whatever followed `rounded-`.
    let corner = CORNERS.iter().find_map(|(suffix, props)| {
        if rest == *suffix {
            Some((*props, ""))
        } else {
            rest.strip_prefix(suffix)?
                .strip_prefix('-')
                .map(|v| (*props, v))
        }
    });
    let (props, val) = corner.unwrap_or(("borderRadius", rest));
    style(props, radius(val, ctx)?)
}

fn outline(rest: &str, ctx: &ParserContext) -> Option<ResolvedStyle> {
    if let Some(kind) = keyword(OUTLINE_STYLES, rest) {
        return style("outlineStyle", ParsedValue::preset(kind));
    }
    if let Some(offset) = rest.strip_prefix("offset-") {
        return style("outlineOffset", width(offset, ctx).or_else(|| ctx.variable(offset))?);
    }
    if let Some(px) = width(rest, ctx) {
        return style("outlineWidth", px);
    }
    style("outlineColor", ctx.color(rest)?)
}

pub fn parse_value(base: &str, ctx: &ParserContext) -> Option<ResolvedStyle> {
    match base {
        "border" => return style("borderWidth", width("", ctx)?),
        "rounded" => return rounded("", ctx),
        "outline" => return style("outlineStyle", ParsedValue::preset("solid")),
        _ => {}
    }
    if let Some(rest) = base.strip_prefix("border-") {
        return border(rest, ctx);
    }
    if let Some(rest) = base.strip_prefix("rounded-") {
        return rounded(rest, ctx);
    }
    outline(base.strip_prefix("outline-")?, ctx)
}

pub fn expand(property: &str) -> Option<&'static [&'static str]> {
    match property {
        "borderWidth" => Some(&[
            "borderTopWidth",
            "borderRightWidth",
            "borderBottomWidth",
            "borderLeftWidth",
        ]),
        "borderColor" => Some(&[
            "borderTopColor",
            "borderRightColor",
            "borderBottomColor",
            "borderLeftColor",
        ]),
        "borderXWidth" => Some(&["borderLeftWidth", "borderRightWidth"]),
        "borderYWidth" => Some(&["borderTopWidth", "borderBottomWidth"]),
        "borderXColor" => Some(&["borderLeftColor", "borderRightColor"]),
        "borderYColor" => Some(&["borderTopColor", "borderBottomColor"]),
        "borderRadius" => Some(&[
            "borderTopLeftRadius",
            "borderTopRightRadius",
            "borderBottomRightRadius",
            "borderBottomLeftRadius",
        ]),
        _ => None,
    }
}

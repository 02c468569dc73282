//! Scale, rotate, translate, skew and transform origin.

use super::{keyword, percent, strip_negative, ParserContext};
use crate::style::{Category, ParsedValue, ResolvedStyle};
use crate::tailwind::value::{negate, ArbitraryOptions};

pub const PREFIXES: &[&str] = &[
    "scale-",
    "rotate-",
    "translate-x-",
    "translate-y-",
    "skew-x-",
    "skew-y-",
    "origin-",
    "transform",
    "transform-none",
];

const ORIGINS: &[(&str, &str)] = &[
    ("center", "center"),
    ("top", "top"),
    ("top-right", "top right"),
    ("right", "right"),
    ("bottom-right", "bottom right"),
    ("bottom", "bottom"),
    ("bottom-left", "bottom left"),
    ("left", "left"),
    ("top-left", "top left"),
];

fn style(prop: &'static str, parsed: ParsedValue) -> Option<ResolvedStyle> {
    Some(ResolvedStyle::new(Category::Transforms, prop, parsed))
}

fn scale(val: &str, ctx: &ParserContext) -> Option<ParsedValue> {
    if let Some(variable) = ctx.variable(val) {
        return Some(variable);
    }
    if val.starts_with('[') {
        return ctx.arbitrary_value(val, ArbitraryOptions::LENGTHS);
    }
    percent(val).map(ParsedValue::preset)
}

fn translate(val: &str, ctx: &ParserContext) -> Option<ParsedValue> {
    if val.starts_with('[') {
        return ctx.arbitrary_value(val, ArbitraryOptions::SIZES.negative());
    }
    ctx.length(val)
}

pub fn parse_value(base: &str, ctx: &ParserContext) -> Option<ResolvedStyle> {
    match base {
        "transform" => return style("transform", ParsedValue::preset("auto")),
        "transform-none" => return style("transform", ParsedValue::preset("none")),
        _ => {}
    }
    if let Some(val) = base.strip_prefix("origin-") {
        if let Some(origin) = keyword(ORIGINS, val) {
            return style("transformOrigin", ParsedValue::preset(origin));
        }
        return style("transformOrigin", ctx.arbitrary_value(val, ArbitraryOptions::RAW)?);
    }

    let (negative, class) = strip_negative(base);
    let (prop, parsed) = if let Some(val) = class.strip_prefix("scale-x-") {
        ("scaleX", scale(val, ctx)?)
    } else if let Some(val) = class.strip_prefix("scale-y-") {
        ("scaleY", scale(val, ctx)?)
    } else if let Some(val) = class.strip_prefix("scale-") {
        ("scale", scale(val, ctx)?)
    } else if let Some(val) = class.strip_prefix("rotate-") {
        ("rotate", ctx.integer(val, true)?)
    } else if let Some(val) = class.strip_prefix("translate-x-") {
        ("translateX", translate(val, ctx)?)
    } else if let Some(val) = class.strip_prefix("translate-y-") {
        ("translateY", translate(val, ctx)?)
    } else if let Some(val) = class.strip_prefix("skew-x-") {
        ("skewX", ctx.integer(val, true)?)
    } else if let Some(val) = class.strip_prefix("skew-y-") {
        ("skewY", ctx.integer(val, true)?)
    } else {
        return None;
    };
    let parsed = if negative { negate(parsed)? } else { parsed };
    style(prop, parsed)
}

pub fn expand(property: &str) -> Option<&'static [&'static str]> {
    match property {
        "scale" => Some(&["scaleX", "scaleY"]),
        _ => None,
    }
}

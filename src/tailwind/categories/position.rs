//! `position`, inset offsets and `z-index`.

use super::{keyword, strip_negative, ParserContext};
use crate::style::{Category, ParsedValue, ResolvedStyle};
use crate::tailwind::value::{negate, ArbitraryOptions};

pub const PREFIXES: &[&str] = &[
    "static", "fixed", "absolute", "relative", "sticky", "inset-", "top-", "right-", "bottom-",
    "left-", "start-", "end-", "z-",
];

const POSITIONS: &[(&str, &str)] = &[
    ("static", "static"),
    ("fixed", "fixed"),
    ("absolute", "absolute"),
    ("relative", "relative"),
    ("sticky", "sticky"),
];

// Longest prefixes first: `inset-x-` must win over `inset-`.
const OFFSETS: &[(&str, &str)] = &[
    ("inset-x-", "insetX"),
    ("inset-y-", "insetY"),
    ("inset-", "inset"),
    ("top-", "top"),
    ("right-", "right"),
    ("bottom-", "bottom"),
    ("left-", "left"),
    ("start-", "insetStart"),
    ("end-", "insetEnd"),
];

fn offset(val: &str, ctx: &ParserContext) -> Option<ParsedValue> {
    match val {
        "auto" => Some(ParsedValue::preset("auto")),
        _ if val.starts_with('[') => ctx.arbitrary_value(val, ArbitraryOptions::SIZES.negative()),
        _ => ctx.length(val),
    }
}

pub fn parse_value(base: &str, ctx: &ParserContext) -> Option<ResolvedStyle> {
    if let Some(position) = keyword(POSITIONS, base) {
        return Some(ResolvedStyle::keyword(Category::Position, "position", position));
    }

    let (negative, class) = strip_negative(base);

    if let Some(val) = class.strip_prefix("z-") {
        let parsed = match val {
            "auto" if !negative => ParsedValue::preset("auto"),
            _ => ctx.integer(val, true)?,
        };
        let parsed = if negative { negate(parsed)? } else { parsed };
        return Some(ResolvedStyle::new(Category::Position, "zIndex", parsed));
    }

    let (prop, val) = OFFSETS
        .iter()
        .find_map(|(prefix, prop)| class.strip_prefix(prefix).map(|v| (*prop, v)))?;
    let parsed = offset(val, ctx)?;
    let parsed = if negative { negate(parsed)? } else { parsed };
    Some(ResolvedStyle::new(Category::Position, prop, parsed))
}

pub fn expand(property: &str) -> Option<&'static [&'static str]> {
    match property {
        "inset" => Some(&["top", "right", "bottom", "left"]),
        "insetX" => Some(&["left", "right"]),
        "insetY" => Some(&["top", "bottom"]),
        "insetStart" => Some(&["left"]),
        "insetEnd" => Some(&["right"]),
        _ => None,
    }
}

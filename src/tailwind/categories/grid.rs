//! Grid templates, placement and auto tracks.

use super::{keyword, ParserContext};
use crate::style::{Category, ParsedValue, ResolvedStyle};
use crate::tailwind::value::ArbitraryOptions;

pub const PREFIXES: &[&str] = &[
    "grid-cols-",
    "grid-rows-",
    "grid-flow-",
    "col-",
    "row-",
    "auto-cols-",
    "auto-rows-",
];

const FLOW: &[(&str, &str)] = &[
    ("row", "row"),
    ("col", "column"),
    ("dense", "dense"),
    ("row-dense", "row dense"),
    ("col-dense", "column dense"),
];

const AUTO_TRACKS: &[(&str, &str)] = &[
    ("auto", "auto"),
    ("min", "min-content"),
    ("max", "max-content"),
    ("fr", "minmax(0, 1fr)"),
];

fn count(val: &str) -> Option<u32> {
    if val.is_empty() || !val.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    val.parse().ok().filter(|n| *n > 0)
}

fn template(val: &str, ctx: &ParserContext) -> Option<ParsedValue> {
    match val {
        "none" => Some(ParsedValue::preset("none")),
        "subgrid" => Some(ParsedValue::preset("subgrid")),
        _ if val.starts_with('[') => ctx.arbitrary_value(val, ArbitraryOptions::RAW),
        _ => count(val).map(|n| ParsedValue::preset(format!("repeat({}, minmax(0, 1fr))", n))),
    }
}

fn line(val: &str, ctx: &ParserContext) -> Option<ParsedValue> {
    match val {
        "auto" => Some(ParsedValue::preset("auto")),
        _ => ctx.integer(val, false),
    }
}

/// `col-*` / `row-*`: span, start and end placement.
fn placement(
    val: &str,
    ctx: &ParserContext,
    [shorthand, start, end]: [&'static str; 3],
) -> Option<ResolvedStyle> {
    let style = |prop, parsed| Some(ResolvedStyle::new(Category::Grid, prop, parsed));

    if let Some(span) = val.strip_prefix("span-") {
        let parsed = match span {
            "full" => ParsedValue::preset("1 / -1"),
            _ => ParsedValue::preset(format!("span {0} / span {0}", count(span)?)),
        };
        return style(shorthand, parsed);
    }
    if let Some(line_no) = val.strip_prefix("start-") {
        return style(start, line(line_no, ctx)?);
    }
    if let Some(line_no) = val.strip_prefix("end-") {
        return style(end, line(line_no, ctx)?);
    }
    match val {
        "auto" => style(shorthand, ParsedValue::preset("auto")),
        _ => style(shorthand, ctx.arbitrary_value(val, ArbitraryOptions::RAW)?),
    }
}

pub fn parse_value(base: &str, ctx: &ParserContext) -> Option<ResolvedStyle> {
    let style = |prop, parsed| Some(ResolvedStyle::new(Category::Grid, prop, parsed));

    if let Some(val) = base.strip_prefix("grid-cols-") {
        return style("gridTemplateColumns", template(val, ctx)?);
    }
    if let Some(val) = base.strip_prefix("grid-rows-") {
        return style("gridTemplateRows", template(val, ctx)?);
    }
    if let Some(val) = base.strip_prefix("grid-flow-") {
        return style("gridAutoFlow", ParsedValue::preset(keyword(FLOW, val)?));
    }
    if let Some(val) = base.strip_prefix("auto-cols-") {
        return style("gridAutoColumns", ParsedValue::preset(keyword(AUTO_TRACKS, val)?));
    }
    if let Some(val) = base.strip_prefix("auto-rows-") {
        return style("gridAutoRows", ParsedValue::preset(keyword(AUTO_TRACKS, val)?));
    }
    if let Some(val) = base.strip_prefix("col-") {
        return placement(val, ctx, ["gridColumn", "gridColumnStart", "gridColumnEnd"]);
    }
    if let Some(val) = base.strip_prefix("row-") {
        return placement(val, ctx, ["gridRow", "gridRowStart", "gridRowEnd"]);
    }
    None
}

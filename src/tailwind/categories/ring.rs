//! Focus rings. Results land in the effects section.

use super::ParserContext;
use crate::style::{Category, ParsedValue, ResolvedStyle};
use crate::tailwind::value::{ArbitraryOptions, ArbitraryValue};

pub const PREFIXES: &[&str] = &["ring", "ring-"];

const DEFAULT_RING_WIDTH: f64 = 3.0;

const RING_WIDTHS: &[(&str, f64)] = &[("0", 0.0), ("1", 1.0), ("2", 2.0), ("4", 4.0), ("8", 8.0)];

fn style(prop: &'static str, parsed: ParsedValue) -> Option<ResolvedStyle> {
    Some(ResolvedStyle::new(Category::Effects, prop, parsed))
}

fn width(val: &str, ctx: &ParserContext) -> Option<ParsedValue> {
    if let Some((_, px)) = RING_WIDTHS.iter().find(|(k, _)| *k == val) {
        return Some(ParsedValue::preset(*px));
    }
    match ctx.arbitrary(val, ArbitraryOptions::LENGTHS)? {
        ArbitraryValue::Length(px) => Some(ParsedValue::arbitrary(px)),
        _ => None,
    }
}

pub fn parse_value(base: &str, ctx: &ParserContext) -> Option<ResolvedStyle> {
    if base == "ring" {
        return style("ringWidth", ParsedValue::preset(DEFAULT_RING_WIDTH));
    }
    let val = base.strip_prefix("ring-")?;
    if val == "inset" {
        return style("ringInset", ParsedValue::preset("inset"));
    }
    if let Some(offset) = val.strip_prefix("offset-") {
        if let Some(px) = width(offset, ctx) {
            return style("ringOffsetWidth", px);
        }
        return style("ringOffsetColor", ctx.color(offset)?);
    }
    if let Some(px) = width(val, ctx) {
        return style("ringWidth", px);
    }
    style("ringColor", ctx.color(val)?)
}

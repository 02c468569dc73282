//! Font, text and decoration utilities.
//!
//! `text-*` is shared by alignment, font size, overflow, wrapping and color;
//! alignment and size keywords are checked before the value is handed to the
//! color resolver, and an arbitrary length falls back to `fontSize`.

use super::{keyword, strip_negative, ParserContext};
use crate::style::{Category, ParsedValue, ResolvedStyle};
use crate::tailwind::value::{format_number, negate, ArbitraryOptions, ArbitraryValue};

pub const PREFIXES: &[&str] = &[
    "text-",
    "font-",
    "leading-",
    "tracking-",
    "whitespace-",
    "break-",
    "align-",
    "indent-",
    "line-clamp-",
    "decoration-",
    "underline-offset-",
    "italic",
    "not-italic",
    "uppercase",
    "lowercase",
    "capitalize",
    "normal-case",
    "underline",
    "overline",
    "line-through",
    "no-underline",
    "truncate",
];

const TEXT_ALIGN: &[(&str, &str)] = &[
    ("left", "left"),
    ("center", "center"),
    ("right", "right"),
    ("justify", "justify"),
    ("start", "start"),
    ("end", "end"),
];

const TEXT_OVERFLOW: &[(&str, &str)] = &[("ellipsis", "ellipsis"), ("clip", "clip")];

const TEXT_WRAP: &[(&str, &str)] = &[
    ("wrap", "wrap"),
    ("nowrap", "nowrap"),
    ("balance", "balance"),
    ("pretty", "pretty"),
];

/// Standalone keywords: class → (property, value).
const KEYWORDS: &[(&str, &str, &str)] = &[
    ("italic", "fontStyle", "italic"),
    ("not-italic", "fontStyle", "normal"),
    ("uppercase", "textTransform", "uppercase"),
    ("lowercase", "textTransform", "lowercase"),
    ("capitalize", "textTransform", "capitalize"),
    ("normal-case", "textTransform", "none"),
    ("underline", "textDecoration", "underline"),
    ("overline", "textDecoration", "overline"),
    ("line-through", "textDecoration", "line-through"),
    ("no-underline", "textDecoration", "none"),
];

const WHITESPACE: &[(&str, &str)] = &[
    ("normal", "normal"),
    ("nowrap", "nowrap"),
    ("pre", "pre"),
    ("pre-line", "pre-line"),
    ("pre-wrap", "pre-wrap"),
    ("break-spaces", "break-spaces"),
];

const BREAK: &[(&str, &str, &str)] = &[
    ("normal", "wordBreak", "normal"),
    ("words", "overflowWrap", "break-word"),
    ("all", "wordBreak", "break-all"),
    ("keep", "wordBreak", "keep-all"),
];

const VERTICAL_ALIGN: &[(&str, &str)] = &[
    ("baseline", "baseline"),
    ("top", "top"),
    ("middle", "middle"),
    ("bottom", "bottom"),
    ("text-top", "text-top"),
    ("text-bottom", "text-bottom"),
    ("sub", "sub"),
    ("super", "super"),
];

const DECORATION_STYLE: &[(&str, &str)] = &[
    ("solid", "solid"),
    ("double", "double"),
    ("dotted", "dotted"),
    ("dashed", "dashed"),
    ("wavy", "wavy"),
];

const DECORATION_THICKNESS: &[(&str, f64)] = &[("0", 0.0), ("1", 1.0), ("2", 2.0), ("4", 4.0), ("8", 8.0)];

fn style(prop: &'static str, parsed: ParsedValue) -> Option<ResolvedStyle> {
    Some(ResolvedStyle::new(Category::Typography, prop, parsed))
}

fn text(val: &str, ctx: &ParserContext) -> Option<ResolvedStyle> {
    if let Some(align) = keyword(TEXT_ALIGN, val) {
        return style("textAlign", ParsedValue::preset(align));
    }
    if let Some(overflow) = keyword(TEXT_OVERFLOW, val) {
        return style("textOverflow", ParsedValue::preset(overflow));
    }
    if let Some(wrap) = keyword(TEXT_WRAP, val) {
        return style("textWrap", ParsedValue::preset(wrap));
    }
    if let Some(size) = ctx.preset.font_sizes.get(val) {
        return Some(
            ResolvedStyle::keyword(Category::Typography, "fontSize", size.size)
                .with_additional("lineHeight", size.line_height),
        );
    }
    if let Some(color) = ctx.color(val) {
        return style("color", color);
    }
    // Lengths only; colors were tried above and malformed hex must not
    // become a font size.
    match ctx.arbitrary(val, ArbitraryOptions::LENGTHS)? {
        ArbitraryValue::Length(px) => style("fontSize", ParsedValue::arbitrary(px)),
        _ => None,
    }
}

fn font(val: &str, ctx: &ParserContext) -> Option<ResolvedStyle> {
    if let Some(family) = ctx.preset.font_families.get(val) {
        return style("fontFamily", ParsedValue::preset(family.as_str()));
    }
    if let Some(weight) = ctx.preset.font_weights.get(val) {
        return style("fontWeight", ParsedValue::preset(*weight as f64));
    }
    if let Some(variable) = ctx.variable(val) {
        return style("fontFamily", variable);
    }
    match ctx.arbitrary(val, ArbitraryOptions::SIZES)? {
        ArbitraryValue::Length(weight)
            if (100.0..=900.0).contains(&weight) && weight % 100.0 == 0.0 =>
        {
            style("fontWeight", ParsedValue::arbitrary(weight))
        }
        ArbitraryValue::Raw(family) => style("fontFamily", ParsedValue::arbitrary(family)),
        _ => None,
    }
}

fn leading(val: &str, ctx: &ParserContext) -> Option<ResolvedStyle> {
    if let Some(ratio) = ctx.preset.line_heights.get(val) {
        let percent = format!("{}%", format_number(ratio * 100.0));
        return style("lineHeight", ParsedValue::preset(percent));
    }
    style("lineHeight", ctx.spacing(val)?)
}

fn tracking(val: &str, ctx: &ParserContext) -> Option<ParsedValue> {
    if let Some(em) = ctx.preset.letter_spacing.get(val) {
        return Some(ParsedValue::preset(format!("{}em", format_number(*em))));
    }
    if let Some(variable) = ctx.variable(val) {
        return Some(variable);
    }
    ctx.arbitrary_value(val, ArbitraryOptions::SIZES.negative())
}

fn decoration(val: &str, ctx: &ParserContext) -> Option<ResolvedStyle> {
    if let Some(kind) = keyword(DECORATION_STYLE, val) {
        return style("textDecorationStyle", ParsedValue::preset(kind));
    }
    if let Some((_, px)) = DECORATION_THICKNESS.iter().find(|(k, _)| *k == val) {
        return style("textDecorationThickness", ParsedValue::preset(*px));
    }
    match val {
        "auto" => style("textDecorationThickness", ParsedValue::preset("auto")),
        "from-font" => style("textDecorationThickness", ParsedValue::preset("from-font")),
        _ => match ctx.color(val) {
            Some(color) => style("textDecorationColor", color),
            None => style(
                "textDecorationThickness",
                ctx.arbitrary_value(val, ArbitraryOptions::LENGTHS)?,
            ),
        },
    }
}

pub fn parse_value(base: &str, ctx: &ParserContext) -> Option<ResolvedStyle> {
    if let Some((_, prop, value)) = KEYWORDS.iter().find(|(k, _, _)| *k == base) {
        return Some(ResolvedStyle::keyword(Category::Typography, *prop, *value));
    }
    if base == "truncate" {
        return Some(
            ResolvedStyle::keyword(Category::Typography, "textOverflow", "ellipsis")
                .with_additional_in(Category::Layout, "overflowX", "hidden")
                .with_additional_in(Category::Layout, "overflowY", "hidden")
                .with_additional("whiteSpace", "nowrap"),
        );
    }

    let (negative, class) = strip_negative(base);
    if let Some(val) = class.strip_prefix("tracking-") {
        let parsed = tracking(val, ctx)?;
        let parsed = if negative { negate(parsed)? } else { parsed };
        return style("letterSpacing", parsed);
    }
    if let Some(val) = class.strip_prefix("indent-") {
        let parsed = ctx.spacing(val)?;
        let parsed = if negative { negate(parsed)? } else { parsed };
        return style("textIndent", parsed);
    }
    if negative {
        return None;
    }

    if let Some(val) = base.strip_prefix("text-") {
        return text(val, ctx);
    }
    if let Some(val) = base.strip_prefix("font-") {
        return font(val, ctx);
    }
    if let Some(val) = base.strip_prefix("leading-") {
        return leading(val, ctx);
    }
    if let Some(val) = base.strip_prefix("whitespace-") {
        return style("whiteSpace", ParsedValue::preset(keyword(WHITESPACE, val)?));
    }
    if let Some(val) = base.strip_prefix("break-") {
        let (_, prop, value) = BREAK.iter().find(|(k, _, _)| *k == val)?;
        return style(*prop, ParsedValue::preset(*value));
    }
    if let Some(val) = base.strip_prefix("align-") {
        return style("verticalAlign", ParsedValue::preset(keyword(VERTICAL_ALIGN, val)?));
    }
    if let Some(val) = base.strip_prefix("line-clamp-") {
        let parsed = match val {
            "none" => ParsedValue::preset("none"),
            _ => ctx.integer(val, false)?,
        };
        return style("lineClamp", parsed);
    }
    if let Some(val) = base.strip_prefix("underline-offset-") {
        let parsed = match val {
            "auto" => ParsedValue::preset("auto"),
            _ => ctx.integer(val, false)?,
        };
        return style("textUnderlineOffset", parsed);
    }
    if let Some(val) = base.strip_prefix("decoration-") {
        return decoration(val, ctx);
    }
    None
}

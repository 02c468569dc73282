//! Flex container/item utilities, box alignment and gaps.

use super::{keyword, strip_negative, ParserContext};
use crate::style::{Category, ParsedValue, ResolvedStyle};
use crate::tailwind::value::{negate, ArbitraryOptions};

pub const PREFIXES: &[&str] = &[
    "flex-", "grow", "grow-", "shrink", "shrink-", "basis-", "order-", "justify-", "items-",
    "self-", "content-", "place-", "gap-",
];

const DIRECTION: &[(&str, &str)] = &[
    ("row", "row"),
    ("row-reverse", "row-reverse"),
    ("col", "column"),
    ("col-reverse", "column-reverse"),
];

const WRAP: &[(&str, &str)] = &[
    ("wrap", "wrap"),
    ("wrap-reverse", "wrap-reverse"),
    ("nowrap", "nowrap"),
];

const FLEX: &[(&str, &str)] = &[
    ("1", "1 1 0%"),
    ("auto", "1 1 auto"),
    ("initial", "0 1 auto"),
    ("none", "none"),
];

const CONTENT: &[(&str, &str)] = &[
    ("normal", "normal"),
    ("start", "flex-start"),
    ("end", "flex-end"),
    ("center", "center"),
    ("between", "space-between"),
    ("around", "space-around"),
    ("evenly", "space-evenly"),
    ("stretch", "stretch"),
    ("baseline", "baseline"),
];

const ITEMS: &[(&str, &str)] = &[
    ("start", "flex-start"),
    ("end", "flex-end"),
    ("center", "center"),
    ("baseline", "baseline"),
    ("stretch", "stretch"),
];

const SELF: &[(&str, &str)] = &[
    ("auto", "auto"),
    ("start", "flex-start"),
    ("end", "flex-end"),
    ("center", "center"),
    ("stretch", "stretch"),
    ("baseline", "baseline"),
];

// `justify-items-`/`justify-self-` and the `place-*` family use grid-style
// keywords rather than `flex-start`.
const GRID_ALIGN: &[(&str, &str)] = &[
    ("auto", "auto"),
    ("start", "start"),
    ("end", "end"),
    ("center", "center"),
    ("stretch", "stretch"),
    ("between", "space-between"),
    ("around", "space-around"),
    ("evenly", "space-evenly"),
    ("baseline", "baseline"),
];

const ALIGNMENT: &[(&str, &str, &[(&str, &str)])] = &[
    ("justify-items-", "justifyItems", GRID_ALIGN),
    ("justify-self-", "justifySelf", GRID_ALIGN),
    ("justify-", "justifyContent", CONTENT),
    ("items-", "alignItems", ITEMS),
    ("self-", "alignSelf", SELF),
    ("content-", "alignContent", CONTENT),
    ("place-content-", "placeContent", GRID_ALIGN),
    ("place-items-", "placeItems", GRID_ALIGN),
    ("place-self-", "placeSelf", GRID_ALIGN),
];

fn factor(val: &str, ctx: &ParserContext) -> Option<ParsedValue> {
    match val {
        "" => Some(ParsedValue::preset(1.0)),
        _ => ctx.integer(val, false),
    }
}

pub fn parse_value(base: &str, ctx: &ParserContext) -> Option<ResolvedStyle> {
    let style = |prop, parsed| Some(ResolvedStyle::new(Category::Flexbox, prop, parsed));

    if let Some(val) = base.strip_prefix("flex-") {
        if let Some(direction) = keyword(DIRECTION, val) {
            return style("flexDirection", ParsedValue::preset(direction));
        }
        if let Some(wrap) = keyword(WRAP, val) {
            return style("flexWrap", ParsedValue::preset(wrap));
        }
        if let Some(flex) = keyword(FLEX, val) {
            return style("flex", ParsedValue::preset(flex));
        }
        return style("flex", ctx.arbitrary_value(val, ArbitraryOptions::RAW)?);
    }

    for (name, prop) in [("grow", "flexGrow"), ("shrink", "flexShrink")] {
        if let Some(rest) = base.strip_prefix(name) {
            let val = match rest {
                "" => "",
                _ => rest.strip_prefix('-')?,
            };
            if !rest.is_empty() && val.is_empty() {
                return None;
            }
            return style(prop, factor(val, ctx)?);
        }
    }

    if let Some(val) = base.strip_prefix("basis-") {
        let parsed = match val {
            "auto" => ParsedValue::preset("auto"),
            _ => ctx.length(val)?,
        };
        return style("flexBasis", parsed);
    }

    let (negative, class) = strip_negative(base);
    if let Some(val) = class.strip_prefix("order-") {
        let parsed = match val {
            "first" if !negative => ParsedValue::preset(-9999.0),
            "last" if !negative => ParsedValue::preset(9999.0),
            "none" if !negative => ParsedValue::preset(0.0),
            _ => ctx.integer(val, true)?,
        };
        let parsed = if negative { negate(parsed)? } else { parsed };
        return style("order", parsed);
    }
    if negative {
        return None;
    }

    if let Some(val) = base.strip_prefix("gap-x-") {
        return style("columnGap", ctx.spacing(val)?);
    }
    if let Some(val) = base.strip_prefix("gap-y-") {
        return style("rowGap", ctx.spacing(val)?);
    }
    if let Some(val) = base.strip_prefix("gap-") {
        return style("gap", ctx.spacing(val)?);
    }

    let (prop, val, table) = ALIGNMENT
        .iter()
        .find_map(|(prefix, prop, table)| base.strip_prefix(prefix).map(|v| (*prop, v, *table)))?;
    style(prop, ParsedValue::preset(keyword(table, val)?))
}

pub fn expand(property: &str) -> Option<&'static [&'static str]> {
    match property {
        "gap" => Some(&["rowGap", "columnGap"]),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::parse;
    use super::*;
    use crate::style::StyleValue;

    #[test]
    fn direction_and_wrap() {
        assert_eq!(parse(parse_value, "flex-col"), Some(("flexDirection", StyleValue::text("column"))));
        assert_eq!(parse(parse_value, "flex-row-reverse"), Some(("flexDirection", StyleValue::text("row-reverse"))));
        assert_eq!(parse(parse_value, "flex-wrap"), Some(("flexWrap", StyleValue::text("wrap"))));
    }

    #[test]
    fn flex_shorthand() {
        assert_eq!(parse(parse_value, "flex-1"), Some(("flex", StyleValue::text("1 1 0%"))));
        assert_eq!(parse(parse_value, "flex-[2_2_0%]"), Some(("flex", StyleValue::text("2 2 0%"))));
        assert_eq!(parse(parse_value, "flex-bogus"), None);
    }

    #[test]
    fn grow_and_shrink() {
        assert_eq!(parse(parse_value, "grow"), Some(("flexGrow", StyleValue::Number(1.0))));
        assert_eq!(parse(parse_value, "grow-0"), Some(("flexGrow", StyleValue::Number(0.0))));
        assert_eq!(parse(parse_value, "shrink-0"), Some(("flexShrink", StyleValue::Number(0.0))));
        assert_eq!(parse(parse_value, "grow-"), None);
        assert_eq!(parse(parse_value, "growth"), None);
    }

    #[test]
    fn basis_and_order() {
        assert_eq!(parse(parse_value, "basis-1/2"), Some(("flexBasis", StyleValue::text("50%"))));
        assert_eq!(parse(parse_value, "order-first"), Some(("order", StyleValue::Number(-9999.0))));
        assert_eq!(parse(parse_value, "-order-2"), Some(("order", StyleValue::Number(-2.0))));
        assert_eq!(parse(parse_value, "-order-first"), None);
    }

    #[test]
    fn alignment() {
        assert_eq!(parse(parse_value, "justify-between"), Some(("justifyContent", StyleValue::text("space-between"))));
        assert_eq!(parse(parse_value, "items-center"), Some(("alignItems", StyleValue::text("center"))));
        assert_eq!(parse(parse_value, "self-end"), Some(("alignSelf", StyleValue::text("flex-end"))));
        assert_eq!(parse(parse_value, "justify-items-center"), Some(("justifyItems", StyleValue::text("center"))));
        assert_eq!(parse(parse_value, "place-content-between"), Some(("placeContent", StyleValue::text("space-between"))));
        assert_eq!(parse(parse_value, "items-between"), None);
    }

    #[test]
    fn gaps() {
        assert_eq!(parse(parse_value, "gap-4"), Some(("gap", StyleValue::Number(16.0))));
        assert_eq!(parse(parse_value, "gap-x-2"), Some(("columnGap", StyleValue::Number(8.0))));
        assert_eq!(parse(parse_value, "gap-y-[10px]"), Some(("rowGap", StyleValue::Number(10.0))));
        assert_eq!(expand("gap"), Some(&["rowGap", "columnGap"][..]));
        assert_eq!(parse(parse_value, "-gap-4"), None);
    }
}

//! Overflow and overscroll behaviour. Results land in the layout section.

use super::{keyword, ParserContext};
use crate::style::{Category, ResolvedStyle};

pub const PREFIXES: &[&str] = &["overflow-", "overscroll-"];

const OVERFLOW: &[(&str, &str)] = &[
    ("auto", "auto"),
    ("hidden", "hidden"),
    ("clip", "clip"),
    ("visible", "visible"),
    ("scroll", "scroll"),
];

const OVERSCROLL: &[(&str, &str)] = &[("auto", "auto"), ("contain", "contain"), ("none", "none")];

pub fn parse_value(base: &str, _ctx: &ParserContext) -> Option<ResolvedStyle> {
    let (prop, val, table) = if let Some(val) = base.strip_prefix("overflow-x-") {
        ("overflowX", val, OVERFLOW)
    } else if let Some(val) = base.strip_prefix("overflow-y-") {
        ("overflowY", val, OVERFLOW)
    } else if let Some(val) = base.strip_prefix("overflow-") {
        ("overflow", val, OVERFLOW)
    } else if let Some(val) = base.strip_prefix("overscroll-x-") {
        ("overscrollBehaviorX", val, OVERSCROLL)
    } else if let Some(val) = base.strip_prefix("overscroll-y-") {
        ("overscrollBehaviorY", val, OVERSCROLL)
    } else {
        ("overscrollBehavior", base.strip_prefix("overscroll-")?, OVERSCROLL)
    };
    Some(ResolvedStyle::keyword(Category::Layout, prop, keyword(table, val)?))
}

pub fn expand(property: &str) -> Option<&'static [&'static str]> {
    match property {
        "overflow" => Some(&["overflowX", "overflowY"]),
        "overscrollBehavior" => Some(&["overscrollBehaviorX", "overscrollBehaviorY"]),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::parse;
    use super::*;
    use crate::style::StyleValue;

    #[test]
    fn overflow_axes() {
        assert_eq!(parse(parse_value, "overflow-hidden"), Some(("overflow", StyleValue::text("hidden"))));
        assert_eq!(parse(parse_value, "overflow-x-auto"), Some(("overflowX", StyleValue::text("auto"))));
        assert_eq!(parse(parse_value, "overflow-y-scroll"), Some(("overflowY", StyleValue::text("scroll"))));
        assert_eq!(parse(parse_value, "overflow-x-contain"), None);
    }

    #[test]
    fn overscroll() {
        assert_eq!(
            parse(parse_value, "overscroll-contain"),
            Some(("overscrollBehavior", StyleValue::text("contain")))
        );
        assert_eq!(
            parse(parse_value, "overscroll-y-none"),
            Some(("overscrollBehaviorY", StyleValue::text("none")))
        );
    }

    #[test]
    fn overflow_shorthand_writes_both_axes() {
        assert_eq!(expand("overflow"), Some(&["overflowX", "overflowY"][..]));
    }
}

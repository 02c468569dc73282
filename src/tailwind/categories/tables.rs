//! Table layout, border model and caption placement.
//!
//! Dispatched before borders so `border-collapse` and `border-spacing-*`
//! never reach the border-color resolver.

use super::ParserContext;
use crate::style::{Category, ResolvedStyle};

pub const PREFIXES: &[&str] = &[
    "table-auto",
    "table-fixed",
    "border-collapse",
    "border-separate",
    "border-spacing-",
    "caption-",
];

pub fn parse_value(base: &str, ctx: &ParserContext) -> Option<ResolvedStyle> {
    let keyword = |prop, value: &'static str| Some(ResolvedStyle::keyword(Category::Tables, prop, value));

    match base {
        "table-auto" => return keyword("tableLayout", "auto"),
        "table-fixed" => return keyword("tableLayout", "fixed"),
        "border-collapse" => return keyword("borderCollapse", "collapse"),
        "border-separate" => return keyword("borderCollapse", "separate"),
        "caption-top" => return keyword("captionSide", "top"),
        "caption-bottom" => return keyword("captionSide", "bottom"),
        _ => {}
    }

    let rest = base.strip_prefix("border-spacing-")?;
    let (prop, val) = if let Some(val) = rest.strip_prefix("x-") {
        ("borderSpacingX", val)
    } else if let Some(val) = rest.strip_prefix("y-") {
        ("borderSpacingY", val)
    } else {
        ("borderSpacing", rest)
    };
    Some(ResolvedStyle::new(Category::Tables, prop, ctx.spacing(val)?))
}

pub fn expand(property: &str) -> Option<&'static [&'static str]> {
    match property {
        "borderSpacing" => Some(&["borderSpacingX", "borderSpacingY"]),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::parse;
    use super::*;
    use crate::style::StyleValue;

    #[test]
    fn table_keywords() {
        assert_eq!(parse(parse_value, "table-fixed"), Some(("tableLayout", StyleValue::text("fixed"))));
        assert_eq!(parse(parse_value, "border-collapse"), Some(("borderCollapse", StyleValue::text("collapse"))));
        assert_eq!(parse(parse_value, "caption-bottom"), Some(("captionSide", StyleValue::text("bottom"))));
        assert_eq!(parse(parse_value, "caption-left"), None);
    }

    #[test]
    fn border_spacing() {
        assert_eq!(parse(parse_value, "border-spacing-2"), Some(("borderSpacing", StyleValue::Number(8.0))));
        assert_eq!(parse(parse_value, "border-spacing-x-1"), Some(("borderSpacingX", StyleValue::Number(4.0))));
        assert_eq!(expand("borderSpacing"), Some(&["borderSpacingX", "borderSpacingY"][..]));
        assert_eq!(parse(parse_value, "border-spacing-wide"), None);
    }
}

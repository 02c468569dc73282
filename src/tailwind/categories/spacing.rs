//! Padding, margin and `space-x/y` utilities.

use super::{strip_negative, ParserContext};
use crate::style::{Category, ParsedValue, ResolvedStyle};
use crate::tailwind::value::{negate, ArbitraryOptions};

pub const PREFIXES: &[&str] = &[
    "p-", "px-", "py-", "pt-", "pr-", "pb-", "pl-", "ps-", "pe-", "m-", "mx-", "my-", "mt-",
    "mr-", "mb-", "ml-", "ms-", "me-", "space-x-", "space-y-",
];

const PADDING: &[(&str, &str)] = &[
    ("p-", "padding"),
    ("px-", "paddingX"),
    ("py-", "paddingY"),
    ("pt-", "paddingTop"),
    ("pr-", "paddingRight"),
    ("pb-", "paddingBottom"),
    ("pl-", "paddingLeft"),
    ("ps-", "paddingStart"),
    ("pe-", "paddingEnd"),
];

const MARGIN: &[(&str, &str)] = &[
    ("m-", "margin"),
    ("mx-", "marginX"),
    ("my-", "marginY"),
    ("mt-", "marginTop"),
    ("mr-", "marginRight"),
    ("mb-", "marginBottom"),
    ("ml-", "marginLeft"),
    ("ms-", "marginStart"),
    ("me-", "marginEnd"),
];

const SPACE: &[(&str, &str)] = &[("space-x-", "spaceX"), ("space-y-", "spaceY")];

fn strip_any<'a>(table: &[(&str, &'static str)], class: &'a str) -> Option<(&'static str, &'a str)> {
    table
        .iter()
        .find_map(|(prefix, prop)| class.strip_prefix(prefix).map(|v| (*prop, v)))
}

pub fn parse_value(base: &str, ctx: &ParserContext) -> Option<ResolvedStyle> {
    let (negative, class) = strip_negative(base);

    if let Some((prop, val)) = strip_any(PADDING, class) {
        if negative {
            return None;
        }
        return Some(ResolvedStyle::new(Category::Spacing, prop, ctx.spacing(val)?));
    }

    if let Some((prop, val)) = strip_any(MARGIN, class) {
        let parsed = match val {
            "auto" if negative => return None,
            "auto" => ParsedValue::preset("auto"),
            _ if val.starts_with('[') => {
                ctx.arbitrary_value(val, ArbitraryOptions::SIZES.negative())?
            }
            _ => ctx.spacing(val)?,
        };
        let parsed = if negative { negate(parsed)? } else { parsed };
        return Some(ResolvedStyle::new(Category::Spacing, prop, parsed));
    }

    if let Some((prop, val)) = strip_any(SPACE, class) {
        if val == "reverse" {
            return None;
        }
        let parsed = ctx.spacing(val)?;
        let parsed = if negative { negate(parsed)? } else { parsed };
        return Some(ResolvedStyle::new(Category::Spacing, prop, parsed));
    }

    None
}

/// Side shorthands. Start/end map to left/right (LTR).
pub fn expand(property: &str) -> Option<&'static [&'static str]> {
    match property {
        "padding" => Some(&["padding.top", "padding.right", "padding.bottom", "padding.left"]),
        "paddingX" => Some(&["padding.left", "padding.right"]),
        "paddingY" => Some(&["padding.top", "padding.bottom"]),
        "paddingTop" => Some(&["padding.top"]),
        "paddingRight" | "paddingEnd" => Some(&["padding.right"]),
        "paddingBottom" => Some(&["padding.bottom"]),
        "paddingLeft" | "paddingStart" => Some(&["padding.left"]),
        "margin" => Some(&["margin.top", "margin.right", "margin.bottom", "margin.left"]),
        "marginX" => Some(&["margin.left", "margin.right"]),
        "marginY" => Some(&["margin.top", "margin.bottom"]),
        "marginTop" => Some(&["margin.top"]),
        "marginRight" | "marginEnd" => Some(&["margin.right"]),
        "marginBottom" => Some(&["margin.bottom"]),
        "marginLeft" | "marginStart" => Some(&["margin.left"]),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::parse;
    use super::*;
    use crate::style::StyleValue;

    #[test]
    fn padding_scale() {
        assert_eq!(parse(parse_value, "p-4"), Some(("padding", StyleValue::Number(16.0))));
        assert_eq!(parse(parse_value, "px-8"), Some(("paddingX", StyleValue::Number(32.0))));
        assert_eq!(parse(parse_value, "pt-0.5"), Some(("paddingTop", StyleValue::Number(2.0))));
        assert_eq!(parse(parse_value, "p-px"), Some(("padding", StyleValue::Number(1.0))));
    }

    #[test]
    fn padding_rejects_negatives_and_auto() {
        assert_eq!(parse(parse_value, "-p-4"), None);
        assert_eq!(parse(parse_value, "p-auto"), None);
        assert_eq!(parse(parse_value, "p-[-4px]"), None);
    }

    #[test]
    fn margin_auto_and_negative() {
        assert_eq!(parse(parse_value, "mx-auto"), Some(("marginX", StyleValue::text("auto"))));
        assert_eq!(parse(parse_value, "-m-4"), Some(("margin", StyleValue::Number(-16.0))));
        assert_eq!(parse(parse_value, "-mt-[10px]"), Some(("marginTop", StyleValue::Number(-10.0))));
        assert_eq!(parse(parse_value, "m-[-10px]"), Some(("margin", StyleValue::Number(-10.0))));
        assert_eq!(parse(parse_value, "-m-auto"), None);
    }

    #[test]
    fn space_between() {
        assert_eq!(parse(parse_value, "space-x-4"), Some(("spaceX", StyleValue::Number(16.0))));
        assert_eq!(parse(parse_value, "space-y-reverse"), None);
    }

    #[test]
    fn unknown_steps_rejected() {
        assert_eq!(parse(parse_value, "p-13"), None);
        assert_eq!(parse(parse_value, "p-"), None);
        assert_eq!(parse(parse_value, "p-[#fff]"), None);
    }

    #[test]
    fn expansion_covers_both_axes() {
        assert_eq!(expand("marginX"), Some(&["margin.left", "margin.right"][..]));
        assert_eq!(expand("padding").map(<[_]>::len), Some(4));
        assert_eq!(expand("spaceX"), None);
    }
}

//! Transitions and animations. Durations and delays are milliseconds.

use super::{keyword, ParserContext};
use crate::style::{Category, ParsedValue, ResolvedStyle, StyleValue};

pub const PREFIXES: &[&str] = &["transition", "transition-", "duration-", "ease-", "delay-", "animate-"];

const DEFAULT_DURATION_MS: f64 = 150.0;
const DEFAULT_EASING: &str = "cubic-bezier(0.4, 0, 0.2, 1)";

const PROPERTIES: &[(&str, &[&str])] = &[
    (
        "",
        &[
            "color",
            "background-color",
            "border-color",
            "text-decoration-color",
            "fill",
            "stroke",
            "opacity",
            "box-shadow",
            "transform",
            "filter",
            "backdrop-filter",
        ],
    ),
    ("all", &["all"]),
    (
        "colors",
        &[
            "color",
            "background-color",
            "border-color",
            "text-decoration-color",
            "fill",
            "stroke",
        ],
    ),
    ("opacity", &["opacity"]),
    ("shadow", &["box-shadow"]),
    ("transform", &["transform"]),
];

const EASINGS: &[(&str, &str)] = &[
    ("linear", "linear"),
    ("in", "cubic-bezier(0.4, 0, 1, 1)"),
    ("out", "cubic-bezier(0, 0, 0.2, 1)"),
    ("in-out", DEFAULT_EASING),
];

const ANIMATIONS: &[(&str, &str)] = &[
    ("none", "none"),
    ("spin", "spin 1s linear infinite"),
    ("ping", "ping 1s cubic-bezier(0, 0, 0.2, 1) infinite"),
    ("pulse", "pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite"),
    ("bounce", "bounce 1s infinite"),
];

fn transition(val: &str) -> Option<ResolvedStyle> {
    if val == "none" {
        return Some(ResolvedStyle::keyword(Category::Transitions, "transitionProperty", "none"));
    }
    let (_, properties) = PROPERTIES.iter().find(|(k, _)| *k == val)?;
    let list = StyleValue::List(properties.iter().map(|p| StyleValue::text(*p)).collect());
    Some(
        ResolvedStyle::keyword(Category::Transitions, "transitionProperty", list)
            .with_additional("transitionTimingFunction", DEFAULT_EASING)
            .with_additional("transitionDuration", DEFAULT_DURATION_MS),
    )
}

pub fn parse_value(base: &str, ctx: &ParserContext) -> Option<ResolvedStyle> {
    let style = |prop, parsed| Some(ResolvedStyle::new(Category::Transitions, prop, parsed));

    if base == "transition" {
        return transition("");
    }
    if let Some(val) = base.strip_prefix("transition-") {
        return transition(val);
    }
    if let Some(val) = base.strip_prefix("duration-") {
        return style("transitionDuration", ctx.integer(val, false)?);
    }
    if let Some(val) = base.strip_prefix("delay-") {
        return style("transitionDelay", ctx.integer(val, false)?);
    }
    if let Some(val) = base.strip_prefix("ease-") {
        return style("transitionTimingFunction", ParsedValue::preset(keyword(EASINGS, val)?));
    }
    if let Some(val) = base.strip_prefix("animate-") {
        return style("animation", ParsedValue::preset(keyword(ANIMATIONS, val)?));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{ctx, parse};
    use super::*;

    #[test]
    fn transition_sets_defaults() {
        let style = parse_value("transition-colors", &ctx()).unwrap();
        assert_eq!(style.property, "transitionProperty");
        assert!(matches!(style.value, StyleValue::List(ref props) if props.len() == 6));
        assert_eq!(
            style.additional,
            vec![
                (Category::Transitions, "transitionTimingFunction", StyleValue::text(DEFAULT_EASING)),
                (Category::Transitions, "transitionDuration", StyleValue::Number(150.0)),
            ]
        );
        assert!(parse_value("transition", &ctx()).is_some());
        assert_eq!(
            parse(parse_value, "transition-none"),
            Some(("transitionProperty", StyleValue::text("none")))
        );
        assert_eq!(parse(parse_value, "transition-sparkle"), None);
    }

    #[test]
    fn timing() {
        assert_eq!(parse(parse_value, "duration-300"), Some(("transitionDuration", StyleValue::Number(300.0))));
        assert_eq!(parse(parse_value, "delay-75"), Some(("transitionDelay", StyleValue::Number(75.0))));
        assert_eq!(parse(parse_value, "ease-linear"), Some(("transitionTimingFunction", StyleValue::text("linear"))));
        assert_eq!(parse(parse_value, "duration-fast"), None);
    }

    #[test]
    fn animations() {
        assert_eq!(parse(parse_value, "animate-spin"), Some(("animation", StyleValue::text("spin 1s linear infinite"))));
        assert_eq!(parse(parse_value, "animate-wiggle"), None);
    }
}

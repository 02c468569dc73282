//! Cursor, pointer, selection, scrolling and form-control accents.

use super::{keyword, strip_negative, ParserContext};
use crate::style::{Category, ParsedValue, ResolvedStyle};
use crate::tailwind::value::{negate, ArbitraryOptions};

pub const PREFIXES: &[&str] = &[
    "cursor-",
    "pointer-events-",
    "select-",
    "resize",
    "resize-",
    "scroll-",
    "touch-",
    "appearance-",
    "accent-",
    "caret-",
];

const CURSORS: &[&str] = &[
    "auto",
    "default",
    "pointer",
    "wait",
    "text",
    "move",
    "help",
    "not-allowed",
    "none",
    "context-menu",
    "progress",
    "cell",
    "crosshair",
    "vertical-text",
    "alias",
    "copy",
    "no-drop",
    "grab",
    "grabbing",
    "all-scroll",
    "col-resize",
    "row-resize",
    "n-resize",
    "e-resize",
    "s-resize",
    "w-resize",
    "zoom-in",
    "zoom-out",
];

const POINTER_EVENTS: &[(&str, &str)] = &[("none", "none"), ("auto", "auto")];

const USER_SELECT: &[(&str, &str)] = &[
    ("none", "none"),
    ("text", "text"),
    ("all", "all"),
    ("auto", "auto"),
];

const RESIZE: &[(&str, &str)] = &[
    ("", "both"),
    ("none", "none"),
    ("x", "horizontal"),
    ("y", "vertical"),
];

const TOUCH: &[(&str, &str)] = &[
    ("auto", "auto"),
    ("none", "none"),
    ("pan-x", "pan-x"),
    ("pan-y", "pan-y"),
    ("pan-left", "pan-left"),
    ("pan-right", "pan-right"),
    ("pan-up", "pan-up"),
    ("pan-down", "pan-down"),
    ("pinch-zoom", "pinch-zoom"),
    ("manipulation", "manipulation"),
];

const SCROLL_BEHAVIOR: &[(&str, &str)] = &[("auto", "auto"), ("smooth", "smooth")];

// Longest prefixes first.
const SCROLL_SPACING: &[(&str, &str)] = &[
    ("scroll-mx-", "scrollMarginX"),
    ("scroll-my-", "scrollMarginY"),
    ("scroll-mt-", "scrollMarginTop"),
    ("scroll-mr-", "scrollMarginRight"),
    ("scroll-mb-", "scrollMarginBottom"),
    ("scroll-ml-", "scrollMarginLeft"),
    ("scroll-m-", "scrollMargin"),
    ("scroll-px-", "scrollPaddingX"),
    ("scroll-py-", "scrollPaddingY"),
    ("scroll-pt-", "scrollPaddingTop"),
    ("scroll-pr-", "scrollPaddingRight"),
    ("scroll-pb-", "scrollPaddingBottom"),
    ("scroll-pl-", "scrollPaddingLeft"),
    ("scroll-p-", "scrollPadding"),
];

fn style(prop: &'static str, parsed: ParsedValue) -> Option<ResolvedStyle> {
    Some(ResolvedStyle::new(Category::Interactivity, prop, parsed))
}

fn scroll(class: &str, negative: bool, ctx: &ParserContext) -> Option<ResolvedStyle> {
    let (prop, val) = SCROLL_SPACING
        .iter()
        .find_map(|(prefix, prop)| class.strip_prefix(prefix).map(|v| (*prop, v)))?;
    let parsed = ctx.spacing(val)?;
    match (negative, prop.starts_with("scrollMargin")) {
        (false, _) => style(prop, parsed),
        (true, true) => style(prop, negate(parsed)?),
        (true, false) => None,
    }
}

pub fn parse_value(base: &str, ctx: &ParserContext) -> Option<ResolvedStyle> {
    let (negative, class) = strip_negative(base);
    if class.starts_with("scroll-") {
        if !negative {
            if let Some(behavior) = keyword(SCROLL_BEHAVIOR, &class["scroll-".len()..]) {
                return style("scrollBehavior", ParsedValue::preset(behavior));
            }
        }
        return scroll(class, negative, ctx);
    }
    if negative {
        return None;
    }

    if let Some(val) = base.strip_prefix("cursor-") {
        if CURSORS.contains(&val) {
            return style("cursor", ParsedValue::preset(val));
        }
        return style("cursor", ctx.arbitrary_value(val, ArbitraryOptions::RAW)?);
    }
    if let Some(val) = base.strip_prefix("pointer-events-") {
        return style("pointerEvents", ParsedValue::preset(keyword(POINTER_EVENTS, val)?));
    }
    if let Some(val) = base.strip_prefix("select-") {
        return style("userSelect", ParsedValue::preset(keyword(USER_SELECT, val)?));
    }
    if let Some(rest) = base.strip_prefix("resize") {
        let val = match rest {
            "" => "",
            _ => rest.strip_prefix('-').filter(|v| !v.is_empty())?,
        };
        return style("resize", ParsedValue::preset(keyword(RESIZE, val)?));
    }
    if let Some(val) = base.strip_prefix("touch-") {
        return style("touchAction", ParsedValue::preset(keyword(TOUCH, val)?));
    }
    if let Some(val) = base.strip_prefix("appearance-") {
        return match val {
            "none" | "auto" => style("appearance", ParsedValue::preset(val)),
            _ => None,
        };
    }
    if let Some(val) = base.strip_prefix("accent-") {
        if val == "auto" {
            return style("accentColor", ParsedValue::preset("auto"));
        }
        return style("accentColor", ctx.color(val)?);
    }
    if let Some(val) = base.strip_prefix("caret-") {
        return style("caretColor", ctx.color(val)?);
    }
    None
}

pub fn expand(property: &str) -> Option<&'static [&'static str]> {
    match property {
        "scrollMarginX" => Some(&["scrollMarginLeft", "scrollMarginRight"]),
        "scrollMarginY" => Some(&["scrollMarginTop", "scrollMarginBottom"]),
        "scrollPaddingX" => Some(&["scrollPaddingLeft", "scrollPaddingRight"]),
        "scrollPaddingY" => Some(&["scrollPaddingTop", "scrollPaddingBottom"]),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::parse;
    use super::*;
    use crate::style::StyleValue;

    #[test]
    fn cursors() {
        assert_eq!(parse(parse_value, "cursor-pointer"), Some(("cursor", StyleValue::text("pointer"))));
        assert_eq!(parse(parse_value, "cursor-not-allowed"), Some(("cursor", StyleValue::text("not-allowed"))));
        assert_eq!(parse(parse_value, "cursor-[url(hand.cur),_pointer]"), Some(("cursor", StyleValue::text("url(hand.cur), pointer"))));
        assert_eq!(parse(parse_value, "cursor-hand"), None);
    }

    #[test]
    fn pointer_and_selection() {
        assert_eq!(parse(parse_value, "pointer-events-none"), Some(("pointerEvents", StyleValue::text("none"))));
        assert_eq!(parse(parse_value, "select-all"), Some(("userSelect", StyleValue::text("all"))));
        assert_eq!(parse(parse_value, "resize"), Some(("resize", StyleValue::text("both"))));
        assert_eq!(parse(parse_value, "resize-x"), Some(("resize", StyleValue::text("horizontal"))));
        assert_eq!(parse(parse_value, "resize-"), None);
        assert_eq!(parse(parse_value, "touch-pan-y"), Some(("touchAction", StyleValue::text("pan-y"))));
    }

    #[test]
    fn scrolling() {
        assert_eq!(parse(parse_value, "scroll-smooth"), Some(("scrollBehavior", StyleValue::text("smooth"))));
        assert_eq!(parse(parse_value, "scroll-mt-4"), Some(("scrollMarginTop", StyleValue::Number(16.0))));
        assert_eq!(parse(parse_value, "-scroll-mt-4"), Some(("scrollMarginTop", StyleValue::Number(-16.0))));
        assert_eq!(parse(parse_value, "-scroll-p-4"), None);
        assert_eq!(parse(parse_value, "scroll-px-2"), Some(("scrollPaddingX", StyleValue::Number(8.0))));
    }

    #[test]
    fn accents() {
        let (prop, value) = parse(parse_value, "accent-pink-500").unwrap();
        assert_eq!(prop, "accentColor");
        assert!(value.as_color().is_some());
        let (prop, _) = parse(parse_value, "caret-black").unwrap();
        assert_eq!(prop, "caretColor");
        assert_eq!(parse(parse_value, "appearance-none"), Some(("appearance", StyleValue::text("none"))));
    }
}

//! Background color, image, gradient stops and placement.

use super::{keyword, ParserContext};
use crate::style::{Category, ParsedValue, ResolvedStyle};
use crate::tailwind::value::{ArbitraryOptions, ArbitraryValue};

pub const PREFIXES: &[&str] = &["bg-", "from-", "via-", "to-"];

const ATTACHMENT: &[(&str, &str)] = &[("fixed", "fixed"), ("local", "local"), ("scroll", "scroll")];

const CLIP: &[(&str, &str)] = &[
    ("border", "border-box"),
    ("padding", "padding-box"),
    ("content", "content-box"),
    ("text", "text"),
];

const REPEAT: &[(&str, &str)] = &[
    ("repeat", "repeat"),
    ("no-repeat", "no-repeat"),
    ("repeat-x", "repeat-x"),
    ("repeat-y", "repeat-y"),
    ("repeat-round", "round"),
    ("repeat-space", "space"),
];

const SIZE: &[(&str, &str)] = &[("auto", "auto"), ("cover", "cover"), ("contain", "contain")];

const POSITION: &[(&str, &str)] = &[
    ("center", "center"),
    ("top", "top"),
    ("bottom", "bottom"),
    ("left", "left"),
    ("right", "right"),
    ("left-top", "left top"),
    ("left-bottom", "left bottom"),
    ("right-top", "right top"),
    ("right-bottom", "right bottom"),
];

const GRADIENT_DIRECTION: &[(&str, &str)] = &[
    ("t", "to top"),
    ("tr", "to top right"),
    ("r", "to right"),
    ("br", "to bottom right"),
    ("b", "to bottom"),
    ("bl", "to bottom left"),
    ("l", "to left"),
    ("tl", "to top left"),
];

const GRADIENT_STOPS: &[(&str, &str)] = &[
    ("from-", "gradientFrom"),
    ("via-", "gradientVia"),
    ("to-", "gradientTo"),
];

fn style(prop: &'static str, parsed: ParsedValue) -> Option<ResolvedStyle> {
    Some(ResolvedStyle::new(Category::Backgrounds, prop, parsed))
}

fn is_image(raw: &str) -> bool {
    raw.starts_with("url(") || raw.contains("gradient(")
}

pub fn parse_value(base: &str, ctx: &ParserContext) -> Option<ResolvedStyle> {
    if let Some((prop, val)) = GRADIENT_STOPS
        .iter()
        .find_map(|(prefix, prop)| base.strip_prefix(prefix).map(|v| (*prop, v)))
    {
        return style(prop, ctx.color(val)?);
    }

    let val = base.strip_prefix("bg-")?;
    let keywords: [(&str, &[(&str, &str)]); 4] = [
        ("backgroundAttachment", ATTACHMENT),
        ("backgroundRepeat", REPEAT),
        ("backgroundSize", SIZE),
        ("backgroundPosition", POSITION),
    ];
    for (prop, table) in keywords {
        if let Some(kw) = keyword(table, val) {
            return style(prop, ParsedValue::preset(kw));
        }
    }
    if let Some(clip) = val.strip_prefix("clip-") {
        return style("backgroundClip", ParsedValue::preset(keyword(CLIP, clip)?));
    }
    if let Some(origin) = val.strip_prefix("origin-") {
        return style("backgroundOrigin", ParsedValue::preset(keyword(&CLIP[..3], origin)?));
    }
    if let Some(direction) = val.strip_prefix("gradient-to-") {
        return style(
            "gradientDirection",
            ParsedValue::preset(keyword(GRADIENT_DIRECTION, direction)?),
        );
    }
    if val == "none" {
        return style("backgroundImage", ParsedValue::preset("none"));
    }

    if let Some(color) = ctx.color(val) {
        return style("backgroundColor", color);
    }
    match ctx.arbitrary(val, ArbitraryOptions::RAW)? {
        ArbitraryValue::Raw(raw) if is_image(&raw) => {
            style("backgroundImage", ParsedValue::arbitrary(raw))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::parse;
    use super::*;
    use crate::style::StyleValue;

    #[test]
    fn background_colors() {
        let (prop, value) = parse(parse_value, "bg-blue-500").unwrap();
        assert_eq!(prop, "backgroundColor");
        assert_eq!(value.as_color().unwrap().to_hex(), "#3b82f6");
        assert_eq!(parse(parse_value, "bg-[#FF0000]"), Some(("backgroundColor", StyleValue::text("#FF0000"))));
        let (_, value) = parse(parse_value, "bg-[rgb(0,128,255)]").unwrap();
        assert_eq!(value.as_color().unwrap().to_hex(), "#0080ff");
        assert!(parse(parse_value, "bg-transparent").is_some());
    }

    #[test]
    fn invalid_arbitrary_is_dropped() {
        assert_eq!(parse(parse_value, "bg-[invalid]"), None);
        assert_eq!(parse(parse_value, "bg-[#12]"), None);
        assert_eq!(parse(parse_value, "bg-[10px]"), None);
        assert_eq!(parse(parse_value, "bg-blue-500/150"), None);
    }

    #[test]
    fn images_and_gradients() {
        assert_eq!(
            parse(parse_value, "bg-[url(/img/hero.png)]"),
            Some(("backgroundImage", StyleValue::text("url(/img/hero.png)")))
        );
        assert_eq!(parse(parse_value, "bg-none"), Some(("backgroundImage", StyleValue::text("none"))));
        assert_eq!(
            parse(parse_value, "bg-gradient-to-r"),
            Some(("gradientDirection", StyleValue::text("to right")))
        );
        let (prop, _) = parse(parse_value, "from-sky-400").unwrap();
        assert_eq!(prop, "gradientFrom");
        let (prop, _) = parse(parse_value, "to-transparent").unwrap();
        assert_eq!(prop, "gradientTo");
    }

    #[test]
    fn placement_keywords() {
        assert_eq!(parse(parse_value, "bg-cover"), Some(("backgroundSize", StyleValue::text("cover"))));
        assert_eq!(parse(parse_value, "bg-no-repeat"), Some(("backgroundRepeat", StyleValue::text("no-repeat"))));
        assert_eq!(parse(parse_value, "bg-right-top"), Some(("backgroundPosition", StyleValue::text("right top"))));
        assert_eq!(parse(parse_value, "bg-clip-text"), Some(("backgroundClip", StyleValue::text("text"))));
        assert_eq!(parse(parse_value, "bg-origin-border"), Some(("backgroundOrigin", StyleValue::text("border-box"))));
        assert_eq!(parse(parse_value, "bg-origin-text"), None);
        assert_eq!(parse(parse_value, "bg-fixed"), Some(("backgroundAttachment", StyleValue::text("fixed"))));
    }
}

//! Display, visibility, box model and object placement.

use super::{keyword, ParserContext};
use crate::style::{Category, ParsedValue, ResolvedStyle};
use crate::tailwind::value::ArbitraryOptions;

pub const PREFIXES: &[&str] = &[
    "block",
    "inline-block",
    "inline",
    "flex",
    "inline-flex",
    "grid",
    "inline-grid",
    "table",
    "table-row",
    "table-cell",
    "contents",
    "hidden",
    "flow-root",
    "list-item",
    "visible",
    "invisible",
    "collapse",
    "box-border",
    "box-content",
    "isolate",
    "isolation-auto",
    "object-",
    "aspect-",
    "float-",
    "clear-",
];

const DISPLAY: &[(&str, &str)] = &[
    ("block", "block"),
    ("inline-block", "inline-block"),
    ("inline", "inline"),
    ("flex", "flex"),
    ("inline-flex", "inline-flex"),
    ("grid", "grid"),
    ("inline-grid", "inline-grid"),
    ("table", "table"),
    ("table-row", "table-row"),
    ("table-cell", "table-cell"),
    ("contents", "contents"),
    ("hidden", "none"),
    ("flow-root", "flow-root"),
    ("list-item", "list-item"),
];

const VISIBILITY: &[(&str, &str)] = &[
    ("visible", "visible"),
    ("invisible", "hidden"),
    ("collapse", "collapse"),
];

const OBJECT_FIT: &[(&str, &str)] = &[
    ("contain", "contain"),
    ("cover", "cover"),
    ("fill", "fill"),
    ("none", "none"),
    ("scale-down", "scale-down"),
];

const OBJECT_POSITION: &[(&str, &str)] = &[
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

const FLOAT: &[(&str, &str)] = &[
    ("left", "left"),
    ("right", "right"),
    ("start", "inline-start"),
    ("end", "inline-end"),
    ("none", "none"),
];

const CLEAR: &[(&str, &str)] = &[
    ("left", "left"),
    ("right", "right"),
    ("both", "both"),
    ("none", "none"),
];

fn aspect(val: &str, ctx: &ParserContext) -> Option<ParsedValue> {
    match val {
        "auto" => Some(ParsedValue::preset("auto")),
        "square" => Some(ParsedValue::preset(1.0)),
        "video" => Some(ParsedValue::preset(16.0 / 9.0)),
        _ => ctx.arbitrary_value(val, ArbitraryOptions::RAW),
    }
}

pub fn parse_value(base: &str, ctx: &ParserContext) -> Option<ResolvedStyle> {
    let style = |prop, value: &'static str| Some(ResolvedStyle::keyword(Category::Layout, prop, value));

    if let Some(display) = keyword(DISPLAY, base) {
        return style("display", display);
    }
    if let Some(visibility) = keyword(VISIBILITY, base) {
        return style("visibility", visibility);
    }
    match base {
        "box-border" => return style("boxSizing", "border-box"),
        "box-content" => return style("boxSizing", "content-box"),
        "isolate" => return style("isolation", "isolate"),
        "isolation-auto" => return style("isolation", "auto"),
        _ => {}
    }

    if let Some(val) = base.strip_prefix("object-") {
        if let Some(fit) = keyword(OBJECT_FIT, val) {
            return style("objectFit", fit);
        }
        return style("objectPosition", keyword(OBJECT_POSITION, val)?);
    }
    if let Some(val) = base.strip_prefix("aspect-") {
        return Some(ResolvedStyle::new(Category::Layout, "aspectRatio", aspect(val, ctx)?));
    }
    if let Some(val) = base.strip_prefix("float-") {
        return style("float", keyword(FLOAT, val)?);
    }
    if let Some(val) = base.strip_prefix("clear-") {
        return style("clear", keyword(CLEAR, val)?);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::super::test_support::parse;
    use super::*;
    use crate::style::StyleValue;

    #[test]
    fn display_keywords() {
        assert_eq!(parse(parse_value, "flex"), Some(("display", StyleValue::text("flex"))));
        assert_eq!(parse(parse_value, "hidden"), Some(("display", StyleValue::text("none"))));
        assert_eq!(parse(parse_value, "inline-grid"), Some(("display", StyleValue::text("inline-grid"))));
        assert_eq!(parse(parse_value, "flexy"), None);
    }

    #[test]
    fn visibility_and_box() {
        assert_eq!(parse(parse_value, "invisible"), Some(("visibility", StyleValue::text("hidden"))));
        assert_eq!(parse(parse_value, "box-border"), Some(("boxSizing", StyleValue::text("border-box"))));
        assert_eq!(parse(parse_value, "isolate"), Some(("isolation", StyleValue::text("isolate"))));
    }

    #[test]
    fn object_fit_and_position() {
        assert_eq!(parse(parse_value, "object-cover"), Some(("objectFit", StyleValue::text("cover"))));
        assert_eq!(parse(parse_value, "object-left-top"), Some(("objectPosition", StyleValue::text("left top"))));
        assert_eq!(parse(parse_value, "object-middle"), None);
    }

    #[test]
    fn aspect_ratio() {
        assert_eq!(parse(parse_value, "aspect-square"), Some(("aspectRatio", StyleValue::Number(1.0))));
        assert_eq!(parse(parse_value, "aspect-[4/3]"), Some(("aspectRatio", StyleValue::text("4/3"))));
        assert_eq!(parse(parse_value, "aspect-wide"), None);
    }

    #[test]
    fn floats() {
        assert_eq!(parse(parse_value, "float-start"), Some(("float", StyleValue::text("inline-start"))));
        assert_eq!(parse(parse_value, "clear-both"), Some(("clear", StyleValue::text("both"))));
    }
}

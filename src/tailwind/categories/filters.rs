//! `filter` and `backdrop-filter` functions.

use super::{percent, strip_negative, ParserContext};
use crate::preset::DEFAULT_KEY;
use crate::style::{Category, ParsedValue, ResolvedStyle};
use crate::tailwind::value::{negate, ArbitraryOptions};

pub const PREFIXES: &[&str] = &[
    "blur",
    "blur-",
    "brightness-",
    "contrast-",
    "grayscale",
    "grayscale-",
    "invert",
    "invert-",
    "saturate-",
    "sepia",
    "sepia-",
    "hue-rotate-",
    "drop-shadow",
    "drop-shadow-",
    "backdrop-",
];

#[derive(Clone, Copy)]
enum Filter {
    Blur,
    /// Percentage scale (`brightness-150` → 1.5).
    Amount,
    /// On/off toggle (`grayscale` → 1, `grayscale-0` → 0).
    Toggle,
    Degrees,
    DropShadow,
}

/// Function name → (kind, filter property, backdrop property).
const FILTERS: &[(&str, Filter, &str, &str)] = &[
    ("blur", Filter::Blur, "blur", "backdropBlur"),
    ("brightness", Filter::Amount, "brightness", "backdropBrightness"),
    ("contrast", Filter::Amount, "contrast", "backdropContrast"),
    ("saturate", Filter::Amount, "saturate", "backdropSaturate"),
    ("opacity", Filter::Amount, "opacity", "backdropOpacity"),
    ("grayscale", Filter::Toggle, "grayscale", "backdropGrayscale"),
    ("invert", Filter::Toggle, "invert", "backdropInvert"),
    ("sepia", Filter::Toggle, "sepia", "backdropSepia"),
    ("hue-rotate", Filter::Degrees, "hueRotate", "backdropHueRotate"),
    ("drop-shadow", Filter::DropShadow, "dropShadow", ""),
];

fn value(kind: Filter, val: &str, ctx: &ParserContext) -> Option<ParsedValue> {
    if let Some(variable) = ctx.variable(val) {
        return Some(variable);
    }
    match kind {
        Filter::Blur => {
            let key = if val.is_empty() { DEFAULT_KEY } else { val };
            ctx.scale(&ctx.preset.blur, key)
        }
        Filter::Amount if val.starts_with('[') => ctx.arbitrary_value(val, ArbitraryOptions::LENGTHS),
        Filter::Amount => percent(val).map(ParsedValue::preset),
        Filter::Toggle => match val {
            "" => Some(ParsedValue::preset(1.0)),
            "0" => Some(ParsedValue::preset(0.0)),
            _ => None,
        },
        Filter::Degrees => ctx.integer(val, false),
        Filter::DropShadow => {
            let key = if val.is_empty() { DEFAULT_KEY } else { val };
            super::effects::shadow_layers(key, ctx).map(ParsedValue::preset)
        }
    }
}

/// Split `name` or `name-value` against the filter table.
fn split(class: &str) -> Option<(Filter, &'static str, &'static str, &str)> {
    FILTERS.iter().find_map(|(name, kind, prop, backdrop)| {
        let rest = class.strip_prefix(name)?;
        let val = match rest {
            "" => "",
            _ => rest.strip_prefix('-').filter(|v| !v.is_empty())?,
        };
        Some((*kind, *prop, *backdrop, val))
    })
}

pub fn parse_value(base: &str, ctx: &ParserContext) -> Option<ResolvedStyle> {
    let (negative, class) = strip_negative(base);
    let (backdrop, class) = match class.strip_prefix("backdrop-") {
        Some(rest) => (true, rest),
        None => (false, class),
    };

    let (kind, prop, backdrop_prop, val) = split(class)?;
    let prop = if backdrop { backdrop_prop } else { prop };
    if prop.is_empty() || (!backdrop && prop == "opacity") {
        return None;
    }

    let parsed = value(kind, val, ctx)?;
    let parsed = match (negative, kind) {
        (false, _) => parsed,
        (true, Filter::Degrees) => negate(parsed)?,
        (true, _) => return None,
    };
    Some(ResolvedStyle::new(Category::Filters, prop, parsed))
}

#[cfg(test)]
mod tests {
    use super::super::test_support::parse;
    use super::*;
    use crate::style::StyleValue;

    #[test]
    fn blur_scale() {
        assert_eq!(parse(parse_value, "blur"), Some(("blur", StyleValue::Number(8.0))));
        assert_eq!(parse(parse_value, "blur-lg"), Some(("blur", StyleValue::Number(16.0))));
        assert_eq!(parse(parse_value, "blur-[2px]"), Some(("blur", StyleValue::Number(2.0))));
        assert_eq!(parse(parse_value, "blur-"), None);
        assert_eq!(parse(parse_value, "blurry"), None);
    }

    #[test]
    fn amounts_and_toggles() {
        assert_eq!(parse(parse_value, "brightness-150"), Some(("brightness", StyleValue::Number(1.5))));
        assert_eq!(parse(parse_value, "contrast-[.25]"), Some(("contrast", StyleValue::Number(0.25))));
        assert_eq!(parse(parse_value, "grayscale"), Some(("grayscale", StyleValue::Number(1.0))));
        assert_eq!(parse(parse_value, "invert-0"), Some(("invert", StyleValue::Number(0.0))));
        assert_eq!(parse(parse_value, "sepia-50"), None);
    }

    #[test]
    fn hue_rotate_negates() {
        assert_eq!(parse(parse_value, "hue-rotate-90"), Some(("hueRotate", StyleValue::Number(90.0))));
        assert_eq!(parse(parse_value, "-hue-rotate-15"), Some(("hueRotate", StyleValue::Number(-15.0))));
        assert_eq!(parse(parse_value, "-blur-sm"), None);
    }

    #[test]
    fn backdrop_variants() {
        assert_eq!(parse(parse_value, "backdrop-blur-sm"), Some(("backdropBlur", StyleValue::Number(4.0))));
        assert_eq!(parse(parse_value, "backdrop-opacity-50"), Some(("backdropOpacity", StyleValue::Number(0.5))));
        assert_eq!(parse(parse_value, "backdrop-drop-shadow"), None);
        assert_eq!(parse(parse_value, "backdrop-sparkle"), None);
    }

    #[test]
    fn drop_shadow() {
        let (prop, value) = parse(parse_value, "drop-shadow-md").unwrap();
        assert_eq!(prop, "dropShadow");
        assert!(matches!(value, StyleValue::List(ref layers) if layers.len() == 2));
        assert!(parse(parse_value, "drop-shadow").is_some());
    }
}

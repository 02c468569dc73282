//! Value primitives.
//!
//! Pure functions that interpret the value part of a utility class: bracketed
//! arbitrary literals, `$[path]` design variables, `/NN` opacity suffixes and
//! fractions. None of them fail loudly; `None` means "no match".

use crate::style::{Color, ParsedValue, StyleValue};
use regex::Regex;
use std::sync::OnceLock;

/// Pixels per `rem`/`em` when normalising arbitrary lengths.
pub const ROOT_FONT_SIZE: f64 = 16.0;

/// Which kinds of arbitrary literal a caller is willing to accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ArbitraryOptions {
    pub allow_colors: bool,
    pub allow_units: bool,
    pub allow_negative: bool,
    pub allow_raw: bool,
}

impl ArbitraryOptions {
    pub const COLORS: Self = Self {
        allow_colors: true,
        allow_units: false,
        allow_negative: false,
        allow_raw: false,
    };

    pub const LENGTHS: Self = Self {
        allow_colors: false,
        allow_units: true,
        allow_negative: false,
        allow_raw: false,
    };

    /// Lengths plus raw CSS (`calc(...)`, `50%`, `100vh`).
    pub const SIZES: Self = Self {
        allow_colors: false,
        allow_units: true,
        allow_negative: false,
        allow_raw: true,
    };

    pub const RAW: Self = Self {
        allow_colors: false,
        allow_units: false,
        allow_negative: false,
        allow_raw: true,
    };

    pub fn negative(mut self) -> Self {
        self.allow_negative = true;
        self
    }

    pub fn with_colors(mut self) -> Self {
        self.allow_colors = true;
        self
    }
}

/// A classified `[...]` literal.
#[derive(Debug, Clone, PartialEq)]
pub enum ArbitraryValue {
    /// A hex or `rgb()` color; `literal` is the text as written.
    Color { literal: String, color: Color },
    /// A length normalised to pixels.
    Length(f64),
    /// Anything else, with `_` decoded to spaces.
    Raw(String),
}

impl ArbitraryValue {
    pub fn into_parsed(self) -> ParsedValue {
        match self {
            ArbitraryValue::Color { literal, color } => {
                if literal.starts_with('#') {
                    ParsedValue::arbitrary(literal)
                } else {
                    ParsedValue::arbitrary(color)
                }
            }
            ArbitraryValue::Length(px) => ParsedValue::arbitrary(px),
            ArbitraryValue::Raw(s) => ParsedValue::arbitrary(s),
        }
    }
}

/// Return the text between `[` and `]` if `token` is exactly one bracketed
/// literal with no unescaped `]` inside.
pub fn bracket_inner(token: &str) -> Option<&str> {
    let inner = token.strip_prefix('[')?.strip_suffix(']')?;
    if inner.is_empty() {
        return None;
    }
    let mut escaped = false;
    for ch in inner.chars() {
        match ch {
            '\\' if !escaped => escaped = true,
            ']' if !escaped => return None,
            _ => escaped = false,
        }
    }
    Some(inner)
}

/// Parse a `[...]` literal: hex color, `rgb()/rgba()`, number with optional
/// `px`/`rem`/`em` unit, or a raw string, in that order.
pub fn parse_arbitrary(token: &str, options: ArbitraryOptions) -> Option<ArbitraryValue> {
    let inner = bracket_inner(token)?.replace("\\]", "]").replace('_', " ");
    let inner = inner.trim();
    if inner.is_empty() {
        return None;
    }

    if inner.starts_with('#') {
        // A malformed hex is still a color attempt, never a raw string.
        let color = parse_hex_color(inner)?;
        return options.allow_colors.then(|| ArbitraryValue::Color {
            literal: inner.to_string(),
            color,
        });
    }

    if let Some(color) = parse_rgb_function(inner) {
        return options.allow_colors.then(|| ArbitraryValue::Color {
            literal: inner.to_string(),
            color,
        });
    }

    if let Some(px) = parse_length(inner) {
        if !options.allow_units || (px < 0.0 && !options.allow_negative) {
            return None;
        }
        return Some(ArbitraryValue::Length(px));
    }

    options
        .allow_raw
        .then(|| ArbitraryValue::Raw(inner.to_string()))
}

/// `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`.
pub fn parse_hex_color(text: &str) -> Option<Color> {
    static HEX_REGEX: OnceLock<Regex> = OnceLock::new();
    let hex_regex = HEX_REGEX.get_or_init(|| {
        Regex::new(r"^#(?:[0-9a-fA-F]{3,4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").unwrap()
    });
    if !hex_regex.is_match(text) {
        return None;
    }
    Color::from_hex(text).ok()
}

/// `rgb(r, g, b)`, `rgba(r, g, b, a)` and the space/slash form
/// `rgb(r g b / a)`. Alpha may be a fraction or a percentage.
pub fn parse_rgb_function(text: &str) -> Option<Color> {
    static RGB_REGEX: OnceLock<Regex> = OnceLock::new();
    let rgb_regex = RGB_REGEX.get_or_init(|| {
        Regex::new(
            r"^rgba?\(\s*(\d{1,3})\s*[,\s]\s*(\d{1,3})\s*[,\s]\s*(\d{1,3})\s*(?:[,/]\s*(\d*\.?\d+)(%?)\s*)?\)$",
        )
        .unwrap()
    });
    let caps = rgb_regex.captures(text)?;

    let channel = |i: usize| -> Option<u8> { caps.get(i)?.as_str().parse().ok() };
    let mut color = Color::from_rgb8(channel(1)?, channel(2)?, channel(3)?);

    if let Some(alpha) = caps.get(4) {
        let mut alpha: f64 = alpha.as_str().parse().ok()?;
        if caps.get(5).is_some_and(|pct| !pct.as_str().is_empty()) {
            alpha /= 100.0;
        }
        if !(0.0..=1.0).contains(&alpha) {
            return None;
        }
        color.opacity = Some(alpha);
    }
    Some(color)
}

/// A number with an optional `px`, `rem` or `em` unit, in pixels.
pub fn parse_length(text: &str) -> Option<f64> {
    static LENGTH_REGEX: OnceLock<Regex> = OnceLock::new();
    let length_regex = LENGTH_REGEX
        .get_or_init(|| Regex::new(r"^(-?(?:\d+(?:\.\d+)?|\.\d+))(px|rem|em)?$").unwrap());
    let caps = length_regex.captures(text)?;
    let number: f64 = caps.get(1)?.as_str().parse().ok()?;
    match caps.get(2).map(|unit| unit.as_str()) {
        Some("rem") | Some("em") => Some(number * ROOT_FONT_SIZE),
        _ => Some(number),
    }
}

/// Parse `$[segment/segment/...]` and return the path.
///
/// The path must be non-empty, must not start or end with `/`, and must not
/// contain `//`.
pub fn parse_design_variable(token: &str) -> Option<&str> {
    let path = token.strip_prefix("$[")?.strip_suffix(']')?;
    if path.is_empty() || path.starts_with('/') || path.ends_with('/') || path.contains("//") {
        return None;
    }
    if path.contains(|c: char| c == '[' || c == ']') || path.chars().any(char::is_whitespace) {
        return None;
    }
    Some(path)
}

/// Byte index of the last `/` that sits outside every `[...]` group.
fn top_level_slash(token: &str) -> Option<usize> {
    let mut depth: i32 = 0;
    let mut found = None;
    for (i, ch) in token.char_indices() {
        match ch {
            '[' => depth += 1,
            ']' => depth -= 1,
            '/' if depth == 0 => found = Some(i),
            _ => {}
        }
    }
    // An unterminated group means the whole token is malformed.
    if depth != 0 {
        return None;
    }
    found
}

/// Split a trailing `/NN` opacity suffix (`NN` an integer in `0..=100`).
pub fn parse_opacity_suffix(token: &str) -> Option<(&str, f64)> {
    let slash = top_level_slash(token)?;
    let (prefix, suffix) = (&token[..slash], &token[slash + 1..]);
    if prefix.is_empty() || suffix.is_empty() || !suffix.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let percent: u32 = suffix.parse().ok()?;
    if percent > 100 {
        return None;
    }
    Some((prefix, percent as f64 / 100.0))
}

/// Opacity-aware split used by color utilities.
///
/// - no top-level slash: `Some((token, None))`
/// - a valid suffix: `Some((prefix, Some(opacity)))`
/// - a top-level slash with a bad suffix (`/150`, `/x`): `None`
pub fn split_opacity(token: &str) -> Option<(&str, Option<f64>)> {
    if top_level_slash(token).is_none() {
        return Some((token, None));
    }
    let (prefix, opacity) = parse_opacity_suffix(token)?;
    Some((prefix, Some(opacity)))
}

/// `"a/b"` → percentage string (`"1/2"` → `"50%"`).
pub fn parse_fraction(text: &str) -> Option<String> {
    let (num, den) = text.split_once('/')?;
    if num.is_empty() || den.is_empty() {
        return None;
    }
    if !num.bytes().chain(den.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }
    let num: f64 = num.parse().ok()?;
    let den: f64 = den.parse().ok()?;
    if den == 0.0 {
        return None;
    }
    Some(format!("{}%", format_number(num / den * 100.0)))
}

/// Format with at most six decimals and no trailing zeros.
pub fn format_number(n: f64) -> String {
    let s = format!("{:.6}", n);
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Negate a resolved value for `-m-4`-style utilities.
///
/// Numbers flip sign, percentage/length strings gain a leading `-`; keywords
/// and design variables cannot be negated.
pub fn negate(parsed: ParsedValue) -> Option<ParsedValue> {
    let value = match &parsed.value {
        StyleValue::Number(n) if *n == 0.0 => StyleValue::Number(0.0),
        StyleValue::Number(n) => StyleValue::Number(-n),
        StyleValue::Text(s) if s.starts_with(|c: char| c.is_ascii_digit()) => {
            StyleValue::Text(format!("-{}", s))
        }
        _ => return None,
    };
    Some(ParsedValue { value, ..parsed })
}

use crate::error::{TwError, TwResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// An RGB color with channels in `0.0..=1.0` and an optional opacity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub opacity: Option<f64>,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);

    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self {
            r,
            g,
            b,
            opacity: None,
        }
    }

    /// Build a color from 8-bit channels.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0)
    }

    /// Build a color from a packed `0xRRGGBB` value.
    pub fn from_packed(rgb: u32) -> Self {
        Self::from_rgb8((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    /// Parse `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(hex: &str) -> TwResult<Self> {
        let invalid = |reason: &str| TwError::InvalidColor {
            value: hex.to_string(),
            reason: reason.to_string(),
        };
        let digits = hex
            .strip_prefix('#')
            .ok_or_else(|| invalid("must start with '#'"))?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid("contains non-hex characters"));
        }

        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid("bad channel"));
        let (r, g, b, a) = match digits.len() {
            3 | 4 => {
                let mut c = digits.chars().map(|d| {
                    let pair: String = [d, d].iter().collect();
                    channel(&pair)
                });
                let r = c.next().ok_or_else(|| invalid("missing red"))??;
                let g = c.next().ok_or_else(|| invalid("missing green"))??;
                let b = c.next().ok_or_else(|| invalid("missing blue"))??;
                let a = c.next().transpose()?;
                (r, g, b, a)
            }
            6 | 8 => {
                let r = channel(&digits[0..2])?;
                let g = channel(&digits[2..4])?;
                let b = channel(&digits[4..6])?;
                let a = if digits.len() == 8 {
                    Some(channel(&digits[6..8])?)
                } else {
                    None
                };
                (r, g, b, a)
            }
            _ => return Err(invalid("expected 3, 4, 6 or 8 hex digits")),
        };

        let mut color = Self::from_rgb8(r, g, b);
        color.opacity = a.map(|a| a as f64 / 255.0);
        Ok(color)
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity.clamp(0.0, 1.0));
        self
    }

    /// Lowercase `#rrggbb` form, ignoring opacity.
    pub fn to_hex(&self) -> String {
        let to8 = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("#{:02x}{:02x}{:02x}", to8(self.r), to8(self.g), to8(self.b))
    }
}

/// Reference to a token owned by a downstream design tool (`$[path]`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableRef {
    pub variable_id: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub opacity: Option<f64>,
}

/// A value stored in the style document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    Number(f64),
    Text(String),
    Color(Color),
    Variable(VariableRef),
    List(Vec<StyleValue>),
    Map(BTreeMap<String, StyleValue>),
}

impl StyleValue {
    pub fn text(s: impl Into<String>) -> Self {
        StyleValue::Text(s.into())
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            StyleValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            StyleValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_color(&self) -> Option<&Color> {
        match self {
            StyleValue::Color(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&BTreeMap<String, StyleValue>> {
        match self {
            StyleValue::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Look up a dotted path (`top` or `padding.top`) inside nested maps.
    pub fn get_path(&self, path: &str) -> Option<&StyleValue> {
        path.split('.').try_fold(self, |value, key| value.as_map()?.get(key))
    }

    /// Attach an opacity to colors and variable references; other values
    /// are returned unchanged.
    pub fn with_opacity(self, opacity: Option<f64>) -> Self {
        let Some(opacity) = opacity else {
            return self;
        };
        match self {
            StyleValue::Color(c) => StyleValue::Color(c.with_opacity(opacity)),
            StyleValue::Variable(v) => StyleValue::Variable(VariableRef {
                opacity: Some(opacity),
                ..v
            }),
            other => other,
        }
    }
}

impl From<f64> for StyleValue {
    fn from(n: f64) -> Self {
        StyleValue::Number(n)
    }
}

impl From<&str> for StyleValue {
    fn from(s: &str) -> Self {
        StyleValue::Text(s.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(s: String) -> Self {
        StyleValue::Text(s)
    }
}

impl From<Color> for StyleValue {
    fn from(c: Color) -> Self {
        StyleValue::Color(c)
    }
}

/// Where a resolved value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValueOrigin {
    Preset,
    Arbitrary,
    DesignVariable,
}

/// Top-level style document sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Layout,
    Position,
    Flexbox,
    Grid,
    Spacing,
    Sizing,
    Typography,
    Backgrounds,
    Borders,
    Effects,
    Filters,
    Transforms,
    Transitions,
    Tables,
    Interactivity,
}

impl Category {
    pub fn name(&self) -> &'static str {
        match self {
            Category::Layout => "layout",
            Category::Position => "position",
            Category::Flexbox => "flexbox",
            Category::Grid => "grid",
            Category::Spacing => "spacing",
            Category::Sizing => "sizing",
            Category::Typography => "typography",
            Category::Backgrounds => "backgrounds",
            Category::Borders => "borders",
            Category::Effects => "effects",
            Category::Filters => "filters",
            Category::Transforms => "transforms",
            Category::Transitions => "transitions",
            Category::Tables => "tables",
            Category::Interactivity => "interactivity",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The result of a value primitive or shared resolver.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedValue {
    pub value: StyleValue,
    pub origin: ValueOrigin,
    pub opacity: Option<f64>,
    /// Set iff `origin` is [`ValueOrigin::DesignVariable`].
    pub variable_id: Option<String>,
}

impl ParsedValue {
    pub fn preset(value: impl Into<StyleValue>) -> Self {
        Self {
            value: value.into(),
            origin: ValueOrigin::Preset,
            opacity: None,
            variable_id: None,
        }
    }

    pub fn arbitrary(value: impl Into<StyleValue>) -> Self {
        Self {
            value: value.into(),
            origin: ValueOrigin::Arbitrary,
            opacity: None,
            variable_id: None,
        }
    }

    pub fn variable(path: &str) -> Self {
        Self {
            value: StyleValue::Variable(VariableRef {
                variable_id: path.to_string(),
                opacity: None,
            }),
            origin: ValueOrigin::DesignVariable,
            opacity: None,
            variable_id: Some(path.to_string()),
        }
    }

    /// Attach an opacity suffix, propagating it into the carried color.
    pub fn with_opacity(mut self, opacity: Option<f64>) -> Self {
        if opacity.is_some() {
            self.value = self.value.with_opacity(opacity);
            self.opacity = opacity;
        }
        self
    }
}

/// The output of a category parser for one base class.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStyle {
    pub category: Category,
    /// Canonical property name, or a comma-joined list of them.
    pub property: &'static str,
    pub value: StyleValue,
    pub origin: ValueOrigin,
    pub variable_id: Option<String>,
    /// Side effects written after the primary property, each into its own
    /// section.
    pub additional: Vec<(Category, &'static str, StyleValue)>,
}

impl ResolvedStyle {
    pub fn new(category: Category, property: &'static str, parsed: ParsedValue) -> Self {
        Self {
            category,
            property,
            value: parsed.value,
            origin: parsed.origin,
            variable_id: parsed.variable_id,
            additional: Vec::new(),
        }
    }

    /// A preset keyword value (`display: flex`).
    pub fn keyword(category: Category, property: &'static str, value: impl Into<StyleValue>) -> Self {
        Self::new(category, property, ParsedValue::preset(value))
    }

    pub fn with_additional(self, property: &'static str, value: impl Into<StyleValue>) -> Self {
        let category = self.category;
        self.with_additional_in(category, property, value)
    }

    /// A side effect owned by another section (`truncate` clips through
    /// the layout overflow properties).
    pub fn with_additional_in(
        mut self,
        category: Category,
        property: &'static str,
        value: impl Into<StyleValue>,
    ) -> Self {
        self.additional.push((category, property, value.into()));
        self
    }

    /// The individual property names, in order.
    pub fn properties(&self) -> impl Iterator<Item = &'static str> {
        self.property.split(',').map(str::trim)
    }

    /// Check the two invariants whose violation is a parser bug.
    pub fn validate(&self) -> TwResult<()> {
        if self.origin == ValueOrigin::DesignVariable && self.variable_id.is_none() {
            return Err(TwError::MissingVariableId {
                property: self.property.to_string(),
            });
        }
        let expected = self.properties().count();
        if expected > 1 {
            if let StyleValue::List(values) = &self.value {
                if values.len() != expected {
                    return Err(TwError::PropertyValueMismatch {
                        property: self.property.to_string(),
                        expected,
                        found: values.len(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Pair every listed property with its value, broadcasting scalars.
    pub fn pairs(&self) -> TwResult<Vec<(&'static str, StyleValue)>> {
        self.validate()?;
        let props: Vec<&'static str> = self.properties().collect();
        if props.len() == 1 {
            return Ok(vec![(props[0], self.value.clone())]);
        }
        Ok(match &self.value {
            StyleValue::List(values) => props.into_iter().zip(values.iter().cloned()).collect(),
            scalar => props.into_iter().map(|p| (p, scalar.clone())).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_parsing() {
        let c = Color::from_hex("#ff0000").unwrap();
        assert_eq!(c, Color::rgb(1.0, 0.0, 0.0));
        assert_eq!(Color::from_hex("#fff").unwrap(), Color::WHITE);
        let c = Color::from_hex("#00000080").unwrap();
        assert!((c.opacity.unwrap() - 128.0 / 255.0).abs() < 1e-9);
        assert!(Color::from_hex("#12345").is_err());
        assert!(Color::from_hex("#gggggg").is_err());
        assert!(Color::from_hex("123456").is_err());
    }

    #[test]
    fn hex_round_trip_is_lowercase() {
        assert_eq!(Color::from_hex("#3B82F6").unwrap().to_hex(), "#3b82f6");
    }

    #[test]
    fn pairs_broadcast_scalar() {
        let style = ResolvedStyle::keyword(
            Category::Borders,
            "borderTopLeftRadius, borderTopRightRadius",
            8.0,
        );
        let pairs = style.pairs().unwrap();
        assert_eq!(
            pairs,
            vec![
                ("borderTopLeftRadius", StyleValue::Number(8.0)),
                ("borderTopRightRadius", StyleValue::Number(8.0)),
            ]
        );
    }

    #[test]
    fn pairs_zip_lists() {
        let style = ResolvedStyle::keyword(
            Category::Sizing,
            "width, height",
            StyleValue::List(vec![10.0.into(), 20.0.into()]),
        );
        let pairs = style.pairs().unwrap();
        assert_eq!(pairs[1], ("height", StyleValue::Number(20.0)));
    }

    #[test]
    fn list_length_mismatch_is_a_programmer_error() {
        let style = ResolvedStyle::keyword(
            Category::Sizing,
            "width, height",
            StyleValue::List(vec![10.0.into()]),
        );
        assert_eq!(
            style.validate(),
            Err(TwError::PropertyValueMismatch {
                property: "width, height".into(),
                expected: 2,
                found: 1,
            })
        );
    }

    #[test]
    fn design_variable_without_id_is_a_programmer_error() {
        let mut style = ResolvedStyle::new(
            Category::Backgrounds,
            "backgroundColor",
            ParsedValue::variable("colors/primary"),
        );
        assert!(style.validate().is_ok());
        style.variable_id = None;
        assert!(matches!(
            style.validate(),
            Err(TwError::MissingVariableId { .. })
        ));
    }

    #[test]
    fn opacity_attaches_to_colors_only() {
        let v = StyleValue::Color(Color::BLACK).with_opacity(Some(0.5));
        assert_eq!(v.as_color().unwrap().opacity, Some(0.5));
        let v = StyleValue::Number(4.0).with_opacity(Some(0.5));
        assert_eq!(v, StyleValue::Number(4.0));
    }

    #[test]
    fn nested_path_lookup() {
        let mut sides = BTreeMap::new();
        sides.insert("top".to_string(), StyleValue::Number(8.0));
        let v = StyleValue::Map(BTreeMap::from([("padding".to_string(), StyleValue::Map(sides))]));
        assert_eq!(v.get_path("padding.top"), Some(&StyleValue::Number(8.0)));
        assert_eq!(v.get_path("padding.left"), None);
    }
}

//! Design presets: the named scales the engine looks values up in.
//!
//! A [`DesignPreset`] is built once (usually [`DesignPreset::tailwind`]),
//! optionally extended from YAML via [`PresetOverrides`], and then passed by
//! reference into every resolution. The engine never mutates it.

mod palette;

use crate::error::{TwError, TwResult};
use crate::style::{Color, StyleValue};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub use palette::STEPS;

/// One hue: shade step → color.
pub type ColorScale = BTreeMap<u16, Color>;

/// Key used for the unsuffixed form of a utility (`rounded`, `shadow`, `blur`).
pub const DEFAULT_KEY: &str = "DEFAULT";

/// A font size paired with its default line height, both in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSize {
    pub size: f64,
    pub line_height: f64,
}

/// One layer of a box shadow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowLayer {
    pub offset_x: f64,
    pub offset_y: f64,
    pub blur: f64,
    pub spread: f64,
    pub color: Color,
    pub inset: bool,
}

impl ShadowLayer {
    const fn drop_shadow(offset_y: f64, blur: f64, spread: f64, alpha: f64) -> Self {
        Self {
            offset_x: 0.0,
            offset_y,
            blur,
            spread,
            color: Color {
                r: 0.0,
                g: 0.0,
                b: 0.0,
                opacity: Some(alpha),
            },
            inset: false,
        }
    }

    pub fn to_value(&self) -> StyleValue {
        let mut layer = BTreeMap::new();
        layer.insert("offsetX".to_string(), StyleValue::Number(self.offset_x));
        layer.insert("offsetY".to_string(), StyleValue::Number(self.offset_y));
        layer.insert("blur".to_string(), StyleValue::Number(self.blur));
        layer.insert("spread".to_string(), StyleValue::Number(self.spread));
        layer.insert("color".to_string(), StyleValue::Color(self.color));
        layer.insert(
            "type".to_string(),
            StyleValue::text(if self.inset { "INNER_SHADOW" } else { "DROP_SHADOW" }),
        );
        StyleValue::Map(layer)
    }
}

/// Immutable lookup tables injected into every resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignPreset {
    pub palettes: BTreeMap<String, ColorScale>,
    /// Single colors without shades (`black`, `white`, brand colors).
    pub named_colors: BTreeMap<String, Color>,
    /// Spacing step → pixels.
    pub spacing: BTreeMap<String, f64>,
    pub radius: BTreeMap<String, f64>,
    pub border_widths: BTreeMap<String, f64>,
    pub shadows: BTreeMap<String, Vec<ShadowLayer>>,
    pub font_sizes: BTreeMap<String, FontSize>,
    pub font_weights: BTreeMap<String, u16>,
    pub font_families: BTreeMap<String, String>,
    /// Relative line heights (`leading-tight` → 1.25).
    pub line_heights: BTreeMap<String, f64>,
    /// Letter spacing in `em`.
    pub letter_spacing: BTreeMap<String, f64>,
    pub blur: BTreeMap<String, f64>,
    /// Opacity step → `0.0..=1.0`.
    pub opacity: BTreeMap<String, f64>,
    /// Named max-width containers in pixels.
    pub containers: BTreeMap<String, f64>,
}

impl Default for DesignPreset {
    fn default() -> Self {
        Self::tailwind()
    }
}

fn table<V: Copy>(entries: &[(&str, V)]) -> BTreeMap<String, V> {
    entries.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

impl DesignPreset {
    /// The stock Tailwind scales.
    pub fn tailwind() -> Self {
        let palettes = palette::PALETTE
            .iter()
            .map(|(hue, shades)| {
                let scale = STEPS
                    .iter()
                    .zip(shades.iter())
                    .map(|(step, rgb)| (*step, Color::from_packed(*rgb)))
                    .collect();
                (hue.to_string(), scale)
            })
            .collect();

        let shadows = [
            ("sm", vec![ShadowLayer::drop_shadow(1.0, 2.0, 0.0, 0.05)]),
            (
                DEFAULT_KEY,
                vec![
                    ShadowLayer::drop_shadow(1.0, 3.0, 0.0, 0.1),
                    ShadowLayer::drop_shadow(1.0, 2.0, -1.0, 0.1),
                ],
            ),
            (
                "md",
                vec![
                    ShadowLayer::drop_shadow(4.0, 6.0, -1.0, 0.1),
                    ShadowLayer::drop_shadow(2.0, 4.0, -2.0, 0.1),
                ],
            ),
            (
                "lg",
                vec![
                    ShadowLayer::drop_shadow(10.0, 15.0, -3.0, 0.1),
                    ShadowLayer::drop_shadow(4.0, 6.0, -4.0, 0.1),
                ],
            ),
            (
                "xl",
                vec![
                    ShadowLayer::drop_shadow(20.0, 25.0, -5.0, 0.1),
                    ShadowLayer::drop_shadow(8.0, 10.0, -6.0, 0.1),
                ],
            ),
            ("2xl", vec![ShadowLayer::drop_shadow(25.0, 50.0, -12.0, 0.25)]),
            (
                "inner",
                vec![ShadowLayer {
                    inset: true,
                    ..ShadowLayer::drop_shadow(2.0, 4.0, 0.0, 0.05)
                }],
            ),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();

        let font_sizes = [
            ("xs", 12.0, 16.0),
            ("sm", 14.0, 20.0),
            ("base", 16.0, 24.0),
            ("lg", 18.0, 28.0),
            ("xl", 20.0, 28.0),
            ("2xl", 24.0, 32.0),
            ("3xl", 30.0, 36.0),
            ("4xl", 36.0, 40.0),
            ("5xl", 48.0, 48.0),
            ("6xl", 60.0, 60.0),
            ("7xl", 72.0, 72.0),
            ("8xl", 96.0, 96.0),
            ("9xl", 128.0, 128.0),
        ]
        .into_iter()
        .map(|(k, size, line_height)| (k.to_string(), FontSize { size, line_height }))
        .collect();

        let opacity = (0..=20)
            .map(|i| ((i * 5).to_string(), (i * 5) as f64 / 100.0))
            .collect();

        Self {
            palettes,
            named_colors: table(&[
                ("black", Color::BLACK),
                ("white", Color::WHITE),
                ("transparent", Color::BLACK.with_opacity(0.0)),
            ]),
            spacing: table(&[
                ("0", 0.0),
                ("px", 1.0),
                ("0.5", 2.0),
                ("1", 4.0),
                ("1.5", 6.0),
                ("2", 8.0),
                ("2.5", 10.0),
                ("3", 12.0),
                ("3.5", 14.0),
                ("4", 16.0),
                ("5", 20.0),
                ("6", 24.0),
                ("7", 28.0),
                ("8", 32.0),
                ("9", 36.0),
                ("10", 40.0),
                ("11", 44.0),
                ("12", 48.0),
                ("14", 56.0),
                ("16", 64.0),
                ("20", 80.0),
                ("24", 96.0),
                ("28", 112.0),
                ("32", 128.0),
                ("36", 144.0),
                ("40", 160.0),
                ("44", 176.0),
                ("48", 192.0),
                ("52", 208.0),
                ("56", 224.0),
                ("60", 240.0),
                ("64", 256.0),
                ("72", 288.0),
                ("80", 320.0),
                ("96", 384.0),
            ]),
            radius: table(&[
                ("none", 0.0),
                ("sm", 2.0),
                (DEFAULT_KEY, 4.0),
                ("md", 6.0),
                ("lg", 8.0),
                ("xl", 12.0),
                ("2xl", 16.0),
                ("3xl", 24.0),
                ("full", 9999.0),
            ]),
            border_widths: table(&[
                (DEFAULT_KEY, 1.0),
                ("0", 0.0),
                ("2", 2.0),
                ("4", 4.0),
                ("8", 8.0),
            ]),
            shadows,
            font_sizes,
            font_weights: table(&[
                ("thin", 100),
                ("extralight", 200),
                ("light", 300),
                ("normal", 400),
                ("medium", 500),
                ("semibold", 600),
                ("bold", 700),
                ("extrabold", 800),
                ("black", 900),
            ]),
            font_families: [("sans", "Inter"), ("serif", "Georgia"), ("mono", "Roboto Mono")]
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            line_heights: table(&[
                ("none", 1.0),
                ("tight", 1.25),
                ("snug", 1.375),
                ("normal", 1.5),
                ("relaxed", 1.625),
                ("loose", 2.0),
            ]),
            letter_spacing: table(&[
                ("tighter", -0.05),
                ("tight", -0.025),
                ("normal", 0.0),
                ("wide", 0.025),
                ("wider", 0.05),
                ("widest", 0.1),
            ]),
            blur: table(&[
                ("none", 0.0),
                ("sm", 4.0),
                (DEFAULT_KEY, 8.0),
                ("md", 12.0),
                ("lg", 16.0),
                ("xl", 24.0),
                ("2xl", 40.0),
                ("3xl", 64.0),
            ]),
            opacity,
            containers: table(&[
                ("3xs", 256.0),
                ("2xs", 288.0),
                ("xs", 320.0),
                ("sm", 384.0),
                ("md", 448.0),
                ("lg", 512.0),
                ("xl", 576.0),
                ("2xl", 672.0),
                ("3xl", 768.0),
                ("4xl", 896.0),
                ("5xl", 1024.0),
                ("6xl", 1152.0),
                ("7xl", 1280.0),
            ]),
        }
    }

    /// Look up `hue-step` (`red-500`) or a named color (`black`).
    pub fn color(&self, name: &str) -> Option<Color> {
        if let Some(color) = self.named_colors.get(name) {
            return Some(*color);
        }
        let (hue, step) = name.rsplit_once('-')?;
        let step: u16 = step.parse().ok()?;
        self.palettes.get(hue)?.get(&step).copied()
    }

    pub fn spacing(&self, key: &str) -> Option<f64> {
        self.spacing.get(key).copied()
    }

    /// The family used when a weight is set before any family class.
    pub fn default_font_family(&self) -> &str {
        self.font_families
            .get("sans")
            .or_else(|| self.font_families.values().next())
            .map(String::as_str)
            .unwrap_or("Inter")
    }

    /// Return a copy extended with the given overrides.
    pub fn with_overrides(mut self, overrides: &PresetOverrides) -> TwResult<Self> {
        if let Some(colors) = &overrides.colors {
            for (name, entry) in colors {
                match entry {
                    ColorEntry::Single(hex) => {
                        self.named_colors.insert(name.clone(), Color::from_hex(hex)?);
                    }
                    ColorEntry::Scale(shades) => {
                        let scale = self.palettes.entry(name.clone()).or_default();
                        for (step, hex) in shades {
                            scale.insert(*step, Color::from_hex(hex)?);
                        }
                    }
                }
            }
        }
        if let Some(spacing) = &overrides.spacing {
            for (key, px) in spacing {
                if *px < 0.0 {
                    return Err(TwError::InvalidPreset {
                        key: format!("spacing.{}", key),
                        reason: "spacing must not be negative".into(),
                    });
                }
                self.spacing.insert(key.clone(), *px);
            }
        }
        if let Some(radius) = &overrides.border_radius {
            self.radius.extend(radius.iter().map(|(k, v)| (k.clone(), *v)));
        }
        if let Some(families) = &overrides.font_families {
            for (key, family) in families {
                if family.trim().is_empty() {
                    return Err(TwError::InvalidPreset {
                        key: format!("fontFamilies.{}", key),
                        reason: "family name must be a non-empty string".into(),
                    });
                }
                self.font_families.insert(key.clone(), family.clone());
            }
        }
        if let Some(sizes) = &overrides.font_sizes {
            for (key, size) in sizes {
                let line_height = self
                    .font_sizes
                    .get(key)
                    .map(|existing| existing.line_height)
                    .unwrap_or(size * 1.5);
                self.font_sizes.insert(
                    key.clone(),
                    FontSize {
                        size: *size,
                        line_height,
                    },
                );
            }
        }
        if let Some(weights) = &overrides.font_weights {
            for (key, weight) in weights {
                if *weight < 100 || *weight > 900 || weight % 100 != 0 {
                    return Err(TwError::InvalidPreset {
                        key: format!("fontWeights.{}", key),
                        reason: format!(
                            "weight {} is invalid: must be 100-900 in increments of 100",
                            weight
                        ),
                    });
                }
                self.font_weights.insert(key.clone(), *weight);
            }
        }
        Ok(self)
    }
}

/// A color override: either a single hex value or a shade scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorEntry {
    Single(String),
    Scale(BTreeMap<u16, String>),
}

/// YAML-loadable additions to a [`DesignPreset`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresetOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<BTreeMap<String, ColorEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing: Option<BTreeMap<String, f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<BTreeMap<String, f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_families: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_sizes: Option<BTreeMap<String, f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weights: Option<BTreeMap<String, u16>>,
}

impl PresetOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_yaml(yaml: &str) -> TwResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_eleven_steps_per_hue() {
        let preset = DesignPreset::tailwind();
        assert_eq!(preset.palettes.len(), 22);
        for (hue, scale) in &preset.palettes {
            assert_eq!(scale.len(), 11, "hue {} is incomplete", hue);
        }
    }

    #[test]
    fn color_lookup() {
        let preset = DesignPreset::tailwind();
        assert_eq!(preset.color("red-500").unwrap().to_hex(), "#ef4444");
        assert_eq!(preset.color("blue-500").unwrap().to_hex(), "#3b82f6");
        assert_eq!(preset.color("white"), Some(Color::WHITE));
        assert_eq!(preset.color("red-550"), None);
        assert_eq!(preset.color("nope-500"), None);
        assert_eq!(preset.color("red"), None);
    }

    #[test]
    fn spacing_scale() {
        let preset = DesignPreset::tailwind();
        assert_eq!(preset.spacing("4"), Some(16.0));
        assert_eq!(preset.spacing("0.5"), Some(2.0));
        assert_eq!(preset.spacing("px"), Some(1.0));
        assert_eq!(preset.spacing("13"), None);
    }

    #[test]
    fn overrides_from_yaml() {
        let yaml = r##"
colors:
  primary: "#4a90e2"
  brand:
    500: "#112233"
spacing:
  "13": 52
fontFamilies:
  sans: "IBM Plex Sans"
"##;
        let overrides = PresetOverrides::from_yaml(yaml).unwrap();
        let preset = DesignPreset::tailwind().with_overrides(&overrides).unwrap();

        assert_eq!(preset.color("primary").unwrap().to_hex(), "#4a90e2");
        assert_eq!(preset.color("brand-500").unwrap().to_hex(), "#112233");
        assert_eq!(preset.spacing("13"), Some(52.0));
        assert_eq!(preset.default_font_family(), "IBM Plex Sans");
        // Untouched tables survive.
        assert_eq!(preset.color("red-500").unwrap().to_hex(), "#ef4444");
    }

    #[test]
    fn invalid_override_color_is_rejected() {
        let yaml = "colors:\n  primary: \"#zzzzzz\"\n";
        let overrides = PresetOverrides::from_yaml(yaml).unwrap();
        let err = DesignPreset::tailwind().with_overrides(&overrides).unwrap_err();
        assert!(matches!(err, TwError::InvalidColor { .. }));
    }

    #[test]
    fn invalid_font_weight_is_rejected() {
        let yaml = "fontWeights:\n  heavy: 950\n";
        let overrides = PresetOverrides::from_yaml(yaml).unwrap();
        let err = DesignPreset::tailwind().with_overrides(&overrides).unwrap_err();
        assert!(matches!(err, TwError::InvalidPreset { .. }));
    }
}

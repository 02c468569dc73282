//! Font pairing state for one resolution.
//!
//! Family, weight and italic come from separate classes (`font-serif
//! font-semibold italic`), but downstream design tools need them as a single
//! `fontName { family, style }` descriptor. The session records the font
//! writes of each bucket and emits the descriptors once every token has been
//! applied, so class order never changes the result. A variant bucket fills
//! whatever it did not set itself from its enclosing buckets.

use crate::document::StyleDocument;
use crate::style::{Category, ResolvedStyle, StyleValue};
use crate::tailwind::variants::Variant;
use std::collections::BTreeMap;

const WEIGHT_NAMES: &[(u16, &str)] = &[
    (100, "Thin"),
    (200, "Extra Light"),
    (300, "Light"),
    (400, "Regular"),
    (500, "Medium"),
    (600, "Semi Bold"),
    (700, "Bold"),
    (800, "Extra Bold"),
    (900, "Black"),
];

/// Style name for a numeric weight, snapped to the nearest hundred.
pub fn weight_name(weight: u16) -> &'static str {
    let snapped = ((weight.clamp(100, 900) + 50) / 100) * 100;
    WEIGHT_NAMES
        .iter()
        .find(|(w, _)| *w == snapped)
        .map(|(_, name)| *name)
        .unwrap_or("Regular")
}

/// Font properties written in one bucket. `None` means "not set here".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FontState {
    /// Text family or a design variable.
    pub family: Option<StyleValue>,
    pub weight: Option<u16>,
    pub italic: Option<bool>,
}

impl FontState {
    /// Fold one property write in. Returns `false` for anything that does
    /// not affect the font name.
    fn update(&mut self, property: &str, value: &StyleValue) -> bool {
        match (property, value) {
            ("fontFamily", StyleValue::Text(_) | StyleValue::Variable(_)) => {
                self.family = Some(value.clone());
                true
            }
            ("fontWeight", StyleValue::Number(weight)) => {
                self.weight = Some(weight.round().clamp(1.0, 1000.0) as u16);
                true
            }
            ("fontStyle", StyleValue::Text(style)) => {
                self.italic = Some(style == "italic");
                true
            }
            _ => false,
        }
    }

    /// Fields set here win; the rest come from `outer`.
    pub fn or(&self, outer: &FontState) -> FontState {
        FontState {
            family: self.family.clone().or_else(|| outer.family.clone()),
            weight: self.weight.or(outer.weight),
            italic: self.italic.or(outer.italic),
        }
    }

    /// `"Semi Bold Italic"`, `"Regular"`, `"Italic"`.
    pub fn style_name(&self) -> String {
        match (weight_name(self.weight.unwrap_or(400)), self.italic.unwrap_or(false)) {
            ("Regular", true) => "Italic".to_string(),
            (name, true) => format!("{} Italic", name),
            (name, false) => name.to_string(),
        }
    }

    pub fn descriptor(&self, default_family: &str) -> StyleValue {
        let family = self
            .family
            .clone()
            .unwrap_or_else(|| StyleValue::text(default_family));
        StyleValue::Map(BTreeMap::from([
            ("family".to_string(), family),
            ("style".to_string(), StyleValue::text(self.style_name())),
        ]))
    }
}

/// Mutable carrier threaded through one resolution.
#[derive(Debug, Default)]
pub struct Session {
    fonts: BTreeMap<Vec<Variant>, FontState>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the font-related writes of `resolved` against `path`.
    pub fn pair_font(&mut self, path: &[Variant], resolved: &ResolvedStyle) {
        let writes = std::iter::once((resolved.category, resolved.property, &resolved.value)).chain(
            resolved
                .additional
                .iter()
                .map(|(category, property, value)| (*category, *property, value)),
        );

        let mut state = self.fonts.get(path).cloned().unwrap_or_default();
        let mut touched = false;
        for (category, property, value) in writes {
            if category == Category::Typography {
                touched |= state.update(property, value);
            }
        }
        if touched {
            self.fonts.insert(path.to_vec(), state);
        }
    }

    /// Font state seen by `path`: its own writes, then each enclosing
    /// bucket's out to the base.
    pub fn effective(&self, path: &[Variant]) -> FontState {
        (0..=path.len())
            .rev()
            .filter_map(|len| self.fonts.get(&path[..len]))
            .fold(FontState::default(), |state, outer| state.or(outer))
    }

    /// Write a `fontName` descriptor into every bucket that set a font
    /// property.
    pub fn finish(&self, doc: &mut StyleDocument, default_family: &str) {
        for path in self.fonts.keys() {
            let descriptor = self.effective(path).descriptor(default_family);
            log::trace!("fontName in {:?} -> {:?}", path, descriptor);
            doc.bucket_mut(path)
                .category_mut(Category::Typography)
                .insert("fontName".to_string(), descriptor);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::VariableRef;
    use pretty_assertions::assert_eq;

    fn name(family: &str, style: &str) -> StyleValue {
        StyleValue::Map(BTreeMap::from([
            ("family".to_string(), StyleValue::text(family)),
            ("style".to_string(), StyleValue::text(style)),
        ]))
    }

    #[test]
    fn weight_names() {
        assert_eq!(weight_name(600), "Semi Bold");
        assert_eq!(weight_name(400), "Regular");
        assert_eq!(weight_name(649), "Semi Bold");
        assert_eq!(weight_name(650), "Bold");
        assert_eq!(weight_name(50), "Thin");
        assert_eq!(weight_name(1000), "Black");
    }

    #[test]
    fn style_names() {
        let mut state = FontState::default();
        assert_eq!(state.style_name(), "Regular");
        state.italic = Some(true);
        assert_eq!(state.style_name(), "Italic");
        state.weight = Some(600);
        assert_eq!(state.style_name(), "Semi Bold Italic");
    }

    fn font(property: &'static str, value: impl Into<StyleValue>) -> ResolvedStyle {
        ResolvedStyle::keyword(Category::Typography, property, value)
    }

    #[test]
    fn pairing_accumulates_across_writes() {
        let mut session = Session::new();
        session.pair_font(&[], &font("fontWeight", 700.0));
        session.pair_font(&[], &font("fontFamily", "Georgia"));

        let mut doc = StyleDocument::new();
        session.finish(&mut doc, "Inter");
        assert_eq!(doc.get(Category::Typography, "fontName"), Some(&name("Georgia", "Bold")));
    }

    #[test]
    fn variant_bucket_fills_from_base() {
        let mut session = Session::new();
        session.pair_font(&[], &font("fontFamily", "Georgia"));
        session.pair_font(&[Variant::Hover], &font("fontStyle", "italic"));

        let mut doc = StyleDocument::new();
        session.finish(&mut doc, "Inter");
        assert_eq!(doc.get(Category::Typography, "fontName"), Some(&name("Georgia", "Regular")));
        assert_eq!(
            doc.bucket(&[Variant::Hover]).unwrap().get(Category::Typography, "fontName"),
            Some(&name("Georgia", "Italic"))
        );
    }

    #[test]
    fn base_writes_after_variant_still_reach_it() {
        let mut session = Session::new();
        session.pair_font(&[Variant::Hover], &font("fontWeight", 700.0));
        session.pair_font(&[], &font("fontFamily", "Georgia"));
        session.pair_font(&[], &font("fontStyle", "italic"));

        assert_eq!(
            session.effective(&[Variant::Hover]),
            FontState {
                family: Some(StyleValue::text("Georgia")),
                weight: Some(700),
                italic: Some(true),
            }
        );
    }

    #[test]
    fn nested_bucket_reads_each_enclosing_bucket() {
        let mut session = Session::new();
        session.pair_font(&[], &font("fontFamily", "Georgia"));
        session.pair_font(&[Variant::Md], &font("fontWeight", 600.0));
        session.pair_font(&[Variant::Md, Variant::Hover], &font("fontStyle", "italic"));

        let state = session.effective(&[Variant::Md, Variant::Hover]);
        assert_eq!(state.descriptor("Inter"), name("Georgia", "Semi Bold Italic"));
    }

    #[test]
    fn variable_family_is_kept() {
        let mut session = Session::new();
        let variable = StyleValue::Variable(VariableRef {
            variable_id: "fonts/heading".to_string(),
            opacity: None,
        });
        session.pair_font(&[], &font("fontFamily", variable.clone()));

        let descriptor = session.effective(&[]).descriptor("Inter");
        assert_eq!(
            descriptor,
            StyleValue::Map(BTreeMap::from([
                ("family".to_string(), variable),
                ("style".to_string(), StyleValue::text("Regular")),
            ]))
        );
    }

    #[test]
    fn unrelated_writes_leave_no_descriptor() {
        let mut session = Session::new();
        let size = font("fontSize", 14.0).with_additional("lineHeight", 20.0);
        session.pair_font(&[], &size);

        let mut doc = StyleDocument::new();
        session.finish(&mut doc, "Inter");
        assert!(doc.is_empty());
    }
}

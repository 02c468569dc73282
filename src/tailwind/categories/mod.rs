//! Category parsers.
//!
//! Every category module exposes the same contract:
//! - `PREFIXES`: the class prefixes (`"bg-"`) and exact keywords (`"flex"`)
//!   it owns; the registry derives `is_valid_class` from this table
//! - `parse_value(base, ctx)`: the definitive parser
//! - optionally `expand(property)`: its shorthand expansion table

pub mod backgrounds;
pub mod borders;
pub mod effects;
pub mod filters;
pub mod flexbox;
pub mod grid;
pub mod interactivity;
pub mod layout;
pub mod overflow;
pub mod position;
pub mod ring;
pub mod sizing;
pub mod spacing;
pub mod tables;
pub mod transforms;
pub mod transitions;
pub mod typography;

use crate::config::Config;
use crate::preset::DesignPreset;
use crate::style::{ParsedValue, StyleValue};
use crate::tailwind::value::{self, ArbitraryOptions, ArbitraryValue};
use std::collections::BTreeMap;

/// Read-only inputs shared by every parser call.
#[derive(Debug, Clone, Copy)]
pub struct ParserContext<'a> {
    pub config: &'a Config,
    pub preset: &'a DesignPreset,
}

impl<'a> ParserContext<'a> {
    pub fn new(config: &'a Config, preset: &'a DesignPreset) -> Self {
        Self { config, preset }
    }

    /// [`value::parse_arbitrary`], disabled when arbitrary values are off.
    pub fn arbitrary(&self, token: &str, options: ArbitraryOptions) -> Option<ArbitraryValue> {
        if !self.config.enable_arbitrary_values {
            return None;
        }
        value::parse_arbitrary(token, options)
    }

    pub fn arbitrary_value(&self, token: &str, options: ArbitraryOptions) -> Option<ParsedValue> {
        self.arbitrary(token, options).map(ArbitraryValue::into_parsed)
    }

    pub fn variable(&self, token: &str) -> Option<ParsedValue> {
        value::parse_design_variable(token).map(ParsedValue::variable)
    }

    /// Resolve a color suffix (`red-500`, `white`, `[#ff0000]`,
    /// `$[colors/primary]`), honouring a `/NN` opacity suffix. A malformed
    /// suffix rejects the whole value.
    pub fn color(&self, token: &str) -> Option<ParsedValue> {
        let (base, opacity) = value::split_opacity(token)?;

        let parsed = if let Some(variable) = self.variable(base) {
            variable
        } else if base.starts_with('[') {
            match self.arbitrary(base, ArbitraryOptions::COLORS)? {
                ArbitraryValue::Color { literal, .. }
                    if opacity.is_none() && literal.starts_with('#') =>
                {
                    ParsedValue::arbitrary(literal)
                }
                ArbitraryValue::Color { color, .. } => ParsedValue::arbitrary(color),
                _ => return None,
            }
        } else {
            match base {
                "current" | "inherit" if opacity.is_some() => return None,
                "current" => ParsedValue::preset("currentColor"),
                "inherit" => ParsedValue::preset("inherit"),
                _ => ParsedValue::preset(self.preset.color(base)?),
            }
        };

        Some(parsed.with_opacity(opacity))
    }

    /// Spacing-scale value: preset step, arbitrary length/raw, or variable.
    pub fn spacing(&self, token: &str) -> Option<ParsedValue> {
        if let Some(variable) = self.variable(token) {
            return Some(variable);
        }
        if token.starts_with('[') {
            return self.arbitrary_value(token, ArbitraryOptions::SIZES);
        }
        self.preset.spacing(token).map(ParsedValue::preset)
    }

    /// Spacing plus `full` and `1/2`-style fractions, as percentage text.
    pub fn length(&self, token: &str) -> Option<ParsedValue> {
        if let Some(variable) = self.variable(token) {
            return Some(variable);
        }
        if token == "full" {
            return Some(ParsedValue::preset("100%"));
        }
        if !token.starts_with('[') && token.contains('/') {
            return value::parse_fraction(token).map(ParsedValue::preset);
        }
        self.spacing(token)
    }

    /// Look `token` up in a numeric preset table, falling back to arbitrary
    /// lengths and design variables.
    pub fn scale(&self, table: &BTreeMap<String, f64>, token: &str) -> Option<ParsedValue> {
        if let Some(variable) = self.variable(token) {
            return Some(variable);
        }
        if token.starts_with('[') {
            return self.arbitrary_value(token, ArbitraryOptions::LENGTHS);
        }
        table.get(token).copied().map(ParsedValue::preset)
    }

    /// A bare integer (`z-10`, `order-2`) or an arbitrary number.
    pub fn integer(&self, token: &str, allow_negative: bool) -> Option<ParsedValue> {
        if token.starts_with('[') {
            let options = if allow_negative {
                ArbitraryOptions::LENGTHS.negative()
            } else {
                ArbitraryOptions::LENGTHS
            };
            return self.arbitrary_value(token, options);
        }
        if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let n: u32 = token.parse().ok()?;
        Some(ParsedValue::preset(n as f64))
    }
}

/// Split a leading `-` off a negative utility.
pub(crate) fn strip_negative(base: &str) -> (bool, &str) {
    match base.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, base),
    }
}

/// Match a value against a static keyword table.
pub(crate) fn keyword(table: &[(&str, &'static str)], value: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == value).map(|(_, v)| *v)
}

/// Percentage helper for scale utilities (`scale-50` → 0.5).
pub(crate) fn percent(token: &str) -> Option<StyleValue> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let n: u32 = token.parse().ok()?;
    Some(StyleValue::Number(n as f64 / 100.0))
}

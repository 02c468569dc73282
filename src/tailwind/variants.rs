//! Variant modifiers (responsive, hover, focus, dark)
//!
//! Strips chained variant prefixes from a class token and reports which
//! bucket of the style document the token's result belongs to.

use crate::config::Config;
use serde::{Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Variant {
    Hover,
    Focus,
    FocusVisible,
    FocusWithin,
    Active,
    Disabled,
    Sm,
    Md,
    Lg,
    Xl,
    Xxl,
    Dark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum VariantKind {
    Theme,
    Breakpoint,
    State,
}

const STATE_VARIANTS: &[(&str, Variant)] = &[
    ("hover", Variant::Hover),
    ("focus", Variant::Focus),
    ("focus-visible", Variant::FocusVisible),
    ("focus-within", Variant::FocusWithin),
    ("active", Variant::Active),
    ("disabled", Variant::Disabled),
];

const BREAKPOINTS: &[(&str, Variant)] = &[
    ("sm", Variant::Sm),
    ("md", Variant::Md),
    ("lg", Variant::Lg),
    ("xl", Variant::Xl),
    ("2xl", Variant::Xxl),
];

const THEME_VARIANTS: &[(&str, Variant)] = &[("dark", Variant::Dark)];

impl Variant {
    pub fn from_name(name: &str) -> Option<Variant> {
        STATE_VARIANTS
            .iter()
            .chain(THEME_VARIANTS)
            .find(|(n, _)| *n == name)
            .map(|(_, v)| *v)
            .or_else(|| BREAKPOINTS.iter().find(|(n, _)| *n == name).map(|(_, v)| *v))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Variant::Hover => "hover",
            Variant::Focus => "focus",
            Variant::FocusVisible => "focus-visible",
            Variant::FocusWithin => "focus-within",
            Variant::Active => "active",
            Variant::Disabled => "disabled",
            Variant::Sm => "sm",
            Variant::Md => "md",
            Variant::Lg => "lg",
            Variant::Xl => "xl",
            Variant::Xxl => "2xl",
            Variant::Dark => "dark",
        }
    }

    pub fn kind(&self) -> VariantKind {
        match self {
            Variant::Sm | Variant::Md | Variant::Lg | Variant::Xl | Variant::Xxl => {
                VariantKind::Breakpoint
            }
            Variant::Dark => VariantKind::Theme,
            _ => VariantKind::State,
        }
    }

    fn enabled(&self, config: &Config) -> bool {
        match self.kind() {
            VariantKind::Breakpoint => config.enable_responsive_modifiers,
            VariantKind::State | VariantKind::Theme => config.enable_state_modifiers,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Variant {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// One whitespace-delimited class with its variants stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassToken<'a> {
    /// Variants in the order they were written.
    pub variants: Vec<Variant>,
    pub base: &'a str,
}

impl ClassToken<'_> {
    /// The bucket path: variants ordered theme → breakpoint → state, with
    /// duplicates removed, so `hover:sm:x` and `sm:hover:x` agree.
    pub fn bucket(&self) -> Vec<Variant> {
        let mut path = self.variants.clone();
        path.sort_by_key(|v| (v.kind(), *v));
        path.dedup();
        path
    }
}

/// Byte offset of the first `separator` outside any `[...]` group.
fn find_separator(text: &str, separator: &str) -> Option<usize> {
    let mut depth: i32 = 0;
    for (i, ch) in text.char_indices() {
        match ch {
            '[' => depth += 1,
            ']' => depth -= 1,
            _ if depth == 0 && text[i..].starts_with(separator) => return Some(i),
            _ => {}
        }
    }
    None
}

/// Split leading variant prefixes off `token`.
///
/// Splitting stops at the first segment that is not a known, enabled
/// variant; that segment and everything after it form the base class.
pub fn split<'a>(token: &'a str, config: &Config) -> ClassToken<'a> {
    let separator = config.separator.as_str();
    let mut variants = Vec::new();
    let mut rest = token;

    if !separator.is_empty() {
        while let Some(pos) = find_separator(rest, separator) {
            let segment = &rest[..pos];
            let remainder = &rest[pos + separator.len()..];
            let Some(variant) = Variant::from_name(segment) else {
                break;
            };
            if !variant.enabled(config) || remainder.is_empty() {
                log::debug!("variant '{}' not split in '{}'", segment, token);
                break;
            }
            variants.push(variant);
            rest = remainder;
        }
    }

    ClassToken {
        variants,
        base: rest,
    }
}

//! Category dispatcher.
//!
//! Every category is a variant of [`CategoryParser`]; the dispatcher tries
//! them in [`DISPATCH_ORDER`] and the first one that both owns the class
//! (via its prefix table) and parses it wins.

use super::accumulator::{self, Expander};
use super::categories::{self as cat, ParserContext};
use super::session::Session;
use super::variants::Variant;
use crate::document::StyleBucket;
use crate::error::TwResult;
use crate::style::ResolvedStyle;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryParser {
    Tables,
    Layout,
    Overflow,
    Position,
    Flexbox,
    Grid,
    Spacing,
    Sizing,
    Typography,
    Effects,
    Ring,
    Backgrounds,
    Borders,
    Filters,
    Transforms,
    Transitions,
    Interactivity,
}

/// Priority order. More specific owners come first (`border-collapse` is a
/// table class before it is a border color).
pub const DISPATCH_ORDER: [CategoryParser; 17] = [
    CategoryParser::Tables,
    CategoryParser::Layout,
    CategoryParser::Overflow,
    CategoryParser::Position,
    CategoryParser::Flexbox,
    CategoryParser::Grid,
    CategoryParser::Spacing,
    CategoryParser::Sizing,
    CategoryParser::Typography,
    CategoryParser::Effects,
    CategoryParser::Ring,
    CategoryParser::Backgrounds,
    CategoryParser::Borders,
    CategoryParser::Filters,
    CategoryParser::Transforms,
    CategoryParser::Transitions,
    CategoryParser::Interactivity,
];

// ─── Category contract ──────────────────────────────────────────────────────

impl CategoryParser {
    pub fn name(&self) -> &'static str {
        match self {
            CategoryParser::Tables => "tables",
            CategoryParser::Layout => "layout",
            CategoryParser::Overflow => "overflow",
            CategoryParser::Position => "position",
            CategoryParser::Flexbox => "flexbox",
            CategoryParser::Grid => "grid",
            CategoryParser::Spacing => "spacing",
            CategoryParser::Sizing => "sizing",
            CategoryParser::Typography => "typography",
            CategoryParser::Effects => "effects",
            CategoryParser::Ring => "ring",
            CategoryParser::Backgrounds => "backgrounds",
            CategoryParser::Borders => "borders",
            CategoryParser::Filters => "filters",
            CategoryParser::Transforms => "transforms",
            CategoryParser::Transitions => "transitions",
            CategoryParser::Interactivity => "interactivity",
        }
    }

    /// The category's entries in the prefix-ownership table.
    pub fn prefixes(&self) -> &'static [&'static str] {
        match self {
            CategoryParser::Tables => cat::tables::PREFIXES,
            CategoryParser::Layout => cat::layout::PREFIXES,
            CategoryParser::Overflow => cat::overflow::PREFIXES,
            CategoryParser::Position => cat::position::PREFIXES,
            CategoryParser::Flexbox => cat::flexbox::PREFIXES,
            CategoryParser::Grid => cat::grid::PREFIXES,
            CategoryParser::Spacing => cat::spacing::PREFIXES,
            CategoryParser::Sizing => cat::sizing::PREFIXES,
            CategoryParser::Typography => cat::typography::PREFIXES,
            CategoryParser::Effects => cat::effects::PREFIXES,
            CategoryParser::Ring => cat::ring::PREFIXES,
            CategoryParser::Backgrounds => cat::backgrounds::PREFIXES,
            CategoryParser::Borders => cat::borders::PREFIXES,
            CategoryParser::Filters => cat::filters::PREFIXES,
            CategoryParser::Transforms => cat::transforms::PREFIXES,
            CategoryParser::Transitions => cat::transitions::PREFIXES,
            CategoryParser::Interactivity => cat::interactivity::PREFIXES,
        }
    }

    /// Cheap ownership check. Accepts a superset of what
    /// [`parse_value`](Self::parse_value) resolves.
    pub fn is_valid_class(&self, base: &str) -> bool {
        let class = base.strip_prefix('-').unwrap_or(base);
        self.prefixes().iter().any(|entry| owns(entry, class))
    }

    pub fn parse_value(&self, base: &str, ctx: &ParserContext) -> Option<ResolvedStyle> {
        match self {
            CategoryParser::Tables => cat::tables::parse_value(base, ctx),
            CategoryParser::Layout => cat::layout::parse_value(base, ctx),
            CategoryParser::Overflow => cat::overflow::parse_value(base, ctx),
            CategoryParser::Position => cat::position::parse_value(base, ctx),
            CategoryParser::Flexbox => cat::flexbox::parse_value(base, ctx),
            CategoryParser::Grid => cat::grid::parse_value(base, ctx),
            CategoryParser::Spacing => cat::spacing::parse_value(base, ctx),
            CategoryParser::Sizing => cat::sizing::parse_value(base, ctx),
            CategoryParser::Typography => cat::typography::parse_value(base, ctx),
            CategoryParser::Effects => cat::effects::parse_value(base, ctx),
            CategoryParser::Ring => cat::ring::parse_value(base, ctx),
            CategoryParser::Backgrounds => cat::backgrounds::parse_value(base, ctx),
            CategoryParser::Borders => cat::borders::parse_value(base, ctx),
            CategoryParser::Filters => cat::filters::parse_value(base, ctx),
            CategoryParser::Transforms => cat::transforms::parse_value(base, ctx),
            CategoryParser::Transitions => cat::transitions::parse_value(base, ctx),
            CategoryParser::Interactivity => cat::interactivity::parse_value(base, ctx),
        }
    }

    /// Shorthand expansion table used when writing this category's results.
    pub fn expander(&self) -> Expander {
        match self {
            CategoryParser::Tables => cat::tables::expand,
            CategoryParser::Overflow => cat::overflow::expand,
            CategoryParser::Position => cat::position::expand,
            CategoryParser::Flexbox => cat::flexbox::expand,
            CategoryParser::Spacing => cat::spacing::expand,
            CategoryParser::Sizing => cat::sizing::expand,
            CategoryParser::Borders => cat::borders::expand,
            CategoryParser::Transforms => cat::transforms::expand,
            CategoryParser::Interactivity => cat::interactivity::expand,
            CategoryParser::Layout
            | CategoryParser::Grid
            | CategoryParser::Typography
            | CategoryParser::Effects
            | CategoryParser::Ring
            | CategoryParser::Backgrounds
            | CategoryParser::Filters
            | CategoryParser::Transitions => accumulator::no_expansion,
        }
    }

    /// Write `resolved` into `bucket` (the bucket at `path`). Typography
    /// writes are also recorded for font pairing.
    pub fn apply(
        &self,
        resolved: &ResolvedStyle,
        bucket: &mut StyleBucket,
        path: &[Variant],
        session: &mut Session,
    ) -> TwResult<()> {
        accumulator::apply(resolved, bucket, self.expander())?;
        if *self == CategoryParser::Typography {
            session.pair_font(path, resolved);
        }
        Ok(())
    }
}

impl fmt::Display for CategoryParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// `x-` entries own every class that extends them; anything else is an
/// exact keyword.
fn owns(entry: &str, class: &str) -> bool {
    if entry.ends_with('-') {
        class.len() > entry.len() && class.starts_with(entry)
    } else {
        class == entry
    }
}

// ─── Dispatcher ─────────────────────────────────────────────────────────────

/// A successful dispatch: which category claimed the class, and its result.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub parser: CategoryParser,
    pub style: ResolvedStyle,
}

#[derive(Debug, Clone)]
pub struct Dispatcher {
    order: Vec<CategoryParser>,
}

impl Dispatcher {
    pub fn new(order: Vec<CategoryParser>) -> Self {
        debug_assert!(
            prefix_conflicts(&order).is_empty(),
            "dispatch order has prefix conflicts: {:?}",
            prefix_conflicts(&order)
        );
        Self { order }
    }

    /// All seventeen categories in [`DISPATCH_ORDER`].
    pub fn standard() -> Self {
        Self::new(DISPATCH_ORDER.to_vec())
    }

    /// First category that owns and parses `base`.
    pub fn resolve(&self, base: &str, ctx: &ParserContext) -> Option<Resolution> {
        self.order
            .iter()
            .filter(|parser| parser.is_valid_class(base))
            .find_map(|parser| {
                parser.parse_value(base, ctx).map(|style| Resolution {
                    parser: *parser,
                    style,
                })
            })
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::standard()
    }
}

// ─── Prefix ownership ───────────────────────────────────────────────────────

/// Two table entries that make dispatch order-sensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixConflict {
    pub earlier: CategoryParser,
    pub earlier_entry: &'static str,
    pub later: CategoryParser,
    pub later_entry: &'static str,
}

impl fmt::Display for PrefixConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} '{}' shadows {} '{}'",
            self.earlier, self.earlier_entry, self.later, self.later_entry
        )
    }
}

/// Report every entry that an earlier category would claim before a later
/// one gets to see it: identical entries, or a later entry that extends an
/// earlier `x-` prefix.
pub fn prefix_conflicts(order: &[CategoryParser]) -> Vec<PrefixConflict> {
    let mut conflicts = Vec::new();
    for (i, earlier) in order.iter().enumerate() {
        for later in &order[i + 1..] {
            for earlier_entry in earlier.prefixes() {
                for later_entry in later.prefixes() {
                    let shadowed = earlier_entry == later_entry
                        || (earlier_entry.ends_with('-') && later_entry.starts_with(earlier_entry));
                    if shadowed {
                        conflicts.push(PrefixConflict {
                            earlier: *earlier,
                            earlier_entry,
                            later: *later,
                            later_entry,
                        });
                    }
                }
            }
        }
    }
    conflicts
}

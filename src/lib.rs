//! # NullTrace Tailwind Resolver
//!
//! Resolves Tailwind-style utility class strings into a structured style
//! document for design tooling, instead of emitting CSS.
//!
//! ## Features
//! - Seventeen utility categories (layout, spacing, typography, effects, ...)
//! - Variant buckets for states, breakpoints and the dark theme
//! - Arbitrary values (`p-[12px]`), design variables (`bg-$[brand.primary]`)
//!   and opacity suffixes (`text-red-500/50`)
//! - Paired `fontName` descriptors for design-tool font loading
//! - YAML config and preset overrides
//!
//! ## Example
//! ```ignore
//! use nulltrace_tailwind::{resolve_all, Config, DesignPreset};
//!
//! let doc = resolve_all("p-4 pt-2 hover:bg-blue-500/50", &Config::default(), &DesignPreset::tailwind());
//! println!("{}", doc.to_yaml()?);
//! ```

pub mod config;
pub mod document;
pub mod error;
pub mod preset;
pub mod style;
pub mod tailwind;

// --- Core types ---
pub use config::Config;
pub use document::{StyleBucket, StyleDocument};
pub use error::{TwError, TwResult};
pub use preset::{DesignPreset, PresetOverrides};
pub use style::{Category, Color, StyleValue};
pub use tailwind::variants::Variant;

// --- Resolution ---
pub use tailwind::{resolve_all, Engine, ResolveReport, TokenReport};

//! # Utility-class resolution
//!
//! Turns a whitespace-separated class string into a [`StyleDocument`].
//! Each token is split into variants and a base class, the base class is
//! dispatched to the first category that owns it, and the result is merged
//! into the bucket implied by the variants. Unknown classes are dropped.
//!
//! ## Usage
//! ```ignore
//! let preset = DesignPreset::tailwind();
//! let engine = Engine::new(Config::default(), &preset);
//! let doc = engine.resolve("p-4 hover:bg-blue-500 md:text-lg");
//! ```

pub mod accumulator;
pub mod categories;
pub mod parser;
pub mod registry;
pub mod session;
pub mod value;
pub mod variants;

use crate::config::Config;
use crate::document::StyleDocument;
use crate::preset::DesignPreset;
use categories::ParserContext;
use registry::{Dispatcher, Resolution};
use session::Session;
use std::borrow::Cow;
use std::fmt;
use variants::Variant;

/// A reusable resolver bound to one config and a borrowed preset.
#[derive(Debug, Clone)]
pub struct Engine<'p> {
    config: Config,
    preset: &'p DesignPreset,
    dispatcher: Dispatcher,
}

/// Counts from one [`Engine::resolve_with_report`] call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolveReport {
    pub resolved: usize,
    pub dropped: Vec<String>,
}

/// How a single token was interpreted.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenReport {
    pub token: String,
    pub bucket: Vec<Variant>,
    /// Base class after variant, important and prefix stripping; `None`
    /// when the configured prefix was missing.
    pub base: Option<String>,
    pub resolution: Option<Resolution>,
}

impl TokenReport {
    pub fn is_resolved(&self) -> bool {
        self.resolution.is_some()
    }
}

impl fmt::Display for TokenReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bucket = if self.bucket.is_empty() {
            "base".to_string()
        } else {
            self.bucket
                .iter()
                .map(Variant::name)
                .collect::<Vec<_>>()
                .join(" > ")
        };
        match (&self.base, &self.resolution) {
            (_, Some(res)) => write!(
                f,
                "{} [{}] -> {}: {} = {:?}",
                self.token, bucket, res.parser, res.style.property, res.style.value
            ),
            (Some(base), None) => write!(f, "{} [{}] -> unresolved '{}'", self.token, bucket, base),
            (None, None) => write!(f, "{} [{}] -> missing prefix", self.token, bucket),
        }
    }
}

impl<'p> Engine<'p> {
    pub fn new(config: Config, preset: &'p DesignPreset) -> Self {
        Self {
            config,
            preset,
            dispatcher: Dispatcher::standard(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn preset(&self) -> &'p DesignPreset {
        self.preset
    }

    pub fn resolve(&self, input: &str) -> StyleDocument {
        self.resolve_with_report(input).0
    }

    pub fn resolve_with_report(&self, input: &str) -> (StyleDocument, ResolveReport) {
        let ctx = ParserContext::new(&self.config, self.preset);
        let mut doc = StyleDocument::new();
        let mut session = Session::new();
        let mut report = ResolveReport::default();

        for token in parser::tokenize(input) {
            let TokenReport {
                bucket, resolution, ..
            } = self.resolve_token(token);
            let Some(Resolution { parser: category, style }) = resolution else {
                log::debug!("dropped '{}'", token);
                report.dropped.push(token.to_string());
                continue;
            };
            if let Err(err) = style.validate() {
                log::error!("{} parser bug on '{}': {}", category, token, err);
                report.dropped.push(token.to_string());
                continue;
            }

            let target = doc.bucket_mut(&bucket);
            match category.apply(&style, target, &bucket, &mut session) {
                Ok(()) => {
                    log::trace!("'{}' -> {} {}", token, category, style.property);
                    report.resolved += 1;
                }
                Err(err) => {
                    log::error!("{} parser bug on '{}': {}", category, token, err);
                    report.dropped.push(token.to_string());
                }
            }
        }

        session.finish(&mut doc, self.preset.default_font_family());
        (doc, report)
    }

    /// Interpret one token without writing anything.
    pub fn resolve_token(&self, token: &str) -> TokenReport {
        let ctx = ParserContext::new(&self.config, self.preset);
        let class = variants::split(token, &self.config);
        let bucket = class.bucket();
        let base = strip_markers(class.base, &self.config);
        let resolution = base
            .as_deref()
            .and_then(|base| self.dispatcher.resolve(base, &ctx));

        TokenReport {
            token: token.to_string(),
            bucket,
            base: base.map(Cow::into_owned),
            resolution,
        }
    }
}

/// Strip the important marker and the configured prefix, keeping a leading
/// `-` in front of what remains. `None` if the prefix is required but absent.
fn strip_markers<'a>(base: &'a str, config: &Config) -> Option<Cow<'a, str>> {
    let base = match base.strip_prefix('!') {
        Some(rest) if config.important => rest,
        _ => base,
    };
    if config.prefix.is_empty() {
        return Some(Cow::Borrowed(base));
    }
    match base.strip_prefix('-') {
        Some(rest) => {
            let class = rest.strip_prefix(config.prefix.as_str())?;
            Some(Cow::Owned(format!("-{}", class)))
        }
        None => base.strip_prefix(config.prefix.as_str()).map(Cow::Borrowed),
    }
}

/// Resolve `input` against `config` and `preset` in one call.
pub fn resolve_all(input: &str, config: &Config, preset: &DesignPreset) -> StyleDocument {
    Engine::new(config.clone(), preset).resolve(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{Category, StyleValue};
    use pretty_assertions::assert_eq;
    use std::sync::OnceLock;

    fn engine(config: Config) -> Engine<'static> {
        static PRESET: OnceLock<DesignPreset> = OnceLock::new();
        Engine::new(config, PRESET.get_or_init(DesignPreset::tailwind))
    }

    #[test]
    fn markers_without_prefix() {
        let config = Config::default();
        assert_eq!(strip_markers("p-4", &config).as_deref(), Some("p-4"));
        assert_eq!(strip_markers("!p-4", &config).as_deref(), Some("!p-4"));

        let important = Config {
            important: true,
            ..Config::default()
        };
        assert_eq!(strip_markers("!p-4", &important).as_deref(), Some("p-4"));
        assert_eq!(strip_markers("!-m-2", &important).as_deref(), Some("-m-2"));
    }

    #[test]
    fn markers_with_prefix() {
        let config = Config::default().with_prefix("tw-");
        assert_eq!(strip_markers("tw-p-4", &config).as_deref(), Some("p-4"));
        assert_eq!(strip_markers("-tw-m-2", &config).as_deref(), Some("-m-2"));
        assert_eq!(strip_markers("p-4", &config), None);
        assert_eq!(strip_markers("-m-2", &config), None);
    }

    #[test]
    fn report_counts_tokens() {
        let (doc, report) = engine(Config::default()).resolve_with_report("p-4 sparkle flex p-4");
        assert_eq!(report.resolved, 3);
        assert_eq!(report.dropped, vec!["sparkle".to_string()]);
        assert_eq!(doc.get(Category::Layout, "display"), Some(&StyleValue::text("flex")));
    }

    #[test]
    fn token_report_describes_dispatch() {
        let engine = engine(Config::default());
        let report = engine.resolve_token("md:hover:bg-red-500");
        assert_eq!(report.bucket, vec![Variant::Md, Variant::Hover]);
        assert_eq!(report.base.as_deref(), Some("bg-red-500"));
        assert!(report.is_resolved());
        assert!(report.to_string().starts_with("md:hover:bg-red-500 [md > hover] -> backgrounds: backgroundColor"));

        let missing = engine.resolve_token("sparkle");
        assert!(!missing.is_resolved());
        assert_eq!(missing.to_string(), "sparkle [base] -> unresolved 'sparkle'");
    }

    #[test]
    fn missing_prefix_is_reported() {
        let engine = engine(Config::default().with_prefix("tw-"));
        let report = engine.resolve_token("p-4");
        assert_eq!(report.base, None);
        assert_eq!(report.to_string(), "p-4 [base] -> missing prefix");
    }

    #[test]
    fn failed_tokens_leave_no_buckets() {
        let doc = engine(Config::default()).resolve("hover:sparkle md:bg-[invalid]");
        assert!(doc.is_empty());
        assert_eq!(doc.variant(Variant::Hover), None);
        assert_eq!(doc.variant(Variant::Md), None);
    }

    #[test]
    fn free_function_matches_engine() {
        let config = Config::default();
        let preset = DesignPreset::tailwind();
        let input = "flex p-4 hover:opacity-50";
        assert_eq!(resolve_all(input, &config, &preset), engine(config.clone()).resolve(input));
    }

    #[test]
    fn engine_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Engine<'static>>();
    }

    #[test]
    fn engine_borrows_its_preset() {
        let preset = DesignPreset::tailwind();
        let engine = Engine::new(Config::default(), &preset);
        assert!(std::ptr::eq(engine.preset(), &preset));
    }

    #[test]
    fn font_name_ignores_class_order() {
        let engine = engine(Config::default());
        let forward = engine.resolve("font-serif italic hover:font-bold");
        let backward = engine.resolve("hover:font-bold italic font-serif");
        assert_eq!(forward, backward);

        let hover = forward.variant(Variant::Hover).unwrap();
        assert_eq!(hover.get(Category::Typography, "fontName.style"), Some(&StyleValue::text("Bold Italic")));
        assert_eq!(
            hover.get(Category::Typography, "fontName.family"),
            forward.get(Category::Typography, "fontName.family")
        );
    }
}

use crate::error::{TwError, TwResult};
use serde::{Deserialize, Serialize};

/// Engine options, mirroring the subset of a Tailwind config that affects
/// how class tokens are split and matched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Required class prefix (e.g. `tw-`), stripped before matching.
    pub prefix: String,
    /// Variant separator, `:` by default.
    pub separator: String,
    /// Accept the leading `!` important marker.
    pub important: bool,
    pub enable_arbitrary_values: bool,
    pub enable_state_modifiers: bool,
    pub enable_responsive_modifiers: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            separator: ":".to_string(),
            important: false,
            enable_arbitrary_values: true,
            enable_state_modifiers: true,
            enable_responsive_modifiers: true,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a config from YAML. Missing keys keep their defaults.
    pub fn from_yaml(yaml: &str) -> TwResult<Self> {
        let config: Config = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> TwResult<()> {
        if self.separator.is_empty() {
            return Err(TwError::InvalidConfig("separator must not be empty".into()));
        }
        if self.separator.chars().any(char::is_whitespace) {
            return Err(TwError::InvalidConfig(format!(
                "separator '{}' must not contain whitespace",
                self.separator
            )));
        }
        if self.prefix.chars().any(char::is_whitespace) {
            return Err(TwError::InvalidConfig(format!(
                "prefix '{}' must not contain whitespace",
                self.prefix
            )));
        }
        Ok(())
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }
}

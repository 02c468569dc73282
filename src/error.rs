use thiserror::Error;

pub type TwResult<T> = Result<T, TwError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TwError {
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Invalid preset entry '{key}': {reason}")]
    InvalidPreset { key: String, reason: String },

    #[error("Invalid color value '{value}': {reason}")]
    InvalidColor { value: String, reason: String },

    #[error("YAML error: {0}")]
    Yaml(String),

    // --- programmer errors raised by category parsers ---

    #[error("Property list '{property}' has {expected} entries but the value list has {found}")]
    PropertyValueMismatch {
        property: String,
        expected: usize,
        found: usize,
    },

    #[error("Property '{property}' resolved from a design variable but carries no variable id")]
    MissingVariableId { property: String },
}

impl From<serde_yaml::Error> for TwError {
    fn from(err: serde_yaml::Error) -> Self {
        TwError::Yaml(err.to_string())
    }
}

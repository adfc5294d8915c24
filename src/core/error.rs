use crate::core::field::FieldName;
use thiserror::Error;

/// Construction-time misconfiguration. Reported by `Form::new` before any
/// state exists, so a bad field list never reaches the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("form has no fields")]
    NoFields,

    #[error("duplicate field name `{0}`")]
    DuplicateField(FieldName),

    #[error("field `{0}` needs a non-empty options list")]
    MissingOptions(FieldName),

    #[error("default value for field `{0}` does not match its kind")]
    DefaultTypeMismatch(FieldName),

    #[error("field `{name}` has an invalid pattern `{pattern}`")]
    BadPattern { name: FieldName, pattern: String },
}

/// Programming-error conditions inside the engine: addressing a field that
/// was never declared.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("unknown field `{0}`")]
    UnknownField(FieldName),
}

/// A submit callback failure. Caught by the form and surfaced as a generic
/// submission-failure status, never attached to a field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct SubmitError {
    message: String,
}

impl SubmitError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<&str> for SubmitError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for SubmitError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

/// One validation finding, addressed to a field path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub name: FieldName,
    pub message: String,
}

impl FieldError {
    pub fn new(name: impl Into<FieldName>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
        }
    }
}

//! Error types for tagged-value decoding

use thiserror::Error;

/// Errors that can occur while decoding tagged values
#[derive(Debug, Error)]
pub enum ConvError {
    /// A tagged value lacks the payload field its tag requires
    #[error("'{tag}' value has no '{field}' field")]
    MissingField { tag: String, field: &'static str },

    /// The payload cannot be coerced to the tag's type
    #[error("cannot convert {value} to {target}")]
    InvalidValue { value: String, target: &'static str },

    /// A field mapping was expected
    #[error("expected an object, got {0}")]
    NotAnObject(&'static str),
}

/// Result type for decoding operations
pub type ConvResult<T> = Result<T, ConvError>;

impl ConvError {
    pub(crate) fn invalid(value: &serde_json::Value, target: &'static str) -> Self {
        Self::InvalidValue {
            value: value.to_string(),
            target,
        }
    }
}

/// Name of a JSON value's kind, for error messages
pub(crate) fn kind_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

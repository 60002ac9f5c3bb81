//! Type tags carried by upstream values

use std::fmt;

/// Discriminator found in the `type` field of an upstream value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeTag {
    /// Text, payload in `value`
    String,
    /// Boolean, payload in `value` (usually `"True"`/`"False"`)
    Boolean,
    /// Floating point, payload in `value`
    Number,
    /// Floating point, payload in `value`
    Float,
    /// Integer, payload in `value`
    Integer,
    /// List of field mappings, payload in `values`
    Array,
    /// No value
    Null,
    /// A tag this decoder does not know; the payload is passed through
    Other(String),
}

impl TypeTag {
    /// Read the tag from a `type` field value
    pub fn from_json(value: &serde_json::Value) -> Self {
        match value.as_str() {
            Some(name) => Self::from(name),
            None => Self::Other(value.to_string()),
        }
    }
}

impl From<&str> for TypeTag {
    fn from(name: &str) -> Self {
        match name {
            "String" => TypeTag::String,
            "Boolean" => TypeTag::Boolean,
            "Number" => TypeTag::Number,
            "Float" => TypeTag::Float,
            "Integer" => TypeTag::Integer,
            "Array" => TypeTag::Array,
            "Null" => TypeTag::Null,
            other => TypeTag::Other(other.to_string()),
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TypeTag::String => "String",
            TypeTag::Boolean => "Boolean",
            TypeTag::Number => "Number",
            TypeTag::Float => "Float",
            TypeTag::Integer => "Integer",
            TypeTag::Array => "Array",
            TypeTag::Null => "Null",
            TypeTag::Other(name) => name,
        };
        f.write_str(s)
    }
}

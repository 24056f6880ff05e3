use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Status pair shown by the host widget when a file is rejected
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Status {
    /// Main message, e.g. "File is of invalid type"
    pub main: String,

    /// Sub message listing the expected types
    pub sub: String,
}

/// Structured rejection produced by the load hook
#[derive(Error, Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[error("{} ({})", .status.main, .status.sub)]
pub struct Rejection {
    pub status: Status,
}

/// Entry of the expected-types label map.
///
/// Deserialized from any JSON value: a non-empty string relabels the pattern,
/// `false` or `null` hides it, and anything else leaves it as is.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "Value", into = "Value")]
pub enum TypeLabel {
    /// Show this label instead of the pattern
    Label(String),

    /// Leave the pattern out of the message
    Hidden,

    /// Show the pattern itself
    Unchanged,
}

impl From<Value> for TypeLabel {
    fn from(value: Value) -> Self {
        match value {
            Value::String(label) if !label.is_empty() => TypeLabel::Label(label),
            Value::Null | Value::Bool(false) => TypeLabel::Hidden,
            _ => TypeLabel::Unchanged,
        }
    }
}

impl From<TypeLabel> for Value {
    fn from(label: TypeLabel) -> Self {
        match label {
            TypeLabel::Label(label) => Value::String(label),
            TypeLabel::Hidden => Value::Bool(false),
            TypeLabel::Unchanged => Value::Bool(true),
        }
    }
}

/// Host-side type of a plugin option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OptionType {
    Boolean,
    Array,
    String,
    Object,
}

/// A plugin option as published to the host: its name, default value and type
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptionSpec {
    /// Option name as used in the host configuration, e.g. `acceptedFileTypes`
    pub name: &'static str,

    /// Default value used when the option is not set
    pub default: Value,

    /// Host type used to coerce values set from attributes
    #[serde(rename = "type")]
    pub kind: OptionType,
}

//! Common types used throughout fixture-schema
//!
//! The inference core never looks at raw `serde_json::Value`s. Sample data is
//! converted once, at the boundary, into [`Sample`], which fixes the shape of
//! every node up front.

use serde_json::{Number, Value};

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

// ============================================================================
// Sample Values
// ============================================================================

/// A leaf value of a fixture
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
}

impl Scalar {
    /// The string payload, if this is a string scalar
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::String(s) => Some(s),
            _ => None,
        }
    }
}

impl std::fmt::Display for Scalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scalar::Null => write!(f, "null"),
            Scalar::Bool(b) => write!(f, "{b}"),
            Scalar::Number(n) => write!(f, "{n}"),
            Scalar::String(s) => write!(f, "{s:?}"),
        }
    }
}

/// One node of a fixture, with its shape decided once
#[derive(Debug, Clone, PartialEq)]
pub enum Sample {
    /// Null, boolean, number or string
    Scalar(Scalar),
    /// Ordered sequence of samples
    Sequence(Vec<Sample>),
    /// Key/value pairs, sorted by key
    Mapping(Vec<(String, Sample)>),
}

impl Sample {
    /// Shorthand for a string scalar
    pub fn string(s: impl Into<String>) -> Self {
        Sample::Scalar(Scalar::String(s.into()))
    }

    /// Short name of the shape, for diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            Sample::Scalar(_) => "scalar",
            Sample::Sequence(_) => "sequence",
            Sample::Mapping(_) => "mapping",
        }
    }
}

impl From<&Value> for Sample {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => Sample::Scalar(Scalar::Null),
            Value::Bool(b) => Sample::Scalar(Scalar::Bool(*b)),
            Value::Number(n) => Sample::Scalar(Scalar::Number(n.clone())),
            Value::String(s) => Sample::Scalar(Scalar::String(s.clone())),
            Value::Array(items) => Sample::Sequence(items.iter().map(Sample::from).collect()),
            Value::Object(map) => Sample::Mapping(
                map.iter()
                    .map(|(k, v)| (k.clone(), Sample::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<Value> for Sample {
    fn from(value: Value) -> Self {
        Sample::from(&value)
    }
}

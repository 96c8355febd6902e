//! Schema types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Primitive type tag assigned to a scalar sample.
///
/// Classification tries the tags in priority order, first match wins:
/// `boolean`, then numeric (`number`, or `integer` under the price
/// heuristic), then `date-time`, falling back to `string`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeTag {
    #[serde(rename = "string")]
    String,
    #[serde(rename = "integer")]
    Integer,
    #[serde(rename = "number")]
    Number,
    #[serde(rename = "date-time")]
    DateTime,
    #[serde(rename = "boolean")]
    Boolean,
}

impl TypeTag {
    /// Every tag, in the order fixtures may declare them
    pub const ALL: [TypeTag; 5] = [
        TypeTag::String,
        TypeTag::Integer,
        TypeTag::Number,
        TypeTag::DateTime,
        TypeTag::Boolean,
    ];

    /// The literal used for this tag in fixtures and on the CLI
    pub fn as_str(self) -> &'static str {
        match self {
            TypeTag::String => "string",
            TypeTag::Integer => "integer",
            TypeTag::Number => "number",
            TypeTag::DateTime => "date-time",
            TypeTag::Boolean => "boolean",
        }
    }

    /// Parse a tag literal. Only exact matches count.
    pub fn from_literal(s: &str) -> Option<TypeTag> {
        Self::ALL.into_iter().find(|tag| tag.as_str() == s)
    }

    /// JSON Schema type this tag is emitted as
    pub fn json_type(self) -> JsonType {
        match self {
            TypeTag::String | TypeTag::DateTime => JsonType::String,
            TypeTag::Integer => JsonType::Integer,
            TypeTag::Number => JsonType::Number,
            TypeTag::Boolean => JsonType::Boolean,
        }
    }

    /// Format keyword emitted alongside the type, if any
    pub fn format(self) -> Option<&'static str> {
        match self {
            TypeTag::DateTime => Some("date-time"),
            _ => None,
        }
    }
}

impl std::fmt::Display for TypeTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// JSON Schema type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonType {
    String,
    Number,
    Integer,
    Boolean,
    Object,
    Array,
    Null,
}

impl std::fmt::Display for JsonType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JsonType::String => write!(f, "string"),
            JsonType::Number => write!(f, "number"),
            JsonType::Integer => write!(f, "integer"),
            JsonType::Boolean => write!(f, "boolean"),
            JsonType::Object => write!(f, "object"),
            JsonType::Array => write!(f, "array"),
            JsonType::Null => write!(f, "null"),
        }
    }
}

/// The `type` keyword of a fragment: always `["null", <primary>]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<JsonType>", from = "TypeRepr")]
pub struct NullableType {
    primary: JsonType,
}

impl NullableType {
    /// Nullable wrapper around `primary`
    pub fn new(primary: JsonType) -> Self {
        Self { primary }
    }

    /// The non-null type
    pub fn primary(&self) -> JsonType {
        self.primary
    }

    /// Types in emitted order
    pub fn types(&self) -> Vec<JsonType> {
        Vec::from(*self)
    }
}

impl From<NullableType> for Vec<JsonType> {
    fn from(t: NullableType) -> Self {
        if t.primary == JsonType::Null {
            vec![JsonType::Null]
        } else {
            vec![JsonType::Null, t.primary]
        }
    }
}

/// Accepted on-disk shapes of `type`
#[derive(Deserialize)]
#[serde(untagged)]
enum TypeRepr {
    Single(JsonType),
    Multiple(Vec<JsonType>),
}

impl From<TypeRepr> for NullableType {
    fn from(repr: TypeRepr) -> Self {
        let primary = match repr {
            TypeRepr::Single(t) => t,
            TypeRepr::Multiple(types) => types
                .into_iter()
                .find(|t| *t != JsonType::Null)
                .unwrap_or(JsonType::Null),
        };
        NullableType { primary }
    }
}

/// Schema fragment synthesized for one sample value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaFragment {
    /// Nullable type list
    #[serde(rename = "type")]
    pub json_type: NullableType,

    /// Format hint (only "date-time" is emitted)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Array items schema
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<SchemaFragment>>,

    /// Nested properties (for objects)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<BTreeMap<String, SchemaFragment>>,
}

impl SchemaFragment {
    /// Fragment for a classified scalar
    pub fn scalar(tag: TypeTag) -> Self {
        Self {
            json_type: NullableType::new(tag.json_type()),
            format: tag.format().map(str::to_string),
            items: None,
            properties: None,
        }
    }

    /// Array fragment with item schema
    pub fn array(items: SchemaFragment) -> Self {
        Self {
            json_type: NullableType::new(JsonType::Array),
            format: None,
            items: Some(Box::new(items)),
            properties: None,
        }
    }

    /// Object fragment with nested properties
    pub fn object(properties: BTreeMap<String, SchemaFragment>) -> Self {
        Self {
            json_type: NullableType::new(JsonType::Object),
            format: None,
            items: None,
            properties: Some(properties),
        }
    }

    /// Object fragment with no properties, used when nothing can be inferred
    pub fn empty_object() -> Self {
        Self::object(BTreeMap::new())
    }

    /// The non-null type
    pub fn primary_type(&self) -> JsonType {
        self.json_type.primary()
    }

    /// Get a nested property
    pub fn property(&self, name: &str) -> Option<&SchemaFragment> {
        self.properties.as_ref()?.get(name)
    }

    /// Item schema, for arrays
    pub fn item_schema(&self) -> Option<&SchemaFragment> {
        self.items.as_deref()
    }

    /// Recover the scalar tag this fragment was built from, if it is a scalar
    pub fn type_tag(&self) -> Option<TypeTag> {
        match (self.primary_type(), self.format.as_deref()) {
            (JsonType::String, Some("date-time")) => Some(TypeTag::DateTime),
            (JsonType::String, _) => Some(TypeTag::String),
            (JsonType::Number, _) => Some(TypeTag::Number),
            (JsonType::Integer, _) => Some(TypeTag::Integer),
            (JsonType::Boolean, _) => Some(TypeTag::Boolean),
            _ => None,
        }
    }

    /// Convert to JSON value
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }

    /// Convert to pretty JSON string
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

//! Fixtures loader
//!
//! A fixtures document maps each schema name to one representative sample,
//! usually an object or an array of objects.

use crate::error::{Error, Result};
use crate::types::{JsonValue, Sample};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Schema name to sample mapping
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fixtures {
    entries: Vec<(String, Sample)>,
}

impl Fixtures {
    /// Load fixtures from a file. `.yaml`/`.yml` files are read as YAML,
    /// everything else as JSON.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::FileNotFound {
                    path: path.display().to_string(),
                }
            } else {
                Error::fixtures(format!(
                    "Failed to read fixtures file '{}': {}",
                    path.display(),
                    e
                ))
            }
        })?;

        let is_yaml = matches!(
            path.extension().and_then(|ext| ext.to_str()),
            Some("yaml" | "yml" | "YAML" | "YML")
        );

        let fixtures = if is_yaml {
            Self::from_yaml_str(&content)?
        } else {
            Self::from_json_str(&content)?
        };

        debug!(
            path = %path.display(),
            schemas = fixtures.len(),
            "loaded fixtures"
        );
        Ok(fixtures)
    }

    /// Parse fixtures from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: JsonValue = serde_json::from_str(json)?;
        Self::from_value(&value)
    }

    /// Parse fixtures from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let value: JsonValue = serde_yaml::from_str(yaml)?;
        Self::from_value(&value)
    }

    /// Build fixtures from an already parsed document
    pub fn from_value(value: &JsonValue) -> Result<Self> {
        let JsonValue::Object(map) = value else {
            return Err(Error::fixtures(format!(
                "expected a mapping of schema name to sample, found {}",
                json_kind(value)
            )));
        };

        Ok(Self {
            entries: map
                .iter()
                .map(|(name, sample)| (name.clone(), Sample::from(sample)))
                .collect(),
        })
    }

    /// Schema names, sorted by name
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Sample for a schema name
    pub fn get(&self, name: &str) -> Option<&Sample> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, sample)| sample)
    }

    /// Iterate over `(name, sample)` pairs, sorted by name
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Sample)> {
        self.entries.iter().map(|(name, sample)| (name.as_str(), sample))
    }

    /// Number of schemas
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when there are no schemas
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

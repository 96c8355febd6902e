//! Engine types
//!
//! Reports returned by the generator.

use serde::Serialize;
use std::path::PathBuf;

/// One schema file written by a generation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedSchema {
    /// Schema name (fixture key)
    pub name: String,
    /// File the schema was written to
    pub path: PathBuf,
}

/// Result of a generation run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    /// Written schemas, sorted by name
    pub written: Vec<GeneratedSchema>,
    /// Duration in milliseconds
    pub duration_ms: u64,
}

impl GenerationReport {
    /// Number of schemas written
    pub fn len(&self) -> usize {
        self.written.len()
    }

    /// True when nothing was written
    pub fn is_empty(&self) -> bool {
        self.written.is_empty()
    }

    /// Names of the written schemas
    pub fn names(&self) -> Vec<&str> {
        self.written.iter().map(|s| s.name.as_str()).collect()
    }
}

/// Comparison of persisted schemas against the current fixtures
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    /// Persisted schema matches the inferred one
    pub up_to_date: Vec<String>,
    /// Persisted schema differs or cannot be parsed
    pub stale: Vec<String>,
    /// No schema file exists yet
    pub missing: Vec<String>,
}

impl CheckReport {
    /// True when every schema is up to date
    pub fn is_clean(&self) -> bool {
        self.stale.is_empty() && self.missing.is_empty()
    }
}

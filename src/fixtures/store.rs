//! Schema file store
//!
//! Persists schemas as `<name>.json` with atomic writes.

use crate::error::{Error, Result, ResultExt};
use crate::schema::SchemaFragment;
use crate::types::JsonValue;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reject names that would escape the output directory or be empty
pub fn validate_schema_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::invalid_name(name, "name cannot be empty"));
    }
    if name == "." || name == ".." {
        return Err(Error::invalid_name(name, "relative path components are not allowed"));
    }
    if name.contains(['/', '\\']) {
        return Err(Error::invalid_name(name, "path separators are not allowed"));
    }
    if name.contains('\0') {
        return Err(Error::invalid_name(name, "NUL bytes are not allowed"));
    }
    Ok(())
}

/// Directory of persisted schema files
#[derive(Debug, Clone)]
pub struct SchemaStore {
    /// Output directory
    dir: PathBuf,
    /// Pretty-print files
    pretty: bool,
}

impl SchemaStore {
    /// Create a store writing pretty-printed files into `dir`
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            pretty: true,
        }
    }

    /// Enable/disable pretty printing
    #[must_use]
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Output directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File path for a schema name
    pub fn path_for(&self, name: &str) -> Result<PathBuf> {
        validate_schema_name(name)?;
        Ok(self.dir.join(format!("{name}.json")))
    }

    /// Serialize a schema the way it is written to disk
    pub fn render(&self, schema: &SchemaFragment) -> Result<String> {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(schema)?
        } else {
            serde_json::to_string(schema)?
        };
        Ok(rendered)
    }

    /// Write a schema, returning the file path
    pub async fn write(&self, name: &str, schema: &SchemaFragment) -> Result<PathBuf> {
        let path = self.path_for(name)?;
        let contents = self.render(schema)?;

        tokio::fs::create_dir_all(&self.dir).await.with_context(|| {
            format!("Failed to create output directory '{}'", self.dir.display())
        })?;

        // Write to temp file first, then rename for atomicity
        let temp_path = path.with_extension("json.tmp");
        tokio::fs::write(&temp_path, &contents)
            .await
            .with_context(|| format!("Failed to write schema file '{}'", temp_path.display()))?;

        tokio::fs::rename(&temp_path, &path)
            .await
            .with_context(|| format!("Failed to rename schema file '{}'", path.display()))?;

        debug!(schema = name, path = %path.display(), "wrote schema");
        Ok(path)
    }

    /// Read a persisted schema back
    pub async fn load(&self, name: &str) -> Result<SchemaFragment> {
        Ok(serde_json::from_str(&self.read(name).await?)?)
    }

    /// Read a persisted schema back exactly as written, keywords and all
    pub async fn load_json(&self, name: &str) -> Result<JsonValue> {
        Ok(serde_json::from_str(&self.read(name).await?)?)
    }

    async fn read(&self, name: &str) -> Result<String> {
        let path = self.path_for(name)?;
        match tokio::fs::read_to_string(&path).await {
            Ok(contents) => Ok(contents),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(Error::FileNotFound {
                path: path.display().to_string(),
            }),
            Err(e) => {
                Err(e).with_context(|| format!("Failed to read schema file '{}'", path.display()))
            }
        }
    }
}

//! Generation engine module
//!
//! Batch driver around the schema synthesizer.
//!
//! # Overview
//!
//! The engine module provides:
//! - `Generator` - Infers one schema per fixture key and persists it
//! - `GenerationReport` - What a run wrote
//! - `CheckReport` - Drift between fixtures and persisted schemas
//!
//! Each key is synthesized independently, so writes run as concurrent tasks
//! with no ordering between keys.

mod types;

pub use types::{CheckReport, GeneratedSchema, GenerationReport};

use crate::config::GeneratorConfig;
use crate::error::{Error, Result};
use crate::fixtures::{validate_schema_name, Fixtures, SchemaStore};
use crate::schema::{SchemaFragment, Synthesizer};
use std::time::Instant;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

/// Infers and persists schemas for a set of fixtures
#[derive(Debug, Clone)]
pub struct Generator {
    /// Schema synthesizer
    synthesizer: Synthesizer,
    /// Output store
    store: SchemaStore,
}

impl Generator {
    /// Create a new generator
    pub fn new(synthesizer: Synthesizer, store: SchemaStore) -> Self {
        Self { synthesizer, store }
    }

    /// Create a generator from configuration
    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self::new(
            config.synthesizer(),
            SchemaStore::new(&config.output_dir).with_pretty(config.output.pretty),
        )
    }

    /// Get the synthesizer
    pub fn synthesizer(&self) -> &Synthesizer {
        &self.synthesizer
    }

    /// Get the output store
    pub fn store(&self) -> &SchemaStore {
        &self.store
    }

    /// Infer the schema for one fixture key
    pub fn infer(&self, fixtures: &Fixtures, name: &str) -> Result<SchemaFragment> {
        let sample = fixtures
            .get(name)
            .ok_or_else(|| Error::schema_not_found(name))?;
        Ok(self.synthesizer.synthesize(name, sample))
    }

    /// Infer every schema, sorted by name
    pub fn infer_all(&self, fixtures: &Fixtures) -> Vec<(String, SchemaFragment)> {
        fixtures
            .iter()
            .map(|(name, sample)| (name.to_string(), self.synthesizer.synthesize(name, sample)))
            .collect()
    }

    /// Infer and write schemas. With `only`, just the named keys are written.
    pub async fn generate(
        &self,
        fixtures: &Fixtures,
        only: Option<&[String]>,
    ) -> Result<GenerationReport> {
        let started = Instant::now();
        let names = select_names(fixtures, only)?;

        // Fail before touching the disk if any name is unusable
        for name in &names {
            validate_schema_name(name)?;
        }

        let mut tasks = JoinSet::new();
        for name in names {
            let schema = self.infer(fixtures, &name)?;
            let store = self.store.clone();
            tasks.spawn(async move {
                let path = store.write(&name, &schema).await?;
                Ok::<_, Error>(GeneratedSchema { name, path })
            });
        }

        let mut written = Vec::new();
        let mut first_error = None;
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(Ok(schema)) => written.push(schema),
                Ok(Err(e)) => {
                    warn!("Failed to write schema: {e}");
                    if first_error.is_none() {
                        first_error = Some(e);
                    }
                }
                Err(e) => {
                    if first_error.is_none() {
                        first_error =
                            Some(Error::output(format!("Schema writer task failed: {e}")));
                    }
                }
            }
        }

        if let Some(e) = first_error {
            return Err(e);
        }

        written.sort_by(|a, b| a.name.cmp(&b.name));
        let report = GenerationReport {
            written,
            duration_ms: started.elapsed().as_millis() as u64,
        };

        info!(
            schemas = report.len(),
            output_dir = %self.store.dir().display(),
            duration_ms = report.duration_ms,
            "generated schemas"
        );
        Ok(report)
    }

    /// Compare persisted schemas with what the fixtures infer today
    pub async fn check(&self, fixtures: &Fixtures) -> Result<CheckReport> {
        let mut report = CheckReport::default();

        for (name, fresh) in self.infer_all(fixtures) {
            match self.store.load_json(&name).await {
                // Raw JSON, so keywords a fragment cannot hold still count
                Ok(existing) if existing == fresh.to_json() => report.up_to_date.push(name),
                Ok(_) => {
                    debug!(schema = name.as_str(), "persisted schema differs");
                    report.stale.push(name);
                }
                Err(Error::FileNotFound { .. }) => report.missing.push(name),
                Err(Error::JsonParse(e)) => {
                    warn!(schema = name.as_str(), "persisted schema is not valid: {e}");
                    report.stale.push(name);
                }
                Err(e) => return Err(e),
            }
        }

        Ok(report)
    }
}

/// Names to generate, sorted by name
fn select_names(fixtures: &Fixtures, only: Option<&[String]>) -> Result<Vec<String>> {
    match only {
        None => Ok(fixtures.names().map(str::to_string).collect()),
        Some(selected) => {
            if let Some(unknown) = selected.iter().find(|n| fixtures.get(n).is_none()) {
                return Err(Error::schema_not_found(unknown.as_str()));
            }
            Ok(fixtures
                .names()
                .filter(|n| selected.iter().any(|s| s == n))
                .map(str::to_string)
                .collect())
        }
    }
}

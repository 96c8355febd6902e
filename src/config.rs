//! Generator configuration
//!
//! Loaded from an optional YAML file; every field has a default so an empty
//! file (or no file at all) is a valid configuration.

use crate::error::{Error, Result};
use crate::schema::{
    Classifier, DateDetection, NumericMode, Synthesizer, DEFAULT_MAX_DEPTH, DEFAULT_MONETARY_KEYS,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Top-Level Config
// ============================================================================

/// Complete generator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Fixtures file (JSON or YAML)
    #[serde(default = "default_fixtures")]
    pub fixtures: PathBuf,

    /// Directory receiving one `<name>.json` per fixture key
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Inference settings
    #[serde(default)]
    pub inference: InferenceConfig,

    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,
}

fn default_fixtures() -> PathBuf {
    PathBuf::from("tap_recurly/schemas/fixtures.json")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("tap_recurly/schemas")
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            fixtures: default_fixtures(),
            output_dir: default_output_dir(),
            inference: InferenceConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl GeneratorConfig {
    /// Load and validate a config file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::FileNotFound {
                    path: path.display().to_string(),
                }
            } else {
                Error::config(format!(
                    "Failed to read config file '{}': {}",
                    path.display(),
                    e
                ))
            }
        })?;
        Self::from_yaml(&content)
    }

    /// Parse and validate a YAML config
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // serde_yaml rejects an empty document, which should mean "all defaults"
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: GeneratorConfig = serde_yaml::from_str(yaml)
            .map_err(|e| Error::config(format!("Failed to parse config YAML: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Check field constraints
    pub fn validate(&self) -> Result<()> {
        self.inference.validate()
    }

    /// Build the synthesizer described by this config
    pub fn synthesizer(&self) -> Synthesizer {
        self.inference.synthesizer()
    }
}

// ============================================================================
// Inference
// ============================================================================

/// Classification and synthesis settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InferenceConfig {
    /// Numeric tagging mode
    #[serde(default)]
    pub numeric_mode: NumericMode,

    /// Key fragments treated as monetary under the price heuristic
    #[serde(default = "default_monetary_keys")]
    pub monetary_keys: Vec<String>,

    /// Date detector
    #[serde(default)]
    pub date_detection: DateDetection,

    /// Nesting limit
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

fn default_monetary_keys() -> Vec<String> {
    DEFAULT_MONETARY_KEYS
        .iter()
        .map(|k| (*k).to_string())
        .collect()
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            numeric_mode: NumericMode::default(),
            monetary_keys: default_monetary_keys(),
            date_detection: DateDetection::default(),
            max_depth: default_max_depth(),
        }
    }
}

impl InferenceConfig {
    /// Check field constraints
    pub fn validate(&self) -> Result<()> {
        if self.max_depth == 0 {
            return Err(Error::invalid_value("max_depth", "must be greater than zero"));
        }

        if self.numeric_mode == NumericMode::PriceHeuristic
            && self.monetary_keys.iter().all(|k| k.trim().is_empty())
        {
            return Err(Error::invalid_value(
                "monetary_keys",
                "price_heuristic needs at least one monetary key",
            ));
        }

        Ok(())
    }

    /// Build the classifier described by this config
    pub fn classifier(&self) -> Classifier {
        let monetary_keys = self
            .monetary_keys
            .iter()
            .filter(|k| !k.trim().is_empty())
            .cloned();

        Classifier::new()
            .with_numeric_mode(self.numeric_mode)
            .with_monetary_keys(monetary_keys)
            .with_date_detection(self.date_detection)
    }

    /// Build the synthesizer described by this config
    pub fn synthesizer(&self) -> Synthesizer {
        Synthesizer::new(self.classifier()).with_max_depth(self.max_depth)
    }
}

// ============================================================================
// Output
// ============================================================================

/// Output file settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Pretty-print with two-space indentation
    #[serde(default = "default_true")]
    pub pretty: bool,
}

fn default_true() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

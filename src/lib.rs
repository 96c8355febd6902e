// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::match_wildcard_for_single_variants)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # fixture-schema
//!
//! Infers JSON Schema documents from example data.
//!
//! A fixtures file maps each schema name to one representative sample (an
//! object, or an array of objects). For every key the generator walks the
//! sample, tags each scalar, and writes `<name>.json` describing the shape.
//!
//! ## Features
//!
//! - **Type Classification**: boolean, number (or integer/number by key), date-time, string
//! - **Nested Schemas**: objects become `properties`, arrays become `items`
//! - **Declared Types**: a fixture value of `"integer"` declares the type directly
//! - **Nullable Everywhere**: every `type` is `["null", ...]`
//! - **JSON or YAML Fixtures**
//!
//! ## Quick Start
//!
//! ```rust
//! use fixture_schema::schema::infer_schema;
//! use serde_json::json;
//!
//! let schema = infer_schema("orders", &json!([{"id": 1, "placed_at": "2023-01-15"}]));
//! assert_eq!(
//!     schema.to_json()["items"]["properties"]["placed_at"],
//!     json!({"type": ["null", "string"], "format": "date-time"})
//! );
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐    ┌──────────────────────────────┐    ┌──────────────┐
//! │   Fixtures   │───▶│          Synthesizer          │───▶│ SchemaStore  │
//! │ (JSON/YAML)  │    │  array / object / scalar walk │    │ <name>.json  │
//! └──────────────┘    └───────────────┬──────────────┘    └──────────────┘
//!                                     │ leaves
//!                             ┌───────┴───────┐
//!                             │  Classifier   │
//!                             │ bool > number │
//!                             │ > date > str  │
//!                             └───────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and sample values
pub mod types;

/// Schema inference
pub mod schema;

/// Fixtures loading and schema persistence
pub mod fixtures;

/// Generator configuration
pub mod config;

/// Batch generation engine
pub mod engine;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::GeneratorConfig;
pub use engine::Generator;
pub use error::{Error, Result};
pub use fixtures::{Fixtures, SchemaStore};
pub use schema::{infer_schema, Classifier, SchemaFragment, Synthesizer, TypeTag};
pub use types::{Sample, Scalar};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");

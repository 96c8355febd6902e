//! Fixtures module
//!
//! Reading sample data in and writing schema files out.
//!
//! # Overview
//!
//! - `Fixtures` - Schema name to sample mapping, loaded from JSON or YAML
//! - `SchemaStore` - One `<name>.json` file per schema in an output directory

mod loader;
mod store;

pub use loader::Fixtures;
pub use store::{validate_schema_name, SchemaStore};

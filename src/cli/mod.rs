//! CLI module
//!
//! Command-line interface for generating schemas.
//!
//! # Commands
//!
//! - `generate` - Write one schema file per fixture key
//! - `show` - Print one inferred schema
//! - `classify` - Print the type tag of a single value
//! - `list` - List fixture keys
//! - `check` - Detect missing or stale schema files

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;

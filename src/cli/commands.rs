//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Infer JSON Schema files from example fixtures
#[derive(Parser, Debug)]
#[command(name = "fixture-schema")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Fixtures file (JSON or YAML), overrides the config file
    #[arg(short, long, global = true)]
    pub fixtures: Option<PathBuf>,

    /// Output directory for schema files, overrides the config file
    #[arg(short, long, global = true)]
    pub output_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Infer and write one schema file per fixture key
    Generate {
        /// Schemas to generate (comma-separated, empty = all)
        #[arg(long, value_delimiter = ',')]
        only: Vec<String>,
    },

    /// Print the inferred schema for one fixture key
    Show {
        /// Fixture key
        name: String,
    },

    /// Classify a single value (parsed as JSON when possible, else a string)
    Classify {
        /// Value to classify
        value: String,

        /// Property key used as a hint by the price heuristic
        #[arg(long, default_value = "")]
        key: String,
    },

    /// List fixture keys
    List,

    /// Exit non-zero if persisted schemas are missing or out of date
    Check,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one message per line)
    Json,
    /// Human-readable output
    Pretty,
}

//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::GeneratorConfig;
use crate::engine::Generator;
use crate::error::{Error, Result};
use crate::fixtures::Fixtures;
use crate::schema::SchemaFragment;
use crate::types::{JsonValue, Sample};
use serde_json::json;
use tracing::debug;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let config = self.load_config()?;
        let generator = Generator::from_config(&config);

        match &self.cli.command {
            Commands::Generate { only } => self.generate(&config, &generator, only).await,
            Commands::Show { name } => self.show(&config, &generator, name),
            Commands::Classify { value, key } => self.classify(&generator, value, key),
            Commands::List => self.list(&config),
            Commands::Check => self.check(&config, &generator).await,
        }
    }

    /// Load configuration, applying command-line overrides
    fn load_config(&self) -> Result<GeneratorConfig> {
        let mut config = match &self.cli.config {
            Some(path) => GeneratorConfig::from_file(path)?,
            None => GeneratorConfig::default(),
        };

        if let Some(fixtures) = &self.cli.fixtures {
            config.fixtures.clone_from(fixtures);
        }
        if let Some(output_dir) = &self.cli.output_dir {
            config.output_dir.clone_from(output_dir);
        }

        debug!(
            fixtures = %config.fixtures.display(),
            output_dir = %config.output_dir.display(),
            "resolved configuration"
        );
        Ok(config)
    }

    /// Load the fixtures named by the configuration
    fn load_fixtures(&self, config: &GeneratorConfig) -> Result<Fixtures> {
        Fixtures::from_file(&config.fixtures)
    }

    /// Generate schema files
    async fn generate(
        &self,
        config: &GeneratorConfig,
        generator: &Generator,
        only: &[String],
    ) -> Result<()> {
        let fixtures = self.load_fixtures(config)?;
        let only = (!only.is_empty()).then_some(only);
        let report = generator.generate(&fixtures, only).await?;

        match self.cli.format {
            OutputFormat::Json => {
                for schema in &report.written {
                    self.output_message(&json!({
                        "type": "SCHEMA",
                        "name": schema.name,
                        "path": schema.path.display().to_string(),
                    }));
                }
            }
            OutputFormat::Pretty => {
                for schema in &report.written {
                    println!("{} -> {}", schema.name, schema.path.display());
                }
                println!(
                    "Generated {} schema(s) in {}ms",
                    report.len(),
                    report.duration_ms
                );
            }
        }
        Ok(())
    }

    /// Print one inferred schema
    fn show(&self, config: &GeneratorConfig, generator: &Generator, name: &str) -> Result<()> {
        let fixtures = self.load_fixtures(config)?;
        let schema = generator.infer(&fixtures, name)?;
        println!("{}", generator.store().render(&schema)?);
        Ok(())
    }

    /// Classify a single value
    fn classify(&self, generator: &Generator, value: &str, key: &str) -> Result<()> {
        let synthesizer = generator.synthesizer();
        match Sample::from(parse_cli_value(value)) {
            Sample::Scalar(scalar) => {
                let tag = synthesizer.classifier().classify(key, &scalar);
                match self.cli.format {
                    OutputFormat::Json => self.output_message(&json!({
                        "type": "CLASSIFICATION",
                        "value": value,
                        "tag": tag.as_str(),
                        "schema": SchemaFragment::scalar(tag),
                    })),
                    OutputFormat::Pretty => println!("{tag}"),
                }
            }
            // Structured values get a full schema instead of a tag
            sample => {
                let schema = synthesizer.synthesize(key, &sample);
                println!("{}", generator.store().render(&schema)?);
            }
        }
        Ok(())
    }

    /// List fixture keys
    fn list(&self, config: &GeneratorConfig) -> Result<()> {
        let fixtures = self.load_fixtures(config)?;
        match self.cli.format {
            OutputFormat::Json => {
                let names: Vec<&str> = fixtures.names().collect();
                self.output_message(&json!({"type": "FIXTURES", "names": names}));
            }
            OutputFormat::Pretty => {
                for (name, sample) in fixtures.iter() {
                    println!("{name} ({})", sample.kind());
                }
            }
        }
        Ok(())
    }

    /// Compare persisted schemas with the fixtures
    async fn check(&self, config: &GeneratorConfig, generator: &Generator) -> Result<()> {
        let fixtures = self.load_fixtures(config)?;
        let report = generator.check(&fixtures).await?;

        match self.cli.format {
            OutputFormat::Json => self.output_message(&json!({"type": "CHECK", "report": report})),
            OutputFormat::Pretty => {
                for name in &report.up_to_date {
                    println!("ok       {name}");
                }
                for name in &report.stale {
                    println!("stale    {name}");
                }
                for name in &report.missing {
                    println!("missing  {name}");
                }
            }
        }

        if report.is_clean() {
            Ok(())
        } else {
            Err(Error::Other(format!(
                "{} schema(s) stale, {} missing in '{}'; run `fixture-schema generate`",
                report.stale.len(),
                report.missing.len(),
                config.output_dir.display()
            )))
        }
    }

    /// Output a message
    fn output_message(&self, msg: &JsonValue) {
        println!("{}", serde_json::to_string(msg).unwrap_or_default());
    }
}

/// Interpret a command-line value: JSON when it parses, otherwise a plain string
fn parse_cli_value(raw: &str) -> JsonValue {
    serde_json::from_str(raw).unwrap_or_else(|_| JsonValue::String(raw.to_string()))
}

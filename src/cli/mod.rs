//! CLI module for propsift.
//!
//! Subcommands:
//! - `classify`: Classify the properties of a schema file
//! - `describe`: Show a single property of a schema file

mod classify;
mod describe;

use clap::{Parser, Subcommand};

use crate::config::{Config, OutputConfig};
use crate::error::AppError;
use crate::output::OutputFormat;

pub use classify::ClassifyCommand;
pub use describe::DescribeCommand;

/// Propsift - Schema Property Classifier
#[derive(Parser)]
#[command(name = "propsift")]
#[command(about = "Classify resource schema properties for flag and constructor generators")]
#[command(version)]
pub struct App {
    /// Run in verbose mode
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (overrides config)
    #[arg(short, long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Separator for property paths (overrides config)
    #[arg(long, global = true)]
    pub separator: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Classify the properties of a JSON schema file
    Classify(ClassifyCommand),

    /// Describe the property at a path in a JSON schema file
    Describe(DescribeCommand),
}

impl App {
    /// Run the CLI application.
    pub fn run(self) -> color_eyre::Result<()> {
        let config = Config::load()?;
        let output = self.output_config(config.output)?;
        tracing::debug!(format = ?output.format, separator = %output.separator, "Resolved output settings");

        match self.command {
            Command::Classify(cmd) => cmd.run(&output),
            Command::Describe(cmd) => cmd.run(&output),
        }
    }

    /// Apply command-line overrides on top of the loaded output config.
    fn output_config(&self, mut output: OutputConfig) -> Result<OutputConfig, AppError> {
        if let Some(format) = self.format {
            output.format = format;
        }
        if let Some(separator) = &self.separator {
            output.separator = separator.clone();
        }
        output.validate()?;
        Ok(output)
    }
}

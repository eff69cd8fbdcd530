//! Classify subcommand - bucket the properties of a schema file.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;

use crate::config::OutputConfig;
use crate::models::Schema;
use crate::output::render_report;
use crate::report::{Category, Classification};

/// Classify the properties of a JSON schema file.
#[derive(Parser)]
pub struct ClassifyCommand {
    /// Path to the JSON schema file.
    pub input: PathBuf,

    /// Path of the object property to classify from (default: document root).
    #[arg(short, long)]
    pub root: Option<String>,

    /// Only run these categories (repeatable).
    #[arg(long)]
    pub only: Vec<Category>,
}

impl ClassifyCommand {
    /// Run the classify command.
    pub fn run(self, output: &OutputConfig) -> Result<()> {
        let schema = Schema::load(&self.input)?;
        tracing::info!("Loaded schema from {}", self.input.display());

        let root_path = self.root.unwrap_or_default();
        let root = schema.traversal_root(&root_path, &output.separator)?;

        let report = Classification::build(root, &root_path, &self.only, &output.separator);
        tracing::info!(
            root = %root_path,
            total = report.total(),
            "Classified schema properties"
        );

        println!("{}", render_report(&report, output)?);
        Ok(())
    }
}

//! Describe subcommand - show one property of a schema file.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;
use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::config::OutputConfig;
use crate::models::{Schema, SchemaType};
use crate::output::{render_value, OutputFormat};

/// Describe the property at a path in a JSON schema file.
#[derive(Parser)]
pub struct DescribeCommand {
    /// Path to the JSON schema file.
    pub input: PathBuf,

    /// Property path, e.g. `spec.template.image`.
    pub path: String,
}

/// Summary of a single property.
#[derive(Debug, Serialize)]
pub struct PropertySummary {
    pub path: String,
    pub human_name: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<SchemaType>,
    pub read_only: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<JsonValue>,
    /// Element type for arrays.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<SchemaType>,
    /// Child property keys for objects, sorted.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<String>,
}

impl PropertySummary {
    fn new(path: &str, separator: &str, schema: &Schema) -> Self {
        let key = path.rsplit(separator).next().unwrap_or(path);
        let mut properties: Vec<String> = schema.properties.keys().cloned().collect();
        properties.sort();

        Self {
            path: path.to_string(),
            human_name: schema.human_name(key).to_string(),
            schema_type: schema.schema_type,
            read_only: schema.read_only,
            default: schema.default.clone(),
            items: schema.items.as_ref().and_then(|items| items.schema_type),
            properties,
        }
    }
}

impl DescribeCommand {
    /// Run the describe command.
    pub fn run(self, output: &OutputConfig) -> Result<()> {
        let schema = Schema::load(&self.input)?;
        tracing::info!("Loaded schema from {}", self.input.display());

        let node = schema.lookup(&self.path, &output.separator)?;
        let summary = PropertySummary::new(&self.path, &output.separator, node);

        let rendered = match output.format {
            OutputFormat::Text => {
                let kind = summary.schema_type.map(|t| t.as_str()).unwrap_or("-");
                format!(
                    "{} [{}]{}",
                    summary.human_name,
                    kind,
                    if summary.read_only { " read-only" } else { "" }
                )
            }
            _ => render_value(&summary, output)?,
        };

        println!("{}", rendered);
        Ok(())
    }
}

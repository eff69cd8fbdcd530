//! Report rendering.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::config::OutputConfig;
use crate::error::AppError;
use crate::report::{Category, Classification};

/// Output format for reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// JSON format (default).
    #[default]
    Json,
    /// TOON (Token-Oriented Object Notation), compact tabular output.
    Toon,
    /// Plain text listing, one property per line.
    Text,
}

/// Render any serializable value as JSON or TOON.
///
/// `Text` falls back to pretty JSON for values without a text layout.
pub fn render_value<T: Serialize>(value: &T, config: &OutputConfig) -> Result<String, AppError> {
    match config.format {
        OutputFormat::Json | OutputFormat::Text if config.pretty => {
            serde_json::to_string_pretty(value).map_err(|e| AppError::Encode(e.to_string()))
        }
        OutputFormat::Json | OutputFormat::Text => {
            serde_json::to_string(value).map_err(|e| AppError::Encode(e.to_string()))
        }
        OutputFormat::Toon => {
            serde_toon::to_string(value).map_err(|e| AppError::Encode(e.to_string()))
        }
    }
}

/// Render a classification report in the configured format.
pub fn render_report(report: &Classification, config: &OutputConfig) -> Result<String, AppError> {
    match config.format {
        OutputFormat::Text => Ok(render_text(report)),
        _ => render_value(report, config),
    }
}

fn render_text(report: &Classification) -> String {
    let mut out = String::new();
    if !report.root.is_empty() {
        let _ = writeln!(out, "root: {}", report.root);
    }
    for category in Category::all() {
        let Some(entries) = report.get(*category) else {
            continue;
        };
        let _ = writeln!(
            out,
            "{} ({}) - {}",
            category,
            entries.len(),
            category.description()
        );
        for entry in entries {
            let kind = entry.schema_type.map(|t| t.as_str()).unwrap_or("-");
            if entry.human_name == entry.name {
                let _ = writeln!(out, "  {} [{}]", entry.path, kind);
            } else {
                let _ = writeln!(out, "  {} [{}] \"{}\"", entry.path, kind, entry.human_name);
            }
        }
    }
    out
}

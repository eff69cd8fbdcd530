//! Classification reports handed to downstream generators.

use std::collections::HashMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::classify::MatchedProperty;
use crate::models::{Schema, SchemaType};

/// The five property classifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Writable scalars directly under the root.
    SingleVal,
    /// Object-typed properties directly under the root.
    Object,
    /// Read-only properties with a default, any depth.
    ReadOnlyDefault,
    /// Writable scalars at any depth.
    Constructable,
    /// Arrays of objects at any depth.
    Appendable,
}

impl Category {
    /// Returns a static slice of all categories in report order.
    pub fn all() -> &'static [Category] {
        &[
            Category::SingleVal,
            Category::Object,
            Category::ReadOnlyDefault,
            Category::Constructable,
            Category::Appendable,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::SingleVal => "single-val",
            Category::Object => "object",
            Category::ReadOnlyDefault => "read-only-default",
            Category::Constructable => "constructable",
            Category::Appendable => "appendable",
        }
    }

    /// Returns a human-readable description of this category.
    pub fn description(&self) -> &'static str {
        match self {
            Category::SingleVal => "Writable scalar fields at the top level",
            Category::Object => "Object fields at the top level",
            Category::ReadOnlyDefault => "Server-assigned fields that carry a default",
            Category::Constructable => "Fields settable when creating a new instance",
            Category::Appendable => "List fields whose elements are objects",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single-val" | "single_val" => Ok(Category::SingleVal),
            "object" => Ok(Category::Object),
            "read-only-default" | "read_only_default" => Ok(Category::ReadOnlyDefault),
            "constructable" => Ok(Category::Constructable),
            "appendable" => Ok(Category::Appendable),
            _ => Err(format!(
                "Invalid category '{}'. Valid values: single-val, object, read-only-default, constructable, appendable",
                s
            )),
        }
    }
}

/// One classified property in a report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyEntry {
    /// Property key.
    pub name: String,
    /// Title, or the key when untitled.
    pub human_name: String,
    /// Location joined with the configured separator.
    pub path: String,
    /// Keys from the traversal root down to the property.
    pub location: Vec<String>,
    /// Value type, if declared.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<SchemaType>,
    /// Default value, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<JsonValue>,
}

impl PropertyEntry {
    fn from_match(matched: &MatchedProperty<'_>, separator: &str) -> Self {
        Self {
            name: matched.name.to_string(),
            human_name: matched.human_name().to_string(),
            path: matched.dotted_path(separator),
            location: matched.location.iter().map(|s| s.to_string()).collect(),
            schema_type: matched.schema.schema_type,
            default: matched.schema.default.clone(),
        }
    }

    fn from_top_level(name: &str, schema: &Schema) -> Self {
        Self {
            name: name.to_string(),
            human_name: schema.human_name(name).to_string(),
            path: name.to_string(),
            location: vec![name.to_string()],
            schema_type: schema.schema_type,
            default: schema.default.clone(),
        }
    }
}

/// Classified properties of one traversal root, grouped by category.
///
/// Every list is sorted; top-level maps are published in name order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Classification {
    /// Dotted path of the traversal root, empty for the document root.
    pub root: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub single_val: Option<Vec<PropertyEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object: Option<Vec<PropertyEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only_default: Option<Vec<PropertyEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constructable: Option<Vec<PropertyEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appendable: Option<Vec<PropertyEntry>>,
}

impl Classification {
    /// Run the selected classifiers against `schema`.
    ///
    /// An empty `categories` slice selects every category.
    pub fn build(schema: &Schema, root: &str, categories: &[Category], separator: &str) -> Self {
        let selected = if categories.is_empty() {
            Category::all()
        } else {
            categories
        };

        let mut report = Classification {
            root: root.to_string(),
            ..Default::default()
        };

        for category in selected {
            let entries = match category {
                Category::SingleVal => top_level_entries(schema.top_level_single_val_properties()),
                Category::Object => top_level_entries(schema.top_level_object_properties()),
                Category::ReadOnlyDefault => {
                    match_entries(&schema.read_only_with_default_properties(), separator)
                }
                Category::Constructable => {
                    match_entries(&schema.constructable_properties(), separator)
                }
                Category::Appendable => match_entries(&schema.appendable_properties(), separator),
            };
            *report.slot(*category) = Some(entries);
        }

        tracing::debug!(
            root = %root,
            total = report.total(),
            "Built classification report"
        );
        report
    }

    /// Entries of one category, if it was classified.
    pub fn get(&self, category: Category) -> Option<&[PropertyEntry]> {
        match category {
            Category::SingleVal => self.single_val.as_deref(),
            Category::Object => self.object.as_deref(),
            Category::ReadOnlyDefault => self.read_only_default.as_deref(),
            Category::Constructable => self.constructable.as_deref(),
            Category::Appendable => self.appendable.as_deref(),
        }
    }

    /// Total number of entries across all classified categories.
    pub fn total(&self) -> usize {
        Category::all()
            .iter()
            .filter_map(|c| self.get(*c))
            .map(|entries| entries.len())
            .sum()
    }

    fn slot(&mut self, category: Category) -> &mut Option<Vec<PropertyEntry>> {
        match category {
            Category::SingleVal => &mut self.single_val,
            Category::Object => &mut self.object,
            Category::ReadOnlyDefault => &mut self.read_only_default,
            Category::Constructable => &mut self.constructable,
            Category::Appendable => &mut self.appendable,
        }
    }
}

fn top_level_entries(props: HashMap<&str, &Schema>) -> Vec<PropertyEntry> {
    let mut entries: Vec<PropertyEntry> = props
        .into_iter()
        .map(|(name, schema)| PropertyEntry::from_top_level(name, schema))
        .collect();
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    entries
}

fn match_entries(matches: &[MatchedProperty<'_>], separator: &str) -> Vec<PropertyEntry> {
    matches
        .iter()
        .map(|m| PropertyEntry::from_match(m, separator))
        .collect()
}

//! Schema node model for resource configuration fields.

use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::error::AppError;

/// Value type of a schema node.
///
/// Scalar types (`string`, `integer`, `number`, `boolean`) describe single
/// values; `object` nodes carry child properties and `array` nodes carry an
/// element schema in `items`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaType {
    String,
    Integer,
    Number,
    Boolean,
    Object,
    Array,
}

impl SchemaType {
    /// Returns true for the single-value types.
    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            SchemaType::String | SchemaType::Integer | SchemaType::Number | SchemaType::Boolean
        )
    }

    /// Returns the JSON Schema keyword for this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaType::String => "string",
            SchemaType::Integer => "integer",
            SchemaType::Number => "number",
            SchemaType::Boolean => "boolean",
            SchemaType::Object => "object",
            SchemaType::Array => "array",
        }
    }
}

impl std::fmt::Display for SchemaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SchemaType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "string" => Ok(SchemaType::String),
            "integer" => Ok(SchemaType::Integer),
            "number" => Ok(SchemaType::Number),
            "boolean" => Ok(SchemaType::Boolean),
            "object" => Ok(SchemaType::Object),
            "array" => Ok(SchemaType::Array),
            _ => Err(format!(
                "Invalid type '{}'. Valid values: string, integer, number, boolean, object, array",
                s
            )),
        }
    }
}

/// One node of a resource schema tree.
///
/// Trees are built once (usually by deserializing a schema document) and are
/// only read afterwards. Children are owned, so a node can never contain
/// itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    /// Human-readable label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Value type. Absent on bare container roots.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<SchemaType>,
    /// Server-assigned field, not settable by users.
    #[serde(default)]
    pub read_only: bool,
    /// Default value. A JSON `null` counts as no default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<JsonValue>,
    /// Child properties of an `object` node.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub properties: HashMap<String, Schema>,
    /// Element schema of an `array` node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,
}

impl Schema {
    /// Creates an empty node of the given type.
    pub fn of_type(schema_type: SchemaType) -> Self {
        Self {
            schema_type: Some(schema_type),
            ..Default::default()
        }
    }

    /// Creates an untyped container holding the given properties.
    pub fn with_properties(properties: HashMap<String, Schema>) -> Self {
        Self {
            properties,
            ..Default::default()
        }
    }

    /// Parse a schema tree from a JSON document.
    pub fn from_json_str(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Read and parse a schema file.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = std::fs::read_to_string(path).map_err(|source| AppError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&content).map_err(|source| AppError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Returns the title if set and non-empty, otherwise `fallback`.
    pub fn human_name<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self.title.as_deref() {
            Some(title) if !title.is_empty() => title,
            _ => fallback,
        }
    }

    /// Returns true if the declared type is `schema_type`.
    pub fn is_type(&self, schema_type: SchemaType) -> bool {
        self.schema_type == Some(schema_type)
    }

    /// Returns true for string, integer, number and boolean nodes.
    pub fn is_scalar(&self) -> bool {
        self.schema_type.is_some_and(|t| t.is_scalar())
    }

    /// Returns true if a non-null default is present.
    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }

    /// Resolve a descendant through a chain of `properties` keys.
    ///
    /// An empty location resolves to `self`. `items` are never entered.
    pub fn property_at<S: AsRef<str>>(&self, location: &[S]) -> Option<&Schema> {
        location
            .iter()
            .try_fold(self, |node, key| node.properties.get(key.as_ref()))
    }

    /// Resolve a descendant by a joined path such as `spec.template`.
    ///
    /// An empty path resolves to `self`.
    pub fn lookup(&self, path: &str, separator: &str) -> Result<&Schema, AppError> {
        if path.is_empty() {
            return Ok(self);
        }
        let location: Vec<&str> = path.split(separator).collect();
        self.property_at(&location)
            .ok_or_else(|| AppError::PropertyNotFound(path.to_string()))
    }

    /// Resolve a traversal root by path. The resolved node must be an object,
    /// except for the document root itself.
    pub fn traversal_root(&self, path: &str, separator: &str) -> Result<&Schema, AppError> {
        let node = self.lookup(path, separator)?;
        if path.is_empty() || node.is_type(SchemaType::Object) {
            Ok(node)
        } else {
            Err(AppError::NotAnObject(path.to_string()))
        }
    }
}

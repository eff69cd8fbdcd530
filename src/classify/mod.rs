//! Property classification over schema trees.
//!
//! Five classifications partition the fields of a resource schema for
//! downstream generators:
//!
//! - single-value: writable scalars directly under the node
//! - object: object-typed properties directly under the node
//! - read-only with default: server-assigned fields carrying a default, any depth
//! - constructable: writable scalars at any depth, reachable through objects
//! - appendable: arrays of objects at any depth, reachable through objects
//!
//! Recursive classifications return [`MatchedProperty`] records sorted by
//! [`sort_matches`]. A read-only property without a default belongs to no
//! classification.

mod matched;
pub mod traverse;

use std::collections::HashMap;

use crate::models::{Schema, SchemaType};

pub use matched::{sort_matches, MatchedProperty};

impl Schema {
    /// Writable scalar properties directly under this node.
    pub fn top_level_single_val_properties(&self) -> HashMap<&str, &Schema> {
        self.collect_top_level(|schema| schema.is_scalar() && !schema.read_only)
    }

    /// Object-typed properties directly under this node.
    pub fn top_level_object_properties(&self) -> HashMap<&str, &Schema> {
        self.collect_top_level(|schema| schema.is_type(SchemaType::Object))
    }

    /// Read-only properties with a default, at any depth below this node.
    pub fn read_only_with_default_properties(&self) -> Vec<MatchedProperty<'_>> {
        let matches = self.collect_matches(|schema| schema.read_only && schema.has_default());
        tracing::debug!(
            count = matches.len(),
            "Classified read-only properties with defaults"
        );
        matches
    }

    /// Writable scalar properties reachable through object-typed ancestors.
    ///
    /// These are the fields a caller may supply when creating a new instance
    /// of the resource. Object nodes themselves never match.
    pub fn constructable_properties(&self) -> Vec<MatchedProperty<'_>> {
        let matches = self.collect_matches(|schema| schema.is_scalar() && !schema.read_only);
        tracing::debug!(count = matches.len(), "Classified constructable properties");
        matches
    }

    /// Array properties whose elements are objects, at any depth below this
    /// node.
    ///
    /// The match is the array property itself, not its element schema.
    pub fn appendable_properties(&self) -> Vec<MatchedProperty<'_>> {
        let matches = self.collect_matches(|schema| {
            schema.is_type(SchemaType::Array)
                && schema
                    .items
                    .as_deref()
                    .is_some_and(|items| items.is_type(SchemaType::Object))
        });
        tracing::debug!(count = matches.len(), "Classified appendable properties");
        matches
    }

    fn collect_top_level<P>(&self, predicate: P) -> HashMap<&str, &Schema>
    where
        P: Fn(&Schema) -> bool,
    {
        let mut found = HashMap::new();
        traverse::walk_top_level(self, &mut |name, _, schema| {
            if predicate(schema) {
                found.insert(name, schema);
            }
        });
        found
    }

    fn collect_matches<P>(&self, predicate: P) -> Vec<MatchedProperty<'_>>
    where
        P: Fn(&Schema) -> bool,
    {
        let mut matches = Vec::new();
        traverse::walk(self, &mut |name, location, schema| {
            if predicate(schema) {
                matches.push(MatchedProperty::new(name, location, schema));
            }
        });
        sort_matches(&mut matches);
        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Resource schema covering every classification.
    fn fixture() -> Schema {
        serde_json::from_value(json!({
            "properties": {
                "topLevelString": {"type": "string"},
                "topLevelStringWithTitle": {
                    "title": "Human Friendly Title",
                    "type": "string"
                },
                "topLevelReadOnlyString": {"readOnly": true, "type": "string"},
                "topLevelReadOnlyStringWithDefault": {
                    "readOnly": true,
                    "type": "string",
                    "default": "default"
                },
                "topLevelArrayWithObjectItems": {
                    "type": "array",
                    "items": {"type": "object"}
                },
                "topLevelObject": {
                    "type": "object",
                    "properties": {
                        "nestedReadOnlyStringWithDefault": {
                            "readOnly": true,
                            "type": "string",
                            "default": "default"
                        },
                        "nestedString": {"type": "string"},
                        "nestedInteger": {"type": "integer"},
                        "nestedObject": {
                            "type": "object",
                            "properties": {
                                "deeplyNestedString": {"type": "string"}
                            }
                        },
                        "nestedArrayWithStringItems": {
                            "type": "array",
                            "items": {"type": "string"}
                        },
                        "nestedArrayWithObjectItems": {
                            "type": "array",
                            "items": {"type": "object"}
                        }
                    }
                }
            }
        }))
        .unwrap()
    }

    fn sorted_keys(props: &HashMap<&str, &Schema>) -> Vec<String> {
        let mut keys: Vec<String> = props.keys().map(|k| k.to_string()).collect();
        keys.sort();
        keys
    }

    fn names_and_locations<'a>(matches: &[MatchedProperty<'a>]) -> Vec<(&'a str, Vec<&'a str>)> {
        matches
            .iter()
            .map(|m| (m.name, m.location.clone()))
            .collect()
    }

    #[test]
    fn test_top_level_single_val_properties() {
        let schema = fixture();
        let props = schema.top_level_single_val_properties();
        assert_eq!(
            sorted_keys(&props),
            vec!["topLevelString", "topLevelStringWithTitle"]
        );
    }

    #[test]
    fn test_top_level_object_properties() {
        let schema = fixture();
        let props = schema.top_level_object_properties();
        assert_eq!(sorted_keys(&props), vec!["topLevelObject"]);
        assert!(std::ptr::eq(
            props["topLevelObject"],
            &schema.properties["topLevelObject"]
        ));
    }

    #[test]
    fn test_read_only_with_default_properties() {
        let schema = fixture();
        let props = schema.read_only_with_default_properties();
        assert_eq!(
            names_and_locations(&props),
            vec![
                (
                    "nestedReadOnlyStringWithDefault",
                    vec!["topLevelObject", "nestedReadOnlyStringWithDefault"]
                ),
                (
                    "topLevelReadOnlyStringWithDefault",
                    vec!["topLevelReadOnlyStringWithDefault"]
                ),
            ]
        );
    }

    #[test]
    fn test_constructable_properties() {
        let schema = fixture();
        let props = schema.properties["topLevelObject"].constructable_properties();
        assert_eq!(
            names_and_locations(&props),
            vec![
                (
                    "deeplyNestedString",
                    vec!["nestedObject", "deeplyNestedString"]
                ),
                ("nestedInteger", vec!["nestedInteger"]),
                ("nestedString", vec!["nestedString"]),
            ]
        );
    }

    #[test]
    fn test_constructable_properties_from_root() {
        let schema = fixture();
        let props = schema.constructable_properties();
        let paths: Vec<_> = props.iter().map(|m| m.dotted_path(".")).collect();
        assert_eq!(
            paths,
            vec![
                "topLevelObject.nestedObject.deeplyNestedString",
                "topLevelObject.nestedInteger",
                "topLevelObject.nestedString",
                "topLevelString",
                "topLevelStringWithTitle",
            ]
        );
        assert!(!paths.iter().any(|p| p.contains("ReadOnly")));
    }

    #[test]
    fn test_appendable_properties() {
        let schema = fixture();
        let props = schema.appendable_properties();
        assert_eq!(
            names_and_locations(&props),
            vec![
                (
                    "nestedArrayWithObjectItems",
                    vec!["topLevelObject", "nestedArrayWithObjectItems"]
                ),
                (
                    "topLevelArrayWithObjectItems",
                    vec!["topLevelArrayWithObjectItems"]
                ),
            ]
        );
        assert!(props.iter().all(|m| m.schema.is_type(SchemaType::Array)));
    }

    #[test]
    fn test_read_only_without_default_is_unclassified() {
        let schema = fixture();
        let name = "topLevelReadOnlyString";

        assert!(!schema.top_level_single_val_properties().contains_key(name));
        assert!(!schema.top_level_object_properties().contains_key(name));
        assert!(!schema
            .read_only_with_default_properties()
            .iter()
            .any(|m| m.name == name));
        assert!(!schema.constructable_properties().iter().any(|m| m.name == name));
        assert!(!schema.appendable_properties().iter().any(|m| m.name == name));
    }

    #[test]
    fn test_arrays_are_not_descended() {
        let schema: Schema = serde_json::from_value(json!({
            "properties": {
                "rules": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {
                            "port": {"type": "integer"},
                            "targets": {"type": "array", "items": {"type": "object"}},
                            "id": {"type": "string", "readOnly": true, "default": "x"}
                        }
                    }
                }
            }
        }))
        .unwrap();

        assert!(schema.constructable_properties().is_empty());
        assert!(schema.read_only_with_default_properties().is_empty());
        let appendable = schema.appendable_properties();
        assert_eq!(appendable.len(), 1);
        assert_eq!(appendable[0].name, "rules");
    }

    #[test]
    fn test_malformed_nodes_yield_no_matches() {
        let schema: Schema = serde_json::from_value(json!({
            "properties": {
                "bare": {"type": "object"},
                "noItems": {"type": "array"}
            }
        }))
        .unwrap();

        assert!(schema.constructable_properties().is_empty());
        assert!(schema.appendable_properties().is_empty());
        assert!(schema.read_only_with_default_properties().is_empty());
        assert_eq!(schema.top_level_object_properties().len(), 1);
    }

    #[test]
    fn test_matches_borrow_original_nodes() {
        let schema = fixture();
        let props = schema.read_only_with_default_properties();
        let original = schema
            .property_at(&["topLevelObject", "nestedReadOnlyStringWithDefault"])
            .unwrap();
        assert!(std::ptr::eq(props[0].schema, original));
    }

    #[test]
    fn test_dotted_keys_sort_deterministically() {
        let schema: Schema = serde_json::from_value(json!({
            "properties": {
                "a.b": {
                    "type": "object",
                    "properties": {"n": {"type": "string"}}
                },
                "a": {
                    "type": "object",
                    "properties": {
                        "b": {
                            "type": "object",
                            "properties": {"n": {"type": "string"}}
                        }
                    }
                }
            }
        }))
        .unwrap();

        for _ in 0..16 {
            let rebuilt = schema.clone();
            let locations: Vec<_> = rebuilt
                .constructable_properties()
                .into_iter()
                .map(|m| m.location)
                .collect();
            assert_eq!(locations, vec![vec!["a", "b", "n"], vec!["a.b", "n"]]);
        }
    }

    #[test]
    fn test_duplicate_names_sorted_by_location() {
        let schema: Schema = serde_json::from_value(json!({
            "properties": {
                "spec": {
                    "type": "object",
                    "properties": {"name": {"type": "string"}}
                },
                "metadata": {
                    "type": "object",
                    "properties": {"name": {"type": "string"}}
                },
                "name": {"type": "string"}
            }
        }))
        .unwrap();

        let paths: Vec<_> = schema
            .constructable_properties()
            .iter()
            .map(|m| m.dotted_path("."))
            .collect();
        assert_eq!(paths, vec!["metadata.name", "name", "spec.name"]);
    }
}

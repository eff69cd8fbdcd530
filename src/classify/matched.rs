//! Matched property records produced by recursive classifiers.

use std::cmp::Ordering;

use serde::Serialize;

use crate::models::Schema;

/// A property found by a recursive classification.
///
/// Borrows from the classified tree; records live only as long as the caller
/// keeps them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchedProperty<'a> {
    /// Key within the immediate parent's `properties`.
    pub name: &'a str,
    /// Keys from the traversal root (exclusive) down to `name` (inclusive).
    pub location: Vec<&'a str>,
    /// The matched node.
    pub schema: &'a Schema,
}

impl<'a> MatchedProperty<'a> {
    pub fn new(name: &'a str, location: &[&'a str], schema: &'a Schema) -> Self {
        Self {
            name,
            location: location.to_vec(),
            schema,
        }
    }

    /// Location joined with `separator`, e.g. `spec.replicas`.
    pub fn dotted_path(&self, separator: &str) -> String {
        self.location.join(separator)
    }

    /// Title of the matched node, or its key when untitled.
    pub fn human_name(&self) -> &'a str {
        self.schema.human_name(self.name)
    }

    /// Number of `properties` levels below the traversal root.
    pub fn depth(&self) -> usize {
        self.location.len()
    }
}

/// Publication order: by name, then by the joined location, then segment by
/// segment for keys that themselves contain the join character.
fn compare(a: &MatchedProperty<'_>, b: &MatchedProperty<'_>) -> Ordering {
    a.name
        .cmp(b.name)
        .then_with(|| a.location.join(".").cmp(&b.location.join(".")))
        .then_with(|| a.location.cmp(&b.location))
}

/// Sort matches into their deterministic publication order.
///
/// Runs after traversal has finished; traversal order itself carries no
/// meaning.
pub fn sort_matches(matches: &mut [MatchedProperty<'_>]) {
    matches.sort_by(compare);
}

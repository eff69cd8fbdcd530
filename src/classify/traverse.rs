//! Depth-first walk over named schema properties.

use crate::models::{Schema, SchemaType};

/// Visit every named property reachable from `node` through `object` children.
///
/// The visitor receives the property key, its location from `node` (ending
/// with the key), and the property schema. Object-typed children are visited
/// first and then descended into. `items` are never entered.
pub fn walk<'a, F>(node: &'a Schema, visit: &mut F)
where
    F: FnMut(&'a str, &[&'a str], &'a Schema),
{
    let mut location = Vec::new();
    walk_from(node, &mut location, visit);
}

/// Visit the direct properties of `node` without descending.
pub fn walk_top_level<'a, F>(node: &'a Schema, visit: &mut F)
where
    F: FnMut(&'a str, &[&'a str], &'a Schema),
{
    for (name, child) in &node.properties {
        visit(name, &[name.as_str()], child);
    }
}

fn walk_from<'a, F>(node: &'a Schema, location: &mut Vec<&'a str>, visit: &mut F)
where
    F: FnMut(&'a str, &[&'a str], &'a Schema),
{
    for (name, child) in &node.properties {
        location.push(name);
        visit(name, location, child);
        if child.is_type(SchemaType::Object) {
            walk_from(child, location, visit);
        }
        location.pop();
    }
}

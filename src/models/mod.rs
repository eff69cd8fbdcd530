//! Domain models for resource schemas.

mod schema;

pub use schema::{Schema, SchemaType};

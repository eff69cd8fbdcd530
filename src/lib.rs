//! Propsift - Schema Property Classifier
//!
//! Walks a resource schema tree and buckets its properties for flag and
//! constructor generators.

pub mod classify;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod report;

pub use classify::MatchedProperty;
pub use models::{Schema, SchemaType};
pub use report::{Category, Classification};

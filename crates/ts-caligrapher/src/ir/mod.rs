//! Schema input representation.
//!
//! These types describe an already-parsed API schema. They are produced by the
//! host (or deserialized from JSON) and read by the resolvers; the core never
//! mutates them.

mod model;
mod property;

pub use model::{SchemaField, SchemaModel};
pub use property::SchemaProperty;

use crate::diagnostic::CodegenError;

/// Parses a JSON array of schema models.
pub fn parse_models(json: &str) -> Result<Vec<SchemaModel>, CodegenError> {
    serde_json::from_str(json).map_err(|e| CodegenError::InvalidSchema {
        message: e.to_string(),
    })
}

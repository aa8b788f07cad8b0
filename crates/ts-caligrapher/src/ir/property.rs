//! Schema property types.

use serde::{Deserialize, Serialize};

/// The type of a single schema property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SchemaProperty {
    /// A named schema type such as `integer` or `date-time`. Names outside
    /// the primitive vocabulary are treated as model references.
    Scalar {
        #[serde(rename = "type")]
        type_name: String,
    },
    /// An array of `items`.
    Array { items: Box<SchemaProperty> },
    /// A string-keyed map of `values`.
    Map { values: Box<SchemaProperty> },
    /// An uploaded file.
    File,
    /// A reference to another schema model.
    Model { name: String },
}

impl SchemaProperty {
    pub fn scalar(type_name: impl Into<String>) -> Self {
        SchemaProperty::Scalar {
            type_name: type_name.into(),
        }
    }

    pub fn array(items: SchemaProperty) -> Self {
        SchemaProperty::Array {
            items: Box::new(items),
        }
    }

    pub fn map(values: SchemaProperty) -> Self {
        SchemaProperty::Map {
            values: Box::new(values),
        }
    }

    pub fn model(name: impl Into<String>) -> Self {
        SchemaProperty::Model { name: name.into() }
    }
}

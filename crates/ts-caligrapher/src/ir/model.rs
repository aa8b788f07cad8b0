//! Schema model definitions.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::SchemaProperty;

/// A named field of a schema model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaField {
    pub name: String,
    pub property: SchemaProperty,
}

impl SchemaField {
    pub fn new(name: impl Into<String>, property: SchemaProperty) -> Self {
        Self {
            name: name.into(),
            property,
        }
    }
}

/// A composite type definition from the source API description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemaModel {
    /// Raw schema name, before any resolution.
    pub name: String,
    pub fields: Vec<SchemaField>,
    /// Name of the field that selects the concrete variant, if polymorphic.
    pub discriminator: Option<String>,
    /// Raw name of the model this one extends.
    pub parent: Option<String>,
    /// Raw names of the variants, in declaration order.
    pub children: Vec<String>,
    /// Raw names the host already knows this model references.
    pub imports: BTreeSet<String>,
}

impl SchemaModel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_field(mut self, name: impl Into<String>, property: SchemaProperty) -> Self {
        self.fields.push(SchemaField::new(name, property));
        self
    }

    pub fn with_discriminator(mut self, field: impl Into<String>) -> Self {
        self.discriminator = Some(field.into());
        self
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn with_child(mut self, child: impl Into<String>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn with_import(mut self, name: impl Into<String>) -> Self {
        self.imports.insert(name.into());
        self
    }
}

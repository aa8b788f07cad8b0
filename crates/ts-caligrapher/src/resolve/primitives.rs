//! Schema primitive to TypeScript token mapping.

use std::collections::{BTreeMap, HashMap, HashSet};

/// Built-in schema type mappings.
pub const DEFAULT_TYPE_MAPPINGS: &[(&str, &str)] = &[
    ("string", "string"),
    ("integer", "number"),
    ("long", "bigint"),
    ("number", "number"),
    ("float", "number"),
    ("double", "number"),
    ("boolean", "Boolean"),
    ("array", "Array"),
    ("map", "Map"),
    ("date", "Date"),
    ("date-time", "Date"),
    ("DateTime", "Date"),
    ("password", "string"),
    ("file", "File"),
    ("File", "File"),
    // binary payloads travel as strings
    ("binary", "string"),
    ("byte-array", "string"),
    ("ByteArray", "string"),
    ("UUID", "string"),
    ("object", "object"),
];

/// TypeScript tokens that need no further name resolution.
pub const LANGUAGE_PRIMITIVES: &[&str] = &[
    "boolean", "number", "Boolean", "string", "Map", "tuple", "Array",
    "enum", "any", "void", "object", "bigint", "Date", "File",
];

/// Token used for file properties.
pub const ANY_TYPE: &str = "any";

/// Immutable lookup from schema type names to TypeScript tokens.
#[derive(Debug, Clone)]
pub struct PrimitiveTypeTable {
    mappings: HashMap<String, String>,
    natives: HashSet<&'static str>,
}

impl PrimitiveTypeTable {
    /// Builds the table from the defaults, with `overrides` replacing or
    /// adding entries.
    pub fn new(overrides: &BTreeMap<String, String>) -> Self {
        let mut mappings: HashMap<String, String> = DEFAULT_TYPE_MAPPINGS
            .iter()
            .map(|(schema, token)| (schema.to_string(), token.to_string()))
            .collect();

        for (schema, token) in overrides {
            mappings.insert(schema.clone(), token.clone());
        }

        Self {
            mappings,
            natives: LANGUAGE_PRIMITIVES.iter().copied().collect(),
        }
    }

    /// Returns the mapped token for a schema type, if one exists.
    pub fn lookup(&self, schema_type: &str) -> Option<&str> {
        self.mappings.get(schema_type).map(String::as_str)
    }

    /// Whether `token` is a TypeScript built-in.
    pub fn is_native(&self, token: &str) -> bool {
        self.natives.contains(token)
    }
}

impl Default for PrimitiveTypeTable {
    fn default() -> Self {
        Self::new(&BTreeMap::new())
    }
}

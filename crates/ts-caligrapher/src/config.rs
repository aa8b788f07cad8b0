//! Generator configuration.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use crate::diagnostic::CodegenError;

/// Configuration for the resolution core.
///
/// Keys follow the host generator's additional-properties naming, so a
/// properties bag can be deserialized directly.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CodegenConfig {
    /// Prepended to every model name as `prefix_name`.
    pub model_name_prefix: Option<String>,

    /// Appended to every model name as `name_suffix`.
    pub model_name_suffix: Option<String>,

    /// Emit discriminated parents and children as tagged unions.
    #[serde(deserialize_with = "lenient_bool")]
    pub tagged_unions: bool,

    /// Extra schema type to TypeScript token mappings. Entries replace the
    /// built-in mapping for the same schema type.
    pub type_mappings: BTreeMap<String, String>,
}

impl CodegenConfig {
    /// Reads the recognized options out of a host properties bag.
    ///
    /// Unrecognized keys are ignored.
    pub fn from_properties(properties: &Map<String, Value>) -> Result<Self, CodegenError> {
        serde_json::from_value(Value::Object(properties.clone())).map_err(|e| {
            CodegenError::InvalidConfig {
                message: e.to_string(),
            }
        })
    }

    /// Loads configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self, CodegenError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| CodegenError::io(path, e.to_string()))?;

        serde_json::from_str(&content).map_err(|e| CodegenError::InvalidConfig {
            message: format!("{}: {}", path.display(), e),
        })
    }

    /// The model name prefix, if one is set and non-empty.
    pub fn prefix(&self) -> Option<&str> {
        self.model_name_prefix.as_deref().filter(|p| !p.is_empty())
    }

    /// The model name suffix, if one is set and non-empty.
    pub fn suffix(&self) -> Option<&str> {
        self.model_name_suffix.as_deref().filter(|s| !s.is_empty())
    }
}

/// Accepts any JSON value. Booleans are taken as is; strings are true only
/// when they equal "true" ignoring case; numbers, null and anything else are
/// false.
fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(b) => b,
        Value::String(s) => s.eq_ignore_ascii_case("true"),
        _ => false,
    })
}

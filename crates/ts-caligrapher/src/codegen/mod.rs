//! Render models handed to the template collaborator.
//!
//! Nothing here writes files. The host renders each [`RenderModel`] with its
//! own templates; the field names serialize to the keys those templates use.

mod imports;

pub use imports::{ImportGraphBuilder, TsImport};

use serde::Serialize;

use crate::resolve::{ResolvedField, ResolvedModel};

/// Everything a model template needs for one model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderModel {
    pub classname: String,
    pub filename: String,
    pub vars: Vec<ResolvedField>,
    pub ts_imports: Vec<TsImport>,
    /// Set on every model when tagged-union output is enabled.
    #[serde(rename = "taggedUnions", skip_serializing_if = "std::ops::Not::not")]
    pub tagged_union: bool,
}

impl RenderModel {
    fn new(model: &ResolvedModel, ts_imports: Vec<TsImport>, tagged_union: bool) -> Self {
        Self {
            classname: model.name.clone(),
            filename: model.file_name.clone(),
            vars: model.fields.clone(),
            ts_imports,
            tagged_union,
        }
    }
}

//! Second pass: per-model import lists.

use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use crate::resolve::{NameResolver, ResolvedModel};

use super::RenderModel;

/// One `import { classname } from './filename'` line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TsImport {
    pub classname: String,
    pub filename: String,
}

/// Finalizes imports over a fully resolved model set.
#[derive(Debug, Clone, Copy)]
pub struct ImportGraphBuilder<'a> {
    names: NameResolver<'a>,
    tagged_unions: bool,
}

impl<'a> ImportGraphBuilder<'a> {
    pub fn new(names: NameResolver<'a>, tagged_unions: bool) -> Self {
        Self {
            names,
            tagged_unions,
        }
    }

    /// Adjusts every model's import set and projects it to render models.
    ///
    /// In tagged-union mode a discriminated parent imports each of its
    /// children, and children stop importing their parent. The projection
    /// never lists a model as importing itself. Running this again over the
    /// same models gives the same result.
    ///
    /// Parents are matched by resolved name. If two discriminated models
    /// resolve to the same name, the later one's children win; `validate`
    /// reports such collisions.
    pub fn build_imports(&self, models: &mut [ResolvedModel]) -> Vec<RenderModel> {
        if self.tagged_unions {
            let children_of: HashMap<String, Vec<String>> = models
                .iter()
                .filter(|m| m.has_discriminator() && !m.children.is_empty())
                .map(|m| (m.name.clone(), m.children.clone()))
                .collect();

            for model in models.iter_mut() {
                if let Some(children) = children_of.get(&model.name) {
                    model.imports.extend(children.iter().cloned());
                }
                if let Some(parent) = &model.parent {
                    model.imports.remove(parent);
                }
            }
        }

        models
            .iter()
            .map(|model| {
                let ts_imports = self.to_ts_imports(model);
                debug!(model = %model.name, imports = ts_imports.len(), "built imports");
                RenderModel::new(model, ts_imports, self.tagged_unions)
            })
            .collect()
    }

    fn to_ts_imports(&self, model: &ResolvedModel) -> Vec<TsImport> {
        model
            .imports
            .iter()
            .filter(|import| **import != model.name)
            .map(|import| TsImport {
                classname: import.clone(),
                filename: self.names.resolve_model_filename(import),
            })
            .collect()
    }
}

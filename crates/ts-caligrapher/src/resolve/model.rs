//! First pass: resolving every schema model.

use std::collections::{BTreeSet, HashMap};

use serde::Serialize;
use tracing::debug;

use crate::ir::SchemaModel;

use super::TypeResolver;

/// A field with its resolved TypeScript type. The name is escaped when it
/// is a reserved word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedField {
    pub name: String,
    pub data_type: String,
}

/// A schema model after name and type resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedModel {
    /// Name as it appeared in the schema.
    pub raw_name: String,
    /// Resolved class name.
    pub name: String,
    /// Resolved file name, without extension.
    pub file_name: String,
    pub fields: Vec<ResolvedField>,
    pub discriminator: Option<String>,
    /// Resolved class name of the parent model.
    pub parent: Option<String>,
    /// Resolved class names of the variants, in declaration order.
    pub children: Vec<String>,
    /// Resolved class names this model references.
    pub imports: BTreeSet<String>,
}

impl ResolvedModel {
    pub fn has_discriminator(&self) -> bool {
        self.discriminator.is_some()
    }
}

/// Resolves names, field types and imports for every model in the set.
///
/// Children are the declared ones followed by every model that names this one
/// as its parent, so parent/child links are complete only once the whole set
/// has been seen. Import building must wait for this pass to finish.
pub fn resolve_models(schema: &[SchemaModel], types: &TypeResolver<'_>) -> Vec<ResolvedModel> {
    let names = types.names();

    let mut derived_children: HashMap<&str, Vec<&str>> = HashMap::new();
    for model in schema {
        if let Some(parent) = &model.parent {
            derived_children
                .entry(parent.as_str())
                .or_default()
                .push(model.name.as_str());
        }
    }

    schema
        .iter()
        .map(|model| {
            let fields = model
                .fields
                .iter()
                .map(|field| ResolvedField {
                    name: names.resolve_var_name(&field.name),
                    data_type: types.resolve_type(&field.property),
                })
                .collect();

            let mut imports = BTreeSet::new();
            for declared in &model.imports {
                let resolved = types.resolve_scalar(declared);
                if !is_builtin(types, declared, &resolved) {
                    imports.insert(resolved);
                }
            }
            for field in &model.fields {
                types.collect_imports(&field.property, &mut imports);
            }

            let parent = model.parent.as_deref().map(|p| names.resolve_model_name(p));
            if let Some(parent) = &parent {
                imports.insert(parent.clone());
            }

            let mut children: Vec<String> = Vec::new();
            let declared = model.children.iter().map(String::as_str);
            let linked = derived_children
                .get(model.name.as_str())
                .into_iter()
                .flatten()
                .copied();
            for child in declared.chain(linked) {
                let resolved = names.resolve_model_name(child);
                if !children.contains(&resolved) {
                    children.push(resolved);
                }
            }

            let resolved = ResolvedModel {
                raw_name: model.name.clone(),
                name: names.resolve_model_name(&model.name),
                file_name: names.resolve_model_filename(&model.name),
                fields,
                discriminator: model.discriminator.clone(),
                parent,
                children,
                imports,
            };
            debug!(
                model = %resolved.name,
                imports = resolved.imports.len(),
                children = resolved.children.len(),
                "resolved model"
            );
            resolved
        })
        .collect()
}

/// Declared imports that name a built-in type are dropped rather than turned
/// into phantom `Model*` classes.
fn is_builtin(types: &TypeResolver<'_>, declared: &str, resolved: &str) -> bool {
    types.is_native(resolved) || types.is_native(declared)
}

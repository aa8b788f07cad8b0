//! Name collision and reference checks.

use std::collections::{HashMap, HashSet};

use crate::diagnostic::ResolutionWarning;
use crate::ir::SchemaModel;
use crate::resolve::ResolvedModel;

/// Distinct raw names that land on the same class name.
pub fn check_name_collisions(models: &[ResolvedModel]) -> Vec<ResolutionWarning> {
    let mut seen: HashMap<&str, &str> = HashMap::new();
    let mut warnings = Vec::new();

    for model in models {
        match seen.get(model.name.as_str()) {
            Some(first) if *first != model.raw_name => {
                warnings.push(ResolutionWarning::NameCollision {
                    resolved: model.name.clone(),
                    first: first.to_string(),
                    second: model.raw_name.clone(),
                });
            }
            Some(_) => {}
            None => {
                seen.insert(&model.name, &model.raw_name);
            }
        }
    }
    warnings
}

/// Parent and child links that point outside the set.
pub fn check_references(schema: &[SchemaModel]) -> Vec<ResolutionWarning> {
    let names: HashSet<&str> = schema.iter().map(|m| m.name.as_str()).collect();
    let known = &names;

    schema
        .iter()
        .flat_map(|model| {
            model
                .parent
                .iter()
                .chain(model.children.iter())
                .filter(move |reference| !known.contains(reference.as_str()))
                .map(move |reference| ResolutionWarning::UnknownModel {
                    model: model.name.clone(),
                    reference: reference.clone(),
                })
        })
        .collect()
}

/// Discriminators that do not name one of the model's own fields.
pub fn check_discriminators(schema: &[SchemaModel]) -> Vec<ResolutionWarning> {
    schema
        .iter()
        .filter_map(|model| {
            let discriminator = model.discriminator.as_ref()?;
            if model.fields.iter().any(|f| &f.name == discriminator) {
                return None;
            }
            Some(ResolutionWarning::UnknownDiscriminator {
                model: model.name.clone(),
                discriminator: discriminator.clone(),
            })
        })
        .collect()
}

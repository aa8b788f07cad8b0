//! Advisory checks over a resolved model set.

mod links;

use tracing::warn;

use crate::diagnostic::ResolutionWarning;
use crate::ir::SchemaModel;
use crate::resolve::ResolvedModel;

/// Collects warnings about the model set and logs each one.
///
/// `resolved` must be the output of resolving `schema`, in the same order.
pub fn check_models(schema: &[SchemaModel], resolved: &[ResolvedModel]) -> Vec<ResolutionWarning> {
    let mut warnings = links::check_name_collisions(resolved);
    warnings.extend(links::check_references(schema));
    warnings.extend(links::check_discriminators(schema));

    for warning in &warnings {
        warn!("{}", warning);
    }
    warnings
}

//! Advisory findings about a model set.
#![allow(unused_assignments)]

use miette::Diagnostic;
use thiserror::Error;

/// A non-fatal problem noticed while resolving a model set.
///
/// Generation always proceeds; these are reported so the host can surface
/// schema mistakes that the fallback rules would otherwise hide.
#[allow(unused_assignments)]
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum ResolutionWarning {
    /// Two distinct schema names resolve to the same identifier.
    #[error("models '{first}' and '{second}' both resolve to '{resolved}'")]
    #[diagnostic(
        code(caligrapher::validate::name_collision),
        severity(Warning),
        help("Rename one of the models; the later one shadows the earlier in imports")
    )]
    NameCollision {
        resolved: String,
        first: String,
        second: String,
    },

    /// A parent or child link names a model that is not in the set.
    #[error("model '{model}' references unknown model '{reference}'")]
    #[diagnostic(code(caligrapher::validate::unknown_model), severity(Warning))]
    UnknownModel {
        model: String,
        reference: String,
    },

    /// The discriminator is not one of the model's fields.
    #[error("model '{model}' discriminates on '{discriminator}', which is not one of its fields")]
    #[diagnostic(code(caligrapher::validate::unknown_discriminator), severity(Warning))]
    UnknownDiscriminator {
        model: String,
        discriminator: String,
    },
}

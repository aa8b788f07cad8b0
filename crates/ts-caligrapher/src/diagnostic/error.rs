//! Codegen error types.
#![allow(unused_assignments)]

use std::path::PathBuf;
use miette::Diagnostic;
use thiserror::Error;

/// Errors raised by the plumbing around the resolution core.
///
/// Name and type resolution never fail; these only cover reading
/// configuration and schema input.
#[allow(unused_assignments)]
#[derive(Error, Diagnostic, Debug)]
pub enum CodegenError {
    // =========================================================================
    // IO Errors
    // =========================================================================
    #[error("Failed to read file '{path}': {message}")]
    #[diagnostic(code(caligrapher::io::read_error))]
    IoError {
        path: PathBuf,
        message: String,
    },

    // =========================================================================
    // Input Errors
    // =========================================================================
    #[error("Invalid generator configuration: {message}")]
    #[diagnostic(
        code(caligrapher::config::invalid),
        help("Recognized options: modelNamePrefix, modelNameSuffix, taggedUnions, typeMappings")
    )]
    InvalidConfig {
        message: String,
    },

    #[error("Invalid schema model set: {message}")]
    #[diagnostic(
        code(caligrapher::schema::invalid),
        help("Properties are tagged with 'kind', one of: scalar, array, map, file, model")
    )]
    InvalidSchema {
        message: String,
    },
}

impl CodegenError {
    /// Creates an IO error.
    pub fn io(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::IoError {
            path: path.into(),
            message: message.into(),
        }
    }
}

//! Diagnostic types for error reporting.

mod error;
mod warning;

pub use error::CodegenError;
pub use warning::ResolutionWarning;

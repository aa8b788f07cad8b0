//! Type and name resolution.
//!
//! The lookup tables are built once from configuration and shared by
//! reference; the resolvers are cheap `Copy` views over them.

mod case;
mod model;
mod names;
mod primitives;
mod reserved;
mod types;

pub use case::{camelize, sanitize_name};
pub use model::{resolve_models, ResolvedField, ResolvedModel};
pub use names::NameResolver;
pub use primitives::{PrimitiveTypeTable, ANY_TYPE, DEFAULT_TYPE_MAPPINGS, LANGUAGE_PRIMITIVES};
pub use reserved::{ReservedWords, RESERVED_WORDS};
pub use types::TypeResolver;

use crate::config::CodegenConfig;

/// The immutable lookup tables used by every resolver.
#[derive(Debug, Clone)]
pub struct TypeTables {
    pub primitives: PrimitiveTypeTable,
    pub reserved: ReservedWords,
}

impl TypeTables {
    pub fn new(config: &CodegenConfig) -> Self {
        Self {
            primitives: PrimitiveTypeTable::new(&config.type_mappings),
            reserved: ReservedWords::new(),
        }
    }
}

impl Default for TypeTables {
    fn default() -> Self {
        Self::new(&CodegenConfig::default())
    }
}

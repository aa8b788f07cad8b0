//! # Caligrapher
//!
//! Type and name resolution for generating TypeScript server stubs from an
//! API schema. Given schema models (fields, parents, children,
//! discriminators) it works out class names, file names, field types and
//! per-model import lists. Rendering templates and writing files are left to
//! the host.
//!
//! ## Architecture
//!
//! ```text
//! Schema models
//!        │
//!        ▼
//! ┌──────────────┐
//! │   Resolve    │  Names, field types, raw imports
//! │  (phase 1)   │
//! └──────┬───────┘
//!        │  every model resolved
//!        ▼
//! ┌──────────────┐
//! │   Validate   │  Collisions & dangling links (advisory)
//! └──────┬───────┘
//!        │
//!        ▼
//! ┌──────────────┐
//! │   Imports    │  Tagged-union rewiring, tsImports
//! │  (phase 2)   │
//! └──────┬───────┘
//!        │
//!        ▼
//!  Render models
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use ts_caligrapher::{Caligrapher, CodegenConfig, SchemaModel, SchemaProperty};
//!
//! let config = CodegenConfig {
//!     tagged_unions: true,
//!     ..Default::default()
//! };
//! let caligrapher = Caligrapher::new(config);
//!
//! let schema = vec![
//!     SchemaModel::new("Pet")
//!         .with_field("petType", SchemaProperty::scalar("string"))
//!         .with_discriminator("petType"),
//!     SchemaModel::new("Dog").with_parent("Pet"),
//! ];
//!
//! let generated = caligrapher.generate(&schema);
//! assert_eq!(generated.models[0].ts_imports[0].classname, "Dog");
//! ```

pub mod codegen;
pub mod config;
pub mod diagnostic;
pub mod ir;
pub mod resolve;
pub mod validate;

pub use codegen::{ImportGraphBuilder, RenderModel, TsImport};
pub use config::CodegenConfig;
pub use diagnostic::{CodegenError, ResolutionWarning};
pub use ir::{SchemaField, SchemaModel, SchemaProperty};
pub use resolve::{NameResolver, ResolvedField, ResolvedModel, TypeResolver, TypeTables};

/// Runs the two resolution phases with one configuration.
///
/// The lookup tables are built once in [`Caligrapher::new`] and never change
/// afterwards.
#[derive(Debug, Clone)]
pub struct Caligrapher {
    config: CodegenConfig,
    tables: TypeTables,
}

/// Output of a full [`Caligrapher::generate`] run.
#[derive(Debug)]
pub struct Generated {
    pub models: Vec<RenderModel>,
    pub warnings: Vec<ResolutionWarning>,
}

impl Caligrapher {
    pub fn new(config: CodegenConfig) -> Self {
        let tables = TypeTables::new(&config);
        Self { config, tables }
    }

    pub fn config(&self) -> &CodegenConfig {
        &self.config
    }

    pub fn names(&self) -> NameResolver<'_> {
        NameResolver::new(
            &self.tables.primitives,
            &self.tables.reserved,
            self.config.prefix(),
            self.config.suffix(),
        )
    }

    pub fn types(&self) -> TypeResolver<'_> {
        TypeResolver::new(&self.tables.primitives, self.names())
    }

    pub fn resolve_model_name(&self, raw: &str) -> String {
        self.names().resolve_model_name(raw)
    }

    pub fn resolve_model_filename(&self, raw: &str) -> String {
        self.names().resolve_model_filename(raw)
    }

    pub fn resolve_type(&self, property: &SchemaProperty) -> String {
        self.types().resolve_type(property)
    }

    /// Phase 1: resolves every model's names, field types and imports.
    pub fn resolve(&self, schema: &[SchemaModel]) -> Vec<ResolvedModel> {
        resolve::resolve_models(schema, &self.types())
    }

    /// Advisory checks over a phase 1 result.
    pub fn check(&self, schema: &[SchemaModel], resolved: &[ResolvedModel]) -> Vec<ResolutionWarning> {
        validate::check_models(schema, resolved)
    }

    /// Phase 2: finalizes imports over the complete phase 1 result.
    pub fn build_imports(&self, models: &mut [ResolvedModel]) -> Vec<RenderModel> {
        ImportGraphBuilder::new(self.names(), self.config.tagged_unions).build_imports(models)
    }

    /// Runs both phases in order.
    pub fn generate(&self, schema: &[SchemaModel]) -> Generated {
        let mut resolved = self.resolve(schema);
        let warnings = self.check(schema, &resolved);
        let models = self.build_imports(&mut resolved);
        Generated { models, warnings }
    }
}

impl Default for Caligrapher {
    fn default() -> Self {
        Self::new(CodegenConfig::default())
    }
}

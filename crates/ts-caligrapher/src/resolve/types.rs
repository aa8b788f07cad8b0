//! TypeScript type expressions for schema properties.

use std::collections::BTreeSet;

use crate::ir::SchemaProperty;

use super::primitives::ANY_TYPE;
use super::{NameResolver, PrimitiveTypeTable};

/// Maps schema properties to TypeScript type expressions.
#[derive(Debug, Clone, Copy)]
pub struct TypeResolver<'a> {
    primitives: &'a PrimitiveTypeTable,
    names: NameResolver<'a>,
}

impl<'a> TypeResolver<'a> {
    pub fn new(primitives: &'a PrimitiveTypeTable, names: NameResolver<'a>) -> Self {
        Self { primitives, names }
    }

    /// Resolves a property to its TypeScript type expression.
    ///
    /// Every property resolves to something: scalar names outside the
    /// primitive table are taken to be model references.
    pub fn resolve_type(&self, property: &SchemaProperty) -> String {
        match property {
            SchemaProperty::Scalar { type_name } => self.resolve_scalar(type_name),
            SchemaProperty::Array { items } => {
                format!("{}<{}>", self.resolve_scalar("array"), self.resolve_type(items))
            }
            SchemaProperty::Map { values } => {
                format!("Map<string, {}>", self.resolve_type(values))
            }
            SchemaProperty::File => ANY_TYPE.to_string(),
            SchemaProperty::Model { name } => self.names.resolve_model_name(name),
        }
    }

    /// Resolves a bare schema type name.
    pub fn resolve_scalar(&self, type_name: &str) -> String {
        match self.primitives.lookup(type_name) {
            Some(token) if self.primitives.is_native(token) => token.to_string(),
            Some(token) => self.names.resolve_model_name(token),
            None => self.names.resolve_model_name(type_name),
        }
    }

    /// Adds every model class name reachable from `property` to `imports`.
    ///
    /// Built-in tokens are skipped; container types contribute the models
    /// they hold.
    pub fn collect_imports(&self, property: &SchemaProperty, imports: &mut BTreeSet<String>) {
        match property {
            SchemaProperty::Scalar { type_name } => {
                let resolved = self.resolve_scalar(type_name);
                if !self.is_native(&resolved) {
                    imports.insert(resolved);
                }
            }
            SchemaProperty::Array { items } => self.collect_imports(items, imports),
            SchemaProperty::Map { values } => self.collect_imports(values, imports),
            SchemaProperty::File => {}
            SchemaProperty::Model { name } => {
                imports.insert(self.names.resolve_model_name(name));
            }
        }
    }

    /// Whether `token` is a TypeScript built-in.
    pub fn is_native(&self, token: &str) -> bool {
        self.primitives.is_native(token)
    }

    pub fn names(&self) -> NameResolver<'a> {
        self.names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    use crate::resolve::ReservedWords;

    fn with_types<T>(overrides: &[(&str, &str)], f: impl FnOnce(TypeResolver<'_>) -> T) -> T {
        let overrides: BTreeMap<String, String> = overrides
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let primitives = PrimitiveTypeTable::new(&overrides);
        let reserved = ReservedWords::new();
        let names = NameResolver::new(&primitives, &reserved, None, None);
        f(TypeResolver::new(&primitives, names))
    }

    fn scalar(name: &str) -> SchemaProperty {
        SchemaProperty::scalar(name)
    }

    #[test]
    fn test_primitive_types() {
        with_types(&[], |types| {
            assert_eq!(types.resolve_type(&scalar("integer")), "number");
            assert_eq!(types.resolve_type(&scalar("long")), "bigint");
            assert_eq!(types.resolve_type(&scalar("boolean")), "Boolean");
            assert_eq!(types.resolve_type(&scalar("string")), "string");
            assert_eq!(types.resolve_type(&scalar("binary")), "string");
            assert_eq!(types.resolve_type(&scalar("date-time")), "Date");
            assert_eq!(types.resolve_type(&scalar("UUID")), "string");
            assert_eq!(types.resolve_type(&scalar("object")), "object");
            assert_eq!(types.resolve_type(&scalar("file")), "File");
        });
    }

    #[test]
    fn test_unknown_scalar_is_model_reference() {
        with_types(&[], |types| {
            assert_eq!(types.resolve_type(&scalar("Pet")), "Pet");
            assert_eq!(types.resolve_type(&scalar("phone_number")), "PhoneNumber");
            assert_eq!(types.resolve_type(&scalar("datetime")), "Datetime");
            assert_eq!(types.resolve_type(&scalar("return")), "ModelReturn");
            for name in ["Pet", "order-item", "200Response", "class"] {
                assert_eq!(
                    types.resolve_type(&scalar(name)),
                    types.names().resolve_model_name(name)
                );
            }
        });
    }

    #[test]
    fn test_mapped_non_native_token_is_named() {
        with_types(&[("date-time", "moment_date")], |types| {
            assert_eq!(types.resolve_type(&scalar("date-time")), "MomentDate");
            assert_eq!(types.resolve_type(&scalar("date")), "Date");
        });
    }

    #[test]
    fn test_array_type() {
        with_types(&[], |types| {
            let arr = SchemaProperty::array(scalar("integer"));
            assert_eq!(types.resolve_type(&arr), "Array<number>");
        });
    }

    #[test]
    fn test_map_type() {
        with_types(&[], |types| {
            let map = SchemaProperty::map(scalar("string"));
            assert_eq!(types.resolve_type(&map), "Map<string, string>");
        });
    }

    #[test]
    fn test_nested_containers() {
        with_types(&[], |types| {
            let nested = SchemaProperty::array(SchemaProperty::map(SchemaProperty::array(
                SchemaProperty::model("pet"),
            )));
            assert_eq!(types.resolve_type(&nested), "Array<Map<string, Array<Pet>>>");
        });
    }

    #[test]
    fn test_file_and_model() {
        with_types(&[], |types| {
            assert_eq!(types.resolve_type(&SchemaProperty::File), "any");
            assert_eq!(types.resolve_type(&SchemaProperty::model("200Response")), "Model200Response");
        });
    }

    #[test]
    fn test_collect_imports() {
        with_types(&[], |types| {
            let mut imports = BTreeSet::new();
            types.collect_imports(&SchemaProperty::array(SchemaProperty::model("tag")), &mut imports);
            types.collect_imports(&SchemaProperty::map(scalar("Category")), &mut imports);
            types.collect_imports(&scalar("string"), &mut imports);
            types.collect_imports(&SchemaProperty::File, &mut imports);

            let imports: Vec<_> = imports.into_iter().collect();
            assert_eq!(imports, vec!["Category".to_string(), "Tag".to_string()]);
        });
    }
}

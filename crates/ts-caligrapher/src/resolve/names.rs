//! Model name resolution.

use tracing::{debug, warn};

use super::case::{camelize, sanitize_name};
use super::{PrimitiveTypeTable, ReservedWords};

/// Turns raw schema names into legal TypeScript class names.
#[derive(Debug, Clone, Copy)]
pub struct NameResolver<'a> {
    primitives: &'a PrimitiveTypeTable,
    reserved: &'a ReservedWords,
    prefix: Option<&'a str>,
    suffix: Option<&'a str>,
}

impl<'a> NameResolver<'a> {
    pub fn new(
        primitives: &'a PrimitiveTypeTable,
        reserved: &'a ReservedWords,
        prefix: Option<&'a str>,
        suffix: Option<&'a str>,
    ) -> Self {
        Self {
            primitives,
            reserved,
            prefix: prefix.filter(|p| !p.is_empty()),
            suffix: suffix.filter(|s| !s.is_empty()),
        }
    }

    /// Resolves a raw schema name to a model class name.
    ///
    /// The name is sanitized and decorated with the configured prefix and
    /// suffix. A result that would be a reserved word, start with a digit, or
    /// shadow a built-in type is rewritten to `Model<Name>`; anything else is
    /// camelized.
    pub fn resolve_model_name(&self, raw: &str) -> String {
        let mut name = sanitize_name(raw);

        if let Some(prefix) = self.prefix {
            name = format!("{}_{}", prefix, name);
        }
        if let Some(suffix) = self.suffix {
            name = format!("{}_{}", name, suffix);
        }

        if self.reserved.contains(&name) {
            let renamed = camelize(&format!("model_{}", name));
            warn!(name = %name, renamed = %renamed, "reserved word cannot be used as model name");
            return renamed;
        }

        if name.is_empty() || name.starts_with(|c: char| c.is_ascii_digit()) {
            let renamed = camelize(&format!("model_{}", name));
            warn!(name = %name, renamed = %renamed, "model name must start with a letter");
            return renamed;
        }

        if self.primitives.is_native(&name) {
            let renamed = camelize(&format!("model_{}", name));
            warn!(name = %name, renamed = %renamed, "model name matches a built-in type");
            return renamed;
        }

        let resolved = camelize(&name);
        debug!(raw = %raw, resolved = %resolved, "resolved model name");
        resolved
    }

    /// Escapes a property or variable name that is a reserved word by
    /// prefixing an underscore. Other names are returned unchanged.
    pub fn resolve_var_name(&self, name: &str) -> String {
        if self.reserved.contains(name) {
            let escaped = format!("_{}", name);
            debug!(name = %name, escaped = %escaped, "escaped reserved variable name");
            return escaped;
        }
        name.to_string()
    }

    /// Resolves the file name (without extension) for a model.
    pub fn resolve_model_filename(&self, raw: &str) -> String {
        self.resolve_model_name(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::RESERVED_WORDS;

    fn with_names<T>(prefix: Option<&str>, suffix: Option<&str>, f: impl FnOnce(NameResolver<'_>) -> T) -> T {
        let primitives = PrimitiveTypeTable::default();
        let reserved = ReservedWords::new();
        f(NameResolver::new(&primitives, &reserved, prefix, suffix))
    }

    #[test]
    fn test_camelizes_plain_names() {
        with_names(None, None, |names| {
            assert_eq!(names.resolve_model_name("phone_number"), "PhoneNumber");
            assert_eq!(names.resolve_model_name("pet"), "Pet");
            assert_eq!(names.resolve_model_name("order-item"), "OrderItem");
        });
    }

    #[test]
    fn test_reserved_words() {
        with_names(None, None, |names| {
            assert_eq!(names.resolve_model_name("return"), "ModelReturn");
            for word in RESERVED_WORDS {
                let resolved = names.resolve_model_name(word);
                assert!(resolved.starts_with("Model"), "{} -> {}", word, resolved);
                assert_ne!(&resolved, word);
            }
        });
    }

    #[test]
    fn test_reserved_ignores_case() {
        with_names(None, None, |names| {
            assert_eq!(names.resolve_model_name("Class"), "ModelClass");
            assert_eq!(names.resolve_model_name("String"), "ModelString");
        });
    }

    #[test]
    fn test_leading_digit() {
        with_names(None, None, |names| {
            let resolved = names.resolve_model_name("200Response");
            assert_eq!(resolved, "Model200Response");
            assert!(!resolved.starts_with(|c: char| c.is_ascii_digit()));
        });
    }

    #[test]
    fn test_native_primitive_collision() {
        with_names(None, None, |names| {
            assert_eq!(names.resolve_model_name("Date"), "ModelDate");
            assert_eq!(names.resolve_model_name("object"), "ModelObject");
            assert_eq!(names.resolve_model_name("Array"), "ModelArray");
            assert_eq!(names.resolve_model_name("bigint"), "ModelBigint");
        });
    }

    #[test]
    fn test_lowercase_builtin_names_are_camelized() {
        // the built-in check compares the decorated name before camelizing
        with_names(None, None, |names| {
            assert_eq!(names.resolve_model_name("date"), "Date");
            assert_eq!(names.resolve_model_name("array"), "Array");
            assert_eq!(names.resolve_model_name("file"), "File");
        });
    }

    #[test]
    fn test_var_names() {
        with_names(Some("api"), None, |names| {
            assert_eq!(names.resolve_var_name("delete"), "_delete");
            assert_eq!(names.resolve_var_name("Class"), "_Class");
            assert_eq!(names.resolve_var_name("petType"), "petType");
            assert_eq!(names.resolve_var_name("deleted"), "deleted");
        });
    }

    #[test]
    fn test_empty_name_is_still_legal() {
        with_names(None, None, |names| {
            assert_eq!(names.resolve_model_name(""), "Model");
            assert_eq!(names.resolve_model_name("!!"), "Model");
        });
    }

    #[test]
    fn test_prefix_and_suffix() {
        with_names(Some("api"), Some("dto"), |names| {
            assert_eq!(names.resolve_model_name("pet"), "ApiPetDto");
            // decoration happens before the reserved word check
            assert_eq!(names.resolve_model_name("return"), "ApiReturnDto");
        });
        with_names(Some("v2"), None, |names| {
            assert_eq!(names.resolve_model_name("pet"), "V2Pet");
        });
        with_names(Some("2"), None, |names| {
            assert_eq!(names.resolve_model_name("pet"), "Model2Pet");
        });
    }

    #[test]
    fn test_empty_decoration_is_ignored() {
        with_names(Some(""), Some(""), |names| {
            assert_eq!(names.resolve_model_name("pet"), "Pet");
        });
    }

    #[test]
    fn test_canonical_names_are_fixed_points() {
        with_names(None, None, |names| {
            for name in ["Pet", "PhoneNumber", "ModelReturn", "Model200Response", "HTTPStatus"] {
                assert_eq!(names.resolve_model_name(name), name);
                let once = names.resolve_model_name(name);
                assert_eq!(names.resolve_model_name(&once), once);
            }
        });
    }

    #[test]
    fn test_filename_matches_model_name() {
        with_names(Some("api"), None, |names| {
            for raw in ["pet", "return", "200Response", "Date"] {
                assert_eq!(names.resolve_model_filename(raw), names.resolve_model_name(raw));
            }
        });
    }

    #[test]
    #[tracing_test::traced_test]
    fn test_rewrites_are_logged() {
        with_names(None, None, |names| {
            assert_eq!(names.resolve_model_name("typeof"), "ModelTypeof");
        });
        assert!(logs_contain("reserved word cannot be used as model name"));
    }
}

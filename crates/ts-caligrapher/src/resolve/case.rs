//! Identifier sanitizing and casing.

/// Strips characters that cannot appear in a TypeScript identifier.
///
/// Bracket and grouping openers and separators become underscores so the
/// word boundary survives for [`camelize`]; closers are dropped. Anything
/// else outside `[A-Za-z0-9_]` is removed.
pub fn sanitize_name(name: &str) -> String {
    let name = name.replace("[]", "");
    name.chars()
        .filter_map(|c| match c {
            '[' | '(' | '.' | '-' | ' ' => Some('_'),
            c if c.is_ascii_alphanumeric() || c == '_' => Some(c),
            _ => None,
        })
        .collect()
}

/// Converts a snake_case name to PascalCase, leaving the casing inside each
/// word untouched.
///
/// `phone_number` becomes `PhoneNumber`, `model_200Response` becomes
/// `Model200Response`, and names already in PascalCase are returned as is.
pub fn camelize(s: &str) -> String {
    s.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => first.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize() {
        assert_eq!(sanitize_name("Pet"), "Pet");
        assert_eq!(sanitize_name("my-model"), "my_model");
        assert_eq!(sanitize_name("com.example.Pet"), "com_example_Pet");
        assert_eq!(sanitize_name("List[Pet]"), "List_Pet");
        assert_eq!(sanitize_name("Pet[]"), "Pet");
        assert_eq!(sanitize_name("Map(String)"), "Map_String");
        assert_eq!(sanitize_name("pet name"), "pet_name");
        assert_eq!(sanitize_name("$ref#/Pet!"), "refPet");
        assert_eq!(sanitize_name("é"), "");
    }

    #[test]
    fn test_camelize() {
        assert_eq!(camelize("phone_number"), "PhoneNumber");
        assert_eq!(camelize("model_return"), "ModelReturn");
        assert_eq!(camelize("model_200Response"), "Model200Response");
        assert_eq!(camelize("PhoneNumber"), "PhoneNumber");
        assert_eq!(camelize("HTTPResponse"), "HTTPResponse");
        assert_eq!(camelize("_leading__double_"), "LeadingDouble");
        assert_eq!(camelize("model_"), "Model");
        assert_eq!(camelize(""), "");
    }
}

//! TypeScript reserved words.

use std::collections::HashSet;

pub const RESERVED_WORDS: &[&str] = &[
    "break", "case", "catch", "class", "const", "continue", "debugger",
    "default", "delete", "do", "else", "enum", "export", "extends", "false",
    "finally", "for", "function", "if", "import", "in", "instanceof", "new",
    "null", "return", "super", "switch", "this", "throw", "true", "try",
    "typeof", "var", "void", "while", "with", "as", "implements",
    "interface", "let", "package", "private", "protected", "public",
    "static", "yield", "any", "boolean", "constructor", "declare", "get",
    "module", "require", "number", "set", "string", "symbol", "type",
    "from", "of", "namespace", "async", "await",
];

/// Identifiers that cannot be used as bare model names.
///
/// Matching ignores case, so `Class` and `STRING` are reserved too.
#[derive(Debug, Clone)]
pub struct ReservedWords {
    words: HashSet<&'static str>,
}

impl ReservedWords {
    pub fn new() -> Self {
        Self {
            words: RESERVED_WORDS.iter().copied().collect(),
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word.to_ascii_lowercase().as_str())
    }
}

impl Default for ReservedWords {
    fn default() -> Self {
        Self::new()
    }
}

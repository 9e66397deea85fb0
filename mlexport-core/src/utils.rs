//! Shared identifier helpers for the Java target.

/// Reserved words of the target language, including literals.
pub const JAVA_KEYWORDS: &[&str] = &[
    "abstract",
    "assert",
    "boolean",
    "break",
    "byte",
    "case",
    "catch",
    "char",
    "class",
    "const",
    "continue",
    "default",
    "do",
    "double",
    "else",
    "enum",
    "extends",
    "false",
    "final",
    "finally",
    "float",
    "for",
    "goto",
    "if",
    "implements",
    "import",
    "instanceof",
    "int",
    "interface",
    "long",
    "native",
    "new",
    "null",
    "package",
    "private",
    "protected",
    "public",
    "return",
    "short",
    "static",
    "strictfp",
    "super",
    "switch",
    "synchronized",
    "this",
    "throw",
    "throws",
    "transient",
    "true",
    "try",
    "void",
    "volatile",
    "while",
];

/// Check whether `s` is a reserved word.
pub fn is_java_keyword(s: &str) -> bool {
    JAVA_KEYWORDS.contains(&s)
}

/// Explain why `s` is not a usable identifier, or `None` if it is one.
///
/// Keywords are not reported here; check them with [`is_java_keyword`].
pub fn identifier_error(s: &str) -> Option<&'static str> {
    let is_part = |c: char| c.is_alphanumeric() || c == '_' || c == '$';
    match s.chars().next() {
        None => Some("identifier cannot be empty"),
        Some(c) if c.is_ascii_digit() => Some("identifier cannot start with a digit"),
        Some(c) if !(c.is_alphabetic() || c == '_' || c == '$') => {
            Some("identifier must start with a letter, '_' or '$'")
        }
        Some(_) if !s.chars().all(is_part) => Some("identifier contains invalid characters"),
        Some(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_error() {
        assert_eq!(identifier_error("WEIGHTS"), None);
        assert_eq!(identifier_error("_tmp$1"), None);
        assert_eq!(identifier_error(""), Some("identifier cannot be empty"));
        assert_eq!(
            identifier_error("1abc"),
            Some("identifier cannot start with a digit")
        );
        assert_eq!(
            identifier_error("my-name"),
            Some("identifier contains invalid characters")
        );
        assert!(identifier_error("-x").is_some());
    }

    #[test]
    fn test_keywords() {
        assert!(is_java_keyword("class"));
        assert!(is_java_keyword("null"));
        assert!(!is_java_keyword("Class"));
    }
}

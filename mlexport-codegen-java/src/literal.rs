//! Java literal rendering.

/// Render `s` as a double-quoted Java string literal.
///
/// Backslash, double quote, newline, carriage return and tab are escaped.
/// Everything else is copied unchanged.
///
/// ```
/// use mlexport_codegen_java::string_literal;
///
/// assert_eq!(string_literal("3.14"), "\"3.14\"");
/// assert_eq!(string_literal("say \"hi\""), "\"say \\\"hi\\\"\"");
/// ```
pub fn string_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain() {
        assert_eq!(
            string_literal("?:B->SIGMOID->4:B->SIGMOID->?"),
            "\"?:B->SIGMOID->4:B->SIGMOID->?\""
        );
        assert_eq!(string_literal(""), "\"\"");
    }

    #[test]
    fn test_escapes() {
        assert_eq!(string_literal("a\\b"), "\"a\\\\b\"");
        assert_eq!(string_literal("line\nnext"), "\"line\\nnext\"");
        assert_eq!(string_literal("tab\there"), "\"tab\\there\"");
        assert_eq!(string_literal("cr\r"), "\"cr\\r\"");
        assert_eq!(string_literal("naïve 'x'"), "\"naïve 'x'\"");
    }
}

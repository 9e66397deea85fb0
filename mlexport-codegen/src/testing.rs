//! Test utilities for code generators.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

/// Assert that two strings are equal, with a nice diff on failure.
pub fn assert_content_eq(expected: &str, actual: &str) {
    if expected != actual {
        // Simple line-by-line diff
        let expected_lines: Vec<&str> = expected.lines().collect();
        let actual_lines: Vec<&str> = actual.lines().collect();

        let mut diff = String::new();
        let max_lines = expected_lines.len().max(actual_lines.len());

        for i in 0..max_lines {
            let exp = expected_lines.get(i).copied().unwrap_or("<missing>");
            let act = actual_lines.get(i).copied().unwrap_or("<missing>");

            if exp != act {
                diff.push_str(&format!("Line {}:\n", i + 1));
                diff.push_str(&format!("  expected: {}\n", exp));
                diff.push_str(&format!("  actual:   {}\n", act));
            }
        }

        panic!("Content mismatch:\n{}", diff);
    }
}

/// A matched pair of block lines found by [`block_pairs`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockPair {
    /// Zero-based line number of the opening line.
    pub open_line: usize,
    /// Zero-based line number of the closing line.
    pub close_line: usize,
    /// Leading whitespace of the opening line.
    pub open_indent: String,
    /// Leading whitespace of the closing line.
    pub close_indent: String,
}

/// Pair every line ending in `{` with the next unmatched line that starts
/// with `}`.
///
/// # Panics
///
/// Panics if a closing line has no opening line or an opening line is left
/// unclosed.
pub fn block_pairs(code: &str) -> Vec<BlockPair> {
    let mut open: Vec<(usize, &str)> = Vec::new();
    let mut pairs = Vec::new();

    for (i, line) in code.lines().enumerate() {
        let trimmed = line.trim_start();
        let indent = &line[..line.len() - trimmed.len()];

        if trimmed.starts_with('}') {
            let (open_line, open_indent) = open
                .pop()
                .unwrap_or_else(|| panic!("line {} closes a block that was never opened", i + 1));
            pairs.push(BlockPair {
                open_line,
                close_line: i,
                open_indent: open_indent.to_string(),
                close_indent: indent.to_string(),
            });
        }
        if trimmed.ends_with('{') {
            open.push((i, indent));
        }
    }

    if let Some((line, _)) = open.first() {
        panic!("block opened on line {} is never closed", line + 1);
    }
    pairs.sort_by_key(|p| p.open_line);
    pairs
}

/// Assert every block is closed at the depth it was opened.
pub fn assert_balanced(code: &str) {
    for pair in block_pairs(code) {
        assert_eq!(
            pair.open_indent,
            pair.close_indent,
            "block opened on line {} closes at a different depth on line {}",
            pair.open_line + 1,
            pair.close_line + 1
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_pairs() {
        let code = "class A {\n    void f() {\n    }\n}\n";
        let pairs = block_pairs(code);
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].open_line, 0);
        assert_eq!(pairs[0].close_line, 3);
        assert_eq!(pairs[1].open_indent, "    ");
        assert_balanced(code);
    }

    #[test]
    #[should_panic(expected = "never closed")]
    fn test_unclosed_block() {
        block_pairs("class A {\n");
    }

    #[test]
    #[should_panic(expected = "different depth")]
    fn test_misaligned_close() {
        assert_balanced("class A {\n    }\n");
    }
}

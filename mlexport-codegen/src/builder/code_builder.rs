//! Code builder utility for generating properly indented code.

use super::{CodeFragment, Indent, Renderable};

/// Line buffer with indent-depth tracking.
///
/// Every opening [`indent_line`](Self::indent_line) must be paired with one
/// [`dedent_line`](Self::dedent_line). Dedenting below depth zero is a bug
/// in the caller and panics.
///
/// # Example
///
/// ```
/// use mlexport_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::java();
/// builder
///     .indent_line("public class Foo {")
///     .push_line("public static final int X = 1;")
///     .dedent_line("}");
///
/// assert_eq!(builder.current_indent(), 0);
/// assert_eq!(
///     builder.build(),
///     "public class Foo {\n    public static final int X = 1;\n}\n"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with 4-space indentation.
    pub fn java() -> Self {
        Self::new(Indent::JAVA)
    }

    /// Add a line of code with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (no indentation).
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    ///
    /// # Panics
    ///
    /// Panics if the level is already zero.
    pub fn push_dedent(&mut self) -> &mut Self {
        assert!(
            self.indent_level > 0,
            "dedent without a matching indent:\n{}",
            self.buffer
        );
        self.indent_level -= 1;
        self
    }

    /// Add a line at the current level, then indent.
    pub fn indent_line(&mut self, s: &str) -> &mut Self {
        self.push_line(s).push_indent()
    }

    /// Dedent, then add a line at the new level.
    pub fn dedent_line(&mut self, s: &str) -> &mut Self {
        self.push_dedent().push_line(s)
    }

    /// Insert text before everything written so far.
    ///
    /// The text is inserted verbatim: no indentation, no newline added.
    pub fn prepend(&mut self, s: &str) -> &mut Self {
        self.buffer.insert_str(0, s);
        self
    }

    /// Emit a Renderable node.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.indent_line(&header);
                for f in body {
                    self.apply_fragment(f);
                }
                self.dedent_line(&close);
            }
        }
    }

    /// Get the current indentation level.
    pub fn current_indent(&self) -> usize {
        self.indent_level
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    /// Get a reference to the current buffer content.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::java()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let mut builder = CodeBuilder::java();
        builder.push_line("int x = 1;");
        assert_eq!(builder.build(), "int x = 1;\n");
    }

    #[test]
    fn test_blank_line_has_no_indent() {
        let mut builder = CodeBuilder::java();
        builder.push_indent().push_blank().push_line("x();");
        assert_eq!(builder.build(), "\n    x();\n");
    }

    #[test]
    fn test_indent_and_dedent_line() {
        let mut builder = CodeBuilder::java();
        builder
            .indent_line("public class A {")
            .indent_line("public static void f() {")
            .push_line("g();")
            .dedent_line("}")
            .dedent_line("}");

        assert_eq!(builder.current_indent(), 0);
        assert_eq!(
            builder.build(),
            "public class A {\n    public static void f() {\n        g();\n    }\n}\n"
        );
    }

    #[test]
    #[should_panic(expected = "dedent without a matching indent")]
    fn test_unmatched_dedent_panics() {
        let mut builder = CodeBuilder::java();
        builder.push_line("}").dedent_line("}");
    }

    #[test]
    fn test_prepend() {
        let mut builder = CodeBuilder::java();
        builder.push_line("public class A {}");
        builder.prepend("import a.B;\n\n");
        assert_eq!(builder.build(), "import a.B;\n\npublic class A {}\n");
    }

    #[test]
    fn test_tab_indent() {
        let mut builder = CodeBuilder::new(Indent::Tab);
        builder.indent_line("{").push_line("x();").dedent_line("}");
        assert_eq!(builder.build(), "{\n\tx();\n}\n");
    }

    #[test]
    fn test_emit_with_fragments() {
        struct SimpleNode;
        impl Renderable for SimpleNode {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![
                    CodeFragment::line("// comment"),
                    CodeFragment::line("int x = 1;"),
                ]
            }
        }

        let mut builder = CodeBuilder::java();
        builder.emit(&SimpleNode);
        assert_eq!(builder.build(), "// comment\nint x = 1;\n");
    }

    #[test]
    fn test_emit_block_fragment_at_depth() {
        struct BlockNode;
        impl Renderable for BlockNode {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![CodeFragment::block(
                    "static {",
                    vec![CodeFragment::line("init();")],
                    "}",
                )]
            }
        }

        let mut builder = CodeBuilder::java();
        builder.push_indent().emit(&BlockNode);
        assert_eq!(builder.current_indent(), 1);
        assert_eq!(builder.build(), "    static {\n        init();\n    }\n");
    }
}

//! Java-specific rendering utilities for code generation.

use mlexport_codegen::{builder::FileBuilder, generation::ImportCollector};

/// Render the import block: one `import` per name in first-seen order,
/// then a blank line.
///
/// The blank line is written even when there are no imports.
///
/// # Example
///
/// ```
/// use mlexport_codegen::generation::ImportCollector;
/// use mlexport_codegen_java::render_imports;
///
/// let mut imports = ImportCollector::new();
/// imports.add("org.encog.ml.MLMethod");
/// imports.add("org.encog.ml.MLEncodable");
///
/// assert_eq!(
///     render_imports(&imports),
///     "import org.encog.ml.MLMethod;\nimport org.encog.ml.MLEncodable;\n\n"
/// );
/// ```
pub fn render_imports(imports: &ImportCollector) -> String {
    let mut block = String::new();
    for name in imports.iter() {
        block.push_str("import ");
        block.push_str(name);
        block.push_str(";\n");
    }
    block.push('\n');
    block
}

/// Extension trait for FileBuilder with Java-specific rendering.
pub trait JavaFileBuilder {
    /// Render the file as Java source: the import block followed by the body.
    fn render_java(self) -> String;
}

impl JavaFileBuilder for FileBuilder {
    fn render_java(self) -> String {
        let (imports, mut code) = self.into_parts();
        code.prepend(&render_imports(&imports));
        code.build()
    }
}

#[cfg(test)]
mod tests {
    use mlexport_codegen::Indent;

    use super::*;

    #[test]
    fn test_render_imports_dedup() {
        let mut imports = ImportCollector::new();
        for _ in 0..3 {
            imports.add("org.encog.ml.MLMethod");
        }

        assert_eq!(render_imports(&imports), "import org.encog.ml.MLMethod;\n\n");
    }

    #[test]
    fn test_render_imports_empty() {
        assert_eq!(render_imports(&ImportCollector::new()), "\n");
    }

    #[test]
    fn test_file_builder_render_java() {
        let mut builder = FileBuilder::new(Indent::JAVA);
        builder.code.push_line("public class A {}");
        builder.add_import("java.util.List");

        assert_eq!(
            builder.render_java(),
            "import java.util.List;\n\npublic class A {}\n"
        );
    }
}

//! Composable file builder

use super::{CodeBuilder, Indent};
use crate::generation::ImportCollector;

/// Per-file emission state: the imports a file needs and its body.
///
/// Generators create one `FileBuilder` per generated file and drop it when
/// the file is rendered, so no state is shared between generations.
/// Rendering the import block is language-specific.
///
/// # Example
///
/// ```
/// use mlexport_codegen::builder::{FileBuilder, Indent};
///
/// let mut file = FileBuilder::new(Indent::JAVA);
/// file.add_import("org.encog.ml.MLMethod");
/// file.code.push_line("public class Foo {}");
///
/// let (imports, code) = file.into_parts();
/// assert_eq!(imports.len(), 1);
/// assert_eq!(code.build(), "public class Foo {}\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct FileBuilder {
    /// Import collector for tracking dependencies
    pub imports: ImportCollector,
    /// Code builder for generating the file body
    pub code: CodeBuilder,
}

impl FileBuilder {
    /// Create a new FileBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            imports: ImportCollector::new(),
            code: CodeBuilder::new(indent),
        }
    }

    /// Record a fully qualified import.
    pub fn add_import(&mut self, name: &str) -> &mut Self {
        self.imports.add(name);
        self
    }

    /// Consume and return the individual components.
    pub fn into_parts(self) -> (ImportCollector, CodeBuilder) {
        (self.imports, self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_builder_basic() {
        let mut builder = FileBuilder::new(Indent::JAVA);
        builder
            .add_import("org.encog.ml.MLMethod")
            .add_import("org.encog.ml.MLMethod");
        builder.code.push_line("public class Foo {}");

        assert!(builder.imports.contains("org.encog.ml.MLMethod"));
        assert_eq!(builder.imports.len(), 1);
        assert!(builder.code.as_str().contains("public class Foo"));
    }

    #[test]
    fn test_fresh_builders_are_independent() {
        let mut first = FileBuilder::default();
        first.add_import("a.B");
        first.code.push_indent();

        let second = FileBuilder::default();
        assert!(second.imports.is_empty());
        assert_eq!(second.code.current_indent(), 0);
    }
}

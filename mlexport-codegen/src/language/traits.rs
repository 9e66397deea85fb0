//! Language-agnostic code generation traits.

use std::path::{Path, PathBuf};

use mlexport_core::{FileRules, GeneratedFile, Overwrite};
use mlexport_ir::ExportPlan;

use crate::Result;

/// Class name used for the output file when a plan declares no class.
const FALLBACK_CLASS_NAME: &str = "Program";

/// Trait for language-specific code generators.
///
/// Implementations must not keep per-generation state in `self`: every call
/// to [`generate`](LanguageCodegen::generate) starts from a fresh buffer, so
/// one generator can serve concurrent exports.
pub trait LanguageCodegen {
    /// Language identifier (e.g., "java")
    fn language(&self) -> &'static str;

    /// File extension for generated source files (e.g., "java")
    fn file_extension(&self) -> &'static str;

    /// Render the whole plan as one source unit.
    fn generate(&self, plan: &ExportPlan) -> Result<String>;

    /// Render the plan as a file named after its first class.
    fn source_file(&self, plan: &ExportPlan) -> Result<SourceFile> {
        let content = self.generate(plan)?;
        let class_name = plan
            .class_names()
            .first()
            .copied()
            .unwrap_or(FALLBACK_CLASS_NAME)
            .to_string();
        Ok(SourceFile {
            file_name: format!("{}.{}", class_name, self.file_extension()),
            content,
            overwrite: Overwrite::Always,
        })
    }
}

/// A generated source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// File name relative to the output directory
    pub file_name: String,
    /// File content
    pub content: String,
    /// Policy for an existing file at the same path
    pub overwrite: Overwrite,
}

impl SourceFile {
    /// Keep an existing file instead of replacing it.
    pub fn keep_existing(mut self) -> Self {
        self.overwrite = Overwrite::IfMissing;
        self
    }
}

impl GeneratedFile for SourceFile {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.file_name)
    }

    fn rules(&self) -> FileRules {
        FileRules::new(self.overwrite)
    }

    fn render(&self) -> String {
        self.content.clone()
    }
}

#[cfg(test)]
mod tests {
    use mlexport_ir::ExportNode;

    use super::*;

    struct Echo;

    impl LanguageCodegen for Echo {
        fn language(&self) -> &'static str {
            "echo"
        }

        fn file_extension(&self) -> &'static str {
            "txt"
        }

        fn generate(&self, plan: &ExportPlan) -> Result<String> {
            Ok(format!("{} nodes\n", plan.node_count()))
        }
    }

    #[test]
    fn test_source_file_named_after_class() {
        let plan = ExportPlan::new(vec![ExportNode::class("XorNet", vec![])]);
        let file = Echo.source_file(&plan).unwrap();
        assert_eq!(file.file_name, "XorNet.txt");
        assert_eq!(file.content, "1 nodes\n");
        assert_eq!(file.path(Path::new("out")), Path::new("out/XorNet.txt"));
    }

    #[test]
    fn test_source_file_fallback_name() {
        let plan = ExportPlan::new(vec![ExportNode::comment("empty")]);
        let file = Echo.source_file(&plan).unwrap().keep_existing();
        assert_eq!(file.file_name, "Program.txt");
        assert_eq!(file.rules().overwrite, Overwrite::IfMissing);
    }
}

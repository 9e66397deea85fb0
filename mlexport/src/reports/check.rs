//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from plan validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the plan file.
    pub plan_path: PathBuf,
    /// Target language of the generator that ran.
    pub language: &'static str,
    /// Number of plan nodes, counting nested ones.
    pub node_count: usize,
    /// Declared classes.
    pub classes: Vec<String>,
    /// Imports the generated file would declare.
    pub imports: Vec<String>,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        out.preformatted(&format!("✓ {} is valid", self.plan_path.display()));
        out.newline();

        out.key_value("Target", self.language);
        out.key_value("Nodes", &self.node_count.to_string());
        if !self.classes.is_empty() {
            out.key_value("Classes", &self.classes.join(", "));
        }

        if !self.imports.is_empty() {
            out.newline();
            out.section("Imports");
            for import in &self.imports {
                out.list_item(import);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::testing::RecordingOutput;

    #[test]
    fn test_render_without_imports() {
        let report = CheckReport {
            plan_path: PathBuf::from("plan.toml"),
            language: "java",
            node_count: 2,
            classes: vec![],
            imports: vec![],
        };
        let mut out = RecordingOutput::default();
        report.render(&mut out);
        assert_eq!(out.lines, vec!["✓ plan.toml is valid", "", "Target: java", "Nodes: 2"]);
    }

    #[test]
    fn test_render_with_imports() {
        let report = CheckReport {
            plan_path: PathBuf::from("plan.toml"),
            language: "java",
            node_count: 5,
            classes: vec!["Xor".to_string()],
            imports: vec!["org.encog.ml.MLMethod".to_string()],
        };
        let mut out = RecordingOutput::default();
        report.render(&mut out);
        assert_eq!(
            out.lines[2..],
            [
                "Target: java",
                "Nodes: 5",
                "Classes: Xor",
                "",
                "Imports:",
                "- org.encog.ml.MLMethod"
            ]
        );
    }
}

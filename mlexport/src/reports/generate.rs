//! Generate command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from code generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Path to the plan file.
    pub plan_path: PathBuf,
    /// Where the generated source goes.
    pub output: PathBuf,
    /// Number of plan nodes, counting nested ones.
    pub node_count: usize,
    /// Declared classes.
    pub classes: Vec<String>,
    /// What happened to the output file.
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// The file was written.
    Written,
    /// The file already existed and was left alone.
    Skipped,
    /// Dry-run preview.
    Preview { content: String },
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        let output = self.output.display().to_string();

        match &self.result {
            GenerationResult::Preview { content } => {
                out.divider(&output);
                out.preformatted(content);
                out.divider("Summary");
                out.preformatted(&format!(
                    "{} nodes from {} would be written to {}",
                    self.node_count,
                    self.plan_path.display(),
                    output
                ));
            }
            GenerationResult::Written => {
                out.key_value("Plan", &self.plan_path.display().to_string());
                out.key_value("Classes", &self.classes.join(", "));
                out.newline();
                out.section("Generated");
                out.added_item(&output);
            }
            GenerationResult::Skipped => {
                out.warning(&format!(
                    "{} already exists, use --force to replace it",
                    output
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::testing::RecordingOutput;

    fn report(result: GenerationResult) -> GenerateReport {
        GenerateReport {
            plan_path: PathBuf::from("xor.toml"),
            output: PathBuf::from("XorExample.java"),
            node_count: 7,
            classes: vec!["XorExample".to_string()],
            result,
        }
    }

    #[test]
    fn test_render_written() {
        let mut out = RecordingOutput::default();
        report(GenerationResult::Written).render(&mut out);
        assert_eq!(
            out.lines,
            vec![
                "Plan: xor.toml",
                "Classes: XorExample",
                "",
                "Generated:",
                "+ XorExample.java",
            ]
        );
    }

    #[test]
    fn test_render_skipped() {
        let mut out = RecordingOutput::default();
        report(GenerationResult::Skipped).render(&mut out);
        assert_eq!(
            out.lines,
            vec!["warning: XorExample.java already exists, use --force to replace it"]
        );
    }

    #[test]
    fn test_render_preview() {
        let mut out = RecordingOutput::default();
        report(GenerationResult::Preview {
            content: "// hi".to_string(),
        })
        .render(&mut out);
        assert_eq!(out.lines[0], "── XorExample.java ──");
        assert_eq!(out.lines[1], "// hi");
        assert_eq!(
            out.lines[3],
            "7 nodes from xor.toml would be written to XorExample.java"
        );
    }
}

//! Generate operation - Java source from a plan file.

use std::path::{Path, PathBuf};

use eyre::{Context, OptionExt, Result};
use mlexport_codegen::{Indent, LanguageCodegen};
use mlexport_codegen_java::Generator;
use mlexport_core::{GeneratedFile, WriteResult};
use mlexport_manifest::PlanFile;
use tracing::debug;

use crate::reports::{GenerateReport, GenerationResult};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Output file, overriding the plan's `output`.
    pub output: Option<&'a Path>,
    /// Whether to preview without writing files.
    pub dry_run: bool,
    /// Whether to replace an existing output file.
    pub force: bool,
    /// Indentation per block level.
    pub indent: Indent,
}

/// Execute the generate operation.
pub fn generate(
    file: &PlanFile,
    plan_path: &Path,
    opts: GenerateOptions,
) -> Result<GenerateReport> {
    let plan = file.to_plan();
    let generator = Generator::new().with_indent(opts.indent);
    let mut source = generator
        .source_file(&plan)
        .wrap_err("Failed to generate code")?;

    let target = output_path(file, plan_path, &source.file_name, opts.output);

    let result = if opts.dry_run {
        GenerationResult::Preview {
            content: source.content.clone(),
        }
    } else {
        let dir = target.parent().unwrap_or(Path::new(""));
        source.file_name = target
            .file_name()
            .ok_or_eyre("output path has no file name")?
            .to_string_lossy()
            .into_owned();
        if !opts.force {
            source = source.keep_existing();
        }

        debug!(path = %target.display(), force = opts.force, "writing generated source");
        match source
            .write(dir)
            .wrap_err_with(|| format!("Failed to write {}", target.display()))?
        {
            WriteResult::Written => GenerationResult::Written,
            WriteResult::Skipped => GenerationResult::Skipped,
        }
    };

    Ok(GenerateReport {
        plan_path: plan_path.to_path_buf(),
        output: target,
        node_count: plan.node_count(),
        classes: plan.class_names().into_iter().map(String::from).collect(),
        result,
    })
}

/// Resolve where the generated file goes.
///
/// An explicit path wins. Otherwise the plan's `output`, or the default file
/// name, is taken relative to the plan file's directory.
fn output_path(
    file: &PlanFile,
    plan_path: &Path,
    default_name: &str,
    explicit: Option<&Path>,
) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }

    let plan_dir = plan_path.parent().unwrap_or(Path::new(""));
    match &file.plan.output {
        Some(output) => plan_dir.join(output),
        None => plan_dir.join(default_name),
    }
}

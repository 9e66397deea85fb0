//! Check operation - plan validation.

use std::path::Path;

use eyre::{Context, Result};
use mlexport_codegen::LanguageCodegen;
use mlexport_codegen_java::Generator;
use mlexport_manifest::PlanFile;

use crate::reports::CheckReport;

/// Execute the check operation.
///
/// The plan file has already been parsed and validated. This runs a full
/// generation pass in memory so unsupported models are reported too.
pub fn check(file: &PlanFile, plan_path: &Path) -> Result<CheckReport> {
    let plan = file.to_plan();
    let generator = Generator::new();
    let built = generator
        .build(&plan)
        .wrap_err("Plan cannot be generated")?;

    Ok(CheckReport {
        plan_path: plan_path.to_path_buf(),
        language: generator.language(),
        node_count: plan.node_count(),
        classes: plan.class_names().into_iter().map(String::from).collect(),
        imports: built.imports.iter().map(String::from).collect(),
    })
}

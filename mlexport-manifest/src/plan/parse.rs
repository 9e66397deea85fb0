//! Plan file parsing from files and strings.

use std::{path::Path, str::FromStr};

use mlexport_ir::PlanError;
use tracing::debug;

use super::{Format, PlanFile, validate::ParseContext};
use crate::{Error, Result, error::SourceContext};

impl FromStr for PlanFile {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_plan(s, "plan.toml")
    }
}

impl PlanFile {
    /// Parse a plan file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_plan(&content, &path.display().to_string())
    }

    /// Parse a plan file from a string with a custom filename for error
    /// reporting. The filename's extension selects the format.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_plan(content, filename)
    }
}

/// Parse a plan from content with the given filename for error reporting.
pub fn parse_plan(content: &str, filename: &str) -> Result<PlanFile> {
    let source_ctx = SourceContext::new(content, filename);
    let format = Format::from_path(filename);
    debug!(filename, ?format, "parsing plan file");

    let file: PlanFile = match format {
        Format::Toml => toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?,
        Format::Json => serde_json::from_str(content).map_err(|e| source_ctx.json_error(e))?,
    };

    validate_plan(&file, content, filename)?;
    Ok(file)
}

/// Validate names and shapes, then check that the lowered plan's references
/// resolve.
fn validate_plan(file: &PlanFile, src: &str, filename: &str) -> Result<()> {
    let ctx = ParseContext::new(src, filename);

    for node in &file.nodes {
        node.validate(&ctx)?;
    }

    file.to_plan().check_references().map_err(|err| {
        let span = match &err {
            PlanError::MissingWeights { weights, .. } => ctx.find_span("weights", weights),
            PlanError::DuplicateName { name, .. } => ctx
                .find_last_span("name", name)
                .or_else(|| ctx.find_last_span("kind", "embed-training")),
            PlanError::WeightCount { .. } => None,
        };
        ctx.source_context().reference_error(err, span)
    })
}

use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use mlexport_codegen::Indent;
use mlexport_manifest::PlanFile;

use super::UnwrapOrExit;
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to the plan file (defaults to ./plan.toml)
    #[arg(short, long, default_value = "plan.toml")]
    pub plan: PathBuf,

    /// Output file (defaults to the plan's `output`, then `<Class>.java`)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Replace the output file if it already exists
    #[arg(long)]
    pub force: bool,

    /// Indentation per block level: 2, 3, 4, 8 or tab
    #[arg(long, default_value_t = Indent::JAVA)]
    pub indent: Indent,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let file = PlanFile::from_file(&self.plan).unwrap_or_exit();

        let report = ops::generate(
            &file,
            &self.plan,
            GenerateOptions {
                output: self.output.as_deref(),
                dry_run: self.dry_run,
                force: self.force,
                indent: self.indent,
            },
        )?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}

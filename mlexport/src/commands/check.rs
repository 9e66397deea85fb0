use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use mlexport_manifest::PlanFile;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the plan file (defaults to ./plan.toml)
    #[arg(short, long, default_value = "plan.toml")]
    pub plan: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let file = PlanFile::from_file(&self.plan).unwrap_or_exit();

        let report = ops::check(&file, &self.plan)?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}

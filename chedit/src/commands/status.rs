use clap::Args;
use eyre::Result;

use super::ProjectArgs;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct StatusCommand {
    /// Components to check
    #[arg(required = true)]
    pub names: Vec<String>,

    #[command(flatten)]
    pub project: ProjectArgs,
}

impl StatusCommand {
    pub fn run(&self) -> Result<()> {
        let workspace = self.project.open();
        let report = ops::status(&workspace, &self.names);
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}

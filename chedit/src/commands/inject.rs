use clap::Args;
use eyre::{Context, Result};

use super::ProjectArgs;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct InjectCommand {
    /// Components to inject, by name (CopyButton) or key (copy-button)
    #[arg(required = true)]
    pub names: Vec<String>,

    #[command(flatten)]
    pub project: ProjectArgs,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

impl InjectCommand {
    pub fn run(&self) -> Result<()> {
        let workspace = self.project.open();
        let report = ops::inject(&workspace, &self.names);

        if self.json {
            let json = serde_json::to_string_pretty(&report).wrap_err("Failed to serialize report")?;
            println!("{}", json);
        } else {
            report.render(&mut TerminalOutput::new());
        }

        if report.has_failures() {
            std::process::exit(1);
        }
        Ok(())
    }
}

use clap::Args;
use eyre::Result;

use super::ProjectArgs;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct TemplatesCommand {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Show the MDX usage snippet of a template
    #[arg(long, value_name = "NAME")]
    pub show: Option<String>,
}

impl TemplatesCommand {
    pub fn run(&self) -> Result<()> {
        let workspace = self.project.open();
        let mut out = TerminalOutput::new();

        match &self.show {
            Some(name) => ops::snippet(&workspace.catalog, name)?.render(&mut out),
            None => ops::templates(&workspace.catalog)?.render(&mut out),
        }
        Ok(())
    }
}

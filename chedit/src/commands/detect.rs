use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct DetectCommand {
    /// MDX file to scan
    pub file: PathBuf,
}

impl DetectCommand {
    pub fn run(&self) -> Result<()> {
        let report = ops::detect(&self.file)?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}

mod completions;
mod detect;
mod inject;
mod status;
mod templates;

use std::path::PathBuf;

use chedit_manifest::CheditToml;
use clap::{Args, Parser, Subcommand};
use completions::CompletionsCommand;
use detect::DetectCommand;
use eyre::Result;
use inject::InjectCommand;
use status::StatusCommand;
use templates::TemplatesCommand;

use crate::ops::Workspace;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for chedit_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "chedit")]
#[command(version)]
#[command(about = "Inject Code Hike components into an MDX project")]
pub(crate) struct Cli {
    /// Show debug logs
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only show errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Inject(cmd) => cmd.run(),
            Commands::Status(cmd) => cmd.run(),
            Commands::Detect(cmd) => cmd.run(),
            Commands::Templates(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Copy component templates into the project and wire them up
    Inject(InjectCommand),

    /// Show whether components are already wired into the code component
    Status(StatusCommand),

    /// List the Code Hike components used by an MDX file
    Detect(DetectCommand),

    /// List available templates or show a template's MDX snippet
    Templates(TemplatesCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// Location of the project to operate on.
#[derive(Args)]
pub struct ProjectArgs {
    /// Project root (where chedit.toml and mdx-components live)
    #[arg(short, long, default_value = ".")]
    pub root: PathBuf,
}

impl ProjectArgs {
    /// Load `chedit.toml` (or defaults) and open the project.
    pub fn open(&self) -> Workspace {
        let toml = CheditToml::discover(&self.root).unwrap_or_exit();
        tracing::debug!(
            config = %toml.path().display(),
            on_disk = toml.is_on_disk(),
            "loaded project configuration"
        );
        Workspace::new(&self.root, toml.manifest())
    }
}

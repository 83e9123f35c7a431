//! Logging initialization.

use eyre::Result;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use crate::commands::Cli;

/// Install the global tracing subscriber according to the verbosity flags.
///
/// Logs go to stderr so JSON reports on stdout stay parseable.
pub fn initialize_logging(cli: &Cli) -> Result<()> {
    let level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::ERROR
    } else {
        Level::WARN
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod detect;
mod inject;
mod output;
mod status;
mod templates;

pub use detect::DetectReport;
pub use inject::{FileChange, InjectReport};
#[cfg(test)]
pub use output::BufferOutput;
pub use output::{Report, TerminalOutput};
pub use status::{ComponentStatus, StatusReport};
pub use templates::{SnippetReport, TemplatesReport};

//! Status command report data structures.

use std::path::PathBuf;

use chedit_core::{ComponentName, FileKey};

use super::output::{Output, Report};

/// Report data from a status check.
#[derive(Debug)]
pub struct StatusReport {
    /// The code component the check ran against.
    pub code_path: PathBuf,
    pub components: Vec<ComponentStatus>,
}

/// Status of a single component.
#[derive(Debug)]
pub struct ComponentStatus {
    pub key: FileKey,
    pub component: ComponentName,
    pub has_template: bool,
    pub injected: bool,
}

impl Report for StatusReport {
    fn render(&self, out: &mut dyn Output) {
        out.section(&format!("Components in {}", self.code_path.display()));
        for c in &self.components {
            let state = match (c.injected, c.has_template) {
                (true, _) => "injected",
                (false, true) => "not injected",
                (false, false) => "no template",
            };
            out.key_value_indented(&format!("{} ({})", c.component, c.key), state);
        }
    }
}

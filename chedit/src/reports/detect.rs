//! Detect command report data structures.

use std::path::PathBuf;

use chedit_core::ComponentName;

use super::output::{Output, Report};

/// Components found in an MDX file.
#[derive(Debug)]
pub struct DetectReport {
    pub path: PathBuf,
    pub components: Vec<ComponentName>,
}

impl Report for DetectReport {
    fn render(&self, out: &mut dyn Output) {
        if self.components.is_empty() {
            out.preformatted(&format!(
                "No Code Hike components found in {}.",
                self.path.display()
            ));
            return;
        }
        out.section(&self.path.display().to_string());
        for name in &self.components {
            out.list_item(name.as_str());
        }
    }
}

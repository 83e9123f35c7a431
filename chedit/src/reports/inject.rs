//! Inject command report data structures.

use std::path::PathBuf;

use chedit_core::{FileKey, Outcome};
use serde::Serialize;

use super::output::{Output, Report};

/// Report data from an injection run.
#[derive(Debug, Serialize)]
pub struct InjectReport {
    /// Components whose templates were copied.
    pub injected: Vec<FileKey>,
    /// Components that were already wired in.
    pub skipped: Vec<FileKey>,
    /// Components whose template was missing or could not be copied.
    pub failed: Vec<FileKey>,
    /// What each generator step did.
    pub files: Vec<FileChange>,
}

/// Outcome of one generator step.
#[derive(Debug, Serialize)]
pub struct FileChange {
    pub step: &'static str,
    pub path: PathBuf,
    pub outcome: Outcome,
}

impl FileChange {
    pub fn new(step: &'static str, path: PathBuf, outcome: Outcome) -> Self {
        Self {
            step,
            path,
            outcome,
        }
    }
}

impl InjectReport {
    /// Whether any requested component could not be injected.
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }
}

impl Report for InjectReport {
    fn render(&self, out: &mut dyn Output) {
        if !self.injected.is_empty() {
            out.section("Injected");
            for key in &self.injected {
                out.added_item(key.as_str());
            }
        }

        if !self.skipped.is_empty() {
            out.section("Already present");
            for key in &self.skipped {
                out.list_item(key.as_str());
            }
        }

        for key in &self.failed {
            out.warning(&format!("template not found or not copied: {}", key));
        }

        let changed: Vec<_> = self.files.iter().filter(|f| f.outcome.is_changed()).collect();
        if changed.is_empty() {
            out.preformatted("No generated files changed.");
            return;
        }

        out.newline();
        out.section("Files");
        for file in changed {
            out.key_value_indented(&file.path.display().to_string(), file.outcome.as_str());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::BufferOutput;

    #[test]
    fn test_render() {
        let report = InjectReport {
            injected: vec!["mark".into()],
            skipped: vec!["focus".into()],
            failed: vec!["tabs".into()],
            files: vec![
                FileChange::new("code component", "app/components/code.tsx".into(), Outcome::Updated),
                FileChange::new("mdx registration", "mdx-components.tsx".into(), Outcome::Unchanged),
            ],
        };

        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            vec![
                "Injected:",
                "  + mark",
                "Already present:",
                "  - focus",
                "warning: template not found or not copied: tabs",
                "",
                "Files:",
                "  app/components/code.tsx: updated",
            ]
        );
        assert!(report.has_failures());
    }
}

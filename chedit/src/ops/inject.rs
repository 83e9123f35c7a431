//! Inject operation - copy templates and update the generated files.

use chedit_codegen::Injection;

use super::Workspace;
use crate::reports::{FileChange, InjectReport};

/// Execute the inject operation.
pub fn inject(workspace: &Workspace, names: &[String]) -> InjectReport {
    let injection = chedit_codegen::inject(&workspace.project, &workspace.catalog, names);
    report(workspace, injection)
}

fn report(workspace: &Workspace, injection: Injection) -> InjectReport {
    let project = &workspace.project;
    let mut files = vec![
        FileChange::new("code component", project.code_path(), injection.code),
        FileChange::new("code wrappers", project.code_path(), injection.wrappers),
        FileChange::new("mdx registration", project.mdx_path(), injection.mdx),
    ];
    if let Some(outcome) = injection.styles {
        files.push(FileChange::new(
            "hover styles",
            project.stylesheet_path(),
            outcome,
        ));
    }

    InjectReport {
        injected: injection.injected,
        skipped: injection.skipped,
        failed: injection.failed,
        files,
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use chedit_core::{FileKey, Outcome};
    use chedit_manifest::Manifest;
    use tempfile::TempDir;

    use super::*;

    fn workspace(temp: &TempDir) -> Workspace {
        let manifest = Manifest::parse("[project]\ntemplates = \"templates\"\n").unwrap();
        let templates = temp.path().join("templates");
        fs::create_dir_all(&templates).unwrap();
        fs::write(
            templates.join("focus.tsx"),
            "export const focus: AnnotationHandler = {}\n",
        )
        .unwrap();
        Workspace::new(temp.path(), &manifest)
    }

    #[test]
    fn test_inject_report() {
        let temp = TempDir::new().unwrap();
        let workspace = workspace(&temp);

        let report = inject(&workspace, &["Focus".to_string(), "Tabs".to_string()]);

        assert_eq!(report.injected, vec![FileKey::from("focus")]);
        assert_eq!(report.failed, vec![FileKey::from("tabs")]);
        assert_eq!(report.files.len(), 3);
        assert_eq!(report.files[0].outcome, Outcome::Created);
        assert!(temp.path().join("app/components/code.tsx").exists());
    }

    #[test]
    fn test_inject_report_json() {
        let temp = TempDir::new().unwrap();
        let workspace = workspace(&temp);

        let report = inject(&workspace, &["focus".to_string()]);
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["injected"], serde_json::json!(["focus"]));
        assert_eq!(json["files"][0]["step"], "code component");
        assert_eq!(json["files"][0]["outcome"], "created");
        assert_eq!(json["files"][2]["outcome"], "unchanged");
    }
}

//! Status operation - which components are already wired in.

use chedit_codegen::resolve_requests;
use chedit_core::TemplateCatalog;

use super::Workspace;
use crate::reports::{ComponentStatus, StatusReport};

/// Execute the status operation.
///
/// Template dependencies are listed too, since inject would process them.
pub fn status(workspace: &Workspace, names: &[String]) -> StatusReport {
    let components = resolve_requests(&workspace.catalog, names)
        .into_iter()
        .map(|key| {
            let has_template = workspace.catalog.template(&key).is_some();
            let injected = workspace.project.is_already_injected(&workspace.catalog, &key);
            ComponentStatus {
                component: key.to_component_name(),
                key,
                has_template,
                injected,
            }
        })
        .collect();

    StatusReport {
        code_path: workspace.project.code_path(),
        components,
    }
}

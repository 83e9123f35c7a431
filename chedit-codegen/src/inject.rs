//! The injection workflow: copy templates, then bring every generated file
//! in line with the request.

use chedit_core::{
    FileKey, FileStore, Outcome, TemplateCatalog,
    catalog::{companions, dependencies, resolve_key},
};
use eyre::{Result, WrapErr};
use indexmap::IndexSet;

use crate::Project;

/// Key of the template that needs the MDX map and hover styles.
const CODE_MENTIONS: &str = "code-mentions";

/// What an injection run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Injection {
    /// Every key the run considered, dependencies included.
    pub requested: Vec<FileKey>,
    pub injected: Vec<FileKey>,
    pub skipped: Vec<FileKey>,
    pub failed: Vec<FileKey>,
    pub code: Outcome,
    pub wrappers: Outcome,
    pub mdx: Outcome,
    /// `None` when no hover styles were needed.
    pub styles: Option<Outcome>,
}

/// Resolve free-form requests to catalog keys, appending template dependencies.
pub fn resolve_requests<I, R>(catalog: &dyn TemplateCatalog, requests: I) -> Vec<FileKey>
where
    I: IntoIterator<Item = R>,
    R: AsRef<str>,
{
    let mut keys: IndexSet<FileKey> = requests
        .into_iter()
        .map(|r| resolve_key(catalog, r.as_ref()))
        .filter(|k| !k.as_str().is_empty())
        .collect();

    let direct: Vec<FileKey> = keys.iter().cloned().collect();
    for key in &direct {
        for dep in dependencies(key) {
            keys.insert(FileKey::new(*dep));
        }
    }
    keys.into_iter().collect()
}

/// Inject the requested components into `project`.
///
/// Generator failures are logged and reported as unchanged; they do not
/// stop the remaining steps.
pub fn inject<S, I, R>(project: &Project<S>, catalog: &dyn TemplateCatalog, requests: I) -> Injection
where
    S: FileStore,
    I: IntoIterator<Item = R>,
    R: AsRef<str>,
{
    let requested = resolve_requests(catalog, requests);
    let mut injected = Vec::new();
    let mut skipped = Vec::new();
    let mut failed = Vec::new();

    for key in &requested {
        if project.is_already_injected(catalog, key) {
            tracing::debug!(%key, "already injected");
            skipped.push(key.clone());
            continue;
        }
        match copy_template(project, catalog, key) {
            Ok(true) => injected.push(key.clone()),
            Ok(false) => {
                tracing::warn!(%key, "template not found");
                failed.push(key.clone());
            }
            Err(e) => {
                tracing::warn!(%key, error = %e, "failed to copy template");
                failed.push(key.clone());
            }
        }
    }

    let code = settle("code component", project.ensure_code_component(catalog, &injected));
    let wrappers = settle("code wrappers", project.ensure_code_wrappers(&requested));
    let mdx = settle("mdx registration", project.ensure_mdx_registration(&requested));
    let styles = requested
        .iter()
        .any(|k| k.as_str() == CODE_MENTIONS)
        .then(|| settle("hover styles", project.ensure_hover_styles()));

    Injection {
        requested,
        injected,
        skipped,
        failed,
        code,
        wrappers,
        mdx,
        styles,
    }
}

/// Copy a template and its companions. Returns `false` if the template is missing.
fn copy_template<S: FileStore>(
    project: &Project<S>,
    catalog: &dyn TemplateCatalog,
    key: &FileKey,
) -> Result<bool> {
    let Some(template) = catalog.template(key) else {
        return Ok(false);
    };
    let path = project.component_path(&format!("{}.tsx", key));
    project
        .store()
        .write(&path, &template)
        .wrap_err_with(|| format!("failed to copy template {}", key))?;
    tracing::info!(%key, path = %path.display(), "copied template");

    for file_name in companions(key) {
        let Some(content) = catalog.companion(file_name) else {
            tracing::debug!(file = file_name, "companion file not found");
            continue;
        };
        if let Err(e) = project.store().write(&project.component_path(file_name), &content) {
            tracing::warn!(file = file_name, error = %e, "failed to copy companion file");
        }
    }
    Ok(true)
}

fn settle(step: &str, result: Result<Outcome>) -> Outcome {
    result.unwrap_or_else(|e| {
        tracing::warn!(step, error = %e, "generator failed");
        Outcome::Unchanged
    })
}

#[cfg(test)]
mod tests {
    use chedit_core::testing::MemoryCatalog;

    use super::*;

    #[test]
    fn test_resolve_requests() {
        let catalog = MemoryCatalog::new();
        let keys = resolve_requests(&catalog, ["Diff", "copy button", " focus ", "focus", ""]);
        assert_eq!(
            keys,
            vec![
                FileKey::from("diff"),
                FileKey::from("copy-button"),
                FileKey::from("focus"),
                FileKey::from("mark"),
            ]
        );
    }

    #[test]
    fn test_dependency_already_requested() {
        let keys = resolve_requests(&MemoryCatalog::new(), ["mark", "diff"]);
        assert_eq!(keys, vec![FileKey::from("mark"), FileKey::from("diff")]);
    }

    #[test]
    fn test_resolve_requests_unhyphenated_keys() {
        let catalog = MemoryCatalog::new()
            .with_template("classname", "")
            .with_template("typescript", "");
        let keys = resolve_requests(&catalog, ["ClassName", "TypeScript", "LineNumbers"]);
        assert_eq!(
            keys,
            vec![
                FileKey::from("classname"),
                FileKey::from("typescript"),
                FileKey::from("line-numbers"),
            ]
        );
    }
}

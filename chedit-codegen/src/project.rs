//! Store-backed entry points operating on a project directory.

use std::path::{Path, PathBuf};

use chedit_core::{FileKey, FileStore, Outcome, TemplateCatalog};
use chedit_manifest::{Extension, Manifest};
use eyre::Result;

use crate::{
    code_component::{self, CodeBatch},
    mdx, oracle,
    styles::{self, STYLESHEET_CANDIDATES},
    wrappers,
};

/// A project directory: where templates go and where the generated files live.
#[derive(Debug)]
pub struct Project<S> {
    store: S,
    components_dir: PathBuf,
    import_base: String,
    extension: Extension,
    theme: String,
}

impl<S: FileStore> Project<S> {
    pub fn new(store: S, manifest: &Manifest) -> Self {
        Self {
            store,
            components_dir: manifest.project.components.clone(),
            import_base: manifest.import_base(),
            extension: manifest.project.extension,
            theme: manifest.code.theme.clone(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Components directory, relative to the project root.
    pub fn components_dir(&self) -> &Path {
        &self.components_dir
    }

    /// Path of a file inside the components directory.
    pub fn component_path(&self, file_name: &str) -> PathBuf {
        self.components_dir.join(file_name)
    }

    /// Path of the code component file.
    pub fn code_path(&self) -> PathBuf {
        self.component_path(&format!("code.{}", self.extension))
    }

    /// Path of the MDX registration file.
    pub fn mdx_path(&self) -> PathBuf {
        PathBuf::from(format!("mdx-components.{}", self.extension))
    }

    /// Whether `key` is already wired into the code component.
    ///
    /// An unreadable code file counts as not injected.
    pub fn is_already_injected(&self, catalog: &dyn TemplateCatalog, key: &FileKey) -> bool {
        let generated = self.store.read(&self.code_path()).unwrap_or_else(|e| {
            tracing::debug!(error = %e, "code component not readable");
            None
        });
        let template = catalog.template(key);
        oracle::is_already_injected(generated.as_deref(), template.as_deref(), key)
    }

    /// Create or update the code component for newly injected templates.
    pub fn ensure_code_component(&self, catalog: &dyn TemplateCatalog, keys: &[FileKey]) -> Result<Outcome> {
        let batch = CodeBatch::resolve(keys, catalog);
        if batch.is_empty() {
            return Ok(Outcome::Unchanged);
        }
        let path = self.code_path();
        let existing = self.store.read(&path)?;
        code_component::ensure_code_component(existing.as_deref(), &batch, &self.theme, self.extension)
            .persist(&self.store, &path)
    }

    /// Apply wrapper components to the code component.
    ///
    /// A code file that cannot be read is left alone.
    pub fn ensure_code_wrappers(&self, keys: &[FileKey]) -> Result<Outcome> {
        let path = self.code_path();
        let existing = match self.store.read(&path) {
            Ok(existing) => existing,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "cannot read code component, skipping wrappers");
                return Ok(Outcome::Unchanged);
            }
        };
        wrappers::ensure_code_wrappers(existing.as_deref(), keys).persist(&self.store, &path)
    }

    /// Create or update the MDX registration file.
    pub fn ensure_mdx_registration(&self, keys: &[FileKey]) -> Result<Outcome> {
        let path = self.mdx_path();
        let existing = self.store.read(&path)?;
        mdx::ensure_mdx_registration(existing.as_deref(), keys, &self.import_base, self.extension)
            .persist(&self.store, &path)
    }

    /// The global stylesheet hover styles go into.
    pub fn stylesheet_path(&self) -> PathBuf {
        STYLESHEET_CANDIDATES
            .iter()
            .map(PathBuf::from)
            .find(|p| self.store.exists(p))
            .unwrap_or_else(|| PathBuf::from(STYLESHEET_CANDIDATES[0]))
    }

    /// Append the code mentions hover styles to the global stylesheet.
    pub fn ensure_hover_styles(&self) -> Result<Outcome> {
        let path = self.stylesheet_path();
        let existing = self.store.read(&path)?;
        styles::ensure_hover_styles(existing.as_deref()).persist(&self.store, &path)
    }
}

//! Core operations.
//!
//! This module contains the business logic for chedit commands,
//! separated from CLI argument parsing and output rendering.

pub mod detect;
pub mod inject;
pub mod status;
pub mod templates;

use std::path::Path;

use chedit_codegen::Project;
use chedit_core::{DirCatalog, FsStore};
use chedit_manifest::Manifest;

pub use detect::detect;
pub use inject::inject;
pub use status::status;
pub use templates::{snippet, templates};

/// A project on disk together with its template catalog.
pub struct Workspace {
    pub project: Project<FsStore>,
    pub catalog: DirCatalog,
}

impl Workspace {
    pub fn new(root: &Path, manifest: &Manifest) -> Self {
        Self {
            project: Project::new(FsStore::new(root), manifest),
            catalog: DirCatalog::new(root.join(&manifest.project.templates)),
        }
    }
}

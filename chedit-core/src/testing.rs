//! Test utilities.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::{
    cell::RefCell,
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
};

use eyre::{Result, bail};

use crate::{FileKey, FileStore, TemplateCatalog};

/// In-memory file store.
///
/// Paths can be marked unreadable or the whole store read-only to exercise
/// the error paths of the engine.
#[derive(Debug, Default)]
pub struct MemoryStore {
    files: RefCell<BTreeMap<PathBuf, String>>,
    unreadable: BTreeSet<PathBuf>,
    read_only: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file.
    pub fn with_file(self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.files.borrow_mut().insert(path.into(), content.into());
        self
    }

    /// Make reads of `path` fail with an I/O-style error.
    pub fn unreadable(mut self, path: impl Into<PathBuf>) -> Self {
        self.unreadable.insert(path.into());
        self
    }

    /// Make every write fail.
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    /// Get a file's content.
    pub fn get(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.borrow().get(path.as_ref()).cloned()
    }

    /// All stored paths, sorted.
    pub fn paths(&self) -> Vec<PathBuf> {
        self.files.borrow().keys().cloned().collect()
    }
}

impl FileStore for MemoryStore {
    fn read(&self, path: &Path) -> Result<Option<String>> {
        if self.unreadable.contains(path) {
            bail!("permission denied: {}", path.display());
        }
        Ok(self.files.borrow().get(path).cloned())
    }

    fn write(&self, path: &Path, content: &str) -> Result<()> {
        if self.read_only {
            bail!("read-only file system: {}", path.display());
        }
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.borrow().contains_key(path)
    }
}

/// In-memory template catalog.
#[derive(Debug, Default)]
pub struct MemoryCatalog {
    templates: BTreeMap<FileKey, String>,
    companions: BTreeMap<String, String>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a template.
    pub fn with_template(mut self, key: &str, content: impl Into<String>) -> Self {
        self.templates.insert(FileKey::new(key), content.into());
        self
    }

    /// Add a companion file.
    pub fn with_companion(mut self, file_name: &str, content: impl Into<String>) -> Self {
        self.companions.insert(file_name.to_string(), content.into());
        self
    }
}

impl TemplateCatalog for MemoryCatalog {
    fn template(&self, key: &FileKey) -> Option<String> {
        self.templates.get(key).cloned()
    }

    fn companion(&self, file_name: &str) -> Option<String> {
        self.companions.get(file_name).cloned()
    }

    fn keys(&self) -> Result<Vec<FileKey>> {
        Ok(self.templates.keys().cloned().collect())
    }

    fn contains(&self, key: &FileKey) -> bool {
        self.templates.contains_key(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_basics() {
        let store = MemoryStore::new().with_file("a.tsx", "a");

        assert!(store.exists(Path::new("a.tsx")));
        assert_eq!(store.read(Path::new("b.tsx")).unwrap(), None);

        store.write(Path::new("b.tsx"), "b").unwrap();
        assert_eq!(store.get("b.tsx").as_deref(), Some("b"));
        assert_eq!(store.paths().len(), 2);
    }

    #[test]
    fn test_memory_store_failures() {
        let store = MemoryStore::new()
            .with_file("a.tsx", "a")
            .unreadable("a.tsx")
            .read_only();

        assert!(store.read(Path::new("a.tsx")).is_err());
        assert!(store.write(Path::new("b.tsx"), "b").is_err());
    }

    #[test]
    fn test_memory_catalog() {
        let catalog = MemoryCatalog::new()
            .with_template("mark", "export const mark = 1")
            .with_template("focus", "export const focus = 1")
            .with_companion("focus.client.tsx", "client");

        assert_eq!(
            catalog.keys().unwrap(),
            vec![FileKey::from("focus"), FileKey::from("mark")]
        );
        assert!(catalog.template(&"diff".into()).is_none());
        assert_eq!(catalog.companion("focus.client.tsx").as_deref(), Some("client"));
    }
}

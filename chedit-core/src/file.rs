use std::{
    fmt,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use eyre::{Result, WrapErr};
use serde::Serialize;

/// Key/value access to project files.
///
/// Paths are relative to the store's root. A missing file is `Ok(None)`;
/// anything else that prevents a read is an error.
pub trait FileStore {
    /// Read a file as UTF-8 text.
    fn read(&self, path: &Path) -> Result<Option<String>>;

    /// Write a file, creating parent directories as needed.
    fn write(&self, path: &Path, content: &str) -> Result<()>;

    /// Check if a file exists.
    fn exists(&self, path: &Path) -> bool;
}

impl<S: FileStore + ?Sized> FileStore for &S {
    fn read(&self, path: &Path) -> Result<Option<String>> {
        (**self).read(path)
    }

    fn write(&self, path: &Path, content: &str) -> Result<()> {
        (**self).write(path, content)
    }

    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }
}

/// File store backed by the local filesystem, rooted at a project directory.
#[derive(Debug, Clone)]
pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }
}

impl FileStore for FsStore {
    fn read(&self, path: &Path) -> Result<Option<String>> {
        let full = self.resolve(path);
        match std::fs::read_to_string(&full) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).wrap_err_with(|| format!("failed to read {}", full.display())),
        }
    }

    fn write(&self, path: &Path, content: &str) -> Result<()> {
        write_file(&self.resolve(path), content)
    }

    fn exists(&self, path: &Path) -> bool {
        self.resolve(path).exists()
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(path, content).wrap_err_with(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

/// What an `ensure_*` operation did to its target file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// The file did not exist and was generated from scratch.
    Created,
    /// The file existed and content was added.
    Updated,
    /// Nothing to do; the file is byte-for-byte what it was.
    Unchanged,
}

impl Outcome {
    /// Whether the target needs to be written back.
    pub fn is_changed(self) -> bool {
        !matches!(self, Self::Unchanged)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Updated => "updated",
            Self::Unchanged => "unchanged",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a pure text transformation: the new text and what happened.
///
/// When the outcome is [`Outcome::Unchanged`], `text` holds the input
/// verbatim (or nothing, if there was no input).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    pub text: Option<String>,
    pub outcome: Outcome,
}

impl Change {
    pub fn created(text: String) -> Self {
        Self {
            text: Some(text),
            outcome: Outcome::Created,
        }
    }

    /// Compare against the original and report `Updated` only if bytes differ.
    pub fn compare(original: &str, text: String) -> Self {
        let outcome = if text == original {
            Outcome::Unchanged
        } else {
            Outcome::Updated
        };
        Self {
            text: Some(text),
            outcome,
        }
    }

    pub fn unchanged(original: Option<&str>) -> Self {
        Self {
            text: original.map(str::to_string),
            outcome: Outcome::Unchanged,
        }
    }

    /// Write the new text to `path` if anything changed.
    pub fn persist(&self, store: &dyn FileStore, path: &Path) -> Result<Outcome> {
        if let (true, Some(text)) = (self.outcome.is_changed(), &self.text) {
            store.write(path, text)?;
            tracing::info!(path = %path.display(), outcome = %self.outcome, "wrote generated file");
        }
        Ok(self.outcome)
    }
}

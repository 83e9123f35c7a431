use std::path::{Path, PathBuf};

use super::Manifest;
use crate::Result;

/// File name of the project configuration.
pub const MANIFEST_FILE: &str = "chedit.toml";

/// Represents a chedit.toml file with both raw content and parsed manifest.
pub struct CheditToml {
    path: PathBuf,
    content: Option<String>,
    manifest: Manifest,
}

impl CheditToml {
    /// Open and parse a chedit.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(crate::Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let manifest = Manifest::parse_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content: Some(content),
            manifest,
        })
    }

    /// Load `chedit.toml` from a project root, falling back to defaults if absent.
    pub fn discover(root: impl AsRef<Path>) -> Result<Self> {
        let path = root.as_ref().join(MANIFEST_FILE);
        if path.exists() {
            Self::open(path)
        } else {
            Ok(Self {
                path,
                content: None,
                manifest: Manifest::default(),
            })
        }
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the manifest came from a file on disk.
    pub fn is_on_disk(&self) -> bool {
        self.content.is_some()
    }

    /// Get the parsed manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }
}

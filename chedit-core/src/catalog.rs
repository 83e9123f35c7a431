//! Read-only access to the component template catalog.

use std::{
    path::{Path, PathBuf},
    sync::LazyLock,
};

use eyre::{Result, WrapErr};
use regex::Regex;
use serde::Serialize;

use crate::{FileKey, lowercase_request};

/// Keys of the templates shipped with the editor.
pub const KNOWN_TEMPLATES: &[&str] = &[
    "callout",
    "classname",
    "code-mentions",
    "collapse",
    "copy-button",
    "diff",
    "file-name",
    "focus",
    "fold",
    "footnotes",
    "language-switcher",
    "line-numbers",
    "link",
    "mark",
    "scrollycoding",
    "slideshow",
    "spotlight",
    "tabs",
    "token-transitions",
    "tooltip",
    "transpile",
    "typescript",
    "word-wrap",
];

/// Templates rendered as page layouts rather than code annotations.
pub const LAYOUT_TEMPLATES: &[&str] = &["spotlight", "slideshow", "scrollycoding"];

/// Companion files that must be copied alongside a template.
const COMPANION_FILES: &[(&str, &[&str])] = &[
    ("focus", &["focus.client.tsx"]),
    ("token-transitions", &["smooth-pre.tsx"]),
    ("tabs", &["tabs.client.tsx"]),
    ("language-switcher", &["language-switcher.client.tsx"]),
];

/// Templates that require other templates to also be injected.
const TEMPLATE_DEPENDENCIES: &[(&str, &[&str])] = &[("diff", &["mark"])];

/// Regex for the leading `/* MDX Snippet: ... */` comment of a template.
///
/// SAFETY: Pattern is a compile-time constant that is known to be valid.
#[allow(clippy::unwrap_used)]
static SNIPPET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/\*\s*MDX Snippet:\s*((?s:.)*?)\*/").unwrap());

/// Companion file names for a template key.
pub fn companions(key: &FileKey) -> &'static [&'static str] {
    lookup(COMPANION_FILES, key.as_str())
}

/// Template keys that must be injected together with `key`.
pub fn dependencies(key: &FileKey) -> &'static [&'static str] {
    lookup(TEMPLATE_DEPENDENCIES, key.as_str())
}

fn lookup(table: &'static [(&str, &'static [&'static str])], key: &str) -> &'static [&'static str] {
    table
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| *v)
        .unwrap_or(&[])
}

/// Resolve a free-form request to the key of a catalog template.
///
/// The hyphenated key (`CopyButton` -> `copy-button`) is preferred. When the
/// catalog has no such template, the plain lowercased spelling is tried
/// (`TypeScript` -> `typescript`). If neither exists the hyphenated key is
/// returned so the caller reports it as missing.
pub fn resolve_key(catalog: &dyn TemplateCatalog, request: &str) -> FileKey {
    let key = FileKey::from_request(request);
    if catalog.contains(&key) {
        return key;
    }
    let plain = FileKey::new(lowercase_request(request));
    if plain != key && catalog.contains(&plain) {
        tracing::debug!(request, key = %plain, "resolved request without hyphenation");
        return plain;
    }
    key
}

/// Extract the MDX usage snippet from a template, or an empty string.
pub fn extract_snippet(template: &str) -> String {
    SNIPPET_RE
        .captures(template)
        .map(|caps| caps[1].trim().to_string())
        .unwrap_or_default()
}

/// Lookup from a file key to template source text.
pub trait TemplateCatalog {
    /// Source text of a template, or `None` if it cannot be read.
    fn template(&self, key: &FileKey) -> Option<String>;

    /// Source text of a companion file, or `None` if it cannot be read.
    fn companion(&self, file_name: &str) -> Option<String>;

    /// All template keys in the catalog, sorted.
    fn keys(&self) -> Result<Vec<FileKey>>;

    /// Whether a template exists for `key`.
    fn contains(&self, key: &FileKey) -> bool {
        self.template(key).is_some()
    }
}

/// Templates grouped the way the editor presents them.
#[derive(Debug, Default, Serialize)]
pub struct TemplateListing {
    pub code: Vec<FileKey>,
    pub layouts: Vec<FileKey>,
}

impl TemplateListing {
    pub fn from_keys(keys: impl IntoIterator<Item = FileKey>) -> Self {
        let (layouts, code) = keys
            .into_iter()
            .partition(|key| LAYOUT_TEMPLATES.contains(&key.as_str()));
        Self { code, layouts }
    }
}

/// Catalog reading `<dir>/<key>.tsx` files.
#[derive(Debug, Clone)]
pub struct DirCatalog {
    dir: PathBuf,
}

impl DirCatalog {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the template file for a key.
    pub fn template_path(&self, key: &FileKey) -> PathBuf {
        self.dir.join(format!("{}.tsx", key))
    }

    fn read(&self, path: &Path) -> Option<String> {
        match std::fs::read_to_string(path) {
            Ok(content) => Some(content),
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "template not readable");
                None
            }
        }
    }
}

impl TemplateCatalog for DirCatalog {
    fn template(&self, key: &FileKey) -> Option<String> {
        self.read(&self.template_path(key))
    }

    fn companion(&self, file_name: &str) -> Option<String> {
        self.read(&self.dir.join(file_name))
    }

    fn contains(&self, key: &FileKey) -> bool {
        self.template_path(key).is_file()
    }

    fn keys(&self) -> Result<Vec<FileKey>> {
        let entries = std::fs::read_dir(&self.dir)
            .wrap_err_with(|| format!("failed to list templates in {}", self.dir.display()))?;

        let mut keys = Vec::new();
        for entry in entries {
            let entry = entry?;
            let file_name = entry.file_name().to_string_lossy().into_owned();
            let Some(stem) = file_name.strip_suffix(".tsx") else {
                continue;
            };
            // Skip companions such as focus.client.tsx and smooth-pre.tsx
            let is_companion = COMPANION_FILES
                .iter()
                .any(|(_, files)| files.contains(&file_name.as_str()));
            if stem.contains('.') || is_companion {
                continue;
            }
            keys.push(FileKey::new(stem));
        }
        keys.sort();
        Ok(keys)
    }
}

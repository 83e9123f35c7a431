//! Conversion between component display names and on-disk file keys.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Convert a component name to its file key (e.g., "CopyButton" -> "copy-button").
///
/// A hyphen is inserted between a lowercase letter and a following uppercase
/// letter, then the whole string is lowercased. Only ASCII letters take part.
/// Acronyms do not survive the way back: `HTMLBlock` becomes `htmlblock`.
pub fn to_file_key(name: &str) -> String {
    let mut result = String::with_capacity(name.len() + 4);
    let mut prev_lower = false;
    for c in name.chars() {
        if prev_lower && c.is_ascii_uppercase() {
            result.push('-');
        }
        prev_lower = c.is_ascii_lowercase();
        result.push(c.to_ascii_lowercase());
    }
    result
}

/// Convert a file key to its component name (e.g., "copy-button" -> "CopyButton").
pub fn to_component_name(key: &str) -> String {
    key.split('-')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

/// Normalize a free-form component request into a file key.
///
/// Requests arrive as keys (`copy-button`), display names (`CopyButton`)
/// or loosely spelled names (`Copy Button`). Whitespace runs become `-` and
/// each word goes through [`to_file_key`].
pub fn normalize_request(name: &str) -> String {
    name.split_whitespace()
        .map(to_file_key)
        .collect::<Vec<_>>()
        .join("-")
}

/// Lowercase a request without splitting words at case changes.
///
/// This is the spelling of keys such as `classname` and `typescript`,
/// whose display names (`ClassName`, `TypeScript`) do not hyphenate.
pub fn lowercase_request(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// Hyphenated, lowercase identifier of a template (e.g. `copy-button`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileKey(String);

impl FileKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Build a key from a request string, see [`normalize_request`].
    pub fn from_request(request: &str) -> Self {
        Self(normalize_request(request))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn to_component_name(&self) -> ComponentName {
        ComponentName(to_component_name(&self.0))
    }
}

impl fmt::Display for FileKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FileKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FileKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

/// Capitalized identifier used in documents and generated code (e.g. `CopyButton`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentName(String);

impl ComponentName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn to_file_key(&self) -> FileKey {
        FileKey(to_file_key(&self.0))
    }
}

impl fmt::Display for ComponentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ComponentName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ComponentName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

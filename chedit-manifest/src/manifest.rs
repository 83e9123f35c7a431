//! Manifest types and parsing for chedit.toml files.

use std::{
    fmt,
    path::{Component, Path, PathBuf},
};

use serde::Deserialize;

use crate::{Result, SourceContext};

/// Default directory components are copied into, relative to the project root.
pub const DEFAULT_COMPONENTS_DIR: &str = "app/components";

/// Default location of the template catalog, relative to the project root.
pub const DEFAULT_TEMPLATES_DIR: &str = "node_modules/codehike-editor/dist/templates";

/// Default highlighting theme used by a freshly generated code component.
pub const DEFAULT_THEME: &str = "github-dark";

/// Root manifest for chedit.toml
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Project layout
    #[serde(default)]
    pub project: ProjectConfig,

    /// Generated code component settings
    #[serde(default)]
    pub code: CodeConfig,
}

/// Where things live inside the project.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Directory templates are copied into; also holds the code component file
    #[serde(default = "default_components")]
    pub components: PathBuf,

    /// Template catalog directory
    #[serde(default = "default_templates")]
    pub templates: PathBuf,

    /// Extension of the generated files
    #[serde(default)]
    pub extension: Extension,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            components: default_components(),
            templates: default_templates(),
            extension: Extension::default(),
        }
    }
}

fn default_components() -> PathBuf {
    PathBuf::from(DEFAULT_COMPONENTS_DIR)
}

fn default_templates() -> PathBuf {
    PathBuf::from(DEFAULT_TEMPLATES_DIR)
}

/// Settings for the generated code component.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CodeConfig {
    /// Theme passed to `highlight()`
    #[serde(default = "default_theme")]
    pub theme: String,
}

impl Default for CodeConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
        }
    }
}

fn default_theme() -> String {
    DEFAULT_THEME.to_string()
}

/// Extension of generated source files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Extension {
    #[default]
    Tsx,
    Jsx,
}

impl Extension {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tsx => "tsx",
            Self::Jsx => "jsx",
        }
    }

    /// Whether generated files may carry TypeScript annotations.
    pub fn is_typed(self) -> bool {
        matches!(self, Self::Tsx)
    }
}

impl fmt::Display for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Manifest {
    /// Parse a manifest from a string (uses "chedit.toml" as default filename)
    pub fn parse(content: &str) -> Result<Self> {
        Self::parse_with_filename(content, "chedit.toml")
    }

    /// Parse a manifest with a custom filename for error reporting
    pub fn parse_with_filename(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        let manifest: Manifest = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
        manifest.validate(&ctx)?;
        Ok(manifest)
    }

    fn validate(&self, ctx: &SourceContext) -> Result<()> {
        if let Some(reason) = relative_path_problem(&self.project.components) {
            return Err(ctx.invalid_value("components", reason));
        }
        if self.code.theme.trim().is_empty() {
            return Err(ctx.invalid_value("theme", "theme must not be empty"));
        }
        Ok(())
    }

    /// The components directory as a forward-slash import base (e.g. `app/components`).
    pub fn import_base(&self) -> String {
        self.project
            .components
            .components()
            .filter_map(|c| match c {
                Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("/")
    }
}

fn relative_path_problem(path: &Path) -> Option<&'static str> {
    if path.as_os_str().is_empty() {
        return Some("path must not be empty");
    }
    if path.is_absolute() {
        return Some("path must be relative to the project root");
    }
    if path.components().any(|c| matches!(c, Component::ParentDir)) {
        return Some("path must stay inside the project root");
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_defaults_from_empty_file() {
        let manifest = Manifest::parse("").unwrap();
        assert_eq!(manifest.project.components, PathBuf::from("app/components"));
        assert_eq!(manifest.project.extension, Extension::Tsx);
        assert!(manifest.project.extension.is_typed());
        assert_eq!(manifest.code.theme, "github-dark");
        assert_eq!(manifest.import_base(), "app/components");
    }

    #[test]
    fn test_full_manifest() {
        let manifest = Manifest::parse(
            r#"
            [project]
            components = "src/components/hike"
            templates = "templates"
            extension = "jsx"

            [code]
            theme = "github-light"
            "#,
        )
        .unwrap();

        assert_eq!(manifest.import_base(), "src/components/hike");
        assert_eq!(manifest.project.templates, PathBuf::from("templates"));
        assert!(!manifest.project.extension.is_typed());
        assert_eq!(manifest.project.extension.to_string(), "jsx");
        assert_eq!(manifest.code.theme, "github-light");
    }

    #[test]
    fn test_unknown_extension_is_parse_error() {
        let err = Manifest::parse("[project]\nextension = \"vue\"\n").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_unknown_key_is_parse_error() {
        let err = Manifest::parse("[project]\ncomponent = \"x\"\n").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_components_outside_root_rejected() {
        let err = Manifest::parse("[project]\ncomponents = \"../shared\"\n").unwrap_err();
        match *err {
            Error::InvalidValue { key, span, .. } => {
                assert_eq!(key, "components");
                assert!(span.is_some());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_theme_rejected() {
        let err = Manifest::parse("[code]\ntheme = \"  \"\n").unwrap_err();
        assert!(matches!(*err, Error::InvalidValue { ref key, .. } if key == "theme"));
    }

    #[test]
    fn test_import_base_strips_cur_dir() {
        let manifest = Manifest::parse("[project]\ncomponents = \"./app/ui\"\n").unwrap();
        assert_eq!(manifest.import_base(), "app/ui");
    }
}

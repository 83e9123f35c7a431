//! Parsing and validation of `chedit.toml`, the optional project configuration.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod file;
mod manifest;

pub use error::{Error, Result, SourceContext};
pub use file::{CheditToml, MANIFEST_FILE};
pub use manifest::{
    CodeConfig, DEFAULT_COMPONENTS_DIR, DEFAULT_TEMPLATES_DIR, DEFAULT_THEME, Extension, Manifest,
    ProjectConfig,
};

//! Core utilities and types for the chedit component injector.
//!
//! This crate provides the pieces shared by the generators and the CLI:
//! name normalization, the file store abstraction, the template catalog
//! and component detection.

pub mod catalog;
pub mod detect;
mod file;
mod names;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use catalog::{DirCatalog, TemplateCatalog, TemplateListing};
pub use detect::detect_components;
// File operations
pub use file::{Change, FileStore, FsStore, Outcome};
// Naming
pub use names::{
    ComponentName, FileKey, lowercase_request, normalize_request, to_component_name, to_file_key,
};

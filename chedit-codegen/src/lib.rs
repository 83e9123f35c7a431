//! Idempotent generators for the files that wire Code Hike components into
//! an MDX project.
//!
//! Two files are owned here:
//!
//! - the code component (`<components>/code.tsx`), which imports annotation
//!   handlers and hands them to `<Pre>`, optionally wrapped by decorator
//!   components;
//! - the MDX registration file (`mdx-components.tsx`).
//!
//! Every generator comes in two layers. The pure functions in
//! [`code_component`], [`wrappers`], [`mdx`] and [`styles`] take the current
//! text (or `None` if the file is absent) and return a [`Change`]. The
//! [`Project`] methods read the target through a [`FileStore`], run the pure
//! function and write back only when something changed.
//!
//! The engine splices text with regular expressions; it does not parse
//! TypeScript. See [`splice`] for the shapes it understands.
//!
//! [`Change`]: chedit_core::Change
//! [`FileStore`]: chedit_core::FileStore

mod builder;
pub mod code_component;
mod exports;
mod import;
pub mod inject;
pub mod mdx;
pub mod oracle;
mod project;
pub mod registry;
pub mod splice;
pub mod styles;
pub mod wrappers;

pub use builder::CodeBuilder;
pub use code_component::{CodeBatch, HandlerDescriptor};
pub use exports::{HANDLER_TYPE, extract_handler_exports};
pub use import::Import;
pub use inject::{Injection, inject, resolve_requests};
pub use oracle::is_already_injected;
pub use project::Project;

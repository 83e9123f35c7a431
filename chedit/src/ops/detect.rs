//! Detect operation - Code Hike components used by an MDX file.

use std::path::Path;

use chedit_core::detect_components;
use eyre::{Context, Result};

use crate::reports::DetectReport;

/// Execute the detect operation.
pub fn detect(path: &Path) -> Result<DetectReport> {
    let content = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read {}", path.display()))?;

    Ok(DetectReport {
        path: path.to_path_buf(),
        components: detect_components(&content),
    })
}

//! Templates operation - list the catalog or show one template's snippet.

use chedit_core::{
    TemplateCatalog, TemplateListing,
    catalog::{extract_snippet, resolve_key},
};
use eyre::{Context, Result, eyre};

use crate::reports::{SnippetReport, TemplatesReport};

/// List the templates in the catalog.
pub fn templates(catalog: &dyn TemplateCatalog) -> Result<TemplatesReport> {
    let keys = catalog.keys().wrap_err("Failed to list templates")?;
    Ok(TemplatesReport {
        listing: TemplateListing::from_keys(keys),
    })
}

/// Show the MDX usage snippet of one template.
pub fn snippet(catalog: &dyn TemplateCatalog, name: &str) -> Result<SnippetReport> {
    let key = resolve_key(catalog, name);
    let template = catalog
        .template(&key)
        .ok_or_else(|| eyre!("Template '{}' not found", key))?;

    Ok(SnippetReport {
        snippet: extract_snippet(&template),
        key,
    })
}

//! Handler export extraction from template source.

use std::sync::LazyLock;

use regex::Regex;

/// Type annotation that marks an export as an annotation handler.
pub const HANDLER_TYPE: &str = "AnnotationHandler";

/// Regex for `export const <name>: AnnotationHandler`.
///
/// The second group catches indexed access such as `AnnotationHandler["Inline"]`,
/// which types a component slot rather than a handler.
///
/// SAFETY: Pattern is a compile-time constant that is known to be valid.
#[allow(clippy::unwrap_used)]
static HANDLER_EXPORT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"export const (\w+)\s*:\s*AnnotationHandler\b(\s*\[)?").unwrap()
});

/// Identifiers exported with the handler type, in order of appearance.
pub fn extract_handler_exports(content: &str) -> Vec<String> {
    HANDLER_EXPORT_RE
        .captures_iter(content)
        .filter(|caps| caps.get(2).is_none())
        .map(|caps| caps[1].to_string())
        .collect()
}

//! Detection of templates that are already wired into the code component.

use chedit_core::FileKey;

use crate::{exports::extract_handler_exports, registry, splice::handler_array_entries};

/// Whether `key` is already wired into the generated code component.
///
/// A handler template counts as injected once every one of its handler
/// exports is in the handler array. Inline handlers and wrappers are
/// detected by their import name or marker. Anything else, or a missing
/// code file or template, is not injected.
pub fn is_already_injected(generated: Option<&str>, template: Option<&str>, key: &FileKey) -> bool {
    let (Some(generated), Some(template)) = (generated, template) else {
        return false;
    };

    let exports = extract_handler_exports(template);
    if !exports.is_empty() {
        let existing = handler_array_entries(generated);
        return exports.iter().all(|name| existing.contains(name));
    }

    if let Some(inline) = registry::inline_handler(key) {
        return generated.contains(inline.import_name);
    }
    if let Some(wrapper) = registry::wrapper(key) {
        return generated.contains(wrapper.marker);
    }
    false
}

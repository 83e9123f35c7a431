//! Wrapping the rendered `<Pre>` element with decorator components.

use std::sync::LazyLock;

use chedit_core::{Change, FileKey};
use regex::Regex;

use crate::{
    Import,
    registry::{self, Wrapper},
    splice,
};

/// Regex for `return <Pre ... />`, optionally parenthesized.
///
/// SAFETY: Pattern is a compile-time constant that is known to be valid.
#[allow(clippy::unwrap_used)]
static RETURN_PRE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"return\s*(?:\(\s*)?(<Pre\b(?s:.)*?/>)(?:\s*\))?").unwrap()
});

/// Apply the wrappers among `keys` to the code component.
///
/// Wrappers whose marker is already present are skipped. If the return
/// expression is not a bare `<Pre />`, the import is still added but the
/// wrap is not, so only the first wrapper of a batch lands in one pass.
pub fn ensure_code_wrappers(target: Option<&str>, keys: &[FileKey]) -> Change {
    let Some(original) = target else {
        return Change::unchanged(None);
    };

    let mut content = original.to_string();
    for wrapper in keys.iter().filter_map(registry::wrapper) {
        if content.contains(wrapper.marker) {
            continue;
        }
        if let Some(name) = wrapper.import {
            let import = Import::sibling(wrapper.key).named(name);
            content = splice::insert_after_last_import(&content, &import.render());
        }
        match wrap_return(&content, wrapper) {
            Some(wrapped) => content = wrapped,
            None => tracing::debug!(wrapper = wrapper.key, "no `return <Pre />` to wrap"),
        }
    }

    Change::compare(original, content)
}

fn wrap_return(content: &str, wrapper: &Wrapper) -> Option<String> {
    let caps = RETURN_PRE_RE.captures(content)?;
    let range = caps.get(0)?.range();
    let replacement = format!("return (\n    {}\n  )", wrapper.wrap(&caps[1]));

    let mut out = String::with_capacity(content.len() + replacement.len());
    out.push_str(&content[..range.start]);
    out.push_str(&replacement);
    out.push_str(&content[range.end..]);
    Some(out)
}

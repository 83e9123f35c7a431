//! Generator for the code component file (`code.tsx`).

use chedit_core::{Change, FileKey, TemplateCatalog};
use chedit_manifest::Extension;
use indexmap::IndexSet;

use crate::{
    CodeBuilder, Import,
    exports::{HANDLER_TYPE, extract_handler_exports},
    registry::{self, InlineHandler},
    splice,
};

/// Module the render primitives are imported from.
pub const CODEHIKE_MODULE: &str = "codehike/code";

/// A template and the handler names it exports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerDescriptor {
    pub key: FileKey,
    pub exports: Vec<String>,
}

/// The part of a request the code component cares about.
#[derive(Debug, Default)]
pub struct CodeBatch {
    pub handlers: Vec<HandlerDescriptor>,
    pub inline: Vec<&'static InlineHandler>,
}

impl CodeBatch {
    /// Partition keys into inline handlers and exported handlers.
    ///
    /// Inline handlers are resolved from the static table first. Templates
    /// that cannot be read or export no handlers are dropped.
    pub fn resolve(keys: &[FileKey], catalog: &dyn TemplateCatalog) -> Self {
        let mut batch = Self::default();
        let unique: IndexSet<&FileKey> = keys.iter().collect();

        for key in unique {
            if let Some(inline) = registry::inline_handler(key) {
                batch.inline.push(inline);
                continue;
            }
            let Some(template) = catalog.template(key) else {
                tracing::debug!(%key, "template not readable, skipping");
                continue;
            };
            let exports = extract_handler_exports(&template);
            if exports.is_empty() {
                continue;
            }
            batch.handlers.push(HandlerDescriptor {
                key: key.clone(),
                exports,
            });
        }
        batch
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty() && self.inline.is_empty()
    }
}

/// Bring the code component in line with `batch`.
///
/// An absent file is generated from scratch. An existing one only gets
/// what it is missing: imports, handler array entries and inline handler
/// definitions. Nothing is removed or reordered.
///
/// A `jsx` target gets no type annotations or type imports.
pub fn ensure_code_component(
    target: Option<&str>,
    batch: &CodeBatch,
    theme: &str,
    extension: Extension,
) -> Change {
    if batch.is_empty() {
        return Change::unchanged(target);
    }
    match target {
        None => Change::created(render_code_component(batch, theme, extension)),
        Some(existing) => Change::compare(
            existing,
            update_code_component(existing, batch, extension.is_typed()),
        ),
    }
}

/// Render a fresh code component for `batch`.
pub fn render_code_component(batch: &CodeBatch, theme: &str, extension: Extension) -> String {
    let typed = extension.is_typed();
    let mut primitives = if typed {
        Import::new(CODEHIKE_MODULE).named_all(["Pre", "RawCode", "highlight"])
    } else {
        Import::new(CODEHIKE_MODULE).named_all(["Pre", "highlight"])
    };
    if typed && !batch.inline.is_empty() {
        primitives = primitives.named(HANDLER_TYPE);
    }

    let mut imports = vec![primitives.render()];
    let mut handler_names: Vec<&str> = Vec::new();
    for handler in &batch.handlers {
        imports.push(
            Import::sibling(handler.key.as_str())
                .named_all(&handler.exports)
                .render(),
        );
        handler_names.extend(handler.exports.iter().map(String::as_str));
    }
    for inline in &batch.inline {
        imports.push(Import::sibling(inline.key).named(inline.import_name).render());
        handler_names.push(inline.handler_name);
    }

    let definitions: Vec<String> = batch.inline.iter().map(|h| h.definition(typed)).collect();
    let signature = if typed {
        "export async function Code({ codeblock }: { codeblock: RawCode }) {"
    } else {
        "export async function Code({ codeblock }) {"
    };

    CodeBuilder::new()
        .each(&imports, |b, import| b.line(import))
        .blank()
        .block_with_close(signature, "}", |b| {
            b.line(&format!(
                "const highlighted = await highlight(codeblock, \"{}\")",
                theme
            ))
            .line(&format!(
                "return <Pre code={{highlighted}} handlers={{[{}]}} />",
                handler_names.join(", ")
            ))
        })
        .when(!definitions.is_empty(), |b| {
            b.blank().line(&definitions.join("\n\n"))
        })
        .build()
}

fn update_code_component(existing: &str, batch: &CodeBatch, typed: bool) -> String {
    let mut content = existing.to_string();

    for handler in &batch.handlers {
        let from = format!("./{}", handler.key);
        let missing: Vec<&str> = handler
            .exports
            .iter()
            .map(String::as_str)
            .filter(|name| !splice::has_named_import(&content, name, &from))
            .collect();
        if missing.is_empty() {
            continue;
        }

        let import = Import::new(from.as_str()).named_all(missing.iter().copied());
        content = splice::insert_after_last_import(&content, &import.render());
        for name in missing {
            content = add_handler(content, name);
        }
    }

    for inline in &batch.inline {
        if content.contains(inline.import_name) {
            continue;
        }
        let import = Import::sibling(inline.key).named(inline.import_name);
        content = splice::insert_after_last_import(&content, &import.render());
        if typed
            && let Some(updated) = splice::add_to_named_import(&content, CODEHIKE_MODULE, HANDLER_TYPE)
        {
            content = updated;
        }
        content = format!("{}\n\n{}\n", content.trim_end(), inline.definition(typed));
        content = add_handler(content, inline.handler_name);
    }

    content
}

fn add_handler(content: String, name: &str) -> String {
    if splice::handler_array_entries(&content).iter().any(|e| e == name) {
        return content;
    }
    match splice::append_to_handler_array(&content, name) {
        Some(updated) => updated,
        None => {
            tracing::debug!(handler = name, "no handler array found, not registering");
            content
        }
    }
}

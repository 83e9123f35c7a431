//! Generator for the MDX registration file (`mdx-components.tsx`).

use chedit_core::{Change, FileKey};
use chedit_manifest::Extension;
use indexmap::{IndexMap, IndexSet};

use crate::{
    CodeBuilder, Import,
    registry::{self, MdxComponent},
    splice,
};

/// Make sure every MDX component required by `keys` is registered.
///
/// `import_base` is the components directory relative to the project
/// root, with forward slashes (e.g. `app/components`). A fresh `jsx` file
/// is rendered without the `MDXComponents` type.
pub fn ensure_mdx_registration(
    target: Option<&str>,
    keys: &[FileKey],
    import_base: &str,
    extension: Extension,
) -> Change {
    let unique: IndexSet<&FileKey> = keys.iter().collect();
    let components: Vec<&MdxComponent> = unique
        .into_iter()
        .flat_map(registry::mdx_components)
        .collect();
    if components.is_empty() {
        return Change::unchanged(target);
    }

    match target {
        None => Change::created(render_mdx_components(&components, import_base, extension)),
        Some(existing) => Change::compare(
            existing,
            update_mdx_components(existing, &components, import_base),
        ),
    }
}

/// Module path of a template as seen from the project root.
pub fn module_path(import_base: &str, key: &str) -> String {
    let base = import_base.trim_matches('/');
    if base.is_empty() {
        format!("./{}", key)
    } else {
        format!("./{}/{}", base, key)
    }
}

fn render_mdx_components(
    components: &[&MdxComponent],
    import_base: &str,
    extension: Extension,
) -> String {
    let mut by_file: IndexMap<&str, Vec<&str>> = IndexMap::new();
    for c in components {
        by_file.entry(c.key).or_default().push(c.component);
    }

    let imports: Vec<String> = by_file
        .iter()
        .map(|(key, names)| {
            Import::new(module_path(import_base, key))
                .named_all(names.iter().copied())
                .render()
        })
        .collect();

    let typed = extension.is_typed();
    let signature = if typed {
        "export function useMDXComponents(components: MDXComponents): MDXComponents {"
    } else {
        "export function useMDXComponents(components) {"
    };

    CodeBuilder::new()
        .when(typed, |b| {
            b.line(
                &Import::new("mdx/types")
                    .named("MDXComponents")
                    .type_only()
                    .render(),
            )
        })
        .each(&imports, |b, import| b.line(import))
        .blank()
        .block_with_close(signature, "}", |b| {
            b.block_with_close("return {", "}", |b| {
                b.line("...components,")
                    .each(components, |b, c| b.line(&format!("{},", c.entry())))
            })
        })
        .build()
}

fn update_mdx_components(existing: &str, components: &[&MdxComponent], import_base: &str) -> String {
    let mut content = existing.to_string();

    for component in components {
        if content.contains(component.component) {
            continue;
        }

        let from = module_path(import_base, component.key);
        content = match splice::add_to_named_import(&content, &from, component.component) {
            Some(merged) => merged,
            None => {
                let import = Import::new(from.as_str()).named(component.component);
                splice::insert_after_last_import(&content, &import.render())
            }
        };

        match splice::append_to_return_object(&content, &component.entry()) {
            Some(updated) => content = updated,
            None => tracing::debug!(
                component = component.component,
                "no returned object found, not registering"
            ),
        }
    }

    content
}

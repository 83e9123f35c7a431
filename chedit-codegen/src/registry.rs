//! Static tables of the templates that need more than an import and a
//! handler array entry.

use chedit_core::FileKey;

/// A handler defined inline in the code component.
///
/// The template exports a component (`import_name`) that the handler wires
/// into the `Inline` slot; the handler object itself lives in the code file.
#[derive(Debug, PartialEq, Eq)]
pub struct InlineHandler {
    pub key: &'static str,
    pub import_name: &'static str,
    pub handler_name: &'static str,
    /// Object literal assigned to `handler_name`.
    pub body: &'static str,
}

impl InlineHandler {
    /// The `const` declaration of the handler, annotated when `typed`.
    pub fn definition(&self, typed: bool) -> String {
        if typed {
            format!("const {}: AnnotationHandler = {}", self.handler_name, self.body)
        } else {
            format!("const {} = {}", self.handler_name, self.body)
        }
    }
}

/// A component that wraps the rendered `<Pre>` element.
#[derive(Debug)]
pub struct Wrapper {
    pub key: &'static str,
    /// Substring whose presence means the wrapper is applied.
    pub marker: &'static str,
    /// Named import from the template file, if the wrapper needs one.
    pub import: Option<&'static str>,
    wrap: fn(&str) -> String,
}

impl Wrapper {
    /// Wrap a `<Pre ... />` expression.
    pub fn wrap(&self, pre: &str) -> String {
        (self.wrap)(pre)
    }
}

/// A component registered in the MDX components map.
#[derive(Debug, PartialEq, Eq)]
pub struct MdxComponent {
    pub key: &'static str,
    pub component: &'static str,
    pub register_as: &'static str,
}

impl MdxComponent {
    /// Object entry for the returned components map.
    pub fn entry(&self) -> String {
        if self.component == self.register_as {
            self.component.to_string()
        } else {
            format!("{}: {}", self.register_as, self.component)
        }
    }
}

pub static INLINE_HANDLERS: &[InlineHandler] = &[InlineHandler {
    key: "fold",
    import_name: "InlineFold",
    handler_name: "fold",
    body: "{\n  name: \"fold\",\n  Inline: InlineFold,\n}",
}];

pub static WRAPPERS: &[Wrapper] = &[
    Wrapper {
        key: "copy-button",
        marker: "CopyButton",
        import: Some("CopyButton"),
        wrap: wrap_copy_button,
    },
    Wrapper {
        key: "file-name",
        marker: "highlighted.meta",
        import: None,
        wrap: wrap_file_name,
    },
];

pub static MDX_COMPONENTS: &[MdxComponent] = &[
    MdxComponent {
        key: "code-mentions",
        component: "HoverContainer",
        register_as: "HoverContainer",
    },
    MdxComponent {
        key: "code-mentions",
        component: "Link",
        register_as: "a",
    },
];

fn wrap_copy_button(pre: &str) -> String {
    format!(
        "<div className=\"relative\">\n      <CopyButton text={{highlighted.code}} />\n      {}\n    </div>",
        pre
    )
}

fn wrap_file_name(pre: &str) -> String {
    format!(
        "<div className=\"px-4 bg-zinc-950 rounded\">\n      \
         <div className=\"text-center text-zinc-400 text-sm py-2\">\n        \
         {{highlighted.meta}}\n      \
         </div>\n      \
         {}\n    \
         </div>",
        pre
    )
}

pub fn inline_handler(key: &FileKey) -> Option<&'static InlineHandler> {
    INLINE_HANDLERS.iter().find(|h| h.key == key.as_str())
}

pub fn wrapper(key: &FileKey) -> Option<&'static Wrapper> {
    WRAPPERS.iter().find(|w| w.key == key.as_str())
}

/// MDX components registered for a template, in registration order.
pub fn mdx_components(key: &FileKey) -> impl Iterator<Item = &'static MdxComponent> + '_ {
    MDX_COMPONENTS.iter().filter(move |c| c.key == key.as_str())
}

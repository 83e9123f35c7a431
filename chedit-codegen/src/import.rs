//! Import statement builder.
//!
//! Generated files use the formatting of the editor's templates:
//! `import { a, b } from "./a"` with no trailing semicolon.

/// Builder for a single-line ES import statement.
#[derive(Debug, Clone)]
pub struct Import {
    from: String,
    named: Vec<String>,
    type_only: bool,
}

impl Import {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            named: Vec::new(),
            type_only: false,
        }
    }

    /// Import from a sibling module (`./<name>`).
    pub fn sibling(name: &str) -> Self {
        Self::new(format!("./{}", name))
    }

    /// Import a named export.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(name.into());
        self
    }

    /// Import several named exports in order.
    pub fn named_all<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.named.extend(names.into_iter().map(Into::into));
        self
    }

    /// Make this a type-only import (`import type { ... }`).
    pub fn type_only(mut self) -> Self {
        self.type_only = true;
        self
    }

    /// Render the import without a trailing newline.
    pub fn render(&self) -> String {
        let type_kw = if self.type_only { "type " } else { "" };
        format!(
            "import {}{{ {} }} from \"{}\"",
            type_kw,
            self.named.join(", "),
            self.from
        )
    }
}

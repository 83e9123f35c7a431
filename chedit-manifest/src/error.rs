use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Carries the raw `chedit.toml` content and its filename so errors can
/// point at the offending span.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a validation error, pointing at the value of `key` if it can be found.
    pub fn invalid_value(&self, key: &str, message: impl Into<String>) -> Box<Error> {
        Box::new(Error::InvalidValue {
            src: self.named_source(),
            span: find_value_span(&self.src, key),
            key: key.to_string(),
            message: message.into(),
        })
    }
}

/// Locate the value of a `key = value` line.
pub(crate) fn find_value_span(src: &str, key: &str) -> Option<SourceSpan> {
    let mut offset = 0;
    for line in src.split_inclusive('\n') {
        let trimmed = line.trim_start();
        if let Some(rest) = trimmed.strip_prefix(key) {
            let rest_trimmed = rest.trim_start();
            if let Some(value) = rest_trimmed.strip_prefix('=') {
                let value_start = offset + (line.len() - value.len());
                let leading = value.len() - value.trim_start().len();
                let len = value.trim().len();
                return Some(SourceSpan::from((value_start + leading, len)));
            }
        }
        offset += line.len();
    }
    None
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("chedit.toml is optional; delete it to use the defaults"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse chedit.toml")]
    #[diagnostic(code(chedit::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid value for '{key}': {message}")]
    #[diagnostic(code(chedit::invalid_value))]
    InvalidValue {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        key: String,
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_value_span() {
        let src = "[project]\ncomponents = \"../out\"\n";
        let span = find_value_span(src, "components").unwrap();
        assert_eq!(&src[span.offset()..span.offset() + span.len()], "\"../out\"");
    }

    #[test]
    fn test_find_value_span_missing() {
        assert!(find_value_span("[code]\n", "theme").is_none());
    }
}

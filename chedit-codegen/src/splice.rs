//! Textual splice primitives over generated TSX files.
//!
//! These operate on source text with regular expressions rather than a
//! parsed AST. They assume single-line named imports and a handler array
//! without nested brackets, which is what the generators themselves emit.

use std::{ops::Range, sync::LazyLock};

use regex::Regex;

/// Regex for the handler array of the `<Pre>` element (`handlers={[...]}`).
///
/// SAFETY: Pattern is a compile-time constant that is known to be valid.
#[allow(clippy::unwrap_used)]
static HANDLERS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(handlers[=:]\s*\{?\[)([^\]]*?)(\])").unwrap());

/// Regex for the first object literal returned from a function.
///
/// SAFETY: Pattern is a compile-time constant that is known to be valid.
#[allow(clippy::unwrap_used)]
static RETURN_OBJECT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"return\s*\{([^}]*)\}").unwrap());

/// Names currently listed in the handler array, or empty if there is none.
pub fn handler_array_entries(content: &str) -> Vec<String> {
    HANDLERS_RE
        .captures(content)
        .map(|caps| split_list(&caps[2]))
        .unwrap_or_default()
}

/// Append `name` to the handler array.
///
/// Returns `None` when the file has no handler array.
pub fn append_to_handler_array(content: &str, name: &str) -> Option<String> {
    let caps = HANDLERS_RE.captures(content)?;
    let existing = caps[2].trim();
    let entries = if existing.is_empty() {
        name.to_string()
    } else {
        format!("{}, {}", existing, name)
    };
    let replacement = format!("{}{}{}", &caps[1], entries, &caps[3]);
    Some(splice(content, caps.get(0)?.range(), &replacement))
}

/// Insert a line after the last top-level `import` line.
///
/// With no imports, the line is prepended to the file.
pub fn insert_after_last_import(content: &str, line: &str) -> String {
    let mut offset = 0;
    let mut last_import_end = None;
    for l in content.split_inclusive('\n') {
        if l.starts_with("import ") {
            last_import_end = Some(offset + l.trim_end_matches('\n').len());
        }
        offset += l.len();
    }

    match last_import_end {
        Some(end) => format!("{}\n{}{}", &content[..end], line, &content[end..]),
        None => format!("{}\n{}", line, content),
    }
}

/// Whether `name` is imported by name from `from`.
pub fn has_named_import(content: &str, name: &str, from: &str) -> bool {
    let pattern = format!(
        r#"import\s*\{{[^}}]*\b{}\b[^}}]*\}}\s*from\s*["']{}["']"#,
        regex::escape(name),
        regex::escape(from)
    );
    Regex::new(&pattern)
        .map(|re| re.is_match(content))
        .unwrap_or(false)
}

/// Add `name` to an existing named import from `from`.
///
/// Returns `None` if there is no named import from `from`. A name that is
/// already imported leaves the text as is.
pub fn add_to_named_import(content: &str, from: &str, name: &str) -> Option<String> {
    let pattern = format!(
        r#"import\s*\{{([^}}]*)\}}\s*from\s*["']{}["']"#,
        regex::escape(from)
    );
    let re = Regex::new(&pattern).ok()?;
    let caps = re.captures(content)?;

    let names = caps[1].trim();
    let present = split_list(names).iter().any(|entry| {
        let entry = entry.strip_prefix("type ").unwrap_or(entry);
        entry.split(" as ").next().map(str::trim) == Some(name)
    });
    if present {
        return Some(content.to_string());
    }

    let merged = if names.is_empty() {
        name.to_string()
    } else {
        format!("{}, {}", names, name)
    };
    let replacement = format!("import {{ {} }} from \"{}\"", merged, from);
    Some(splice(content, caps.get(0)?.range(), &replacement))
}

/// Append an entry to the first returned object literal.
///
/// Returns `None` when there is no `return { ... }` to extend.
pub fn append_to_return_object(content: &str, entry: &str) -> Option<String> {
    let caps = RETURN_OBJECT_RE.captures(content)?;
    let existing = caps[1].trim_end();
    let trimmed = existing.trim();
    let comma = if trimmed.is_empty() || trimmed.ends_with(',') {
        ""
    } else {
        ","
    };
    let replacement = format!("return {{{}{}\n    {},\n  }}", existing, comma, entry);
    Some(splice(content, caps.get(0)?.range(), &replacement))
}

fn split_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn splice(content: &str, range: Range<usize>, replacement: &str) -> String {
    let mut out = String::with_capacity(content.len() + replacement.len());
    out.push_str(&content[..range.start]);
    out.push_str(replacement);
    out.push_str(&content[range.end..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const CODE: &str = r#"import { Pre, RawCode, highlight } from "codehike/code"
import { focus } from "./focus"

export async function Code({ codeblock }: { codeblock: RawCode }) {
  const highlighted = await highlight(codeblock, "github-dark")
  return <Pre code={highlighted} handlers={[focus]} />
}
"#;

    #[test]
    fn test_handler_array_entries() {
        assert_eq!(handler_array_entries(CODE), vec!["focus"]);
        assert_eq!(
            handler_array_entries("handlers={[ mark,  diff, ]}"),
            vec!["mark", "diff"]
        );
        assert!(handler_array_entries("handlers={[]}").is_empty());
        assert!(handler_array_entries("<Pre code={highlighted} />").is_empty());
    }

    #[test]
    fn test_append_to_handler_array() {
        let updated = append_to_handler_array(CODE, "mark").unwrap();
        assert!(updated.contains("handlers={[focus, mark]}"));

        let empty = append_to_handler_array("handlers={[]}", "mark").unwrap();
        assert_eq!(empty, "handlers={[mark]}");

        let object = append_to_handler_array("{ handlers: [a] }", "b").unwrap();
        assert_eq!(object, "{ handlers: [a, b] }");

        assert!(append_to_handler_array("<Pre />", "mark").is_none());
    }

    #[test]
    fn test_insert_after_last_import() {
        let updated = insert_after_last_import(CODE, "import { mark } from \"./mark\"");
        assert!(updated.starts_with(
            "import { Pre, RawCode, highlight } from \"codehike/code\"\n\
             import { focus } from \"./focus\"\n\
             import { mark } from \"./mark\"\n\nexport async"
        ));
    }

    #[test]
    fn test_insert_after_single_first_line_import() {
        let content = "import { a } from \"./a\"\nconst x = 1\n";
        assert_eq!(
            insert_after_last_import(content, "import { b } from \"./b\""),
            "import { a } from \"./a\"\nimport { b } from \"./b\"\nconst x = 1\n"
        );
    }

    #[test]
    fn test_insert_after_import_without_trailing_newline() {
        assert_eq!(
            insert_after_last_import("import { a } from \"./a\"", "import { b } from \"./b\""),
            "import { a } from \"./a\"\nimport { b } from \"./b\""
        );
    }

    #[test]
    fn test_insert_without_imports_prepends() {
        assert_eq!(
            insert_after_last_import("const x = 1\n", "import { a } from \"./a\""),
            "import { a } from \"./a\"\nconst x = 1\n"
        );
    }

    #[test]
    fn test_indented_import_is_not_top_level() {
        let content = "const s = `\n  import { a } from \"./a\"\n`\n";
        assert!(insert_after_last_import(content, "import { b } from \"./b\"").starts_with("import { b }"));
    }

    #[test]
    fn test_has_named_import() {
        assert!(has_named_import(CODE, "focus", "./focus"));
        assert!(!has_named_import(CODE, "focus", "./focus-extra"));
        assert!(!has_named_import(CODE, "foc", "./focus"));
        assert!(!has_named_import(CODE, "mark", "./mark"));
        assert!(has_named_import(
            "import { collapse, collapseTrigger } from './collapse'",
            "collapseTrigger",
            "./collapse"
        ));
    }

    #[test]
    fn test_add_to_named_import() {
        let updated = add_to_named_import(CODE, "codehike/code", "AnnotationHandler").unwrap();
        assert!(updated.starts_with(
            "import { Pre, RawCode, highlight, AnnotationHandler } from \"codehike/code\"\n"
        ));

        let again = add_to_named_import(&updated, "codehike/code", "AnnotationHandler").unwrap();
        assert_eq!(again, updated);

        assert!(add_to_named_import(CODE, "./mark", "mark").is_none());
    }

    #[test]
    fn test_add_to_named_import_respects_type_modifier() {
        let content = "import { Pre, type AnnotationHandler } from \"codehike/code\"\n";
        assert_eq!(
            add_to_named_import(content, "codehike/code", "AnnotationHandler").as_deref(),
            Some(content)
        );
    }

    #[test]
    fn test_append_to_return_object() {
        let content = "  return {\n    ...components,\n  }\n";
        assert_eq!(
            append_to_return_object(content, "HoverContainer").unwrap(),
            "  return {\n    ...components,\n    HoverContainer,\n  }\n"
        );

        let no_comma = "  return {\n    ...components\n  }\n";
        assert_eq!(
            append_to_return_object(no_comma, "a: Link").unwrap(),
            "  return {\n    ...components,\n    a: Link,\n  }\n"
        );

        assert_eq!(
            append_to_return_object("return {}", "a: Link").unwrap(),
            "return {\n    a: Link,\n  }"
        );

        assert!(append_to_return_object("export default {}", "x").is_none());
    }

    #[test]
    fn test_replacement_with_dollar_is_literal() {
        let updated = append_to_handler_array("handlers={[a]}", "$b").unwrap();
        assert_eq!(updated, "handlers={[a, $b]}");
    }
}

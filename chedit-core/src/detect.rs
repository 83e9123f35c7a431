//! Detection of Code Hike components referenced by MDX documents.

use std::{collections::BTreeSet, sync::LazyLock};

use regex::Regex;

use crate::ComponentName;

/// Code Hike component names that can be injected.
pub const COMPONENTS: &[&str] = &[
    "Callout",
    "ClassName",
    "CodeMentions",
    "Collapse",
    "CopyButton",
    "Diff",
    "FileName",
    "Focus",
    "Fold",
    "Footnotes",
    "LanguageSwitcher",
    "LineNumbers",
    "Link",
    "Mark",
    "Tabs",
    "TokenTransitions",
    "Tooltip",
    "Transpile",
    "TypeScript",
    "WordWrap",
];

/// Code Hike layout names.
pub const LAYOUTS: &[&str] = &["Scrollycoding", "Slideshow", "Spotlight"];

/// Regex for JSX opening tags: `<Name`
///
/// SAFETY: Pattern is a compile-time constant that is known to be valid.
#[allow(clippy::unwrap_used)]
static JSX_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<([A-Z][a-zA-Z0-9]*)").unwrap());

/// Regex for named imports from a codehike module.
///
/// SAFETY: Pattern is a compile-time constant that is known to be valid.
#[allow(clippy::unwrap_used)]
static CODEHIKE_IMPORT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"import\s+\{([^}]+)\}\s+from\s+['"]@?codehike"#).unwrap());

/// Check if a name is a known component or layout.
pub fn is_known(name: &str) -> bool {
    COMPONENTS.contains(&name) || LAYOUTS.contains(&name)
}

/// Detect the known components referenced in a document, sorted by name.
///
/// Both JSX usage (`<Focus>`) and imports from `codehike` modules count;
/// aliased imports (`Focus as F`) report the original name.
pub fn detect_components(content: &str) -> Vec<ComponentName> {
    let mut detected = BTreeSet::new();

    for caps in JSX_TAG_RE.captures_iter(content) {
        let name = &caps[1];
        if is_known(name) {
            detected.insert(name.to_string());
        }
    }

    for caps in CODEHIKE_IMPORT_RE.captures_iter(content) {
        for spec in caps[1].split(',') {
            let name = spec.split_whitespace().next().unwrap_or_default();
            if is_known(name) {
                detected.insert(name.to_string());
            }
        }
    }

    detected.into_iter().map(ComponentName::new).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(content: &str) -> Vec<String> {
        detect_components(content)
            .into_iter()
            .map(|n| n.as_str().to_string())
            .collect()
    }

    #[test]
    fn test_detects_jsx_tags() {
        let content = "# Title\n\n<Callout>hi</Callout>\n<Focus />\n<div />\n";
        assert_eq!(names(content), vec!["Callout", "Focus"]);
    }

    #[test]
    fn test_ignores_unknown_tags() {
        assert!(names("<MyThing /> <Header>").is_empty());
    }

    #[test]
    fn test_detects_imports_with_alias() {
        let content = r#"import { Mark as M, Tabs } from "codehike/blocks""#;
        assert_eq!(names(content), vec!["Mark", "Tabs"]);
    }

    #[test]
    fn test_detects_scoped_import() {
        let content = "import { Spotlight } from '@codehike/mdx'";
        assert_eq!(names(content), vec!["Spotlight"]);
    }

    #[test]
    fn test_ignores_other_modules() {
        assert!(names(r#"import { Mark } from "./mark""#).is_empty());
    }

    #[test]
    fn test_deduplicates_and_sorts() {
        let content = "<Tabs /><Diff /><Tabs />";
        assert_eq!(names(content), vec!["Diff", "Tabs"]);
    }

    #[test]
    fn test_is_known() {
        assert!(is_known("Slideshow"));
        assert!(is_known("Focus"));
        assert!(!is_known("Header"));
    }
}

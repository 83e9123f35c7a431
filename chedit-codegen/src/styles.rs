//! Hover styles required by the code mentions template.

use chedit_core::Change;

/// Comment guarding the appended block.
pub const HOVER_CSS_MARKER: &str = "/* codehike:code-mentions */";

/// Global stylesheets to look for, in order. The first is created if none exist.
pub const STYLESHEET_CANDIDATES: &[&str] = &["app/globals.css", "styles/globals.css", "app/global.css"];

/// Hover names that get a highlight-restoring rule.
const HOVER_NAMES: &[&str] = &[
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
];

const BASE_RULES: &str = r#".hover-container [data-line] {
  transition: opacity 0.2s;
}
.hover-container:has([data-hover]:hover) [data-line] {
  opacity: 0.3;
}
.hover-container:has([data-hover]:hover) [data-line=""] {
  opacity: 0.3;
}
"#;

/// The CSS block appended to the stylesheet, starting with a blank line.
pub fn hover_styles() -> String {
    let restore = HOVER_NAMES
        .iter()
        .map(|name| {
            format!(
                ".hover-container:has([data-hover=\"{name}\"]:hover) [data-line=\"{name}\"] {{ opacity: 1; }}"
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    format!("\n{}\n{}{}\n", HOVER_CSS_MARKER, BASE_RULES, restore)
}

/// Append the hover styles unless the marker is already present.
pub fn ensure_hover_styles(stylesheet: Option<&str>) -> Change {
    match stylesheet {
        None => Change::created(hover_styles()),
        Some(css) if css.contains(HOVER_CSS_MARKER) => Change::unchanged(Some(css)),
        Some(css) => Change::compare(css, format!("{}{}", css, hover_styles())),
    }
}

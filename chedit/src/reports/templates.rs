//! Templates command report data structures.

use chedit_core::{FileKey, TemplateListing};

use super::output::{Output, Report};

/// Templates available in the catalog.
#[derive(Debug)]
pub struct TemplatesReport {
    pub listing: TemplateListing,
}

impl Report for TemplatesReport {
    fn render(&self, out: &mut dyn Output) {
        if self.listing.code.is_empty() && self.listing.layouts.is_empty() {
            out.preformatted("No templates found.");
            return;
        }

        out.section("Code");
        for key in &self.listing.code {
            out.list_item(&format!("{} ({})", key.to_component_name(), key));
        }

        if !self.listing.layouts.is_empty() {
            out.newline();
            out.section("Layouts");
            for key in &self.listing.layouts {
                out.list_item(&format!("{} ({})", key.to_component_name(), key));
            }
        }
    }
}

/// MDX usage snippet of one template.
#[derive(Debug)]
pub struct SnippetReport {
    pub key: FileKey,
    pub snippet: String,
}

impl Report for SnippetReport {
    fn render(&self, out: &mut dyn Output) {
        if self.snippet.is_empty() {
            out.warning(&format!("{} has no MDX snippet", self.key));
        } else {
            out.preformatted(&self.snippet);
        }
    }
}

//! Document Assembly
//!
//! Consumes the ordered section mapping and produces the final Markdown
//! text: root heading, blank line, table of contents, then the
//! anchor-tagged body of every non-root section in insertion order.

use tracing::debug;

use super::anchor::{Anchor, label};
use crate::constants::document::TOC_INDENT;
use crate::types::{Section, SectionMap};

/// Renders a [`SectionMap`] into the aggregate document
pub struct DocumentRenderer;

impl DocumentRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Produce the final document text.
    ///
    /// Bodies arrive already heading-adjusted by the collector; rendering
    /// only assembles header, TOC, and anchor-tagged bodies.
    pub fn render(&self, sections: &SectionMap) -> String {
        let header = sections
            .root()
            .map(|root| root.body.as_str())
            .unwrap_or_default();

        let mut toc = String::from("\n");
        let mut body = String::new();

        for section in sections.iter().filter(|s| !s.is_root()) {
            let anchor = Anchor::from_relative(&section.relative_path);
            toc.push_str(&toc_entry(&section.relative_path, section.depth, &anchor));
            body.push_str(&format!(
                "\n<a name=\"{}\"></a>\n\n{}",
                anchor, section.body
            ));
        }

        debug!(
            sections = sections.len(),
            bytes = header.len() + toc.len() + body.len(),
            "document assembled"
        );

        format!("{}{}{}", header, toc, body)
    }
}

impl Default for DocumentRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// One TOC bullet: indentation proportional to depth, with the first level
/// of real content unindented
fn toc_entry(relative_path: &str, depth: usize, anchor: &Anchor) -> String {
    format!(
        "{}- [{}](#{})\n",
        TOC_INDENT.repeat(depth.saturating_sub(1)),
        label(relative_path),
        anchor
    )
}

// =============================================================================
// Tests
// =============================================================================

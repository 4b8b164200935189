//! Document Renderer
//!
//! Turns the collector's ordered section mapping into the final Markdown
//! document: anchor identifiers, table of contents, and concatenated
//! bodies. Heading-level rewriting lives here too; the collector calls it
//! while loading READMEs so bodies are stored already renormalized.

pub mod anchor;
pub mod document;
pub mod heading;

pub use anchor::Anchor;
pub use document::DocumentRenderer;
pub use heading::{min_heading_level, shift_headings};

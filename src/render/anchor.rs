//! Anchor Identifiers
//!
//! A flattened, URL-safe link target derived from a section's relative
//! path. Distinct relative paths always produce distinct anchors: the only
//! rewriting is trimming path decorations and swapping the separator, both
//! of which are injective over the normalized labels the collector emits.

use std::fmt;

use crate::constants::document::ANCHOR_SEPARATOR;

/// Normalized in-document link target for one section
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Anchor(String);

impl Anchor {
    /// Build an anchor from a root-relative path.
    ///
    /// Strips leading dot markers and surrounding separators, then joins
    /// the remaining segments with [`ANCHOR_SEPARATOR`].
    pub fn from_relative(relative_path: &str) -> Self {
        Self(label(relative_path).replace('/', ANCHOR_SEPARATOR))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// TOC label for a relative path: the path with leading dot markers and
/// surrounding separators stripped, separators left intact
pub fn label(relative_path: &str) -> &str {
    relative_path
        .trim_matches('/')
        .trim_start_matches('.')
        .trim_matches('/')
}

// =============================================================================
// Tests
// =============================================================================

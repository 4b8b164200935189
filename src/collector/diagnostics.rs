//! Collection Diagnostics
//!
//! Non-fatal conditions observed during collection. The collector returns
//! these to the caller instead of printing them, so the CLI (or a test, or
//! an embedding application) decides whether to display, suppress, or
//! redirect them.

use std::fmt;
use std::path::PathBuf;

/// Non-fatal diagnostic raised during collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// A found README does not start with a top-level heading. Its content
    /// is still included; the output structure may be malformed.
    MalformedHeading { path: PathBuf },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedHeading { path } => write!(
                f,
                "README at {} does not start with a top-level heading; output structure may be malformed",
                path.display()
            ),
        }
    }
}

impl Warning {
    /// Path of the file the diagnostic refers to
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::MalformedHeading { path } => path,
        }
    }
}

//! Global Constants
//!
//! Centralized defaults for document assembly, traversal, and
//! configuration.

/// Document assembly constants
pub mod document {
    /// README filename searched in each directory
    pub const DEFAULT_README_NAME: &str = "README.md";

    /// Top-level heading of the aggregate document
    pub const DEFAULT_TITLE: &str = "Project Root";

    /// Indentation unit for one TOC nesting level
    pub const TOC_INDENT: &str = "  ";

    /// Joining string replacing path separators in anchors
    pub const ANCHOR_SEPARATOR: &str = "-";
}

/// Traversal constants
pub mod traversal {
    /// Leading character marking a hidden path segment
    pub const HIDDEN_MARKER: char = '.';
}

/// Configuration constants
pub mod config {
    /// Application name, used for the global config directory
    pub const APP_NAME: &str = "docweave";

    /// Project-level config file, looked up in the working directory
    pub const PROJECT_CONFIG_FILE: &str = ".docweave.toml";

    /// Environment variable prefix (e.g. DOCWEAVE_DOCUMENT_TITLE)
    pub const ENV_PREFIX: &str = "DOCWEAVE_";

    /// Config schema version
    pub const CONFIG_VERSION: &str = "1.0";
}

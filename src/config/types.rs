//! Configuration Types
//!
//! All configuration structures with sensible defaults.
//! Supports global (~/.config/docweave/) and project (.docweave.toml)
//! level configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::config::CONFIG_VERSION;
use crate::constants::document::{DEFAULT_README_NAME, DEFAULT_TITLE};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Configuration version
    pub version: String,

    /// Document assembly settings
    pub document: DocumentConfig,

    /// Tree traversal settings
    pub traversal: TraversalConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION.to_string(),
            document: DocumentConfig::default(),
            traversal: TraversalConfig::default(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    /// Returns `DocError::Config` on validation failure.
    pub fn validate(&self) -> crate::types::Result<()> {
        if self.document.readme.trim().is_empty() {
            return Err(crate::types::DocError::Config(
                "document.readme must not be empty".to_string(),
            ));
        }

        if self.document.readme.contains(['/', '\\']) {
            return Err(crate::types::DocError::Config(format!(
                "document.readme must be a bare filename, got '{}'",
                self.document.readme
            )));
        }

        Ok(())
    }
}

// =============================================================================
// Document Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentConfig {
    /// README filename searched in each directory
    pub readme: String,

    /// Top-level heading of the aggregate document
    pub title: String,

    /// Include the root directory's own README as the document header
    pub include_root: bool,

    /// Destination path; `None` writes to stdout
    pub output: Option<PathBuf>,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            readme: DEFAULT_README_NAME.to_string(),
            title: DEFAULT_TITLE.to_string(),
            include_root: false,
            output: None,
        }
    }
}

// =============================================================================
// Traversal Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TraversalConfig {
    /// Resolve symlinked directories during the walk
    pub follow_links: bool,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.version, "1.0");
        assert_eq!(config.document.readme, "README.md");
        assert_eq!(config.document.title, "Project Root");
        assert!(!config.document.include_root);
        assert!(config.document.output.is_none());
        assert!(!config.traversal.follow_links);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_readme_rejected() {
        let mut config = Config::default();
        config.document.readme = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_readme_with_separator_rejected() {
        let mut config = Config::default();
        config.document.readme = "docs/README.md".to_string();
        assert!(config.validate().is_err());
    }
}

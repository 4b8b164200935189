//! Unified Error Type System
//!
//! Centralized error types for the entire application.
//!
//! ## Design Principles
//!
//! - Single unified error type (DocError) for the entire application
//! - Structured variants with path context for better diagnostics
//! - Fatal conditions only: recoverable conditions travel as
//!   [`Warning`](crate::collector::Warning) values, not errors

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocError {
    // -------------------------------------------------------------------------
    // System Errors (auto From impl)
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Traversal error: {0}")]
    Walk(#[from] ignore::Error),

    // -------------------------------------------------------------------------
    // Domain Errors
    // -------------------------------------------------------------------------
    /// Root path rejected before traversal begins.
    #[error("Invalid root '{path}': {reason}")]
    InvalidRoot { path: PathBuf, reason: String },

    /// A README confirmed to exist could not be read. Fatal: silently
    /// omitting content would produce a misleading document.
    #[error("Failed to read '{path}': {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config error: {0}")]
    Config(String),
}

impl DocError {
    /// Create an invalid-root error
    pub fn invalid_root(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::InvalidRoot {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a read-failure error for an existing file
    pub fn read_failed(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::ReadFailed {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, DocError>;

// =============================================================================
// Tests
// =============================================================================

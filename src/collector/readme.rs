//! README Loading
//!
//! Looks up the configured README file in a directory and checks its
//! leading heading. A missing README is the expected common case; a read
//! failure on a file that exists is fatal.

use std::fs;
use std::path::Path;

use crate::types::{DocError, Result};

/// Read the README in `dir`, if present.
///
/// Returns `Ok(None)` when no such file exists. An existing file that
/// cannot be read aborts the run: silently dropping its content would
/// produce a misleading document.
pub fn load(dir: &Path, file_name: &str) -> Result<Option<String>> {
    let path = dir.join(file_name);
    if !path.is_file() {
        return Ok(None);
    }

    match fs::read_to_string(&path) {
        Ok(content) => Ok(Some(content)),
        Err(source) => Err(DocError::read_failed(&path, source)),
    }
}

/// Whether the content opens with a top-level Markdown heading
pub fn starts_with_top_heading(content: &str) -> bool {
    content.trim_start().starts_with("# ")
}

// =============================================================================
// Tests
// =============================================================================

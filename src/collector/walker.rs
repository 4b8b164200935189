//! Directory Walker
//!
//! Deterministic directory enumeration for the collector, built on the
//! `ignore` walker. Yields directories only, each exactly once, parents
//! before children, siblings in lexicographic order.
//!
//! Hidden-path policy: any non-root entry whose name starts with a dot is
//! pruned together with its whole subtree. The root itself is exempt, so
//! running the tool inside a hidden directory still works. No gitignore or
//! VCS filtering is applied: output must not depend on git state.

use std::path::{Path, PathBuf};

use ignore::{DirEntry, WalkBuilder};

use crate::constants::traversal::HIDDEN_MARKER;
use crate::types::Result;

pub struct DirWalker {
    root: PathBuf,
    follow_links: bool,
}

impl DirWalker {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            follow_links: false,
        }
    }

    /// Resolve symlinked directories during the walk (off by default)
    pub fn follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }

    /// Directories under the root in traversal order, root first
    pub fn directories(&self) -> Result<Vec<DirEntry>> {
        let walker = WalkBuilder::new(&self.root)
            .standard_filters(false)
            .follow_links(self.follow_links)
            .sort_by_file_name(|a, b| a.cmp(b))
            .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry))
            .build();

        let mut dirs = Vec::new();
        for entry in walker {
            let entry = entry?;
            if entry.file_type().is_some_and(|ft| ft.is_dir()) {
                dirs.push(entry);
            }
        }
        Ok(dirs)
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_string_lossy()
        .starts_with(HIDDEN_MARKER)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch_dirs(root: &Path, dirs: &[&str]) {
        for dir in dirs {
            fs::create_dir_all(root.join(dir)).unwrap();
        }
    }

    #[test]
    fn test_root_first_parents_before_children() {
        let tmp = TempDir::new().unwrap();
        touch_dirs(tmp.path(), &["a/b/c", "a/d"]);

        let dirs = DirWalker::new(tmp.path()).directories().unwrap();
        let rels: Vec<_> = dirs
            .iter()
            .map(|e| {
                e.path()
                    .strip_prefix(tmp.path())
                    .unwrap()
                    .to_string_lossy()
                    .to_string()
            })
            .collect();

        assert_eq!(rels, vec!["", "a", "a/b", "a/b/c", "a/d"]);
    }

    #[test]
    fn test_siblings_lexicographic() {
        let tmp = TempDir::new().unwrap();
        touch_dirs(tmp.path(), &["zeta", "alpha", "mid"]);

        let dirs = DirWalker::new(tmp.path()).directories().unwrap();
        let names: Vec<_> = dirs
            .iter()
            .skip(1)
            .map(|e| e.file_name().to_string_lossy().to_string())
            .collect();

        assert_eq!(names, vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn test_hidden_subtree_pruned() {
        let tmp = TempDir::new().unwrap();
        touch_dirs(tmp.path(), &[".git/objects", "src", ".cache/deep/nest"]);

        let dirs = DirWalker::new(tmp.path()).directories().unwrap();
        let names: Vec<_> = dirs
            .iter()
            .skip(1)
            .map(|e| e.file_name().to_string_lossy().to_string())
            .collect();

        assert_eq!(names, vec!["src"]);
    }

    #[test]
    fn test_hidden_root_still_walked() {
        let tmp = TempDir::new().unwrap();
        let hidden_root = tmp.path().join(".config");
        fs::create_dir_all(hidden_root.join("sub")).unwrap();

        let dirs = DirWalker::new(&hidden_root).directories().unwrap();
        assert_eq!(dirs.len(), 2);
        assert_eq!(dirs[0].path(), hidden_root.as_path());
    }

    #[test]
    fn test_files_not_yielded() {
        let tmp = TempDir::new().unwrap();
        touch_dirs(tmp.path(), &["a"]);
        fs::write(tmp.path().join("a/README.md"), "# A\n").unwrap();

        let dirs = DirWalker::new(tmp.path()).directories().unwrap();
        assert!(dirs.iter().all(|e| !e.path().ends_with("README.md")));
    }
}

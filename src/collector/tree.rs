//! Tree Collector
//!
//! Walks the project tree and builds the ordered section mapping: one
//! entry per directory carrying a README, plus lazily synthesized
//! placeholder entries for ancestors that have documented descendants but
//! no README of their own. Insertion order is pre-order traversal order,
//! so a directory's entry never precedes an ancestor's.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::diagnostics::Warning;
use super::readme;
use super::walker::DirWalker;
use crate::constants::document::DEFAULT_README_NAME;
use crate::render::shift_headings;
use crate::types::{DocError, Result, Section, SectionMap};

/// Builds the ordered `path -> Section` mapping for one invocation
pub struct TreeCollector {
    root: PathBuf,
    readme_name: String,
    include_root: bool,
    title: String,
    follow_links: bool,
}

impl TreeCollector {
    pub fn new<P: AsRef<Path>>(root: P, title: &str) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            readme_name: DEFAULT_README_NAME.to_string(),
            include_root: false,
            title: title.to_string(),
            follow_links: false,
        }
    }

    /// README filename searched in each directory
    pub fn readme_name(mut self, name: &str) -> Self {
        self.readme_name = name.to_string();
        self
    }

    /// Include the root directory's own README as the document header
    pub fn include_root(mut self, include: bool) -> Self {
        self.include_root = include;
        self
    }

    /// Resolve symlinked directories during the walk
    pub fn follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }

    /// Walk the tree and build the mapping plus any non-fatal diagnostics.
    ///
    /// The root entry is seeded first with the supplied title; directories
    /// are then visited parents-first in lexicographic sibling order.
    /// Hidden subtrees and the root README (unless `include_root`) are two
    /// independent skip conditions; hidden pruning happens in the walker,
    /// the root exclusion here.
    pub fn collect(&self) -> Result<(SectionMap, Vec<Warning>)> {
        self.check_root()?;

        let mut sections = SectionMap::new();
        sections.insert(Section {
            absolute_path: self.root.clone(),
            relative_path: String::new(),
            depth: 0,
            body: format!("# {}\n", self.title),
            display_title: self.title.clone(),
        });

        let mut warnings = Vec::new();

        let entries = DirWalker::new(&self.root)
            .follow_links(self.follow_links)
            .directories()?;

        for entry in entries {
            if entry.depth() == 0 && !self.include_root {
                continue;
            }

            let dir = entry.path();
            let Some(content) = readme::load(dir, &self.readme_name)? else {
                continue;
            };

            if !readme::starts_with_top_heading(&content) {
                warnings.push(Warning::MalformedHeading {
                    path: dir.join(&self.readme_name),
                });
            }

            let segments = self.relative_segments(dir);
            self.create_parents(&mut sections, &segments);

            let depth = segments.len();
            sections.insert(Section {
                absolute_path: dir.to_path_buf(),
                relative_path: segments.join("/"),
                depth,
                body: shift_headings(&content, depth),
                display_title: self.display_title_for(&segments),
            });
        }

        debug!(
            root = %self.root.display(),
            sections = sections.len(),
            warnings = warnings.len(),
            "collection finished"
        );

        Ok((sections, warnings))
    }

    /// Root must exist and be a directory, checked before any traversal
    fn check_root(&self) -> Result<()> {
        let metadata = match fs::metadata(&self.root) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(DocError::invalid_root(&self.root, "does not exist"));
            }
            Err(e) => return Err(DocError::Io(e)),
        };

        if !metadata.is_dir() {
            return Err(DocError::invalid_root(&self.root, "not a directory"));
        }
        Ok(())
    }

    /// Synthesize missing strict ancestors, nearest-root-first.
    ///
    /// Each placeholder gets a heading at its own depth with the uppercased
    /// directory name. Existing entries are never overwritten here.
    fn create_parents(&self, sections: &mut SectionMap, segments: &[String]) {
        for end in 1..segments.len() {
            let prefix = &segments[..end];
            let absolute_path = self.root.join(prefix.iter().collect::<PathBuf>());
            if sections.contains(&absolute_path) {
                continue;
            }

            let display_title = self.display_title_for(prefix);
            sections.insert(Section {
                absolute_path,
                relative_path: prefix.join("/"),
                depth: end,
                body: format!("{} {}\n", "#".repeat(end), display_title),
                display_title,
            });
        }
    }

    /// Path components below the root, as plain strings
    fn relative_segments(&self, dir: &Path) -> Vec<String> {
        dir.strip_prefix(&self.root)
            .map(|rel| {
                rel.components()
                    .map(|c| c.as_os_str().to_string_lossy().into_owned())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Uppercased last path segment; falls back to the root directory name
    /// (then the title) for the root entry itself
    fn display_title_for(&self, segments: &[String]) -> String {
        segments
            .last()
            .cloned()
            .or_else(|| {
                self.root
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
            })
            .unwrap_or_else(|| self.title.clone())
            .to_uppercase()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_readme(root: &Path, dir: &str, content: &str) {
        let path = if dir.is_empty() {
            root.to_path_buf()
        } else {
            root.join(dir)
        };
        fs::create_dir_all(&path).unwrap();
        fs::write(path.join("README.md"), content).unwrap();
    }

    fn rel_order(sections: &SectionMap) -> Vec<String> {
        sections.iter().map(|s| s.relative_path.clone()).collect()
    }

    #[test]
    fn test_nested_tree_with_gap() {
        let tmp = TempDir::new().unwrap();
        write_readme(tmp.path(), "a", "# A\n");
        write_readme(tmp.path(), "a/b", "# B\n");
        fs::create_dir_all(tmp.path().join("a/b/c")).unwrap();
        write_readme(tmp.path(), "a/b/c/d", "# D\n");

        let (sections, warnings) = TreeCollector::new(tmp.path(), "Project Root")
            .collect()
            .unwrap();

        assert!(warnings.is_empty());
        assert_eq!(rel_order(&sections), vec!["", "a", "a/b", "a/b/c", "a/b/c/d"]);

        let depths: Vec<_> = sections.iter().map(|s| s.depth).collect();
        assert_eq!(depths, vec![0, 1, 2, 3, 4]);

        // Synthesized placeholder: heading at its own depth, uppercased name.
        let gap = sections.get(&tmp.path().join("a/b/c")).unwrap();
        assert_eq!(gap.body, "### C\n");
        assert_eq!(gap.display_title, "C");

        // Real READMEs are heading-shifted to their depth.
        let d = sections.get(&tmp.path().join("a/b/c/d")).unwrap();
        assert_eq!(d.body, "#### D\n");
    }

    #[test]
    fn test_empty_tree_yields_root_only() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("x/y")).unwrap();

        let (sections, warnings) = TreeCollector::new(tmp.path(), "Empty").collect().unwrap();

        assert!(warnings.is_empty());
        assert_eq!(sections.len(), 1);
        assert_eq!(sections.root().unwrap().body, "# Empty\n");
    }

    #[test]
    fn test_malformed_heading_warns_but_includes() {
        let tmp = TempDir::new().unwrap();
        write_readme(tmp.path(), "a", "## X\ntext\n");

        let (sections, warnings) = TreeCollector::new(tmp.path(), "Root").collect().unwrap();

        assert_eq!(warnings.len(), 1);
        assert!(
            warnings[0]
                .path()
                .ends_with(Path::new("a").join("README.md"))
        );

        // Content still included, structure preserved.
        let a = sections.get(&tmp.path().join("a")).unwrap();
        assert_eq!(a.body, "## X\ntext\n");
    }

    #[test]
    fn test_empty_readme_included_with_empty_body() {
        let tmp = TempDir::new().unwrap();
        write_readme(tmp.path(), "a", "");

        let (sections, warnings) = TreeCollector::new(tmp.path(), "Root").collect().unwrap();

        assert_eq!(warnings.len(), 1);
        let a = sections.get(&tmp.path().join("a")).unwrap();
        assert_eq!(a.body, "");
    }

    #[test]
    fn test_root_readme_excluded_by_default() {
        let tmp = TempDir::new().unwrap();
        write_readme(tmp.path(), "", "# Root readme\n");
        write_readme(tmp.path(), "a", "# A\n");

        let (sections, _) = TreeCollector::new(tmp.path(), "Title").collect().unwrap();

        assert_eq!(sections.root().unwrap().body, "# Title\n");
        assert_eq!(sections.len(), 2);
    }

    #[test]
    fn test_root_readme_included_when_requested() {
        let tmp = TempDir::new().unwrap();
        write_readme(tmp.path(), "", "# Root readme\nintro\n");

        let (sections, warnings) = TreeCollector::new(tmp.path(), "Title")
            .include_root(true)
            .collect()
            .unwrap();

        assert!(warnings.is_empty());
        assert_eq!(sections.len(), 1);
        // The seeded title header is replaced in place by the root README.
        assert_eq!(sections.root().unwrap().body, "# Root readme\nintro\n");
        assert_eq!(sections.root().unwrap().depth, 0);
    }

    #[test]
    fn test_hidden_subtree_excluded() {
        let tmp = TempDir::new().unwrap();
        write_readme(tmp.path(), ".hidden/sub", "# Secret\n");
        write_readme(tmp.path(), "visible", "# Visible\n");

        let (sections, _) = TreeCollector::new(tmp.path(), "Root").collect().unwrap();

        assert_eq!(rel_order(&sections), vec!["", "visible"]);
    }

    #[test]
    fn test_custom_readme_name() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("a")).unwrap();
        fs::write(tmp.path().join("a/ARCHITECTURE.md"), "# A\n").unwrap();
        fs::write(tmp.path().join("a/README.md"), "# ignored\n").unwrap();

        let (sections, _) = TreeCollector::new(tmp.path(), "Root")
            .readme_name("ARCHITECTURE.md")
            .collect()
            .unwrap();

        assert_eq!(sections.get(&tmp.path().join("a")).unwrap().body, "# A\n");
    }

    #[test]
    fn test_missing_root_is_fatal() {
        let err = TreeCollector::new("/no/such/dir", "Root")
            .collect()
            .unwrap_err();
        assert!(matches!(err, DocError::InvalidRoot { .. }));
    }

    #[test]
    fn test_file_root_is_fatal() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("plain.txt");
        fs::write(&file, "not a dir").unwrap();

        let err = TreeCollector::new(&file, "Root").collect().unwrap_err();
        assert!(matches!(err, DocError::InvalidRoot { .. }));
    }

    #[test]
    fn test_placeholder_not_overwritten_by_later_sibling() {
        let tmp = TempDir::new().unwrap();
        write_readme(tmp.path(), "a/x", "# X\n");
        write_readme(tmp.path(), "a/y", "# Y\n");

        let (sections, _) = TreeCollector::new(tmp.path(), "Root").collect().unwrap();

        // "a" synthesized once, before both children, and stays put.
        assert_eq!(rel_order(&sections), vec!["", "a", "a/x", "a/y"]);
        assert_eq!(sections.get(&tmp.path().join("a")).unwrap().body, "# A\n");
    }

    #[test]
    fn test_documented_parent_never_becomes_placeholder() {
        // Pre-order traversal visits "mid" before "mid/alpha", so its own
        // README is inserted directly and no placeholder is ever created.
        let tmp = TempDir::new().unwrap();
        write_readme(tmp.path(), "mid/alpha", "# Alpha\n");
        write_readme(tmp.path(), "mid", "# Mid itself\n");

        let (sections, _) = TreeCollector::new(tmp.path(), "Root").collect().unwrap();

        assert_eq!(rel_order(&sections), vec!["", "mid", "mid/alpha"]);
        assert_eq!(
            sections.get(&tmp.path().join("mid")).unwrap().body,
            "# Mid itself\n"
        );
    }

    #[test]
    fn test_subheadings_shift_with_depth() {
        let tmp = TempDir::new().unwrap();
        write_readme(tmp.path(), "a/b", "# B\nbody\n## Detail\n");

        let (sections, _) = TreeCollector::new(tmp.path(), "Root").collect().unwrap();

        let b = sections.get(&tmp.path().join("a/b")).unwrap();
        assert_eq!(b.body, "## B\nbody\n### Detail\n");
    }
}

//! Directory tree snapshots of the content root.

use std::cmp::Ordering;
use std::fs::{self, Metadata};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use launcher_core::config::tree::TreeConfig;
use launcher_core::types::TreeNode;

use crate::guard::relative_to;

/// Builds [`TreeNode`] snapshots rooted at a fixed directory.
///
/// Every call walks the filesystem again; nothing is cached.
#[derive(Debug, Clone)]
pub struct TreeBuilder {
    /// Directory that node paths are made relative to.
    root: PathBuf,
    /// Optional depth and size bounds.
    limits: TreeConfig,
}

/// Running node count for one build.
struct Budget {
    used: usize,
    max: Option<usize>,
    truncated: bool,
}

impl Budget {
    fn exhausted(&self) -> bool {
        self.max.is_some_and(|max| self.used >= max)
    }
}

/// A directory entry that survived filtering and stat.
struct Candidate {
    path: PathBuf,
    name: String,
    meta: Metadata,
}

impl TreeBuilder {
    /// Creates an unbounded builder rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            limits: TreeConfig::default(),
        }
    }

    /// Applies depth and entry-count limits.
    pub fn with_limits(mut self, limits: TreeConfig) -> Self {
        self.limits = limits;
        self
    }

    /// The directory node paths are relative to.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Builds the tree for the whole root.
    pub fn build_root(&self) -> Option<TreeNode> {
        self.build(&self.root)
    }

    /// Builds the subtree at `path`, which must lie under the root.
    ///
    /// Returns `None` when `path` is missing or cannot be stat'ed.
    pub fn build(&self, path: &Path) -> Option<TreeNode> {
        let meta = match fs::metadata(path) {
            Ok(meta) => meta,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "Skipping unreadable entry");
                return None;
            }
        };

        let mut budget = Budget {
            used: 0,
            max: self.limits.max_entries,
            truncated: false,
        };
        let name = base_name(path);
        let node = self.build_entry(path, name, &meta, 0, &mut budget);

        if budget.truncated {
            warn!(
                root = %path.display(),
                nodes = budget.used,
                max_depth = ?self.limits.max_depth,
                max_entries = ?self.limits.max_entries,
                "Directory tree truncated by configured limits"
            );
        }
        Some(node)
    }

    fn build_entry(
        &self,
        path: &Path,
        name: String,
        meta: &Metadata,
        depth: usize,
        budget: &mut Budget,
    ) -> TreeNode {
        budget.used += 1;
        let rel = relative_to(&self.root, path).unwrap_or_default();

        if !meta.is_dir() {
            return TreeNode::file(name, rel);
        }

        if self.limits.max_depth.is_some_and(|max| depth >= max) {
            budget.truncated = true;
            return TreeNode::folder(name, rel, Vec::new());
        }

        let mut children = Vec::new();
        for candidate in self.read_candidates(path) {
            if budget.exhausted() {
                budget.truncated = true;
                break;
            }
            children.push(self.build_entry(
                &candidate.path,
                candidate.name,
                &candidate.meta,
                depth + 1,
                budget,
            ));
        }

        TreeNode::folder(name, rel, children)
    }

    /// Lists visible entries of `dir` in final sibling order.
    ///
    /// A directory that cannot be read yields no entries.
    fn read_candidates(&self, dir: &Path) -> Vec<Candidate> {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(path = %dir.display(), error = %e, "Failed to list directory, treating as empty");
                return Vec::new();
            }
        };

        let mut candidates: Vec<Candidate> = entries
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| {
                let name = entry.file_name().to_string_lossy().into_owned();
                if is_hidden(&name) {
                    return None;
                }
                let path = entry.path();
                // Follows symlinks; dangling links are dropped.
                let meta = fs::metadata(&path).ok()?;
                Some(Candidate { path, name, meta })
            })
            .collect();

        candidates.sort_by(|a, b| sibling_order(a.meta.is_dir(), &a.name, b.meta.is_dir(), &b.name));
        candidates
    }
}

/// Whether an entry name is hidden (dot-prefixed).
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// Folders before files, then [`compare_names`].
pub fn sibling_order(a_is_dir: bool, a_name: &str, b_is_dir: bool, b_name: &str) -> Ordering {
    b_is_dir
        .cmp(&a_is_dir)
        .then_with(|| compare_names(a_name, b_name))
}

/// Case-aware name order: case-insensitive first, lowercase before
/// uppercase on ties (`a < A < b < B`).
///
/// Lowercased names compare by code point, not by locale collation.
/// Punctuation, digits and accented letters can therefore order differently
/// than in a locale-aware sort: `1a < _a` and `f < é` here.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

//! Directory tree snapshot types.

use serde::{Deserialize, Serialize};

/// Kind of filesystem entry represented by a [`TreeNode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// A directory.
    Folder,
    /// Anything that is not a directory.
    File,
}

impl NodeKind {
    /// Lowercase wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Folder => "folder",
            Self::File => "file",
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the content tree.
///
/// Snapshots are rebuilt on every query; a node carries no identity
/// beyond its `path`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    /// Base name of the entry.
    pub name: String,
    /// Forward-slash path relative to the content root (`""` for the root).
    pub path: String,
    /// File or folder.
    #[serde(rename = "type")]
    pub kind: NodeKind,
    /// Sorted children; always empty for files.
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// Creates a file node.
    pub fn file(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            kind: NodeKind::File,
            children: Vec::new(),
        }
    }

    /// Creates a folder node with the given children.
    pub fn folder(name: impl Into<String>, path: impl Into<String>, children: Vec<TreeNode>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            kind: NodeKind::Folder,
            children,
        }
    }

    /// Whether this node is a folder.
    pub fn is_folder(&self) -> bool {
        self.kind == NodeKind::Folder
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(TreeNode::count).sum::<usize>()
    }
}

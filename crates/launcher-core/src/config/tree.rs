//! Directory tree enumeration limits.

use serde::{Deserialize, Serialize};

/// Optional bounds on tree construction. Both are unbounded by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeConfig {
    /// Folders at this depth or deeper are returned without children
    /// (the root is depth 0).
    #[serde(default)]
    pub max_depth: Option<usize>,
    /// Maximum number of nodes in one tree, the root included.
    #[serde(default)]
    pub max_entries: Option<usize>,
}

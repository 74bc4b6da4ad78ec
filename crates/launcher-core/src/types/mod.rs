//! Value types shared across the launcher workspace.

pub mod settings;
pub mod tree;

pub use settings::{Language, Settings};
pub use tree::{NodeKind, TreeNode};

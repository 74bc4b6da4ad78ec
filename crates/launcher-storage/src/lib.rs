//! # launcher-storage
//!
//! Local filesystem access for the content root: [`PathGuard`] keeps
//! user-supplied paths inside the root and [`TreeBuilder`] produces
//! sorted, hidden-entry-free snapshots of the directory tree.

pub mod guard;
pub mod tree;

pub use guard::PathGuard;
pub use tree::TreeBuilder;

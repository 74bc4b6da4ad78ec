//! Validation of a user's file or folder selection.

use std::fs;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use launcher_core::error::AppError;
use launcher_core::result::AppResult;
use launcher_core::types::NodeKind;
use launcher_storage::PathGuard;

/// A selection that passed containment and existence checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    /// What the path points at on disk right now.
    #[serde(rename = "type")]
    pub kind: NodeKind,
    /// The path exactly as requested.
    pub rel_path: String,
    /// Resolved absolute path.
    pub absolute_path: String,
}

/// Checks selections against the content root.
#[derive(Debug, Clone)]
pub struct SelectionService {
    guard: PathGuard,
}

impl SelectionService {
    /// Creates a selection service over `guard`'s root.
    pub fn new(guard: PathGuard) -> Self {
        Self { guard }
    }

    /// The guard protecting the content root.
    pub fn guard(&self) -> &PathGuard {
        &self.guard
    }

    /// Resolves `requested` and confirms it exists.
    ///
    /// Fails with `InvalidPath` when the path escapes the root and
    /// `NotFound` when nothing can be stat'ed there.
    pub fn select(&self, requested: &str) -> AppResult<Selection> {
        let full = self.guard.resolve(requested)?;

        let meta = fs::metadata(&full).map_err(|e| {
            debug!(path = %full.display(), error = %e, "Selected path cannot be stat'ed");
            AppError::not_found("Not found")
        })?;

        let kind = if meta.is_dir() {
            NodeKind::Folder
        } else {
            NodeKind::File
        };

        info!(kind = %kind, path = %full.display(), "Selected");
        Ok(Selection {
            kind,
            rel_path: requested.to_string(),
            absolute_path: full.display().to_string(),
        })
    }
}

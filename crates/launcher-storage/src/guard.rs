//! Containment of user-supplied paths inside the content root.
//!
//! Resolution is purely lexical: `.` and `..` segments are folded before
//! the containment test and the filesystem is never consulted. A symlink
//! inside the root that points elsewhere is therefore *not* detected.

use std::path::{Component, Path, PathBuf};

use tracing::{debug, warn};

use launcher_core::error::AppError;
use launcher_core::result::AppResult;

/// Resolves relative paths against a fixed root, rejecting escapes.
#[derive(Debug, Clone)]
pub struct PathGuard {
    /// Absolute, normalized root.
    root: PathBuf,
}

impl PathGuard {
    /// Creates a guard for `root`. Relative roots are made absolute against
    /// the current working directory.
    pub fn new(root: impl AsRef<Path>) -> AppResult<Self> {
        let absolute = std::path::absolute(root.as_ref()).map_err(|e| {
            AppError::with_source(
                launcher_core::error::ErrorKind::Configuration,
                format!("Cannot make content root absolute: {}", root.as_ref().display()),
                e,
            )
        })?;
        Ok(Self {
            root: normalize(&absolute),
        })
    }

    /// The absolute root every resolved path must stay under.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Joins `requested` onto the root and normalizes it.
    ///
    /// Empty input resolves to the root itself. Anything that lands outside
    /// the root (including absolute input pointing elsewhere) is rejected
    /// with [`ErrorKind::InvalidPath`](launcher_core::error::ErrorKind::InvalidPath).
    pub fn resolve(&self, requested: &str) -> AppResult<PathBuf> {
        let resolved = normalize(&self.root.join(requested));

        if !resolved.starts_with(&self.root) {
            warn!(requested, resolved = %resolved.display(), "Rejected path outside content root");
            return Err(AppError::invalid_path("Invalid path"));
        }

        debug!(requested, resolved = %resolved.display(), "Resolved content path");
        Ok(resolved)
    }

    /// Renders a path under the root as forward-slash relative text.
    ///
    /// Returns `None` when `path` is not under the root.
    pub fn relative(&self, path: &Path) -> Option<String> {
        relative_to(&self.root, path)
    }
}

/// Folds `.` and `..` segments without touching the filesystem.
///
/// `..` at the filesystem root stays at the root.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => out.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            Component::Normal(segment) => out.push(segment),
        }
    }
    out
}

/// Forward-slash path of `path` relative to `root` (`""` for the root).
pub fn relative_to(root: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let segments: Vec<String> = rel
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();
    Some(segments.join("/"))
}

//! Filesystem locations used by the launcher.
//!
//! Relative paths are interpreted against the process working directory,
//! matching how the launcher is normally started from its project folder.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Content root, settings and static asset locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory whose subtree is exposed for browsing and selection.
    #[serde(default = "default_content_dir")]
    pub content_dir: String,
    /// Directory holding the canonical settings file.
    #[serde(default = "default_config_dir")]
    pub config_dir: String,
    /// File name of the canonical settings file inside `config_dir`.
    #[serde(default = "default_settings_file")]
    pub settings_file: String,
    /// Older settings location, checked only as a migration source.
    #[serde(default = "default_legacy_settings_file")]
    pub legacy_settings_file: String,
    /// Directory of static front-end assets.
    #[serde(default = "default_public_dir")]
    pub public_dir: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            content_dir: default_content_dir(),
            config_dir: default_config_dir(),
            settings_file: default_settings_file(),
            legacy_settings_file: default_legacy_settings_file(),
            public_dir: default_public_dir(),
        }
    }
}

impl PathsConfig {
    /// Content root as a path.
    pub fn content_root(&self) -> PathBuf {
        PathBuf::from(&self.content_dir)
    }

    /// Canonical settings directory.
    pub fn config_root(&self) -> PathBuf {
        PathBuf::from(&self.config_dir)
    }

    /// Canonical settings file (`config_dir/settings_file`).
    pub fn canonical_settings_path(&self) -> PathBuf {
        self.config_root().join(&self.settings_file)
    }

    /// Legacy settings file.
    pub fn legacy_settings_path(&self) -> PathBuf {
        PathBuf::from(&self.legacy_settings_file)
    }

    /// Static asset directory.
    pub fn public_root(&self) -> PathBuf {
        PathBuf::from(&self.public_dir)
    }
}

fn default_content_dir() -> String {
    "content".to_string()
}

fn default_config_dir() -> String {
    "config".to_string()
}

fn default_settings_file() -> String {
    "user-settings.json".to_string()
}

fn default_legacy_settings_file() -> String {
    "user-settings.json".to_string()
}

fn default_public_dir() -> String {
    "public".to_string()
}

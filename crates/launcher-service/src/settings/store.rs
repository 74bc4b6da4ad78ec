//! On-disk settings store.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

use launcher_core::config::paths::PathsConfig;
use launcher_core::error::{AppError, ErrorKind};
use launcher_core::result::AppResult;
use launcher_core::types::Settings;

use super::migration::MigrationOutcome;
use super::normalize::{SettingsInput, from_stored};

/// Where settings live on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsLocations {
    /// Directory created on demand for the canonical file.
    pub config_dir: PathBuf,
    /// Primary settings file.
    pub canonical: PathBuf,
    /// Older location read once and migrated.
    pub legacy: PathBuf,
}

impl SettingsLocations {
    /// Locations from the `[paths]` configuration section.
    pub fn from_config(paths: &PathsConfig) -> Self {
        Self {
            config_dir: paths.config_root(),
            canonical: paths.canonical_settings_path(),
            legacy: paths.legacy_settings_path(),
        }
    }
}

/// Loads and saves [`Settings`] as a JSON file.
///
/// There is no locking: concurrent saves race and the last writer wins.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    locations: SettingsLocations,
}

impl SettingsStore {
    /// Creates a store over the given locations. Nothing is touched on disk
    /// until the first call.
    pub fn new(locations: SettingsLocations) -> Self {
        Self { locations }
    }

    /// The configured file locations.
    pub fn locations(&self) -> &SettingsLocations {
        &self.locations
    }

    /// Returns the stored settings, migrating the legacy file on first use.
    ///
    /// `None` means no settings exist or they could not be read; callers
    /// fall back to [`Settings::default`].
    pub fn load(&self) -> Option<Settings> {
        match self.try_load() {
            Ok(settings) => settings,
            Err(e) => {
                warn!(error = %e, "Failed to read stored settings");
                None
            }
        }
    }

    /// Like [`load`](Self::load) but reports read and parse failures.
    pub fn try_load(&self) -> AppResult<Option<Settings>> {
        self.ensure_config_dir();

        if self.locations.canonical.exists() {
            return read_settings(&self.locations.canonical).map(Some);
        }

        match self.migrate_legacy()? {
            MigrationOutcome::Migrated(settings) => Ok(Some(settings)),
            MigrationOutcome::NoLegacy => Ok(None),
            // Another writer created the canonical file in between.
            MigrationOutcome::CanonicalPresent => {
                read_settings(&self.locations.canonical).map(Some)
            }
        }
    }

    /// Normalizes `input` and replaces the stored file with the result.
    pub fn save(&self, input: &SettingsInput) -> AppResult<Settings> {
        self.ensure_config_dir();

        let clean = input.normalize();
        self.persist(&clean)?;

        info!(
            host = %clean.server_host,
            port = %clean.server_port,
            language = %clean.default_language,
            "Saved settings"
        );
        Ok(clean)
    }

    /// Writes `settings` to the canonical location.
    ///
    /// The JSON is fully serialized first, then written to a uniquely named
    /// temporary sibling and renamed into place.
    pub(crate) fn persist(&self, settings: &Settings) -> AppResult<()> {
        let text = settings.to_json_pretty()?;
        write_atomic(&self.locations.canonical, text.as_bytes()).map_err(|e| {
            AppError::with_source(
                ErrorKind::PersistFailed,
                format!(
                    "Failed to write settings file: {}",
                    self.locations.canonical.display()
                ),
                e,
            )
        })
    }

    pub(crate) fn ensure_config_dir(&self) {
        if let Err(e) = fs::create_dir_all(&self.locations.config_dir) {
            warn!(
                dir = %self.locations.config_dir.display(),
                error = %e,
                "Failed to create settings directory"
            );
        }
    }
}

/// Reads and leniently parses a settings file.
pub(crate) fn read_settings(path: &Path) -> AppResult<Settings> {
    let raw = fs::read_to_string(path)?;
    let settings = from_stored(&raw)?;
    debug!(path = %path.display(), "Read settings file");
    Ok(settings)
}

fn write_atomic(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    // Each write gets its own temporary sibling; dropping it on error
    // removes the file.
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

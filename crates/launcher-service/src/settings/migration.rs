//! One-time move of the legacy settings file to the canonical location.

use tracing::info;

use launcher_core::result::AppResult;
use launcher_core::types::Settings;

use super::store::{SettingsStore, read_settings};

/// Result of [`SettingsStore::migrate_legacy`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MigrationOutcome {
    /// The canonical file already exists; the legacy file was not read.
    CanonicalPresent,
    /// Neither file exists.
    NoLegacy,
    /// The legacy file was normalized and written to the canonical location.
    Migrated(Settings),
}

impl SettingsStore {
    /// Copies the legacy settings file to the canonical location.
    ///
    /// Idempotent: once the canonical file exists this is a no-op. The
    /// legacy file itself is never modified or removed.
    pub fn migrate_legacy(&self) -> AppResult<MigrationOutcome> {
        let locations = self.locations();
        if locations.canonical.exists() {
            return Ok(MigrationOutcome::CanonicalPresent);
        }
        if !locations.legacy.exists() {
            return Ok(MigrationOutcome::NoLegacy);
        }

        let settings = read_settings(&locations.legacy)?;
        self.ensure_config_dir();
        self.persist(&settings)?;

        info!(
            from = %locations.legacy.display(),
            to = %locations.canonical.display(),
            "Migrated legacy settings file"
        );
        Ok(MigrationOutcome::Migrated(settings))
    }
}

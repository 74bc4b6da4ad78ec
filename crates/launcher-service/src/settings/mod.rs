//! Persisted settings: normalization, storage, and legacy migration.

pub mod migration;
pub mod normalize;
pub mod store;

pub use migration::MigrationOutcome;
pub use normalize::SettingsInput;
pub use store::{SettingsLocations, SettingsStore};

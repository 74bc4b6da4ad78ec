//! # launcher-service
//!
//! Use cases of the launcher. Services own their collaborators and are
//! shared behind `Arc` by the HTTP layer and the CLI.
//!
//! Filesystem work here is synchronous; async callers run it on the
//! blocking pool.

pub mod dispatch;
pub mod selection;
pub mod settings;

pub use dispatch::{DispatchReceipt, DispatchService, GenerateOutcome, RemoteJob, SubgenClient};
pub use selection::{Selection, SelectionService};
pub use settings::{MigrationOutcome, SettingsInput, SettingsLocations, SettingsStore};

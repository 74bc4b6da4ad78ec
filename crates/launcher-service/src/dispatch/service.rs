//! Selection-to-remote-job orchestration.

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use launcher_core::error::AppError;
use launcher_core::result::AppResult;
use launcher_core::types::Language;

use super::client::SubgenClient;
use super::job::RemoteJob;
use crate::selection::{Selection, SelectionService};
use crate::settings::SettingsStore;

/// Result of a successful generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateOutcome {
    /// The validated selection.
    pub selection: Selection,
    /// URL that was requested on the subtitle server.
    pub remote_url: String,
    /// Directory as the remote server sees it.
    pub directory: String,
    /// Language sent with the request.
    pub language: Language,
    /// HTTP status the remote server answered with.
    pub remote_status: u16,
}

/// Validates a selection, reads the stored server address and fires the
/// batch request.
#[derive(Debug, Clone)]
pub struct DispatchService {
    selection: Arc<SelectionService>,
    settings: Arc<SettingsStore>,
    client: SubgenClient,
    container_prefix: String,
}

impl DispatchService {
    /// Creates a new dispatch service.
    pub fn new(
        selection: Arc<SelectionService>,
        settings: Arc<SettingsStore>,
        client: SubgenClient,
        container_prefix: impl Into<String>,
    ) -> Self {
        Self {
            selection,
            settings,
            client,
            container_prefix: container_prefix.into(),
        }
    }

    /// Synchronous half: validates `requested` and builds the remote job.
    ///
    /// The remote directory comes from the resolved path, so `..` segments
    /// and absolute requests map to the same container path.
    pub fn prepare(&self, requested: &str) -> AppResult<(Selection, RemoteJob)> {
        let selection = self.selection.select(requested)?;
        let rel_path = self
            .selection
            .guard()
            .relative(Path::new(&selection.absolute_path))
            .ok_or_else(|| AppError::invalid_path("Invalid path"))?;

        let settings = self.settings.load().unwrap_or_default();
        let job = RemoteJob::new(&settings, &rel_path, &self.container_prefix)?;
        Ok((selection, job))
    }

    /// Prepares the job on the blocking pool, then sends it.
    pub async fn generate(&self, requested: String) -> AppResult<GenerateOutcome> {
        let this = self.clone();
        let (selection, job) = tokio::task::spawn_blocking(move || this.prepare(&requested))
            .await
            .map_err(|e| AppError::internal(format!("Selection task failed: {e}")))??;

        let receipt = self.client.dispatch(&job).await?;

        Ok(GenerateOutcome {
            selection,
            remote_url: job.url.to_string(),
            directory: job.directory,
            language: job.language,
            remote_status: receipt.remote_status,
        })
    }
}

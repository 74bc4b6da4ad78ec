//! HTTP client for the subtitle server.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use launcher_core::config::remote::RemoteConfig;
use launcher_core::error::{AppError, ErrorKind};
use launcher_core::result::AppResult;

use super::job::RemoteJob;

/// What came back from the subtitle server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchReceipt {
    /// HTTP status returned by the remote server.
    pub remote_status: u16,
}

/// Sends [`RemoteJob`]s. The response body is ignored.
#[derive(Debug, Clone)]
pub struct SubgenClient {
    http: reqwest::Client,
}

impl SubgenClient {
    /// Creates a client with the configured request timeout.
    pub fn new(config: &RemoteConfig) -> AppResult<Self> {
        // The subtitle server is addressed directly on the local network.
        let http = reqwest::Client::builder()
            .no_proxy()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::with_source(ErrorKind::Internal, "Failed to build HTTP client", e)
            })?;
        Ok(Self { http })
    }

    /// Issues the batch request and reports the remote status.
    ///
    /// A non-success status is logged but still returned as a receipt;
    /// only transport failures are errors.
    pub async fn dispatch(&self, job: &RemoteJob) -> AppResult<DispatchReceipt> {
        info!(url = %job.url, directory = %job.directory, language = %job.language, "Dispatching subtitle batch");

        let response = self.http.post(job.url.clone()).send().await.map_err(|e| {
            warn!(url = %job.url, error = %e, "Subtitle server request failed");
            AppError::with_source(
                ErrorKind::ExternalService,
                format!("Subtitle server unreachable: {e}"),
                e,
            )
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %job.url, status = status.as_u16(), "Subtitle server returned an error status");
        }

        Ok(DispatchReceipt {
            remote_status: status.as_u16(),
        })
    }
}

//! Remote subtitle server dispatch configuration.

use serde::{Deserialize, Serialize};

/// How batch requests are sent to the subtitle server.
///
/// The server address itself is user data and lives in the persisted
/// settings file, not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Path under which the subtitle server sees the content root.
    #[serde(default = "default_container_prefix")]
    pub container_prefix: String,
    /// Timeout for the batch request in seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            container_prefix: default_container_prefix(),
            request_timeout_seconds: default_request_timeout(),
        }
    }
}

fn default_container_prefix() -> String {
    "/content".to_string()
}

fn default_request_timeout() -> u64 {
    10
}

//! Request DTOs.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /api/select` and `POST /api/generate`.
///
/// `type` is informational; the kind reported back comes from disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelectRequest {
    /// Path relative to the content root.
    #[serde(default)]
    pub path: Option<Value>,
    /// Kind the client believes it selected.
    #[serde(default, rename = "type")]
    pub kind: Option<Value>,
}

impl SelectRequest {
    /// The requested path; anything other than text means the root.
    pub fn requested_path(&self) -> String {
        self.path
            .as_ref()
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    }
}

//! Response DTOs.

use serde::{Deserialize, Serialize};

use launcher_core::types::{Settings, TreeNode};
use launcher_service::{GenerateOutcome, Selection};

/// Message reported when the content root is absent.
pub const CONTENT_MISSING: &str = "content directory not found";

/// `GET /api/tree`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeResponse {
    pub exists: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub tree: Option<TreeNode>,
}

impl TreeResponse {
    pub fn found(tree: TreeNode) -> Self {
        Self {
            exists: true,
            message: None,
            tree: Some(tree),
        }
    }

    pub fn missing() -> Self {
        Self {
            exists: false,
            message: Some(CONTENT_MISSING.to_string()),
            tree: None,
        }
    }
}

/// `GET /api/settings`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsResponse {
    /// Whether a settings file was found (or migrated).
    pub exists: bool,
    /// Stored values, or defaults.
    pub settings: Settings,
}

/// `POST /api/settings`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveSettingsResponse {
    pub ok: bool,
    pub settings: Settings,
}

/// `POST /api/select`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectResponse {
    pub ok: bool,
    #[serde(flatten)]
    pub selection: Selection,
}

/// `POST /api/generate`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub ok: bool,
    #[serde(flatten)]
    pub outcome: GenerateOutcome,
}

/// `GET /api/health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

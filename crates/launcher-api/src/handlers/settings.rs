//! Settings handlers.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;

use launcher_core::error::{AppError, ErrorKind};
use launcher_service::SettingsInput;

use crate::dto::response::{SaveSettingsResponse, SettingsResponse};
use crate::error::ApiError;
use crate::extractors::LenientJson;
use crate::handlers::blocking;
use crate::state::AppState;

/// GET /api/settings
pub async fn get_settings(
    State(state): State<AppState>,
) -> Result<Json<SettingsResponse>, ApiError> {
    let store = Arc::clone(&state.settings_store);
    let stored = blocking(move || Ok(store.load())).await?;

    Ok(Json(SettingsResponse {
        exists: stored.is_some(),
        settings: stored.unwrap_or_default(),
    }))
}

/// POST /api/settings
pub async fn save_settings(
    State(state): State<AppState>,
    LenientJson(input): LenientJson<SettingsInput>,
) -> Result<Json<SaveSettingsResponse>, ApiError> {
    let store = Arc::clone(&state.settings_store);

    let settings = blocking(move || {
        store.save(&input).map_err(|e| {
            if e.kind == ErrorKind::PersistFailed {
                tracing::error!(error = %e, "Failed to save settings");
                AppError::persist_failed("Failed to save settings")
            } else {
                e
            }
        })
    })
    .await?;

    Ok(Json(SaveSettingsResponse { ok: true, settings }))
}

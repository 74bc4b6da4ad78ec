//! Subtitle generation handler.

use axum::Json;
use axum::extract::State;

use crate::dto::request::SelectRequest;
use crate::dto::response::GenerateResponse;
use crate::error::ApiError;
use crate::extractors::LenientJson;
use crate::state::AppState;

/// POST /api/generate
///
/// Validates the selection, then sends the batch request to the configured
/// subtitle server and reports what it answered.
pub async fn generate(
    State(state): State<AppState>,
    LenientJson(req): LenientJson<SelectRequest>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let outcome = state
        .dispatch_service
        .generate(req.requested_path())
        .await?;

    Ok(Json(GenerateResponse { ok: true, outcome }))
}

//! Selection handler.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;

use crate::dto::request::SelectRequest;
use crate::dto::response::SelectResponse;
use crate::error::ApiError;
use crate::extractors::LenientJson;
use crate::handlers::blocking;
use crate::state::AppState;

/// POST /api/select
pub async fn select(
    State(state): State<AppState>,
    LenientJson(req): LenientJson<SelectRequest>,
) -> Result<Json<SelectResponse>, ApiError> {
    let service = Arc::clone(&state.selection_service);
    let requested = req.requested_path();

    let selection = blocking(move || service.select(&requested)).await?;

    Ok(Json(SelectResponse {
        ok: true,
        selection,
    }))
}

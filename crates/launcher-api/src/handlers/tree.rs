//! Content tree handler.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use tracing::debug;

use crate::dto::response::TreeResponse;
use crate::error::ApiError;
use crate::handlers::blocking;
use crate::state::AppState;

/// GET /api/tree
pub async fn get_tree(State(state): State<AppState>) -> Result<Json<TreeResponse>, ApiError> {
    let builder = Arc::clone(&state.tree_builder);

    let response = blocking(move || {
        if !builder.root().exists() {
            debug!(root = %builder.root().display(), "Content root is missing");
            return Ok(TreeResponse::missing());
        }
        Ok(builder
            .build_root()
            .map_or_else(TreeResponse::missing, TreeResponse::found))
    })
    .await?;

    Ok(Json(response))
}

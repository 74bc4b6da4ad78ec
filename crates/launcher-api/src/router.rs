//! Route definitions for the launcher HTTP API.
//!
//! JSON endpoints are mounted under `/api`; every other path is served from
//! the static asset directory.

use axum::Router;
use axum::routing::{get, post};
use tower_http::services::ServeDir;

use crate::handlers;
use crate::state::AppState;

/// Builds the router with all routes and the static fallback.
pub fn build_router(state: AppState) -> Router {
    let public = ServeDir::new(state.config.paths.public_root());

    Router::new()
        .nest("/api", api_routes())
        .fallback_service(public)
        .with_state(state)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/tree", get(handlers::tree::get_tree))
        .route(
            "/settings",
            get(handlers::settings::get_settings).post(handlers::settings::save_settings),
        )
        .route("/select", post(handlers::select::select))
        .route("/generate", post(handlers::generate::generate))
}

//! # launcher-api
//!
//! HTTP facade for Subgen Launcher built on Axum.
//!
//! Exposes the content tree, settings, selection and generation endpoints
//! under `/api`, serves the static front end for everything else, and maps
//! [`AppError`](launcher_core::AppError) into JSON error responses.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use error::ApiError;
pub use state::AppState;

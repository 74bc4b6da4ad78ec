//! HTTP request handlers.

pub mod generate;
pub mod health;
pub mod select;
pub mod settings;
pub mod tree;

use launcher_core::error::AppError;
use launcher_core::result::AppResult;

use crate::error::ApiError;

/// Runs synchronous filesystem work on the blocking pool.
pub(crate) async fn blocking<F, T>(task: F) -> Result<T, ApiError>
where
    F: FnOnce() -> AppResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(task)
        .await
        .map_err(|e| AppError::internal(format!("Blocking task failed: {e}")))?
        .map_err(ApiError::from)
}

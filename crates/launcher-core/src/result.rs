//! Convenience result type alias for Subgen Launcher.

use crate::error::AppError;

/// A specialized `Result` type for launcher operations.
pub type AppResult<T> = Result<T, AppError>;

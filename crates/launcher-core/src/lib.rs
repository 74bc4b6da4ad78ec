//! # launcher-core
//!
//! Core crate for Subgen Launcher. Contains configuration schemas, the
//! value types shared by every layer (tree nodes, settings, languages),
//! and the unified error system.
//!
//! This crate has **no** internal dependencies on other launcher crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;

//! Batch requests to the remote subtitle server.

pub mod client;
pub mod job;
pub mod service;

pub use client::{DispatchReceipt, SubgenClient};
pub use job::RemoteJob;
pub use service::{DispatchService, GenerateOutcome};

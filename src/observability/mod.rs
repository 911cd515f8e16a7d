//! # Observability Infrastructure
//!
//! Structured logging for identity resolution. Metrics and tracing export
//! belong to the embedding control plane.

pub mod logging;

pub use logging::{init_logging, log_identity_info};

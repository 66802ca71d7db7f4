//! Error types for process-level failures.
//!
//! Tool failures never reach this type: they are rendered as text results
//! at the dispatch boundary (see [`ToolError`](crate::domains::tools::ToolError)).
//! This enum covers what can stop a server from starting or serving.

use thiserror::Error;

use super::transport::TransportError;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for server start-up and lifecycle.
#[derive(Debug, Error)]
pub enum Error {
    /// The transport failed to start or stopped abnormally.
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

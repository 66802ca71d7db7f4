//! Tool-specific error types.
//!
//! Every variant is rendered as `"Error: <Display>"` by the dispatcher, so the
//! `Display` strings are what callers read.

use thiserror::Error;

/// Result type returned by tool handlers.
pub type ToolResult<T> = Result<T, ToolError>;

/// Errors that can occur during tool operations.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool is not registered on this server.
    #[error("Unknown tool: {0}")]
    NotFound(String),

    /// A required parameter is absent or blank.
    #[error("Missing required parameter: {0}")]
    MissingParameter(String),

    /// Arguments did not match the tool's parameter schema.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The database rejected the connection or statement.
    #[error("{backend} error: {message}")]
    Backend {
        backend: &'static str,
        message: String,
    },

    /// The remote service answered with a non-success status.
    #[error("HTTP {status}{}", body_suffix(.body))]
    HttpStatus { status: u16, body: String },

    /// The request never produced a response (DNS, connect, TLS, timeout...).
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// A success response whose body could not be decoded.
    #[error("Response is not valid JSON: {0}")]
    MalformedResponse(String),

    /// The requested capability is not available in this build.
    #[error("{0}")]
    Unsupported(String),

    /// The tool execution failed.
    #[error("Execution failed: {0}")]
    ExecutionFailed(String),
}

fn body_suffix(body: &str) -> String {
    if body.is_empty() {
        String::new()
    } else {
        format!(" - {}", body)
    }
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "missing parameter" error.
    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingParameter(field.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// Wrap a database error with the name of its backend.
    pub fn backend(backend: &'static str, err: impl std::fmt::Display) -> Self {
        Self::Backend {
            backend,
            message: err.to_string(),
        }
    }

    /// Create a new HTTP status error.
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a new malformed response error.
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedResponse(msg.into())
    }

    /// Create a new "unsupported" error.
    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::Unsupported(msg.into())
    }

    /// Create a new "execution failed" error.
    pub fn execution_failed(msg: impl Into<String>) -> Self {
        Self::ExecutionFailed(msg.into())
    }
}

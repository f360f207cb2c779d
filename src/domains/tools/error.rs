//! Tool-specific error types.
//!
//! Webhook-backed tools perform no recovery: any upstream failure is
//! surfaced as a `ToolError` and the invocation fails. The route handlers
//! translate these into MCP protocol errors.

use thiserror::Error;

/// Errors that can occur during tool operations.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Invalid arguments were provided to the tool.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The upstream request failed: unreachable host, connection drop,
    /// or a non-success HTTP status (via `error_for_status`).
    #[error("Upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    /// The upstream response body did not match the expected shape.
    #[error("Unexpected response shape from {endpoint}: {detail}")]
    UnexpectedShape {
        endpoint: &'static str,
        detail: String,
    },

    /// A field the tool depends on was absent from the upstream response.
    #[error("Missing field '{field}' in response from {endpoint}")]
    MissingField {
        endpoint: &'static str,
        field: &'static str,
    },

    /// Form body encoding failed.
    #[error("Form encoding failed: {0}")]
    Encode(#[from] serde_urlencoded::ser::Error),

    /// JSON serialization error while building the response text.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An internal error occurred.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ToolError {
    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// Create a new "unexpected shape" error.
    pub fn unexpected_shape(endpoint: &'static str, detail: impl Into<String>) -> Self {
        Self::UnexpectedShape {
            endpoint,
            detail: detail.into(),
        }
    }

    /// Create a new "missing field" error.
    pub fn missing_field(endpoint: &'static str, field: &'static str) -> Self {
        Self::MissingField { endpoint, field }
    }

    /// Create a new "internal" error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

//! Remote API error types.

use thiserror::Error;

/// Errors that can occur while talking to the Beagle Security API.
///
/// The `Display` output of each variant is the text shown to MCP clients
/// after the `Error: ` prefix, so it stays short and free of debug noise.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response (DNS, connect, I/O).
    #[error("{0}")]
    Transport(String),

    /// The API answered with a status outside 200-299.
    #[error("HTTP {code}: {reason}")]
    Status { code: u16, reason: String },

    /// A 2xx response whose body is not valid JSON.
    #[error("Invalid JSON response: {0}")]
    MalformedBody(String),

    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Client(String),
}

impl ApiError {
    /// Create a transport error.
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Create a status error from an HTTP status code.
    pub fn status(status: reqwest::StatusCode) -> Self {
        Self::Status {
            code: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_string(),
        }
    }

    /// Create a malformed body error.
    pub fn malformed_body(msg: impl Into<String>) -> Self {
        Self::MalformedBody(msg.into())
    }
}

//! Tool-specific error types.

use thiserror::Error;

use crate::core::api::ApiError;

/// Errors that can occur during a tool call.
///
/// The dispatcher renders every variant as `Error: {self}` inside the tool
/// result, so the messages are written for the MCP client.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool is not in the registry.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// The argument bag does not match the tool's schema.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The remote API call failed.
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl ToolError {
    /// Create a new "unknown tool" error.
    pub fn unknown_tool(name: impl Into<String>) -> Self {
        Self::UnknownTool(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }
}

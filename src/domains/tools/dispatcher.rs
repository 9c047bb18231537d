//! Tool dispatcher - turns one tool call into one API request.
//!
//! The dispatcher is the boundary where every failure becomes text: unknown
//! tools, invalid arguments and API failures all come back as a
//! `CallToolResult` whose single text block starts with `Error: `.

use std::sync::Arc;

use rmcp::model::{CallToolResult, Content, JsonObject};
use serde_json::Value;
use tracing::{info, instrument, warn};

use super::{ToolError, ToolRegistry};
use crate::core::api::{ApiError, RemoteApi};

/// Routes tool calls through the registry to a [`RemoteApi`].
#[derive(Clone)]
pub struct ToolDispatcher {
    api: Arc<dyn RemoteApi>,
}

impl ToolDispatcher {
    /// Create a dispatcher sending requests through `api`.
    pub fn new(api: Arc<dyn RemoteApi>) -> Self {
        Self { api }
    }

    /// Execute a tool call. Never fails; errors are encoded in the result.
    #[instrument(skip(self, arguments))]
    pub async fn call(&self, name: &str, arguments: JsonObject) -> CallToolResult {
        match self.try_call(name, arguments).await {
            Ok(text) => CallToolResult::success(vec![Content::text(text)]),
            Err(e) => {
                warn!("Tool {} failed: {}", name, e);
                error_result(&e)
            }
        }
    }

    async fn try_call(&self, name: &str, arguments: JsonObject) -> Result<String, ToolError> {
        let spec = ToolRegistry::find(name).ok_or_else(|| ToolError::unknown_tool(name))?;
        let request = spec.build_request(arguments)?;

        info!("Tool {} -> {}", name, request);
        let body = self.api.send(&request).await?;

        format_success(spec.label, &body)
    }
}

/// Render a successful response as `<label>:\n<pretty JSON>`.
fn format_success(label: &str, body: &Value) -> Result<String, ToolError> {
    let pretty =
        serde_json::to_string_pretty(body).map_err(|e| ApiError::malformed_body(e.to_string()))?;
    Ok(format!("{}:\n{}", label, pretty))
}

/// Create an error result with the `Error: ` prefix.
pub fn error_result(error: &ToolError) -> CallToolResult {
    CallToolResult::error(vec![Content::text(format!("Error: {}", error))])
}

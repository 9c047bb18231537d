//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating to the tools domain.
//!
//! ## Tool Architecture
//!
//! Tools are declared in `domains/tools/definitions/` and collected in the
//! static table in `domains/tools/registry.rs`. Listing walks that table in
//! order; calls go through the [`ToolDispatcher`], which owns the API client.
//! **Adding a new tool does NOT require modifying this file!**

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, model::*, service::RequestContext,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::api::{BeagleClient, RemoteApi};
use super::config::Config;
use crate::domains::tools::{ToolDispatcher, ToolRegistry};

const INSTRUCTIONS: &str = "Beagle Security tools for managing projects and applications, \
verifying domain ownership and running automated penetration tests. \
A test run is driven by start_test (returns a result token), polled with \
get_test_status, optionally cancelled with stop_test, and read with \
get_test_result once finished. Failed calls return text starting with 'Error:'.";

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp. It is cheap
/// to clone; clones share the configuration and the API client.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Dispatcher for tool calls.
    dispatcher: ToolDispatcher,
}

impl McpServer {
    /// Create a new MCP server talking to the configured Beagle Security API.
    pub fn new(config: Config) -> super::Result<Self> {
        let client = BeagleClient::new(&config.api)?;
        Ok(Self::with_api(config, Arc::new(client)))
    }

    /// Create a server that sends requests through the given API.
    pub fn with_api(config: Config, api: Arc<dyn RemoteApi>) -> Self {
        Self {
            config: Arc::new(config),
            dispatcher: ToolDispatcher::new(api),
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Usage notes sent to clients on initialize.
    pub fn instructions(&self) -> &'static str {
        INSTRUCTIONS
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools as JSON (for HTTP transport).
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        ToolRegistry::get_all_tools()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema,
                    "annotations": t.annotations
                })
            })
            .collect()
    }

    /// Call a tool by name and serialize the result (for HTTP transport).
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: JsonObject,
    ) -> Result<serde_json::Value, String> {
        let result = self.dispatcher.call(name, arguments).await;
        serde_json::to_value(&result).map_err(|e| e.to_string())
    }
}

impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Implementation::from_build_env()
            },
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        info!("Listing tools");
        Ok(ListToolsResult {
            tools: ToolRegistry::get_all_tools(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, request, _context), fields(tool = %request.name))]
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let arguments = request.arguments.unwrap_or_default();
        Ok(self.dispatcher.call(&request.name, arguments).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_from_default_config() {
        let server = McpServer::new(Config::default()).unwrap();
        assert_eq!(server.name(), "beagle-security-mcp-server");
        assert_eq!(server.version(), env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_list_tools_json() {
        let server = McpServer::new(Config::default()).unwrap();
        let tools = server.list_tools();
        assert_eq!(tools.len(), 15);
        assert_eq!(tools[0]["name"], "beagle_create_project");
        assert!(tools[0]["inputSchema"]["properties"].is_object());
    }

    #[test]
    fn test_info_enables_tools_only() {
        let server = McpServer::new(Config::default()).unwrap();
        let info = server.get_info();
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_none());
        assert!(info.capabilities.prompts.is_none());
    }

    #[test]
    fn test_info_reports_configured_name() {
        let mut config = Config::default();
        config.server.name = "beagle-staging".to_string();
        let server = McpServer::new(config).unwrap();

        let info = server.get_info();
        assert_eq!(info.server_info.name, "beagle-staging");
        assert_eq!(info.server_info.version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_info_default_name() {
        let info = McpServer::new(Config::default()).unwrap().get_info();
        assert_eq!(info.server_info.name, "beagle-security-mcp-server");
    }

    #[tokio::test]
    async fn test_call_tool_json_unknown() {
        let server = McpServer::new(Config::default()).unwrap();
        let result = server.call_tool("nope", JsonObject::new()).await.unwrap();
        assert_eq!(result["content"][0]["text"], "Error: Unknown tool: nope");
        assert_eq!(result["isError"], true);
    }
}

//! Beagle Security MCP Server Library
//!
//! This crate exposes the Beagle Security REST API as a fixed set of Model
//! Context Protocol (MCP) tools. Each tool call is forwarded as exactly one
//! HTTP request; the JSON response, or an `Error: ...` string, is relayed
//! back to the client.
//!
//! # Architecture
//!
//! - **core**: Configuration, error handling, the API client, the server
//!   handler and the transports
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: The tool registry, tool definitions and dispatcher
//!
//! # Example
//!
//! ```rust,no_run
//! use beagle_mcp_server::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config.clone())?;
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};

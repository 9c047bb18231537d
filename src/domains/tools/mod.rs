//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Every tool forwards to exactly one Beagle Security API endpoint.
//!
//! ## Architecture
//!
//! - `definitions/` - Tool implementations, one file per API area
//! - `spec.rs` - The [`ApiTool`] trait and its type-erased [`ToolSpec`] entry
//! - `registry.rs` - The static tool table, lookup and listing
//! - `dispatcher.rs` - Validation, request dispatch and result formatting
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Add a params struct and a unit struct implementing `ApiTool` in the
//!    matching file under `definitions/`
//! 2. Export it in `definitions/mod.rs`
//! 3. Add `ToolSpec::of::<YourTool>()` to the table in `registry.rs`
//!
//! Nothing else changes: the server and every transport list and dispatch
//! through the registry.

pub mod definitions;
mod dispatcher;
mod error;
mod registry;
mod spec;

pub use dispatcher::{ToolDispatcher, error_result};
pub use error::ToolError;
pub use registry::ToolRegistry;
pub use spec::{ApiTool, ToolBehavior, ToolCategory, ToolSpec};

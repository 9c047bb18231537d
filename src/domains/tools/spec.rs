//! Table entries describing each tool.
//!
//! Every tool implements [`ApiTool`]: a typed parameter struct plus a pure
//! function from those parameters to an [`ApiRequest`]. [`ToolSpec::of`]
//! erases the types into a plain table entry so the registry can hold all
//! tools in one static slice and the dispatcher can treat them uniformly.

use std::sync::Arc;

use rmcp::{
    handler::server::tool::cached_schema_for_type,
    model::{JsonObject, Tool, ToolAnnotations},
};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;

use super::ToolError;
use crate::core::api::ApiRequest;

/// Functional group a tool belongs to. Registry order follows this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ToolCategory {
    Project,
    Application,
    DomainVerification,
    Testing,
}

/// Effect of a tool on the remote system, advertised as MCP annotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolBehavior {
    /// Pure read.
    ReadOnly,
    /// Creates something new on every call.
    Additive,
    /// Changes state, but repeating the call changes nothing further.
    Idempotent,
    /// Removes data.
    Destructive,
}

impl ToolBehavior {
    fn annotations(self) -> ToolAnnotations {
        let (read_only, destructive, idempotent) = match self {
            Self::ReadOnly => (true, false, true),
            Self::Additive => (false, false, false),
            Self::Idempotent => (false, false, true),
            Self::Destructive => (false, true, true),
        };

        ToolAnnotations {
            title: None,
            read_only_hint: Some(read_only),
            destructive_hint: Some(destructive),
            idempotent_hint: Some(idempotent),
            open_world_hint: Some(true),
        }
    }
}

/// A tool that forwards to exactly one Beagle Security API endpoint.
pub trait ApiTool {
    /// Typed arguments; its JSON schema is the tool's input schema.
    type Params: DeserializeOwned + JsonSchema + 'static;

    /// Tool name as registered in MCP.
    const NAME: &'static str;

    /// Tool description shown to clients.
    const DESCRIPTION: &'static str;

    /// Prefix of the success text, followed by `:\n` and the response JSON.
    const LABEL: &'static str;

    const CATEGORY: ToolCategory;

    const BEHAVIOR: ToolBehavior;

    /// Map validated parameters to the outbound request.
    fn request(params: Self::Params) -> Result<ApiRequest, ToolError>;
}

/// Type-erased description of one tool.
#[derive(Clone, Copy)]
pub struct ToolSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub label: &'static str,
    pub category: ToolCategory,
    pub behavior: ToolBehavior,
    schema: fn() -> Arc<JsonObject>,
    build: fn(JsonObject) -> Result<ApiRequest, ToolError>,
}

impl ToolSpec {
    /// Build the table entry for an [`ApiTool`].
    pub const fn of<T: ApiTool>() -> Self {
        Self {
            name: T::NAME,
            description: T::DESCRIPTION,
            label: T::LABEL,
            category: T::CATEGORY,
            behavior: T::BEHAVIOR,
            schema: cached_schema_for_type::<T::Params>,
            build: build_request::<T>,
        }
    }

    /// JSON schema of the tool's arguments.
    pub fn input_schema(&self) -> Arc<JsonObject> {
        (self.schema)()
    }

    /// Validate an argument bag and map it to the outbound request.
    pub fn build_request(&self, arguments: JsonObject) -> Result<ApiRequest, ToolError> {
        (self.build)(arguments)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool(&self) -> Tool {
        Tool {
            name: self.name.into(),
            description: Some(self.description.into()),
            input_schema: self.input_schema(),
            annotations: Some(self.behavior.annotations()),
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}

impl std::fmt::Debug for ToolSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolSpec")
            .field("name", &self.name)
            .field("category", &self.category)
            .field("behavior", &self.behavior)
            .finish()
    }
}

fn build_request<T: ApiTool>(arguments: JsonObject) -> Result<ApiRequest, ToolError> {
    let params: T::Params = serde_json::from_value(serde_json::Value::Object(arguments))
        .map_err(|e| ToolError::invalid_arguments(e.to_string()))?;
    T::request(params)
}

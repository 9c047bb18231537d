//! Tool Registry - the static catalog of every tool.
//!
//! This module provides:
//! - The single table of all tools, in listing order
//! - Lookup by name for the dispatcher
//! - Tool metadata for `tools/list`

use rmcp::model::Tool;

use super::definitions::{
    CreateApplicationTool, CreateProjectTool, DeleteApplicationTool, DeleteProjectTool,
    GetApplicationTool, GetDomainSignatureTool, GetTestResultTool, GetTestStatusTool,
    ListApplicationsTool, ListProjectsTool, ListRunningTestsTool, ListTestSessionsTool,
    StartTestTool, StopTestTool, VerifyDomainTool,
};
use super::spec::{ToolCategory, ToolSpec};

/// Every tool, grouped by category. This order is the `tools/list` order.
static TOOLS: [ToolSpec; 15] = [
    // Project management
    ToolSpec::of::<CreateProjectTool>(),
    ToolSpec::of::<ListProjectsTool>(),
    ToolSpec::of::<DeleteProjectTool>(),
    // Application management
    ToolSpec::of::<CreateApplicationTool>(),
    ToolSpec::of::<GetApplicationTool>(),
    ToolSpec::of::<ListApplicationsTool>(),
    ToolSpec::of::<DeleteApplicationTool>(),
    // Domain verification
    ToolSpec::of::<GetDomainSignatureTool>(),
    ToolSpec::of::<VerifyDomainTool>(),
    // Testing
    ToolSpec::of::<StartTestTool>(),
    ToolSpec::of::<GetTestStatusTool>(),
    ToolSpec::of::<StopTestTool>(),
    ToolSpec::of::<GetTestResultTool>(),
    ToolSpec::of::<ListTestSessionsTool>(),
    ToolSpec::of::<ListRunningTestsTool>(),
];

/// Tool registry - read-only access to the tool table.
pub struct ToolRegistry;

impl ToolRegistry {
    /// All tool specs in listing order.
    pub fn specs() -> &'static [ToolSpec] {
        &TOOLS
    }

    /// Find a tool by its MCP name.
    pub fn find(name: &str) -> Option<&'static ToolSpec> {
        TOOLS.iter().find(|spec| spec.name == name)
    }

    /// Get all tool names.
    pub fn tool_names() -> Vec<&'static str> {
        TOOLS.iter().map(|spec| spec.name).collect()
    }

    /// Tools belonging to one category.
    pub fn in_category(category: ToolCategory) -> impl Iterator<Item = &'static ToolSpec> {
        TOOLS.iter().filter(move |spec| spec.category == category)
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// This is the single source of truth for all available tools.
    /// Every transport lists tools through this.
    pub fn get_all_tools() -> Vec<Tool> {
        TOOLS.iter().map(ToolSpec::to_tool).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn required_fields(name: &str) -> Vec<String> {
        let schema = ToolRegistry::find(name).unwrap().input_schema();
        let mut fields: Vec<String> = schema
            .get("required")
            .and_then(|v| v.as_array())
            .map(|a| a.iter().filter_map(|v| v.as_str().map(String::from)).collect())
            .unwrap_or_default();
        fields.sort();
        fields
    }

    #[test]
    fn test_registry_has_fifteen_unique_tools() {
        let names = ToolRegistry::tool_names();
        assert_eq!(names.len(), 15);
        let unique: HashSet<_> = names.iter().collect();
        assert_eq!(unique.len(), 15);
    }

    #[test]
    fn test_every_tool_is_described_and_labelled() {
        for spec in ToolRegistry::specs() {
            assert!(spec.name.starts_with("beagle_"), "{}", spec.name);
            assert!(!spec.description.is_empty(), "{}", spec.name);
            assert!(!spec.label.is_empty(), "{}", spec.name);
        }
    }

    #[test]
    fn test_listing_is_grouped_by_category() {
        let categories: Vec<_> = ToolRegistry::specs().iter().map(|s| s.category).collect();
        let mut sorted = categories.clone();
        sorted.sort();
        assert_eq!(categories, sorted);

        assert_eq!(ToolRegistry::in_category(ToolCategory::Project).count(), 3);
        assert_eq!(ToolRegistry::in_category(ToolCategory::Application).count(), 4);
        assert_eq!(ToolRegistry::in_category(ToolCategory::DomainVerification).count(), 2);
        assert_eq!(ToolRegistry::in_category(ToolCategory::Testing).count(), 6);
    }

    #[test]
    fn test_listing_order_is_stable() {
        let first: Vec<_> = ToolRegistry::get_all_tools().into_iter().map(|t| t.name).collect();
        let second: Vec<_> = ToolRegistry::get_all_tools().into_iter().map(|t| t.name).collect();
        assert_eq!(first, second);
        assert_eq!(first[0], "beagle_create_project");
        assert_eq!(first[14], "beagle_list_running_tests");
    }

    #[test]
    fn test_required_fields_match_api() {
        let expected: &[(&str, &[&str])] = &[
            ("beagle_create_project", &["name"]),
            ("beagle_list_projects", &[]),
            ("beagle_delete_project", &["projectKey"]),
            ("beagle_create_application", &["name", "projectKey", "type", "url"]),
            ("beagle_get_application", &["applicationToken"]),
            ("beagle_list_applications", &["projectKey"]),
            ("beagle_delete_application", &["applicationToken"]),
            ("beagle_get_domain_signature", &["applicationToken"]),
            ("beagle_verify_domain", &["applicationToken", "signature"]),
            ("beagle_start_test", &["applicationToken"]),
            ("beagle_get_test_status", &["applicationToken", "resultToken"]),
            ("beagle_stop_test", &["applicationToken", "resultToken"]),
            ("beagle_get_test_result", &["applicationToken", "resultToken"]),
            ("beagle_list_test_sessions", &["applicationToken"]),
            ("beagle_list_running_tests", &[]),
        ];

        assert_eq!(expected.len(), ToolRegistry::specs().len());
        for (name, fields) in expected {
            assert_eq!(required_fields(name), *fields, "required fields of {}", name);
        }
    }

    #[test]
    fn test_schema_uses_camel_case_properties() {
        let schema = ToolRegistry::find("beagle_create_project").unwrap().input_schema();
        let properties = schema.get("properties").and_then(|v| v.as_object()).unwrap();
        assert!(properties.contains_key("name"));
        assert!(properties.contains_key("description"));
        assert!(properties.contains_key("teamId"));
    }

    fn property_schema(tool: &str, property: &str) -> String {
        let schema = ToolRegistry::find(tool).unwrap().input_schema();
        schema["properties"][property].to_string()
    }

    #[test]
    fn test_optional_scalar_types() {
        let count = property_schema("beagle_list_test_sessions", "count");
        assert!(count.contains("\"number\""), "{}", count);
        assert!(!count.contains("integer"), "{}", count);

        let include_team = property_schema("beagle_list_projects", "includeTeam");
        assert!(include_team.contains("\"boolean\""), "{}", include_team);
    }

    #[test]
    fn test_find_unknown() {
        assert!(ToolRegistry::find("does_not_exist").is_none());
    }
}

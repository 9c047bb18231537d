//! Project management tools.
//!
//! Projects group applications in Beagle Security. Projects can be owned by
//! the user or, when a team ID is given, by a team.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;

use super::common::{present, required, without_nulls};
use crate::core::api::ApiRequest;
use crate::domains::tools::{ApiTool, ToolBehavior, ToolCategory, ToolError};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for creating a project.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectParams {
    /// Project name
    pub name: String,

    /// Project description
    #[serde(default)]
    pub description: Option<String>,

    /// Team ID (optional)
    #[serde(default)]
    pub team_id: Option<String>,
}

/// Parameters for listing projects.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListProjectsParams {
    /// Include team projects
    #[serde(default)]
    pub include_team: Option<bool>,
}

/// Parameters for deleting a project.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteProjectParams {
    /// Project key to delete
    pub project_key: String,
}

// ============================================================================
// Tool Definitions
// ============================================================================

/// Create a project, optionally under a team.
pub struct CreateProjectTool;

impl ApiTool for CreateProjectTool {
    type Params = CreateProjectParams;
    const NAME: &'static str = "beagle_create_project";
    const DESCRIPTION: &'static str = "Create a new project in Beagle Security";
    const LABEL: &'static str = "Project created successfully";
    const CATEGORY: ToolCategory = ToolCategory::Project;
    const BEHAVIOR: ToolBehavior = ToolBehavior::Additive;

    fn request(params: CreateProjectParams) -> Result<ApiRequest, ToolError> {
        let name = required("name", params.name)?;

        // The API reads the team scope as camelCase `teamId` here.
        Ok(ApiRequest::post("/projects")
            .query_opt("teamId", present(params.team_id))
            .json(without_nulls(json!({
                "name": name,
                "description": params.description,
            }))))
    }
}

/// List projects and their applications.
pub struct ListProjectsTool;

impl ApiTool for ListProjectsTool {
    type Params = ListProjectsParams;
    const NAME: &'static str = "beagle_list_projects";
    const DESCRIPTION: &'static str = "List all projects and applications";
    const LABEL: &'static str = "Projects";
    const CATEGORY: ToolCategory = ToolCategory::Project;
    const BEHAVIOR: ToolBehavior = ToolBehavior::ReadOnly;

    fn request(params: ListProjectsParams) -> Result<ApiRequest, ToolError> {
        let request = ApiRequest::get("/projects");
        Ok(if params.include_team.unwrap_or(false) {
            request.query("include_team", "true")
        } else {
            request
        })
    }
}

/// Delete a project by key.
pub struct DeleteProjectTool;

impl ApiTool for DeleteProjectTool {
    type Params = DeleteProjectParams;
    const NAME: &'static str = "beagle_delete_project";
    const DESCRIPTION: &'static str = "Delete a project";
    const LABEL: &'static str = "Project deleted";
    const CATEGORY: ToolCategory = ToolCategory::Project;
    const BEHAVIOR: ToolBehavior = ToolBehavior::Destructive;

    fn request(params: DeleteProjectParams) -> Result<ApiRequest, ToolError> {
        let project_key = required("projectKey", params.project_key)?;
        Ok(ApiRequest::delete("/projects").query("project_key", project_key))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::api::HttpMethod;

    fn create(team_id: Option<&str>) -> ApiRequest {
        CreateProjectTool::request(CreateProjectParams {
            name: "Shop".to_string(),
            description: Some("Storefront".to_string()),
            team_id: team_id.map(str::to_string),
        })
        .unwrap()
    }

    #[test]
    fn test_create_project_without_team() {
        let request = create(None);
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.path_and_query(), "/projects");
        assert_eq!(
            request.body,
            Some(json!({ "name": "Shop", "description": "Storefront" }))
        );
    }

    #[test]
    fn test_create_project_team_scope_only_changes_query() {
        let personal = create(None);
        let team = create(Some("team-1"));

        assert_eq!(team.path_and_query(), "/projects?teamId=team-1");
        assert_eq!(personal.method, team.method);
        assert_eq!(personal.path, team.path);
        assert_eq!(personal.body, team.body);
        assert_ne!(personal.query, team.query);
    }

    #[test]
    fn test_create_project_blank_team_is_ignored() {
        assert_eq!(create(Some("")).path_and_query(), "/projects");
    }

    #[test]
    fn test_create_project_omits_missing_description() {
        let request = CreateProjectTool::request(CreateProjectParams {
            name: "Shop".to_string(),
            description: None,
            team_id: None,
        })
        .unwrap();
        assert_eq!(request.body, Some(json!({ "name": "Shop" })));
    }

    #[test]
    fn test_create_project_requires_name() {
        let result = CreateProjectTool::request(CreateProjectParams {
            name: " ".to_string(),
            description: None,
            team_id: None,
        });
        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
    }

    #[test]
    fn test_list_projects() {
        let own = ListProjectsTool::request(ListProjectsParams { include_team: Some(false) }).unwrap();
        assert_eq!(own.to_string(), "GET /projects");

        let team = ListProjectsTool::request(ListProjectsParams { include_team: Some(true) }).unwrap();
        assert_eq!(team.to_string(), "GET /projects?include_team=true");
    }

    #[test]
    fn test_list_projects_params_default() {
        let params: ListProjectsParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params.include_team, None);
    }

    #[test]
    fn test_list_projects_null_include_team() {
        let params: ListProjectsParams =
            serde_json::from_value(json!({ "includeTeam": null })).unwrap();
        let request = ListProjectsTool::request(params).unwrap();
        assert_eq!(request.to_string(), "GET /projects");
    }

    #[test]
    fn test_delete_project() {
        let request = DeleteProjectTool::request(DeleteProjectParams {
            project_key: "proj-1".to_string(),
        })
        .unwrap();
        assert_eq!(request.to_string(), "DELETE /projects?project_key=proj-1");
        assert!(request.body.is_none());
    }
}

//! Application management tools.
//!
//! An application is a scan target (a web site or an API) that lives inside
//! a project and is addressed by its application token.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::common::{required, without_nulls};
use crate::core::api::ApiRequest;
use crate::domains::tools::{ApiTool, ToolBehavior, ToolCategory, ToolError};

/// Kind of target being scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum ApplicationType {
    Web,
    Api,
}

/// Parameters for creating an application.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateApplicationParams {
    /// Application name
    pub name: String,

    /// Application URL
    pub url: String,

    /// Project key
    pub project_key: String,

    /// Application type
    #[serde(rename = "type")]
    pub kind: ApplicationType,

    /// Application description
    #[serde(default)]
    pub description: Option<String>,
}

/// Parameters for tools addressing a single application.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationTokenParams {
    /// Application token
    pub application_token: String,
}

/// Parameters for listing the applications of a project.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListApplicationsParams {
    /// Project key
    pub project_key: String,
}

pub struct CreateApplicationTool;

impl ApiTool for CreateApplicationTool {
    type Params = CreateApplicationParams;
    const NAME: &'static str = "beagle_create_application";
    const DESCRIPTION: &'static str = "Create a new application in a project";
    const LABEL: &'static str = "Application created successfully";
    const CATEGORY: ToolCategory = ToolCategory::Application;
    const BEHAVIOR: ToolBehavior = ToolBehavior::Additive;

    fn request(params: CreateApplicationParams) -> Result<ApiRequest, ToolError> {
        let name = required("name", params.name)?;
        let url = required("url", params.url)?;
        let project_key = required("projectKey", params.project_key)?;

        Ok(ApiRequest::post("/applications").json(without_nulls(json!({
            "name": name,
            "url": url,
            "project_key": project_key,
            "type": params.kind,
            "description": params.description,
        }))))
    }
}

pub struct GetApplicationTool;

impl ApiTool for GetApplicationTool {
    type Params = ApplicationTokenParams;
    const NAME: &'static str = "beagle_get_application";
    const DESCRIPTION: &'static str = "Get application details by token";
    const LABEL: &'static str = "Application details";
    const CATEGORY: ToolCategory = ToolCategory::Application;
    const BEHAVIOR: ToolBehavior = ToolBehavior::ReadOnly;

    fn request(params: ApplicationTokenParams) -> Result<ApiRequest, ToolError> {
        let token = required("applicationToken", params.application_token)?;
        Ok(ApiRequest::get("/applications").query("application_token", token))
    }
}

pub struct ListApplicationsTool;

impl ApiTool for ListApplicationsTool {
    type Params = ListApplicationsParams;
    const NAME: &'static str = "beagle_list_applications";
    const DESCRIPTION: &'static str = "List all applications under a project";
    const LABEL: &'static str = "Applications";
    const CATEGORY: ToolCategory = ToolCategory::Application;
    const BEHAVIOR: ToolBehavior = ToolBehavior::ReadOnly;

    fn request(params: ListApplicationsParams) -> Result<ApiRequest, ToolError> {
        let project_key = required("projectKey", params.project_key)?;
        Ok(ApiRequest::get("/applications").query("project_key", project_key))
    }
}

pub struct DeleteApplicationTool;

impl ApiTool for DeleteApplicationTool {
    type Params = ApplicationTokenParams;
    const NAME: &'static str = "beagle_delete_application";
    const DESCRIPTION: &'static str = "Delete an application";
    const LABEL: &'static str = "Application deleted";
    const CATEGORY: ToolCategory = ToolCategory::Application;
    const BEHAVIOR: ToolBehavior = ToolBehavior::Destructive;

    fn request(params: ApplicationTokenParams) -> Result<ApiRequest, ToolError> {
        let token = required("applicationToken", params.application_token)?;
        Ok(ApiRequest::delete("/applications").query("application_token", token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::api::HttpMethod;

    fn token(value: &str) -> ApplicationTokenParams {
        ApplicationTokenParams {
            application_token: value.to_string(),
        }
    }

    #[test]
    fn test_create_application_body_uses_snake_case() {
        let request = CreateApplicationTool::request(CreateApplicationParams {
            name: "Storefront".to_string(),
            url: "https://example.com".to_string(),
            project_key: "proj-1".to_string(),
            kind: ApplicationType::Web,
            description: Some("Public shop".to_string()),
        })
        .unwrap();

        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.path_and_query(), "/applications");
        assert_eq!(
            request.body,
            Some(json!({
                "name": "Storefront",
                "url": "https://example.com",
                "project_key": "proj-1",
                "type": "WEB",
                "description": "Public shop",
            }))
        );
    }

    #[test]
    fn test_application_type_parses_uppercase_only() {
        let params: CreateApplicationParams = serde_json::from_value(json!({
            "name": "a", "url": "https://a.test", "projectKey": "p", "type": "API"
        }))
        .unwrap();
        assert_eq!(params.kind, ApplicationType::Api);

        let result = serde_json::from_value::<CreateApplicationParams>(json!({
            "name": "a", "url": "https://a.test", "projectKey": "p", "type": "MOBILE"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_get_application() {
        let request = GetApplicationTool::request(token("app-1")).unwrap();
        assert_eq!(request.to_string(), "GET /applications?application_token=app-1");
    }

    #[test]
    fn test_list_applications() {
        let request = ListApplicationsTool::request(ListApplicationsParams {
            project_key: "proj-1".to_string(),
        })
        .unwrap();
        assert_eq!(request.to_string(), "GET /applications?project_key=proj-1");
    }

    #[test]
    fn test_delete_application() {
        let request = DeleteApplicationTool::request(token("app-1")).unwrap();
        assert_eq!(request.to_string(), "DELETE /applications?application_token=app-1");
    }

    #[test]
    fn test_blank_token_rejected() {
        assert!(GetApplicationTool::request(token("")).is_err());
    }
}

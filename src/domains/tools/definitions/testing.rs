//! Penetration testing tools.
//!
//! A remote test run moves through `NOT_STARTED -> RUNNING -> COMPLETED`,
//! or `RUNNING -> STOPPED` when cancelled:
//!
//! - `beagle_start_test` starts a run and returns the result token, the
//!   only handle to it.
//! - `beagle_get_test_status` reads progress and may be polled while running.
//! - `beagle_stop_test` stops a running test.
//! - `beagle_get_test_result` fetches the JSON report once the run is over.
//!
//! None of this is tracked locally. Each call is forwarded as-is and the
//! API decides whether it is valid in the current state (e.g. a result
//! request on a running test comes back as an HTTP error).

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;

use super::common::{positive, present, required, without_nulls};
use crate::core::api::ApiRequest;
use crate::domains::tools::{ApiTool, ToolBehavior, ToolCategory, ToolError};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for starting a test.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct StartTestParams {
    /// Application token
    pub application_token: String,

    /// Type of test to run
    #[serde(default)]
    pub test_type: Option<String>,
}

/// Parameters addressing one test run.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TestRunParams {
    /// Application token
    pub application_token: String,

    /// Result token from test start
    pub result_token: String,
}

/// Parameters for listing past test sessions.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListTestSessionsParams {
    /// Application token
    pub application_token: String,

    /// Number of sessions to retrieve
    #[serde(default)]
    pub count: Option<f64>,
}

/// Parameters for listing running tests.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListRunningTestsParams {
    /// Team ID (optional, for team tests)
    #[serde(default)]
    pub team_id: Option<String>,
}

impl TestRunParams {
    fn tokens(self) -> Result<(String, String), ToolError> {
        Ok((
            required("applicationToken", self.application_token)?,
            required("resultToken", self.result_token)?,
        ))
    }

    fn into_query(self, request: ApiRequest) -> Result<ApiRequest, ToolError> {
        let (application_token, result_token) = self.tokens()?;
        Ok(request
            .query("application_token", application_token)
            .query("result_token", result_token))
    }
}

// ============================================================================
// Tool Definitions
// ============================================================================

pub struct StartTestTool;

impl ApiTool for StartTestTool {
    type Params = StartTestParams;
    const NAME: &'static str = "beagle_start_test";
    const DESCRIPTION: &'static str = "Start an automated penetration test";
    const LABEL: &'static str = "Test started";
    const CATEGORY: ToolCategory = ToolCategory::Testing;
    const BEHAVIOR: ToolBehavior = ToolBehavior::Additive;

    fn request(params: StartTestParams) -> Result<ApiRequest, ToolError> {
        let token = required("applicationToken", params.application_token)?;

        Ok(ApiRequest::post("/test/start").json(without_nulls(json!({
            "application_token": token,
            "test_type": params.test_type,
        }))))
    }
}

pub struct GetTestStatusTool;

impl ApiTool for GetTestStatusTool {
    type Params = TestRunParams;
    const NAME: &'static str = "beagle_get_test_status";
    const DESCRIPTION: &'static str = "Get the status of a running test";
    const LABEL: &'static str = "Test status";
    const CATEGORY: ToolCategory = ToolCategory::Testing;
    const BEHAVIOR: ToolBehavior = ToolBehavior::ReadOnly;

    fn request(params: TestRunParams) -> Result<ApiRequest, ToolError> {
        params.into_query(ApiRequest::get("/test/status"))
    }
}

pub struct StopTestTool;

impl ApiTool for StopTestTool {
    type Params = TestRunParams;
    const NAME: &'static str = "beagle_stop_test";
    const DESCRIPTION: &'static str = "Stop a running test";
    const LABEL: &'static str = "Test stopped";
    const CATEGORY: ToolCategory = ToolCategory::Testing;
    const BEHAVIOR: ToolBehavior = ToolBehavior::Idempotent;

    fn request(params: TestRunParams) -> Result<ApiRequest, ToolError> {
        let (application_token, result_token) = params.tokens()?;

        Ok(ApiRequest::post("/test/stop").json(json!({
            "application_token": application_token,
            "result_token": result_token,
        })))
    }
}

pub struct GetTestResultTool;

impl ApiTool for GetTestResultTool {
    type Params = TestRunParams;
    const NAME: &'static str = "beagle_get_test_result";
    const DESCRIPTION: &'static str = "Get detailed test results in JSON format";
    const LABEL: &'static str = "Test results";
    const CATEGORY: ToolCategory = ToolCategory::Testing;
    const BEHAVIOR: ToolBehavior = ToolBehavior::ReadOnly;

    fn request(params: TestRunParams) -> Result<ApiRequest, ToolError> {
        params.into_query(ApiRequest::get("/test/result"))
    }
}

pub struct ListTestSessionsTool;

impl ApiTool for ListTestSessionsTool {
    type Params = ListTestSessionsParams;
    const NAME: &'static str = "beagle_list_test_sessions";
    const DESCRIPTION: &'static str = "List all test sessions for an application";
    const LABEL: &'static str = "Test sessions";
    const CATEGORY: ToolCategory = ToolCategory::Testing;
    const BEHAVIOR: ToolBehavior = ToolBehavior::ReadOnly;

    fn request(params: ListTestSessionsParams) -> Result<ApiRequest, ToolError> {
        let token = required("applicationToken", params.application_token)?;

        // A zero or negative count means "server default", same as leaving it out.
        Ok(ApiRequest::get("/test/sessions")
            .query("application_token", token)
            .query_opt("count", positive(params.count)))
    }
}

pub struct ListRunningTestsTool;

impl ApiTool for ListRunningTestsTool {
    type Params = ListRunningTestsParams;
    const NAME: &'static str = "beagle_list_running_tests";
    const DESCRIPTION: &'static str = "List all running tests for user or team";
    const LABEL: &'static str = "Running tests";
    const CATEGORY: ToolCategory = ToolCategory::Testing;
    const BEHAVIOR: ToolBehavior = ToolBehavior::ReadOnly;

    fn request(params: ListRunningTestsParams) -> Result<ApiRequest, ToolError> {
        // Lowercase `teamid` on this endpoint.
        Ok(ApiRequest::get("/test/runningsessions").query_opt("teamid", present(params.team_id)))
    }
}

// ============================================================================
// Tests
// ============================================================================

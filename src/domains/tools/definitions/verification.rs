//! Domain verification tools.
//!
//! Before a target can be scanned, its owner proves control of the domain
//! by publishing a signature (as a file, a DNS record or an API path) and
//! asking Beagle Security to check it.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;

use super::applications::ApplicationTokenParams;
use super::common::required;
use crate::core::api::ApiRequest;
use crate::domains::tools::{ApiTool, ToolBehavior, ToolCategory, ToolError};

/// Parameters for submitting a domain signature.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct VerifyDomainParams {
    /// Application token
    pub application_token: String,

    /// Domain verification signature
    pub signature: String,
}

pub struct GetDomainSignatureTool;

impl ApiTool for GetDomainSignatureTool {
    type Params = ApplicationTokenParams;
    const NAME: &'static str = "beagle_get_domain_signature";
    const DESCRIPTION: &'static str = "Get domain verification signature";
    const LABEL: &'static str = "Domain verification signature";
    const CATEGORY: ToolCategory = ToolCategory::DomainVerification;
    const BEHAVIOR: ToolBehavior = ToolBehavior::ReadOnly;

    fn request(params: ApplicationTokenParams) -> Result<ApiRequest, ToolError> {
        let token = required("applicationToken", params.application_token)?;
        Ok(ApiRequest::get("/applications/signature").query("application_token", token))
    }
}

pub struct VerifyDomainTool;

impl ApiTool for VerifyDomainTool {
    type Params = VerifyDomainParams;
    const NAME: &'static str = "beagle_verify_domain";
    const DESCRIPTION: &'static str = "Complete domain verification";
    const LABEL: &'static str = "Domain verification result";
    const CATEGORY: ToolCategory = ToolCategory::DomainVerification;
    const BEHAVIOR: ToolBehavior = ToolBehavior::Idempotent;

    fn request(params: VerifyDomainParams) -> Result<ApiRequest, ToolError> {
        let token = required("applicationToken", params.application_token)?;
        let signature = required("signature", params.signature)?;

        Ok(ApiRequest::post("/applications/signature/verify").json(json!({
            "application_token": token,
            "signature": signature,
        })))
    }
}

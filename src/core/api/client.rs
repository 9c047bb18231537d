//! reqwest-backed client for the Beagle Security REST API.

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde_json::Value;
use tracing::{debug, instrument};

use super::{ApiError, ApiRequest, RemoteApi};
use crate::core::config::ApiConfig;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// HTTP client bound to one API base URL and bearer token.
#[derive(Clone)]
pub struct BeagleClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl BeagleClient {
    /// Create a client from the API configuration.
    ///
    /// An empty token is accepted; the API rejects such requests itself.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ApiError::Client(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    /// The base URL every request path is appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for a request.
    pub fn url_for(&self, request: &ApiRequest) -> String {
        format!("{}{}", self.base_url, request.path_and_query())
    }
}

#[async_trait]
impl RemoteApi for BeagleClient {
    #[instrument(skip_all, fields(method = %request.method, path = request.path))]
    async fn send(&self, request: &ApiRequest) -> Result<Value, ApiError> {
        let url = self.url_for(request);
        debug!("Sending {}", request);

        let mut builder = self
            .http
            .request(request.method.into(), &url)
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
            .header(CONTENT_TYPE, "application/json");

        if let Some(body) = &request.body {
            builder = builder.body(body.to_string());
        }

        let response = builder.send().await.map_err(|e| {
            debug!("Request to {} failed: {}", request.path, e);
            ApiError::transport(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            debug!("{} returned {}", request, status);
            return Err(ApiError::status(status));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::transport(e.to_string()))?;

        serde_json::from_slice(&bytes).map_err(|e| {
            debug!("{} returned a non-JSON body: {}", request, e);
            ApiError::malformed_body(e.to_string())
        })
    }
}

impl std::fmt::Debug for BeagleClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BeagleClient")
            .field("base_url", &self.base_url)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(base_url: &str) -> ApiConfig {
        ApiConfig {
            base_url: base_url.to_string(),
            token: "secret-token".to_string(),
        }
    }

    #[test]
    fn test_url_for_trims_trailing_slash() {
        let client = BeagleClient::new(&config("https://api.example.com/rest/v2/")).unwrap();
        let request = ApiRequest::get("/projects").query("include_team", "true");
        assert_eq!(
            client.url_for(&request),
            "https://api.example.com/rest/v2/projects?include_team=true"
        );
    }

    #[test]
    fn test_debug_redacts_token() {
        let client = BeagleClient::new(&config("https://api.example.com")).unwrap();
        let debug_str = format!("{:?}", client);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("secret-token"));
    }
}

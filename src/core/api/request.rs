//! Outbound request model.
//!
//! An [`ApiRequest`] is the fully-resolved description of one call against
//! the Beagle Security REST API. Tool definitions build these as pure values;
//! nothing touches the network until a [`super::RemoteApi`] sends it.

use serde_json::Value;
use std::fmt;

/// HTTP methods used by the Beagle Security API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// A single request against the remote API, relative to its base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// HTTP method.
    pub method: HttpMethod,

    /// Path below the API base URL, always starting with `/`.
    pub path: &'static str,

    /// Query parameters, in the order they are sent.
    pub query: Vec<(&'static str, String)>,

    /// JSON body, if the endpoint takes one.
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn get(path: &'static str) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    pub fn post(path: &'static str) -> Self {
        Self::new(HttpMethod::Post, path)
    }

    pub fn delete(path: &'static str) -> Self {
        Self::new(HttpMethod::Delete, path)
    }

    fn new(method: HttpMethod, path: &'static str) -> Self {
        Self {
            method,
            path,
            query: Vec::new(),
            body: None,
        }
    }

    /// Append a query parameter.
    pub fn query(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.query.push((key, value.into()));
        self
    }

    /// Append a query parameter only when a value is present.
    pub fn query_opt(self, key: &'static str, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.query(key, value),
            None => self,
        }
    }

    /// Attach a JSON body.
    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Path plus the form-urlencoded query string, e.g. `/projects?include_team=true`.
    pub fn path_and_query(&self) -> String {
        if self.query.is_empty() {
            return self.path.to_string();
        }

        // Encoding a list of string pairs cannot fail.
        let query = serde_urlencoded::to_string(&self.query).unwrap_or_default();
        format!("{}?{}", self.path, query)
    }
}

impl fmt::Display for ApiRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path_and_query())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_path_without_query() {
        let request = ApiRequest::get("/projects");
        assert_eq!(request.path_and_query(), "/projects");
        assert_eq!(request.to_string(), "GET /projects");
    }

    #[test]
    fn test_query_keeps_insertion_order() {
        let request = ApiRequest::get("/test/status")
            .query("application_token", "app")
            .query("result_token", "res");
        assert_eq!(
            request.path_and_query(),
            "/test/status?application_token=app&result_token=res"
        );
    }

    #[test]
    fn test_query_values_are_encoded() {
        let request = ApiRequest::delete("/projects").query("project_key", "a b&c");
        assert_eq!(request.path_and_query(), "/projects?project_key=a+b%26c");
    }

    #[test]
    fn test_query_opt_skips_none() {
        let request = ApiRequest::get("/test/runningsessions").query_opt("teamid", None::<String>);
        assert!(request.query.is_empty());
    }

    #[test]
    fn test_json_body() {
        let request = ApiRequest::post("/test/stop").json(json!({ "result_token": "r" }));
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.body, Some(json!({ "result_token": "r" })));
    }

    #[test]
    fn test_method_conversion() {
        assert_eq!(reqwest::Method::from(HttpMethod::Delete), reqwest::Method::DELETE);
    }
}

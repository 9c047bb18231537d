//! Beagle Security REST API access.
//!
//! - `request.rs` - the [`ApiRequest`] value built by each tool
//! - `client.rs` - [`BeagleClient`], the reqwest implementation of [`RemoteApi`]
//! - `error.rs` - [`ApiError`] covering transport, status and body failures

mod client;
mod error;
mod request;

use async_trait::async_trait;
use serde_json::Value;

pub use client::BeagleClient;
pub use error::ApiError;
pub use request::{ApiRequest, HttpMethod};

/// Something that can execute an [`ApiRequest`] and return its JSON body.
///
/// Each call is independent: implementations keep no per-call state and
/// must be safe to share across concurrent tool calls.
#[async_trait]
pub trait RemoteApi: Send + Sync {
    /// Send the request and parse a 2xx response body as JSON.
    async fn send(&self, request: &ApiRequest) -> Result<Value, ApiError>;
}

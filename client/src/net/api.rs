//! REST transport for the auth backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): the transport reports `Unavailable` since submits only
//! happen in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Failures are returned as [`RemoteAuthError`] without classifying the cause
//! (bad credentials and server errors both arrive as `Status`). The form shell
//! shows a generic message; the detail goes to the log.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;
use serde_json::Value;

/// Failure of a remote form submission.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RemoteAuthError {
    #[error("request could not be sent: {0}")]
    Network(String),
    #[error("request failed: {0}")]
    Status(u16),
    #[error("payload could not be encoded: {0}")]
    Encode(String),
    #[error("response could not be decoded: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

/// Seam for the outbound JSON call so the submit pipeline can run without a
/// browser.
#[async_trait(?Send)]
pub trait Transport {
    /// POST `body` as JSON to `route` and return the decoded JSON response.
    async fn post_json(&self, route: &str, body: &Value) -> Result<Value, RemoteAuthError>;
}

/// Browser HTTP transport. `base` is prefixed to every route; leave it empty
/// for same-origin calls.
#[derive(Clone, Debug, Default)]
pub struct HttpTransport {
    base: String,
}

impl HttpTransport {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn endpoint_url(base: &str, route: &str) -> String {
    let base = base.trim_end_matches('/');
    if route.starts_with('/') {
        format!("{base}{route}")
    } else {
        format!("{base}/{route}")
    }
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn post_json(&self, route: &str, body: &Value) -> Result<Value, RemoteAuthError> {
        #[cfg(feature = "hydrate")]
        {
            let url = endpoint_url(&self.base, route);
            let resp = gloo_net::http::Request::post(&url)
                .json(body)
                .map_err(|e| RemoteAuthError::Encode(e.to_string()))?
                .send()
                .await
                .map_err(|e| RemoteAuthError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(RemoteAuthError::Status(resp.status()));
            }
            resp.json::<Value>().await.map_err(|e| RemoteAuthError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&self.base, route, body);
            Err(RemoteAuthError::Unavailable)
        }
    }
}

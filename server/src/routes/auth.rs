//! Auth routes: same-origin proxy for the login endpoint.
//!
//! The browser posts hashed credentials to `/api/auth/login` on this host;
//! the handler forwards the JSON body to `AUTH_BACKEND_URL` and relays status
//! and body unchanged. No retries: a failed upstream call is a failed login.
//! Request bodies carry credentials and are never logged.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Json, Response};

use crate::state::AppState;

pub const LOGIN_ROUTE: &str = "/api/auth/login";

pub(crate) fn upstream_url(base: &str, route: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), route.trim_start_matches('/'))
}

/// `POST /api/auth/login`: forward to the auth backend.
pub async fn login_proxy(State(state): State<AppState>, Json(body): Json<serde_json::Value>) -> Response {
    let Some(base) = &state.auth_backend else {
        return (StatusCode::SERVICE_UNAVAILABLE, "auth backend not configured").into_response();
    };

    let url = upstream_url(base, LOGIN_ROUTE);
    let upstream = match state.http.post(&url).json(&body).send().await {
        Ok(resp) => resp,
        Err(e) => {
            tracing::error!(error = %e, %url, "auth backend unreachable");
            return (StatusCode::BAD_GATEWAY, "auth backend unreachable").into_response();
        }
    };

    let status = StatusCode::from_u16(upstream.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
    let content_type = upstream
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| HeaderValue::from_bytes(v.as_bytes()).ok());
    let body: Bytes = match upstream.bytes().await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::error!(error = %e, "auth backend response truncated");
            return (StatusCode::BAD_GATEWAY, "auth backend response truncated").into_response();
        }
    };

    if status.is_success() {
        tracing::info!(status = status.as_u16(), "login proxied");
    } else {
        tracing::warn!(status = status.as_u16(), "login rejected upstream");
    }

    let mut response = (status, body).into_response();
    if let Some(content_type) = content_type {
        response.headers_mut().insert(CONTENT_TYPE, content_type);
    }
    response
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

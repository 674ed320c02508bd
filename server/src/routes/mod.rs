//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the login proxy and health check, and stitches them with
//! Leptos SSR rendering of the client routes (`/login`, `/app`) under a single
//! Axum router. Compiled WASM/CSS assets are served from `/pkg`.

pub mod auth;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::state::AppState;

/// API routes served next to the SSR app.
fn api_routes(state: AppState) -> Router {
    Router::new()
        .route(auth::LOGIN_ROUTE, post(auth::login_proxy))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// API routes + Leptos SSR + static assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn app(state: AppState, config: &ServerConfig) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    let router = api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")));

    Ok(if config.trace_http {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    })
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

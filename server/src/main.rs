mod config;
mod routes;
mod state;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid configuration");
    match &config.auth_backend {
        Some(url) => tracing::info!(%url, "login proxy enabled"),
        None => tracing::warn!("AUTH_BACKEND_URL not set, /api/auth/login returns 503"),
    }

    let state = state::AppState::new(&config);
    let app = routes::app(state, &config).expect("router init failed");

    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "login host listening");
    axum::serve(listener, app).await.expect("server failed");
}

//! Server configuration read from the environment.
//!
//! `.env` is loaded by `main` before this runs. Variables:
//! - `PORT` (default 3000)
//! - `AUTH_BACKEND_URL`: upstream for `POST /api/auth/login`; unset disables
//!   the proxy
//! - `TRACE_HTTP`: per-request tracing layer (default on)

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0:?}")]
    InvalidPort(String),
    #[error("invalid AUTH_BACKEND_URL {0:?}: expected an http(s) URL")]
    InvalidBackendUrl(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub auth_backend: Option<String>,
    pub trace_http: bool,
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl ServerConfig {
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a set variable cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup so tests need not touch the
    /// process environment.
    pub(crate) fn from_lookup<F>(get: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match get("PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let auth_backend = match get("AUTH_BACKEND_URL").map(|raw| raw.trim().to_owned()) {
            Some(url) if url.is_empty() => None,
            Some(url) if url.starts_with("http://") || url.starts_with("https://") => {
                Some(url.trim_end_matches('/').to_owned())
            }
            Some(url) => return Err(ConfigError::InvalidBackendUrl(url)),
            None => None,
        };

        let trace_http = get("TRACE_HTTP").as_deref().and_then(parse_bool).unwrap_or(true);

        Ok(Self {
            port,
            auth_backend,
            trace_http,
        })
    }
}

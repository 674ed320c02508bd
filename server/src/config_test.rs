use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect::<HashMap<_, _>>();
    move |key| map.get(key).cloned()
}

// =============================================================================
// parse_bool
// =============================================================================

#[test]
fn parse_bool_true_variants() {
    for val in ["1", "true", "yes", "on", "TRUE", " On "] {
        assert_eq!(parse_bool(val), Some(true), "expected true for {val:?}");
    }
}

#[test]
fn parse_bool_false_variants() {
    for val in ["0", "false", "no", "off", "False"] {
        assert_eq!(parse_bool(val), Some(false), "expected false for {val:?}");
    }
}

#[test]
fn parse_bool_invalid_returns_none() {
    assert_eq!(parse_bool("maybe"), None);
    assert_eq!(parse_bool(""), None);
}

// =============================================================================
// ServerConfig
// =============================================================================

#[test]
fn defaults_when_nothing_set() {
    let config = ServerConfig::from_lookup(lookup(&[])).expect("valid");
    assert_eq!(
        config,
        ServerConfig {
            port: 3000,
            auth_backend: None,
            trace_http: true,
        }
    );
}

#[test]
fn reads_port_and_backend() {
    let config = ServerConfig::from_lookup(lookup(&[
        ("PORT", "8080"),
        ("AUTH_BACKEND_URL", "https://auth.example.com/"),
        ("TRACE_HTTP", "off"),
    ]))
    .expect("valid");
    assert_eq!(config.port, 8080);
    assert_eq!(config.auth_backend.as_deref(), Some("https://auth.example.com"));
    assert!(!config.trace_http);
}

#[test]
fn empty_backend_disables_proxy() {
    let config = ServerConfig::from_lookup(lookup(&[("AUTH_BACKEND_URL", "  ")])).expect("valid");
    assert_eq!(config.auth_backend, None);
}

#[test]
fn rejects_bad_port() {
    assert_eq!(
        ServerConfig::from_lookup(lookup(&[("PORT", "http")])),
        Err(ConfigError::InvalidPort("http".to_owned()))
    );
}

#[test]
fn rejects_non_http_backend() {
    assert_eq!(
        ServerConfig::from_lookup(lookup(&[("AUTH_BACKEND_URL", "ftp://auth")])),
        Err(ConfigError::InvalidBackendUrl("ftp://auth".to_owned()))
    );
}

#[test]
fn unparseable_trace_flag_falls_back_to_default() {
    let config = ServerConfig::from_lookup(lookup(&[("TRACE_HTTP", "sometimes")])).expect("valid");
    assert!(config.trace_http);
}

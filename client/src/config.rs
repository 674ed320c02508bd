//! Client configuration for the login flow.
//!
//! DESIGN
//! ======
//! Every field has a default matching the deployed backend contract, so the
//! app provides `LoginConfig::default()` through context and tests override
//! only what they exercise. `#[serde(default)]` lets a host embed a partial
//! JSON override.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub use cookie::SameSite;
use serde::{Deserialize, Serialize};

use crate::util::storage::STORE_KEY_ONBOARDING;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginConfig {
    /// Origin prefixed to API routes. Empty means same origin.
    pub api_base: String,
    /// Route the login payload is posted to.
    pub login_route: String,
    /// Route replaced into history after a successful login.
    pub landing_route: String,
    /// Storage key of the onboarding marker.
    pub onboarding_key: String,
    pub cookie: AuthCookieConfig,
}

impl Default for LoginConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            login_route: "/api/auth/login".to_owned(),
            landing_route: "/app".to_owned(),
            onboarding_key: STORE_KEY_ONBOARDING.to_owned(),
            cookie: AuthCookieConfig::default(),
        }
    }
}

/// Attributes of the auth token cookie.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthCookieConfig {
    pub name: String,
    pub path: String,
    pub max_age_days: u32,
    pub secure: bool,
    #[serde(with = "same_site_serde")]
    pub same_site: SameSite,
}

impl Default for AuthCookieConfig {
    fn default() -> Self {
        Self {
            name: "authToken".to_owned(),
            path: "/".to_owned(),
            max_age_days: 30,
            secure: true,
            same_site: SameSite::Lax,
        }
    }
}

/// `SameSite` as lowercase strings (`"strict"`, `"lax"`, `"none"`).
mod same_site_serde {
    use cookie::SameSite;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    const VARIANTS: &[&str] = &["strict", "lax", "none"];

    pub fn serialize<S: Serializer>(value: &SameSite, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_string().to_ascii_lowercase())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<SameSite, D::Error> {
        let raw = String::deserialize(deserializer)?;
        match raw.to_ascii_lowercase().as_str() {
            "strict" => Ok(SameSite::Strict),
            "lax" => Ok(SameSite::Lax),
            "none" => Ok(SameSite::None),
            _ => Err(D::Error::unknown_variant(&raw, VARIANTS)),
        }
    }
}

//! Success-side effects of a login and the hooks wiring them into the form
//! shell.

use super::transform::{SubmitPayload, transform};
use super::values::LoginValues;
use crate::config::LoginConfig;
use crate::form::submit::SubmitHooks;
use crate::net::types::LoginResponse;
use crate::util::cookie::CookieStore;
use crate::util::navigation::Navigator;
use crate::util::storage::KeyValueStorage;

/// Collaborators touched after the backend accepted the credentials.
#[derive(Clone, Copy)]
pub struct LoginEffects<'a> {
    pub cookies: &'a dyn CookieStore,
    pub storage: &'a dyn KeyValueStorage,
    pub navigator: &'a dyn Navigator,
}

pub struct LoginHooks<'a> {
    effects: LoginEffects<'a>,
    config: &'a LoginConfig,
    needs_verification: bool,
}

impl<'a> LoginHooks<'a> {
    pub fn new(effects: LoginEffects<'a>, config: &'a LoginConfig, needs_verification: bool) -> Self {
        Self {
            effects,
            config,
            needs_verification,
        }
    }

    pub fn config(&self) -> &LoginConfig {
        self.config
    }
}

impl SubmitHooks for LoginHooks<'_> {
    type Values = LoginValues;
    type Payload = SubmitPayload;
    type Response = LoginResponse;

    fn mutate(&self, values: &LoginValues) -> SubmitPayload {
        transform(values)
    }

    /// Order matters: cookie, then onboarding marker, then navigation.
    fn on_success(&self, response: LoginResponse) {
        self.effects.cookies.set_auth_cookie(&response.data.auth_token);
        if self.needs_verification {
            self.effects.storage.set_item(&self.config.onboarding_key, "true");
        }
        log::info!("login accepted, redirecting to {}", self.config.landing_route);
        self.effects.navigator.replace(&self.config.landing_route);
    }
}

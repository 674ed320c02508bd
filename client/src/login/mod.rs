//! Login submission flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! Composes the generic form shell with login-specific pieces: the field
//! schema, the credential transform, and the post-login effects. The page
//! component only wires browser services into [`submit`] and renders the
//! shell state.
//!
//! FLOW
//! ====
//! `FormShell::begin_submit` (validation) -> [`submit`] (transform, POST,
//! effects) -> [`settle`] (shell transition + user-facing error).

#[cfg(test)]
#[path = "flow_test.rs"]
mod flow_test;

pub mod effects;
pub mod schema;
pub mod transform;
pub mod values;

use crate::form::shell::FormShell;
use crate::form::submit as form_submit;
use crate::i18n::Translator;
use crate::net::api::{RemoteAuthError, Transport};

use effects::LoginHooks;
use values::LoginValues;

pub type LoginShell = FormShell<LoginValues>;

/// Shell for a freshly mounted login form.
pub fn new_shell(email: Option<String>, t: Translator) -> LoginShell {
    FormShell::new(LoginValues::prefilled(email), schema::login_schema(t))
}

/// Post validated `values` and run the success effects.
///
/// # Errors
///
/// Returns [`RemoteAuthError`] when the backend call fails; no effect has
/// run in that case.
pub async fn submit<T>(values: &LoginValues, hooks: &LoginHooks<'_>, transport: &T) -> Result<(), RemoteAuthError>
where
    T: Transport + ?Sized,
{
    form_submit::run(&hooks.config().login_route, values, hooks, transport).await
}

/// Apply the outcome of [`submit`] to the shell.
pub fn settle(shell: &mut LoginShell, result: &Result<(), RemoteAuthError>, t: Translator) {
    match result {
        Ok(()) => shell.succeed(),
        Err(e) => {
            log::warn!("login failed: {e}");
            shell.fail(t.t("auth", "error", "failed"));
        }
    }
}

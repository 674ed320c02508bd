//! Login page: email + password form posting to the auth backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page reads `email` (prefill) and `verify` (onboarding mode) from the
//! query string. `LoginForm` owns the form shell signal and wires browser
//! services (cookie jar, localStorage, router) into the submit pipeline.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::form::{FormAlert, Input, Label, Submit};
use crate::config::LoginConfig;
use crate::i18n::Translator;
use crate::login::effects::{LoginEffects, LoginHooks};
use crate::login::schema::login_schema;
use crate::login::values::{EMAIL_FIELD, PASSWORD_FIELD};
use crate::login::{self, LoginShell};
use crate::net::api::HttpTransport;
use crate::util::cookie::DocumentCookies;
use crate::util::navigation::RouterNavigator;
use crate::util::storage::create_storage;

/// Non-empty `email` query value, passed through as given.
fn prefill_email(raw: Option<String>) -> Option<String> {
    raw.filter(|v| !v.is_empty())
}

/// `verify=1|true|yes|on` selects needs-verification mode.
fn parse_verify_flag(raw: Option<&str>) -> bool {
    raw.is_some_and(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let i18n = expect_context::<RwSignal<Translator>>();
    let query = use_query_map();
    let email = query.with_untracked(|q| prefill_email(q.get("email")));
    let needs_verification = query.with_untracked(|q| parse_verify_flag(q.get("verify").as_deref()));

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>{move || i18n.get().t("auth", "login", "title")}</h1>
                <LoginForm email=email needs_verification=needs_verification/>
            </div>
        </div>
    }
}

/// Email + password form. On success the browser leaves this route, so the
/// component never observes the `Success` state for long.
#[component]
pub fn LoginForm(email: Option<String>, needs_verification: bool) -> impl IntoView {
    let i18n = expect_context::<RwSignal<Translator>>();
    let config = use_context::<LoginConfig>().unwrap_or_default();
    let form = RwSignal::new(login::new_shell(email, i18n.get_untracked()));
    let navigate = use_navigate();

    // Keep validation messages in the active language.
    Effect::new(move || {
        let t = i18n.get();
        form.update(|shell| shell.set_schema(login_schema(t)));
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut started = None;
        form.update(|shell| started = Some(shell.begin_submit()));
        let Some(Ok(values)) = started else {
            return;
        };

        let config = config.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let cookies = DocumentCookies::new(config.cookie.clone());
            let storage = create_storage();
            let navigator = RouterNavigator::new(navigate);
            let transport = HttpTransport::new(config.api_base.clone());
            let effects = LoginEffects {
                cookies: &cookies,
                storage: &storage,
                navigator: &navigator,
            };
            let hooks = LoginHooks::new(effects, &config, needs_verification);

            let result = login::submit(&values, &hooks, &transport).await;
            form.update(|shell| login::settle(shell, &result, i18n.get_untracked()));
        });
    };

    let field_value = move |name: &'static str| {
        Signal::derive(move || {
            form.with(|shell: &LoginShell| match name {
                EMAIL_FIELD => shell.values().email.clone(),
                _ => shell.values().password.clone(),
            })
        })
    };
    let field_error = move |name: &'static str| {
        Signal::derive(move || form.with(|shell| shell.field_error(name).map(str::to_owned)))
    };
    let on_input = move |name: &'static str| Callback::new(move |value: String| form.update(|shell| shell.set_field(name, value)));
    let on_blur = move |name: &'static str| Callback::new(move |()| form.update(|shell| shell.touch(name)));
    let text = move |section: &'static str, key: &'static str| Signal::derive(move || i18n.get().t("auth", section, key));

    let is_submitting = Signal::derive(move || form.with(LoginShell::is_submitting));
    let submit_error = Signal::derive(move || form.with(|shell| shell.submit_error().map(str::to_owned)));

    view! {
        <form class="login-form" on:submit=on_submit novalidate>
            <Label name=EMAIL_FIELD label=text("login", "email") error=field_error(EMAIL_FIELD)>
                <Input
                    name=EMAIL_FIELD
                    input_type="email"
                    placeholder=text("login", "placeholder")
                    value=field_value(EMAIL_FIELD)
                    on_input=on_input(EMAIL_FIELD)
                    on_blur=on_blur(EMAIL_FIELD)
                />
            </Label>
            <Label name=PASSWORD_FIELD label=text("login", "password") error=field_error(PASSWORD_FIELD)>
                <Input
                    name=PASSWORD_FIELD
                    input_type="password"
                    placeholder="********".to_owned()
                    value=field_value(PASSWORD_FIELD)
                    on_input=on_input(PASSWORD_FIELD)
                    on_blur=on_blur(PASSWORD_FIELD)
                />
            </Label>
            <FormAlert message=submit_error/>
            <Submit is_submitting=is_submitting text=text("login", "cta") pending_text=text("login", "pending")/>
        </form>
    }
}

use std::cell::RefCell;

use async_trait::async_trait;
use futures::executor::block_on;
use serde_json::{Value, json};

use super::effects::LoginEffects;
use super::*;
use crate::config::LoginConfig;
use crate::form::shell::{SubmitBlocked, SubmitStatus};
use crate::i18n::Language;
use crate::util::cookie::{CookieStore, MemoryCookies};
use crate::util::navigation::Navigator;
use crate::util::storage::{KeyValueStorage, MemoryStorage, STORE_KEY_ONBOARDING};

// =============================================================
// Test doubles
// =============================================================

struct ScriptedBackend {
    reply: Result<Value, RemoteAuthError>,
    requests: RefCell<Vec<(String, Value)>>,
}

impl ScriptedBackend {
    fn replying(reply: Result<Value, RemoteAuthError>) -> Self {
        Self {
            reply,
            requests: RefCell::new(Vec::new()),
        }
    }

    fn accepting(token: &str) -> Self {
        Self::replying(Ok(json!({ "data": { "authToken": token } })))
    }
}

#[async_trait(?Send)]
impl Transport for ScriptedBackend {
    async fn post_json(&self, route: &str, body: &Value) -> Result<Value, RemoteAuthError> {
        self.requests.borrow_mut().push((route.to_owned(), body.clone()));
        self.reply.clone()
    }
}

#[derive(Default)]
struct RecordingNavigator {
    replaced: RefCell<Vec<String>>,
}

impl Navigator for RecordingNavigator {
    fn replace(&self, path: &str) {
        self.replaced.borrow_mut().push(path.to_owned());
    }
}

#[derive(Default)]
struct World {
    cookies: MemoryCookies,
    storage: MemoryStorage,
    navigator: RecordingNavigator,
    config: LoginConfig,
}

impl World {
    fn hooks(&self, needs_verification: bool) -> LoginHooks<'_> {
        LoginHooks::new(
            LoginEffects {
                cookies: &self.cookies,
                storage: &self.storage,
                navigator: &self.navigator,
            },
            &self.config,
            needs_verification,
        )
    }

    /// Mirror of the page's submit handler.
    fn submit(&self, shell: &mut LoginShell, backend: &ScriptedBackend, needs_verification: bool) -> Result<(), SubmitBlocked> {
        let t = Translator::default();
        let values = shell.begin_submit()?;
        assert!(shell.is_submitting());
        let result = block_on(super::submit(&values, &self.hooks(needs_verification), backend));
        settle(shell, &result, t);
        Ok(())
    }
}

fn filled_shell(email: &str, password: &str) -> LoginShell {
    let mut shell = new_shell(None, Translator::default());
    shell.set_field("email", email.to_owned());
    shell.set_field("password", password.to_owned());
    shell
}

// =============================================================
// Mount
// =============================================================

#[test]
fn query_email_prefills_and_password_starts_empty() {
    let shell = new_shell(Some("test@example.com".to_owned()), Translator::default());
    assert_eq!(shell.values().email, "test@example.com");
    assert!(shell.values().password.is_empty());
    assert_eq!(shell.status(), SubmitStatus::Idle);
}

#[test]
fn missing_query_email_leaves_field_empty() {
    let shell = new_shell(None, Translator::default());
    assert!(shell.values().email.is_empty());
}

// =============================================================
// Validation blocks the network
// =============================================================

#[test]
fn valid_credentials_pass_validation() {
    let mut shell = filled_shell("a@b.com", "secret");
    assert!(shell.begin_submit().is_ok());
}

#[test]
fn empty_fields_report_localized_required_errors() {
    let world = World::default();
    let backend = ScriptedBackend::accepting("tok123");
    let mut shell = new_shell(None, Translator::new(Language::De));

    let blocked = world.submit(&mut shell, &backend, false);

    assert!(matches!(blocked, Err(SubmitBlocked::Invalid(_))));
    assert_eq!(shell.field_error("email"), Some("Dieses Feld ist erforderlich."));
    assert_eq!(shell.field_error("password"), Some("Dieses Feld ist erforderlich."));
    assert!(backend.requests.borrow().is_empty());
}

#[test]
fn malformed_email_reports_format_error_without_network_call() {
    let world = World::default();
    let backend = ScriptedBackend::accepting("tok123");
    let mut shell = filled_shell("not-an-email", "secret");

    let blocked = world.submit(&mut shell, &backend, false);

    assert!(matches!(blocked, Err(SubmitBlocked::Invalid(_))));
    assert_eq!(shell.field_error("email"), Some("Please enter a valid email address."));
    assert!(backend.requests.borrow().is_empty());
    assert!(!shell.is_submitting());
}

// =============================================================
// Success
// =============================================================

#[test]
fn success_with_verification_sets_cookie_marker_and_redirects() {
    let world = World::default();
    let backend = ScriptedBackend::accepting("tok123");
    let mut shell = filled_shell("a@b.com", "secret");

    world.submit(&mut shell, &backend, true).expect("submit starts");

    assert_eq!(world.cookies.auth_token().as_deref(), Some("tok123"));
    assert_eq!(world.storage.get_item(STORE_KEY_ONBOARDING).as_deref(), Some("true"));
    assert_eq!(*world.navigator.replaced.borrow(), vec!["/app".to_owned()]);
    assert_eq!(shell.status(), SubmitStatus::Success);
}

#[test]
fn success_without_verification_skips_onboarding_marker() {
    let world = World::default();
    let backend = ScriptedBackend::accepting("tok123");
    let mut shell = filled_shell("a@b.com", "secret");

    world.submit(&mut shell, &backend, false).expect("submit starts");

    assert_eq!(world.cookies.auth_token().as_deref(), Some("tok123"));
    assert_eq!(world.storage.get_item(STORE_KEY_ONBOARDING), None);
    assert_eq!(*world.navigator.replaced.borrow(), vec!["/app".to_owned()]);
}

#[test]
fn request_carries_hashed_password_to_login_route() {
    let world = World::default();
    let backend = ScriptedBackend::accepting("tok123");
    let mut shell = filled_shell("a@b.com", "secret");

    world.submit(&mut shell, &backend, false).expect("submit starts");

    let requests = backend.requests.borrow();
    assert_eq!(requests.len(), 1);
    let (route, body) = &requests[0];
    assert_eq!(route, "/api/auth/login");
    assert_eq!(body["email"], "a@b.com");
    assert_ne!(body["password"], "secret");
    assert_eq!(body["password"], crate::util::crypto::hash("secret").as_str());
    assert!(body["now"].as_str().is_some_and(|now| now.ends_with('Z')));
}

#[test]
fn custom_config_routes_are_honored() {
    let world = World {
        config: LoginConfig {
            login_route: "/v2/login".to_owned(),
            landing_route: "/home".to_owned(),
            onboarding_key: "needs-onboarding".to_owned(),
            ..LoginConfig::default()
        },
        ..World::default()
    };
    let backend = ScriptedBackend::accepting("t");
    let mut shell = filled_shell("a@b.com", "secret");

    world.submit(&mut shell, &backend, true).expect("submit starts");

    assert_eq!(backend.requests.borrow()[0].0, "/v2/login");
    assert_eq!(world.storage.get_item("needs-onboarding").as_deref(), Some("true"));
    assert_eq!(*world.navigator.replaced.borrow(), vec!["/home".to_owned()]);
}

// =============================================================
// Failure
// =============================================================

#[test]
fn remote_failure_runs_no_effects_and_reenables_submit() {
    let world = World::default();
    let backend = ScriptedBackend::replying(Err(RemoteAuthError::Status(401)));
    let mut shell = filled_shell("a@b.com", "secret");

    world.submit(&mut shell, &backend, true).expect("submit starts");

    assert_eq!(world.cookies.auth_token(), None);
    assert_eq!(world.storage.get_item(STORE_KEY_ONBOARDING), None);
    assert!(world.navigator.replaced.borrow().is_empty());
    assert!(!shell.is_submitting());
    assert_eq!(shell.status(), SubmitStatus::Failed);
    assert_eq!(
        shell.submit_error(),
        Some("Sign-in failed. Please check your details and try again.")
    );
}

#[test]
fn network_failure_is_surfaced_like_any_other() {
    let world = World::default();
    let backend = ScriptedBackend::replying(Err(RemoteAuthError::Network("offline".to_owned())));
    let mut shell = filled_shell("a@b.com", "secret");

    world.submit(&mut shell, &backend, false).expect("submit starts");

    assert_eq!(shell.status(), SubmitStatus::Failed);
    assert!(world.navigator.replaced.borrow().is_empty());
}

#[test]
fn response_without_token_counts_as_failure() {
    let world = World::default();
    let backend = ScriptedBackend::replying(Ok(json!({ "data": {} })));
    let mut shell = filled_shell("a@b.com", "secret");

    world.submit(&mut shell, &backend, true).expect("submit starts");

    assert_eq!(shell.status(), SubmitStatus::Failed);
    assert_eq!(world.cookies.auth_token(), None);
}

#[test]
fn editing_after_failure_allows_a_successful_retry() {
    let world = World::default();
    let mut shell = filled_shell("a@b.com", "wrong");
    world
        .submit(&mut shell, &ScriptedBackend::replying(Err(RemoteAuthError::Status(401))), false)
        .expect("first submit starts");

    shell.set_field("password", "secret".to_owned());
    assert_eq!(shell.status(), SubmitStatus::Idle);

    world
        .submit(&mut shell, &ScriptedBackend::accepting("tok123"), false)
        .expect("second submit starts");
    assert_eq!(shell.status(), SubmitStatus::Success);
    assert_eq!(world.cookies.auth_token().as_deref(), Some("tok123"));
}

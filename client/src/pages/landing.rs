//! Authenticated landing route (`/app`).
//!
//! SYSTEM CONTEXT
//! ==============
//! The login form replaces history with this route. It consumes the
//! onboarding marker written for unverified accounts and sends visitors
//! without an auth cookie back to `/login`.

#[cfg(test)]
#[path = "landing_test.rs"]
mod landing_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::config::LoginConfig;
use crate::i18n::Translator;
use crate::util::cookie::{CookieStore, DocumentCookies};
use crate::util::navigation::{Navigator, RouterNavigator};
use crate::util::storage::{KeyValueStorage, create_storage};

/// Read and clear the onboarding marker. Returns whether it was set.
fn take_onboarding_marker(storage: &dyn KeyValueStorage, key: &str) -> bool {
    let pending = storage.get_item(key).is_some_and(|v| v == "true");
    if pending {
        storage.remove_item(key);
    }
    pending
}

#[component]
pub fn AppLanding() -> impl IntoView {
    let i18n = expect_context::<RwSignal<Translator>>();
    let config = use_context::<LoginConfig>().unwrap_or_default();
    let onboarding = RwSignal::new(false);
    let navigate = use_navigate();

    Effect::new(move || {
        if DocumentCookies::new(config.cookie.clone()).auth_token().is_none() {
            RouterNavigator::new(navigate.clone()).replace("/login");
            return;
        }
        if take_onboarding_marker(&create_storage(), &config.onboarding_key) {
            onboarding.set(true);
        }
    });

    view! {
        <div class="app-landing">
            <h1>{move || i18n.get().t("app", "landing", "title")}</h1>
            <Show when=move || onboarding.get()>
                <p class="app-landing__onboarding">{move || i18n.get().t("app", "landing", "onboarding")}</p>
            </Show>
        </div>
    }
}

//! # client
//!
//! Leptos + WASM login frontend. Renders the email/password form, validates
//! it, posts hashed credentials to the auth backend, and on success stores
//! the auth cookie, optionally flags onboarding, and moves on to `/app`.
//!
//! `form` is the generic form engine, `login` composes it into the login
//! flow, and `util`/`net` hold the injectable browser services.

pub mod app;
pub mod components;
pub mod config;
pub mod form;
pub mod i18n;
pub mod login;
pub mod net;
pub mod pages;
pub mod util;

/// WASM hydration entry point.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}

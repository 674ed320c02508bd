//! Auth token persistence in a cookie.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend reads the token back from this cookie on subsequent requests.
//! `DocumentCookies` writes `document.cookie` in hydrate builds; off-browser it
//! is a no-op so SSR rendering never touches cookies.

#[cfg(test)]
#[path = "cookie_test.rs"]
mod cookie_test;

use std::cell::RefCell;

use cookie::{Cookie, SameSite};

use crate::config::AuthCookieConfig;

pub trait CookieStore {
    fn set_auth_cookie(&self, token: &str);
    fn auth_token(&self) -> Option<String>;
}

/// Build the auth cookie for `token` from the configured attributes.
pub fn auth_cookie(config: &AuthCookieConfig, token: &str) -> Cookie<'static> {
    Cookie::build((config.name.clone(), token.to_owned()))
        .path(config.path.clone())
        .max_age(time::Duration::days(i64::from(config.max_age_days)))
        .same_site(config.same_site)
        // Browsers drop SameSite=None cookies without Secure.
        .secure(config.secure || config.same_site == SameSite::None)
        .build()
}

/// Serialize the `document.cookie` assignment for `token`, percent-encoded.
pub fn format_auth_cookie(config: &AuthCookieConfig, token: &str) -> String {
    auth_cookie(config, token).encoded().to_string()
}

/// Find `name` in a `Cookie`-style header (`a=1; b=2`) and decode its value.
pub fn read_cookie(header: &str, name: &str) -> Option<String> {
    Cookie::split_parse_encoded(header)
        .filter_map(Result::ok)
        .find(|cookie| cookie.name() == name)
        .map(|cookie| cookie.value().to_owned())
}

#[derive(Clone, Debug, Default)]
pub struct DocumentCookies {
    config: AuthCookieConfig,
}

impl DocumentCookies {
    pub fn new(config: AuthCookieConfig) -> Self {
        Self { config }
    }
}

#[cfg(feature = "hydrate")]
fn html_document() -> Option<web_sys::HtmlDocument> {
    use wasm_bindgen::JsCast;

    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.dyn_into::<web_sys::HtmlDocument>().ok())
}

impl CookieStore for DocumentCookies {
    fn set_auth_cookie(&self, token: &str) {
        let cookie = format_auth_cookie(&self.config, token);
        #[cfg(feature = "hydrate")]
        {
            match html_document() {
                Some(doc) => {
                    if doc.set_cookie(&cookie).is_err() {
                        log::warn!("auth cookie write rejected");
                    }
                }
                None => log::warn!("no document available for auth cookie"),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = cookie;
        }
    }

    fn auth_token(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let header = html_document()?.cookie().ok()?;
            read_cookie(&header, &self.config.name)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }
}

/// In-memory cookie jar for off-browser runs.
#[derive(Debug, Default)]
pub struct MemoryCookies {
    token: RefCell<Option<String>>,
}

impl CookieStore for MemoryCookies {
    fn set_auth_cookie(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_owned());
    }

    fn auth_token(&self) -> Option<String> {
        self.token.borrow().clone()
    }
}

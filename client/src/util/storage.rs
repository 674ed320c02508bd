//! Client-side key-value storage.
//!
//! `BrowserStorage` writes to `localStorage` and falls back to memory when it
//! is unavailable (SSR, private mode, disabled storage). Writes are treated as
//! infallible: a browser-side failure is logged and dropped.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;

/// Marker written after login when the account still needs onboarding.
pub const STORE_KEY_ONBOARDING: &str = "onboarding";

pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str);
    fn remove_item(&self, key: &str);
}

#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove_item(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}

#[derive(Debug, Default)]
pub struct BrowserStorage {
    fallback: MemoryStorage,
}

/// Storage backed by `localStorage` when the browser provides it.
pub fn create_storage() -> BrowserStorage {
    BrowserStorage::default()
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                return storage.get_item(key).ok().flatten();
            }
        }
        self.fallback.get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                if storage.set_item(key, value).is_err() {
                    log::warn!("localStorage write failed for {key}");
                }
                return;
            }
        }
        self.fallback.set_item(key, value);
    }

    fn remove_item(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                if storage.remove_item(key).is_err() {
                    log::warn!("localStorage remove failed for {key}");
                }
                return;
            }
        }
        self.fallback.remove_item(key);
    }
}

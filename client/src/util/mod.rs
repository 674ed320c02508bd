//! Browser-facing services injected into the login flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each module pairs a small trait with a browser implementation (hydrate
//! builds) and an in-memory one, so pages stay thin and the submit pipeline
//! can be exercised off-browser.

pub mod cookie;
pub mod crypto;
pub mod navigation;
pub mod storage;

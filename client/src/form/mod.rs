//! Generic form engine used by route-level forms.
//!
//! SYSTEM CONTEXT
//! ==============
//! `schema` declares per-field rules, `shell` owns field values plus the
//! submit lifecycle, and `submit` runs the transform -> remote call -> success
//! hook pipeline against an injected transport.

pub mod schema;
pub mod shell;
pub mod submit;

//! Networking modules for the auth REST boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the transport seam and the browser HTTP client, `types` defines
//! the wire schema exchanged with the auth backend.

pub mod api;
pub mod types;

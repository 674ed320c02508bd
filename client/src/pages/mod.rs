//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (query parsing, service wiring)
//! and delegates rendering details to `components`.

pub mod landing;
pub mod login;

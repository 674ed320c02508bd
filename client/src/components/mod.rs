//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are presentational: they receive signals and callbacks from the
//! page that owns the form shell and never touch services directly.

pub mod form;

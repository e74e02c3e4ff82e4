//! Pure domain logic for the wharf console notification layer.
//!
//! This crate contains no I/O: data records, boundary validation,
//! threshold evaluators, the authorization predicate, and the sidebar
//! navigation tree.  Callers (the HTTP client and the panels) fetch
//! data and pass it in.

pub mod authorization;
pub mod backup;
pub mod error;
pub mod license;
pub mod sidebar;
pub mod types;

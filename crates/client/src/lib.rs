//! HTTP client for the wharf console's read-only status endpoints.
//!
//! [`ConsoleApi`] wraps the three GET endpoints the home-view panels
//! consume, validating wire payloads into `wharf_core` types at the
//! boundary. [`fetch`] holds the cancellation-aware, fail-silent
//! composition helpers the panels build on.

pub mod api;
pub mod fetch;
pub mod wire;

pub use api::{ApiError, ConsoleApi};

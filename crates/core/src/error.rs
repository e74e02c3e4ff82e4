//! Domain-level error type.

/// Errors produced by pure core logic.
///
/// I/O layers wrap this with their own transport errors; see
/// `wharf_client::ApiError`.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A payload or parameter failed validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// An invariant was broken that callers cannot recover from.
    #[error("Internal error: {0}")]
    Internal(String),
}

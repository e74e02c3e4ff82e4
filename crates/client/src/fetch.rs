//! Cancellation-aware, fail-silent fetch composition.
//!
//! Panels race each fetch against a [`CancellationToken`] and collapse
//! failures to `None` — a warning banner is suppressed rather than risk
//! alarming administrators with stale or half-fetched data. Failures
//! are still logged.

use std::future::Future;

use tokio_util::sync::CancellationToken;

use crate::api::ApiError;

/// Await `fut`, abandoning it early if `cancel` fires first.
pub async fn with_cancel<T>(
    cancel: &CancellationToken,
    fut: impl Future<Output = Result<T, ApiError>>,
) -> Result<T, ApiError> {
    tokio::select! {
        _ = cancel.cancelled() => Err(ApiError::Cancelled),
        result = fut => result,
    }
}

/// Collapse a fetch result to `Option`, logging the failure.
///
/// `endpoint` names the request for the log line.
pub fn quietly<T>(endpoint: &str, result: Result<T, ApiError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(ApiError::Cancelled) => {
            tracing::debug!(endpoint, "Fetch cancelled");
            None
        }
        Err(e) => {
            tracing::warn!(endpoint, error = %e, "Fetch failed, suppressing result");
            None
        }
    }
}

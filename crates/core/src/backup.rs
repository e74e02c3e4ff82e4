//! Scheduled backup status and failure messaging.

use serde::Serialize;

use crate::error::CoreError;

/// Status of the most recent automated backup, as reported by
/// `GET /api/backup/s3/status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BackupStatus {
    /// Whether the most recent attempt failed.
    pub failed: bool,
    /// Unix timestamp (seconds, UTC) of the most recent attempt.
    pub timestamp_utc: i64,
}

/// A backup warning is due iff the latest attempt failed.
pub fn backup_failed(status: &BackupStatus) -> bool {
    status.failed
}

/// Render a unix timestamp as an ISO-8601 calendar date (UTC, day
/// granularity), e.g. `1970-01-01`.
pub fn iso_date(timestamp_utc: i64) -> Result<String, CoreError> {
    let datetime = chrono::DateTime::from_timestamp(timestamp_utc, 0).ok_or_else(|| {
        CoreError::Validation(format!("Timestamp {timestamp_utc} is out of range"))
    })?;
    Ok(datetime.date_naive().format("%Y-%m-%d").to_string())
}

/// Compose the administrator-facing failure message for a failed backup.
///
/// The trailing "documentation" reference is rendered as a link by the
/// panel layer.
pub fn failure_message(status: &BackupStatus) -> Result<String, CoreError> {
    Ok(format!(
        "The latest automated backup has failed at {}. For details please see \
         the log files and have a look at the documentation.",
        iso_date(status.timestamp_utc)?
    ))
}

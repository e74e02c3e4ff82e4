//! Warns when the most recent automated backup failed.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use wharf_client::api::BACKUP_STATUS_PATH;
use wharf_client::fetch::{quietly, with_cancel};
use wharf_client::ConsoleApi;
use wharf_core::backup::{backup_failed, failure_message};

use crate::banner::{Banner, BannerLink, Severity};

/// Where the banner's trailing "documentation" link points.
pub const BACKUP_DOCS_URL: &str = "https://docs.wharf.dev/admin/settings/backups";

/// Home-view panel for scheduled backup failures.
pub struct BackupFailedPanel {
    api: Arc<ConsoleApi>,
}

impl BackupFailedPanel {
    pub fn new(api: Arc<ConsoleApi>) -> Self {
        Self { api }
    }

    /// Run the check once.
    ///
    /// Yields a banner only for a resolved status with `failed == true`;
    /// fetch failures and cancellation yield `None`.
    pub async fn check(&self, cancel: &CancellationToken) -> Option<Banner> {
        let status = quietly(
            BACKUP_STATUS_PATH,
            with_cancel(cancel, self.api.backup_status()).await,
        )?;

        if !backup_failed(&status) {
            return None;
        }

        let message = match failure_message(&status) {
            Ok(message) => message,
            Err(e) => {
                tracing::warn!(error = %e, "Backup failure timestamp unusable, suppressing banner");
                return None;
            }
        };

        tracing::warn!(timestamp_utc = status.timestamp_utc, "Automated backup failed");

        Some(Banner {
            severity: Severity::Warning,
            message,
            link: Some(BannerLink {
                label: "documentation".to_string(),
                url: BACKUP_DOCS_URL.to_string(),
            }),
        })
    }
}

//! Aggregation of the home-view panels.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use wharf_client::ConsoleApi;

use crate::backup_failed::BackupFailedPanel;
use crate::banner::Banner;
use crate::license_node::LicenseNodePanel;

/// Runs every home-view panel and collects the active banners.
pub struct HomePanels {
    license: LicenseNodePanel,
    backup: BackupFailedPanel,
}

impl HomePanels {
    pub fn new(api: Arc<ConsoleApi>) -> Self {
        Self {
            license: LicenseNodePanel::new(api.clone()),
            backup: BackupFailedPanel::new(api),
        }
    }

    /// Run all checks concurrently.
    ///
    /// Banner order is stable: license overage first, then backup
    /// failure.
    pub async fn check_all(&self, cancel: &CancellationToken) -> Vec<Banner> {
        let (license, backup) = tokio::join!(self.license.check(cancel), self.backup.check(cancel));
        license.into_iter().chain(backup).collect()
    }
}

//! Warns when node usage exceeds the license seat allowance.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use wharf_client::api::{LICENSES_INFO_PATH, SYSTEM_NODES_PATH};
use wharf_client::fetch::{quietly, with_cancel};
use wharf_client::ConsoleApi;
use wharf_core::license::{seats_exceeded, LICENSE_EXCEEDED_MESSAGE};

use crate::banner::{Banner, Severity};

/// Home-view panel for license seat overage.
pub struct LicenseNodePanel {
    api: Arc<ConsoleApi>,
}

impl LicenseNodePanel {
    pub fn new(api: Arc<ConsoleApi>) -> Self {
        Self { api }
    }

    /// Run the check once.
    ///
    /// License and usage are fetched concurrently; the comparison only
    /// happens once BOTH resolve. Any failure, invalid payload, or
    /// cancellation yields `None`.
    pub async fn check(&self, cancel: &CancellationToken) -> Option<Banner> {
        let (license, usage) = tokio::join!(
            with_cancel(cancel, self.api.license_info()),
            with_cancel(cancel, self.api.node_usage()),
        );

        let license = quietly(LICENSES_INFO_PATH, license)?;
        let usage = quietly(SYSTEM_NODES_PATH, usage)?;

        if !seats_exceeded(&license, &usage) {
            tracing::debug!(
                allowed_nodes = license.allowed_nodes,
                used_nodes = usage.used_nodes,
                "Node usage within license allowance"
            );
            return None;
        }

        tracing::warn!(
            allowed_nodes = license.allowed_nodes,
            used_nodes = usage.used_nodes,
            "License node allowance exceeded"
        );

        Some(Banner {
            severity: Severity::Warning,
            message: LICENSE_EXCEEDED_MESSAGE.to_string(),
            link: None,
        })
    }
}

//! REST API client for the console status endpoints.
//!
//! Wraps the license, node usage, and backup status endpoints using
//! [`reqwest`]. All three are read-only, idempotent GETs with no
//! request body.

use wharf_core::backup::BackupStatus;
use wharf_core::error::CoreError;
use wharf_core::license::{LicenseInfo, UsageInfo};

use crate::wire::{BackupStatusWire, LicenseInfoWire, NodeUsageWire};

/// `GET` path for the active license.
pub const LICENSES_INFO_PATH: &str = "/api/licenses/info";
/// `GET` path for current node usage.
pub const SYSTEM_NODES_PATH: &str = "/api/system/nodes";
/// `GET` path for the most recent scheduled backup status.
pub const BACKUP_STATUS_PATH: &str = "/api/backup/s3/status";

/// HTTP client for a single console instance.
pub struct ConsoleApi {
    client: reqwest::Client,
    api_url: String,
}

/// Errors from the console REST API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The HTTP request itself failed (network, DNS, TLS, decode).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The console returned a non-2xx status code.
    #[error("Console API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The response parsed but failed boundary validation.
    #[error(transparent)]
    Invalid(#[from] CoreError),

    /// The request was abandoned via its cancellation token.
    #[error("Request cancelled")]
    Cancelled,
}

impl ConsoleApi {
    /// Create a new API client for a console instance.
    ///
    /// * `api_url` - Base HTTP URL, e.g. `http://host:9000`.
    pub fn new(api_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
        }
    }

    /// Create an API client reusing an existing [`reqwest::Client`]
    /// (useful for connection pooling across instances).
    pub fn with_client(client: reqwest::Client, api_url: String) -> Self {
        Self { client, api_url }
    }

    /// Fetch the active license.
    ///
    /// Sends `GET /api/licenses/info` and validates the payload (node
    /// allowance, license type code) into a [`LicenseInfo`].
    pub async fn license_info(&self) -> Result<LicenseInfo, ApiError> {
        let wire: LicenseInfoWire = self.get_json(LICENSES_INFO_PATH).await?;
        Ok(LicenseInfo::try_from(wire)?)
    }

    /// Fetch current node usage across the installation.
    ///
    /// Sends `GET /api/system/nodes`.
    pub async fn node_usage(&self) -> Result<UsageInfo, ApiError> {
        let wire: NodeUsageWire = self.get_json(SYSTEM_NODES_PATH).await?;
        Ok(UsageInfo::try_from(wire)?)
    }

    /// Fetch the status of the most recent scheduled backup.
    ///
    /// Sends `GET /api/backup/s3/status`.
    pub async fn backup_status(&self) -> Result<BackupStatus, ApiError> {
        let wire: BackupStatusWire = self.get_json(BACKUP_STATUS_PATH).await?;
        Ok(BackupStatus::try_from(wire)?)
    }

    // ---- private helpers ----

    /// Issue a GET request and parse the JSON response body.
    ///
    /// Every request carries a fresh `x-request-id` so client and server
    /// logs can be correlated.
    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .client
            .get(format!("{}{path}", self.api_url))
            .header("x-request-id", uuid::Uuid::new_v4().to_string())
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or an [`ApiError::Api`] containing
    /// the status and body text on failure.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ApiError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}

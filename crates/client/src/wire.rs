//! Wire-format payloads for the console status endpoints.
//!
//! Field names follow the HTTP API (the backup endpoint uses PascalCase
//! keys). Each payload converts into its validated `wharf_core` type;
//! the conversion is the single place wire data is checked.

use serde::Deserialize;
use wharf_core::backup::BackupStatus;
use wharf_core::error::CoreError;
use wharf_core::license::{validate_node_count, LicenseInfo, LicenseType, UsageInfo};

/// Payload of `GET /api/licenses/info`.
#[derive(Debug, Deserialize)]
pub struct LicenseInfoWire {
    pub nodes: i64,
    #[serde(rename = "type")]
    pub license_type: i32,
}

impl TryFrom<LicenseInfoWire> for LicenseInfo {
    type Error = CoreError;

    fn try_from(wire: LicenseInfoWire) -> Result<Self, Self::Error> {
        validate_node_count(wire.nodes, "nodes")?;
        Ok(LicenseInfo {
            allowed_nodes: wire.nodes,
            license_type: LicenseType::from_code(wire.license_type)?,
        })
    }
}

/// Payload of `GET /api/system/nodes`.
#[derive(Debug, Deserialize)]
pub struct NodeUsageWire {
    pub nodes: i64,
}

impl TryFrom<NodeUsageWire> for UsageInfo {
    type Error = CoreError;

    fn try_from(wire: NodeUsageWire) -> Result<Self, Self::Error> {
        validate_node_count(wire.nodes, "nodes")?;
        Ok(UsageInfo {
            used_nodes: wire.nodes,
        })
    }
}

/// Payload of `GET /api/backup/s3/status`.
///
/// `TimestampUTC` may be absent on a never-failed status; it defaults
/// to 0 and is only rendered when `Failed` is true.
#[derive(Debug, Deserialize)]
pub struct BackupStatusWire {
    #[serde(rename = "Failed")]
    pub failed: bool,
    #[serde(rename = "TimestampUTC", default)]
    pub timestamp_utc: i64,
}

impl TryFrom<BackupStatusWire> for BackupStatus {
    type Error = CoreError;

    fn try_from(wire: BackupStatusWire) -> Result<Self, Self::Error> {
        if wire.timestamp_utc < 0 {
            return Err(CoreError::Validation(format!(
                "TimestampUTC must be non-negative, got {}",
                wire.timestamp_utc
            )));
        }
        Ok(BackupStatus {
            failed: wire.failed,
            timestamp_utc: wire.timestamp_utc,
        })
    }
}

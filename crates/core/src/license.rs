//! License seat accounting and overage evaluation.
//!
//! Pure logic — no HTTP access. The caller fetches license and usage
//! data from the console API and passes it in.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Integer license type codes as carried by `GET /api/licenses/info`.
pub const LICENSE_CODE_TRIAL: i32 = 1;
pub const LICENSE_CODE_SUBSCRIPTION: i32 = 2;
pub const LICENSE_CODE_ESSENTIALS: i32 = 3;

/// All valid license type codes.
pub const VALID_LICENSE_CODES: &[i32] = &[
    LICENSE_CODE_TRIAL,
    LICENSE_CODE_SUBSCRIPTION,
    LICENSE_CODE_ESSENTIALS,
];

/// Warning shown to administrators when node usage exceeds the license.
pub const LICENSE_EXCEEDED_MESSAGE: &str =
    "The number of nodes for your license has been exceeded. Please contact your administrator.";

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Kind of the active license.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LicenseType {
    Trial,
    Subscription,
    Essentials,
}

impl LicenseType {
    /// Convert from the wire integer code.
    pub fn from_code(code: i32) -> Result<Self, CoreError> {
        match code {
            LICENSE_CODE_TRIAL => Ok(Self::Trial),
            LICENSE_CODE_SUBSCRIPTION => Ok(Self::Subscription),
            LICENSE_CODE_ESSENTIALS => Ok(Self::Essentials),
            _ => Err(CoreError::Validation(format!(
                "Unknown license type code {code}. Valid codes: {}",
                VALID_LICENSE_CODES
                    .iter()
                    .map(|c| c.to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            ))),
        }
    }

    /// Convert to the wire integer code.
    pub fn as_code(&self) -> i32 {
        match self {
            Self::Trial => LICENSE_CODE_TRIAL,
            Self::Subscription => LICENSE_CODE_SUBSCRIPTION,
            Self::Essentials => LICENSE_CODE_ESSENTIALS,
        }
    }
}

/// The active license as reported by the console API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LicenseInfo {
    /// Maximum node count permitted by this license.
    pub allowed_nodes: i64,
    pub license_type: LicenseType,
}

/// Current node usage across the installation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UsageInfo {
    /// Cluster members currently counted against the seat limit.
    pub used_nodes: i64,
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate that a node count is non-negative.
///
/// Returns a `CoreError::Validation` naming the field if negative.
pub fn validate_node_count(value: i64, name: &str) -> Result<(), CoreError> {
    if value < 0 {
        return Err(CoreError::Validation(format!(
            "{name} must be non-negative, got {value}"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Evaluation
// ---------------------------------------------------------------------------

/// A license is exceeded when usage is strictly above the allowance.
///
/// Equality is within the license; both values must already be resolved —
/// there is no partial comparison against a pending side.
pub fn seats_exceeded(license: &LicenseInfo, usage: &UsageInfo) -> bool {
    usage.used_nodes > license.allowed_nodes
}

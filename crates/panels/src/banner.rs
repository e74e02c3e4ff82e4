//! Warning banners produced by the home-view panels.

use serde::Serialize;

/// Visual weight of a banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Critical => "critical",
        }
    }
}

/// A link rendered after a banner message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BannerLink {
    pub label: String,
    pub url: String,
}

/// A single home-view notification banner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Banner {
    pub severity: Severity,
    pub message: String,
    pub link: Option<BannerLink>,
}

/// Environment (cluster endpoint) identifiers as issued by the console API.
pub type EnvironmentId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

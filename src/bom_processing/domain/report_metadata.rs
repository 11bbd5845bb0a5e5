use chrono::{DateTime, Utc};
use serde::Serialize;

/// Metadata exposed to report templates alongside the package list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportMetadata {
    tool_name: String,
    tool_version: String,
    generated_at: String,
}

impl ReportMetadata {
    pub fn new(tool_name: String, tool_version: String, generated_at: DateTime<Utc>) -> Self {
        Self {
            tool_name,
            tool_version,
            generated_at: generated_at.to_rfc3339(),
        }
    }

    /// Metadata for this build of mdbom, stamped with the current time
    pub fn current() -> Self {
        Self::new(
            env!("CARGO_PKG_NAME").to_string(),
            env!("CARGO_PKG_VERSION").to_string(),
            Utc::now(),
        )
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn tool_version(&self) -> &str {
        &self.tool_version
    }

    /// RFC 3339 timestamp of the generation run
    pub fn generated_at(&self) -> &str {
        &self.generated_at
    }
}

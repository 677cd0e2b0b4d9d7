//! Run log entries.

use chrono::{DateTime, Utc};
use quill_core::enums::Severity;
use serde::{Deserialize, Serialize};

/// One timestamped, human-readable log line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub message: String,
    pub severity: Severity,
    pub timestamp: DateTime<Utc>,
}

impl LogEntry {
    #[must_use]
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity,
            timestamp: Utc::now(),
        }
    }
}

//! Log record type

use chrono::{DateTime, Local};
use droidbridge_core::Severity;

/// A single log record as seen by the bridge
///
/// Owned by the logging subsystem that produced it; the bridge reads it and
/// discards it within one `emit` call.
#[derive(Debug, Clone)]
pub struct LogRecord {
    /// Wall-clock time the record was produced
    pub timestamp: DateTime<Local>,
    /// Logger name (the tracing target)
    pub target: String,
    /// Record severity
    pub severity: Severity,
    /// Message text
    pub message: String,
}

impl LogRecord {
    /// Create a record stamped with the current wall-clock time
    pub fn new(target: impl Into<String>, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now(),
            target: target.into(),
            severity,
            message: message.into(),
        }
    }

    /// Create a record with an explicit timestamp
    pub fn with_timestamp(
        timestamp: DateTime<Local>,
        target: impl Into<String>,
        severity: Severity,
        message: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            target: target.into(),
            severity,
            message: message.into(),
        }
    }
}

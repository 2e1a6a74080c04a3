//! Record formatters

use crate::record::LogRecord;

/// Renders a record to the single line handed to a sink
pub trait RecordFormatter: Send + Sync {
    fn format(&self, record: &LogRecord) -> String;
}

/// `target: message`
///
/// The Android log already stamps time and priority, so neither is repeated
/// here.
#[derive(Debug, Default, Clone, Copy)]
pub struct SimpleFormat;

impl RecordFormatter for SimpleFormat {
    fn format(&self, record: &LogRecord) -> String {
        format!("{}: {}", record.target, record.message)
    }
}

/// `YYYY-MM-DD HH:MM:SS LEVEL    target: message`, for the file output
#[derive(Debug, Default, Clone, Copy)]
pub struct FullFormat;

impl RecordFormatter for FullFormat {
    fn format(&self, record: &LogRecord) -> String {
        // Width specs are ignored by Display impls that write directly, so
        // the level goes through a string first.
        format!(
            "{} {:<8} {}: {}",
            record.timestamp.format("%Y-%m-%d %H:%M:%S"),
            record.severity.to_string(),
            record.target,
            record.message
        )
    }
}

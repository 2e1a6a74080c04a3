//! Record-to-sink bridge with severity translation

use crate::format::{RecordFormatter, SimpleFormat};
use crate::record::LogRecord;
use crate::sink::{LogSink, SinkRegistry, SinkResult};
use droidbridge_core::{LogPriority, Severity};
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

/// Where a bridge resolves its sink from
enum SinkTarget {
    /// The process-wide registry (the Android sink in production)
    Registry(&'static SinkRegistry),
    /// A sink owned by this bridge (the file output)
    Direct(Arc<dyn LogSink>),
}

/// Forwards log records to a native sink
///
/// Mirrors the contract of a logging handler: `emit` never panics and never
/// surfaces an error to the code that produced the record. Failures while
/// writing go to the fallback reporting path instead.
pub struct LogBridge {
    tag: String,
    formatter: Box<dyn RecordFormatter>,
    target: SinkTarget,
}

impl LogBridge {
    /// Create a bridge forwarding to the global sink registry
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            formatter: Box::new(SimpleFormat),
            target: SinkTarget::Registry(SinkRegistry::global()),
        }
    }

    /// Create a bridge with a specific registry
    pub fn with_registry(tag: impl Into<String>, registry: &'static SinkRegistry) -> Self {
        Self {
            tag: tag.into(),
            formatter: Box::new(SimpleFormat),
            target: SinkTarget::Registry(registry),
        }
    }

    /// Create a bridge owning its sink
    pub fn with_sink(tag: impl Into<String>, sink: Arc<dyn LogSink>) -> Self {
        Self {
            tag: tag.into(),
            formatter: Box::new(SimpleFormat),
            target: SinkTarget::Direct(sink),
        }
    }

    /// Replace the formatter
    pub fn with_formatter(mut self, formatter: impl RecordFormatter + 'static) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    /// The tag handed to the native sink
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Whether a record at this severity would be forwarded
    pub fn is_enabled(&self, severity: Severity) -> bool {
        match &self.target {
            SinkTarget::Registry(registry) => registry.is_enabled(severity),
            SinkTarget::Direct(_) => true,
        }
    }

    /// Forward one record to the sink
    ///
    /// Exactly one sink write per record. Any failure, including a panicking
    /// sink, is contained here and reported on the fallback path.
    pub fn emit(&self, record: &LogRecord) {
        if !self.is_enabled(record.severity) {
            return;
        }

        match std::panic::catch_unwind(AssertUnwindSafe(|| self.try_emit(record))) {
            Ok(Ok(())) => {}
            Ok(Err(err)) => self.report_failure(record, &err.to_string()),
            Err(_) => self.report_failure(record, "panic in log sink"),
        }
    }

    fn try_emit(&self, record: &LogRecord) -> SinkResult {
        let sink = match &self.target {
            SinkTarget::Registry(registry) => match registry.sink() {
                Some(sink) => sink,
                None => return Ok(()),
            },
            SinkTarget::Direct(sink) => sink.clone(),
        };

        let text = self.formatter.format(record);
        let priority = LogPriority::from_severity(record.severity);
        sink.write(priority, &self.tag, &text)
    }

    /// Error-reporting path of the logging subsystem itself: best effort,
    /// never propagated to the emitting caller.
    fn report_failure(&self, record: &LogRecord, reason: &str) {
        use std::io::Write;

        let _ = writeln!(
            std::io::stderr(),
            "droidbridge-logging: dropped record from {}: {}",
            record.target,
            reason
        );
    }
}

//! Native sink abstraction and registry

use droidbridge_core::{LogPriority, Severity};
use once_cell::sync::OnceCell;
use parking_lot::{Mutex, RwLock};
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};
use thiserror::Error;
use tracing_appender::rolling::{RollingFileAppender, Rotation};

/// Result type for sink writes
pub type SinkResult = Result<(), SinkError>;

/// Errors raised by a sink
///
/// These never reach the code that produced the record; the bridge routes
/// them to its fallback reporting path.
#[derive(Debug, Error)]
pub enum SinkError {
    /// Failed to construct the sink
    #[error("sink init failed: {0}")]
    Init(String),

    /// Failed to write a line
    #[error("sink write failed: {0}")]
    Write(String),
}

/// A native log sink
///
/// One call per record; implementations must be safe to call concurrently
/// from any thread that produces log records.
pub trait LogSink: Send + Sync {
    fn write(&self, priority: LogPriority, tag: &str, message: &str) -> SinkResult;
}

/// Sink writing to stderr
///
/// Stands in for the native sink on host builds and in tests.
#[derive(Debug, Default)]
pub struct StderrSink;

impl LogSink for StderrSink {
    fn write(&self, priority: LogPriority, tag: &str, message: &str) -> SinkResult {
        writeln!(std::io::stderr().lock(), "{} {}: {}", priority, tag, message)
            .map_err(|e| SinkError::Write(e.to_string()))
    }
}

/// Sink appending to a rotating file under the platform's log root
///
/// Rotation is bounded by file count so the total disk space used for logs
/// stays managed on-device.
pub struct FileSink {
    appender: Mutex<RollingFileAppender>,
}

impl FileSink {
    /// Open the rotating file under `log_root`
    pub fn new(log_root: &Path, max_log_files: usize) -> Result<Self, SinkError> {
        let appender = RollingFileAppender::builder()
            .rotation(Rotation::DAILY)
            .max_log_files(max_log_files)
            .filename_prefix("platform")
            .filename_suffix("txt")
            .build(log_root)
            .map_err(|e| SinkError::Init(e.to_string()))?;

        Ok(Self {
            appender: Mutex::new(appender),
        })
    }
}

impl LogSink for FileSink {
    fn write(&self, _priority: LogPriority, _tag: &str, message: &str) -> SinkResult {
        let mut appender = self.appender.lock();
        writeln!(appender, "{}", message).map_err(|e| SinkError::Write(e.to_string()))
    }
}

/// Global native sink registry
static SINK_REGISTRY: OnceCell<SinkRegistry> = OnceCell::new();

/// Holds the process-wide native sink and the dynamic minimum severity
///
/// The sink is registered explicitly by constructing it and passing it in;
/// nothing is resolved by name.
pub struct SinkRegistry {
    sink: RwLock<Option<Arc<dyn LogSink>>>,
    min_severity: AtomicU8,
}

impl SinkRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            sink: RwLock::new(None),
            min_severity: AtomicU8::new(Severity::Trace as u8),
        }
    }

    /// Get the global registry instance
    pub fn global() -> &'static SinkRegistry {
        SINK_REGISTRY.get_or_init(SinkRegistry::new)
    }

    /// Register the native sink
    pub fn set_sink(&self, sink: Option<Arc<dyn LogSink>>) {
        let mut guard = self.sink.write();
        *guard = sink;
    }

    /// Get the registered sink
    pub fn sink(&self) -> Option<Arc<dyn LogSink>> {
        self.sink.read().clone()
    }

    /// Set the minimum severity forwarded to the sink
    pub fn set_min_severity(&self, severity: Severity) {
        self.min_severity.store(severity as u8, Ordering::SeqCst);
    }

    /// Current minimum severity
    pub fn min_severity(&self) -> Severity {
        Severity::from_u8(self.min_severity.load(Ordering::SeqCst))
    }

    /// Whether a record at this severity should be forwarded
    pub fn is_enabled(&self, severity: Severity) -> bool {
        severity >= self.min_severity()
    }
}

impl Default for SinkRegistry {
    fn default() -> Self {
        Self::new()
    }
}

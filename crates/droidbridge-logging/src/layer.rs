//! Tracing layer that forwards events through a LogBridge

use crate::bridge::LogBridge;
use crate::format::FullFormat;
use crate::record::LogRecord;
use crate::reload::ReloadHandle;
use crate::settings::LogSettings;
use crate::sink::FileSink;
use droidbridge_core::{BridgeError, BridgeResult, Severity};
use std::sync::Arc;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::Layer;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::layer::Context;
use tracing_subscriber::registry::LookupSpan;

/// Targets this workspace logs under; always allowed through at DEBUG
const BRIDGE_TARGETS: [&str; 6] = [
    "droidbridge",
    "droidbridge_core",
    "droidbridge_logging",
    "droidbridge_platform",
    "droidbridge_service",
    "droidbridge_jni",
];

/// The platform's task worker is chatty at DEBUG; cap it at INFO
const WORKER_TARGET: &str = "platform::tasks::worker";

/// Database target, lowered to DEBUG only by the dedicated flag
const DATABASE_TARGET: &str = "platform::db";

/// Template rendering is very noisy below INFO
const TEMPLATE_TARGET: &str = "platform::templates";

/// Tracing layer that forwards log events through a [`LogBridge`]
pub struct BridgeLayer {
    bridge: LogBridge,
}

impl BridgeLayer {
    /// Create a layer around the given bridge
    pub fn new(bridge: LogBridge) -> Self {
        Self { bridge }
    }

    /// Convert a tracing level to a record severity
    fn convert_level(level: &Level) -> Severity {
        match *level {
            Level::TRACE => Severity::Trace,
            Level::DEBUG => Severity::Debug,
            Level::INFO => Severity::Info,
            Level::WARN => Severity::Warning,
            Level::ERROR => Severity::Error,
        }
    }
}

impl<S> Layer<S> for BridgeLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let severity = Self::convert_level(metadata.level());

        // Check the dynamic level before doing any formatting work
        if !self.bridge.is_enabled(severity) {
            return;
        }

        // Extract the message from the event
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        let message = visitor.into_message();

        let record = LogRecord::new(metadata.target(), severity, message);
        self.bridge.emit(&record);
    }

    fn enabled(&self, metadata: &tracing::Metadata<'_>, _ctx: Context<'_, S>) -> bool {
        self.bridge.is_enabled(Self::convert_level(metadata.level()))
    }
}

/// Visitor assembling the event message, with structured fields appended
#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
    fields: Vec<String>,
}

impl MessageVisitor {
    fn into_message(self) -> String {
        let mut message = self.message.unwrap_or_default();
        for field in self.fields {
            if message.is_empty() {
                message = field;
            } else {
                message.push(' ');
                message.push_str(&field);
            }
        }
        message
    }
}

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{:?}", value));
        } else {
            self.fields.push(format!("{}={:?}", field.name(), value));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
        } else {
            self.fields.push(format!("{}={}", field.name(), value));
        }
    }
}

/// Per-target directives, without the root level
fn target_directives(debug_database: bool) -> String {
    let mut directives = Vec::new();
    for target in BRIDGE_TARGETS {
        directives.push(format!("{target}=debug"));
    }
    directives.push(format!("{WORKER_TARGET}=info"));
    let database_level = if debug_database { "debug" } else { "info" };
    directives.push(format!("{DATABASE_TARGET}={database_level}"));
    directives.push(format!("{TEMPLATE_TARGET}=info"));
    directives.join(",")
}

/// Full directive string: root level first, target overrides after
fn filter_directives(root: Severity, debug_database: bool) -> String {
    format!(
        "{},{}",
        root.as_filter_str(),
        target_directives(debug_database)
    )
}

/// Initialize the logging stack
///
/// Wires a reloadable filter, the Android-sink layer, and the rotating file
/// layer, then installs the panic hook. Handlers are constructed here and
/// registered directly; nothing is resolved by name. Call once during
/// process setup; a second call leaves the first subscriber in place.
pub fn init_logging(settings: &LogSettings) -> BridgeResult<()> {
    use tracing_subscriber::prelude::*;

    let directives = filter_directives(settings.root_severity(), settings.debug_database);
    let filter = EnvFilter::try_new(&directives)
        .map_err(|e| BridgeError::InitializationFailed(format!("bad filter directives: {e}")))?;
    let (filter_layer, reload_handle) = tracing_subscriber::reload::Layer::new(filter);
    ReloadHandle::global().set_handle(reload_handle, target_directives(settings.debug_database));

    // Android output: terse lines, the native log stamps time and priority
    let android_layer = BridgeLayer::new(LogBridge::new(&settings.tag));

    // File output: full lines under <home>/logs, bounded rotation
    let file_sink = FileSink::new(&settings.log_root, settings.max_log_files)
        .map_err(|e| BridgeError::InitializationFailed(e.to_string()))?;
    let file_bridge =
        LogBridge::with_sink(&settings.tag, Arc::new(file_sink)).with_formatter(FullFormat);
    let file_layer = BridgeLayer::new(file_bridge);

    let subscriber = tracing_subscriber::registry()
        .with(filter_layer)
        .with(android_layer)
        .with(file_layer);

    // Ignore the error if a subscriber is already set
    let _ = tracing::subscriber::set_global_default(subscriber);

    crate::panic::install_panic_hook(&settings.tag);

    Ok(())
}

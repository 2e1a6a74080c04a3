//! droidbridge-logging - Log record bridge to the Android native sink
//!
//! This crate provides:
//! - [`LogBridge`] forwarding formatted records to a native sink with
//!   severity-to-priority translation
//! - [`LogSink`] native sink abstraction ([`AndroidSink`] on Android)
//! - [`BridgeLayer`] tracing layer feeding a bridge
//! - [`init_logging`] one-shot wiring of the Android and file outputs
//! - [`ReloadHandle`] dynamic log level reloading

mod bridge;
mod format;
mod layer;
mod panic;
mod record;
mod reload;
mod settings;
mod sink;

#[cfg(target_os = "android")]
mod android;

#[cfg(target_os = "android")]
pub use android::AndroidSink;
pub use bridge::LogBridge;
pub use format::{FullFormat, RecordFormatter, SimpleFormat};
pub use layer::{BridgeLayer, init_logging};
pub use panic::install_panic_hook;
pub use record::LogRecord;
pub use reload::ReloadHandle;
pub use settings::LogSettings;
pub use sink::{FileSink, LogSink, SinkError, SinkRegistry, StderrSink};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        BridgeLayer, LogBridge, LogRecord, LogSettings, LogSink, ReloadHandle, SinkRegistry,
        init_logging,
    };
}

//! # droidbridge
//!
//! A thin Android-embedding bridge around an external application server.
//!
//! droidbridge translates Android lifecycle calls (setup / start / stop /
//! get-url) into calls against the platform's process bus, and routes log
//! records into the Android native log with level-to-priority translation.
//! The platform's state machine, HTTP plugins, and task scheduler stay on
//! the platform side of a small C ABI; this workspace only drives them.
//!
//! ## Quick Start
//!
//! ```ignore
//! use droidbridge::prelude::*;
//!
//! let config = PlatformConfig::new("/data/user/0/app/files/platform")
//!     .with_run_mode("test");
//!
//! let bus = load_platform("libplatform.so", &config, BusProfile::Server)?;
//! setup(&config, &bus)?;
//!
//! let service = ServerService::new(bus);
//! service.start()?;
//! let url = service.url()?; // "http://127.0.0.1:<port>/"
//! ```
//!
//! The Android host normally goes through the JNI surface in
//! `droidbridge-jni` instead of calling these APIs directly.

pub use droidbridge_core::{
    BridgeError, BridgeResult, BusProfile, LogPriority, PlatformConfig, ProcessBus, ServerStatus,
    SetupGuard, SetupOutcome, Severity,
};
pub use droidbridge_logging::{
    BridgeLayer, LogBridge, LogRecord, LogSettings, LogSink, ReloadHandle, SinkRegistry,
    init_logging,
};
pub use droidbridge_platform::{LoadError, LoadedPlatform, load_platform};
pub use droidbridge_service::{
    DEFAULT_STARTUP_TIMEOUT, POLL_INTERVAL, ServerService, WorkerService, setup, wait_for_url,
};

/// Re-export for host-side code
pub use tracing;

/// Prelude module for convenient imports
pub mod prelude {
    pub use droidbridge_core::prelude::*;
    pub use droidbridge_logging::prelude::*;
    pub use droidbridge_platform::prelude::*;
    pub use droidbridge_service::prelude::*;
}

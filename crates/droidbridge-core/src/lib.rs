//! droidbridge-core - Core types for the Android embedding bridge
//!
//! This crate provides the foundational types shared by the droidbridge
//! crates:
//! - [`ProcessBus`] interface to the embedded platform's process bus
//! - [`ServerStatus`] serving-state snapshot and URL construction
//! - [`Severity`] / [`LogPriority`] scales and their mapping
//! - [`PlatformConfig`] typed configuration for the platform initializer
//! - [`SetupGuard`] idempotent one-shot initialization
//! - [`BridgeError`] for error handling

mod bus;
mod config;
mod error;
mod level;
mod lifecycle;
mod status;

pub use bus::{BusProfile, ProcessBus};
pub use config::PlatformConfig;
pub use error::{BridgeError, BridgeResult};
pub use level::{LogPriority, Severity};
pub use lifecycle::{SetupGuard, SetupOutcome};
pub use status::ServerStatus;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        BridgeError, BridgeResult, BusProfile, LogPriority, PlatformConfig, ProcessBus,
        ServerStatus, SetupGuard, SetupOutcome, Severity,
    };
}

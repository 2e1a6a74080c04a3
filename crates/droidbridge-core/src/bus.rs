//! Process bus interface to the embedded platform

use crate::{BridgeResult, ServerStatus};

/// Which plugin set a bus enables
///
/// The platform's plugin-enable mechanism is its own; droidbridge only picks
/// one of the two compositions the Android host uses.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusProfile {
    /// UI-facing bus: the HTTP server plus the zip-content server
    Server = 0,
    /// Background bus: task services only, no HTTP endpoint
    Worker = 1,
}

impl BusProfile {
    /// Platform plugin identifiers enabled for this profile
    pub fn plugins(&self) -> &'static [&'static str] {
        match self {
            BusProfile::Server => &["http-server", "zip-content-server"],
            BusProfile::Worker => &["background-services"],
        }
    }

    /// Numeric value for the platform's C ABI
    pub fn as_u8(&self) -> u8 {
        *self as u8
    }

    /// Interpret the C ABI value
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(BusProfile::Server),
            1 => Some(BusProfile::Worker),
            _ => None,
        }
    }
}

impl std::fmt::Display for BusProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BusProfile::Server => write!(f, "server"),
            BusProfile::Worker => write!(f, "worker"),
        }
    }
}

/// Interface to the embedded platform's process bus
///
/// The bus state machine, its HTTP plugins, and its task scheduler all belong
/// to the platform; the bridge only drives transitions and observes the
/// serving status.
pub trait ProcessBus: Send + Sync + 'static {
    /// Begin the graceful start transition
    fn start(&self) -> BridgeResult<()>;

    /// Transition the bus to its exited state
    fn stop(&self) -> BridgeResult<()>;

    /// Query the current serving state
    ///
    /// Returns [`BridgeError::NotRunning`](crate::BridgeError::NotRunning)
    /// until the bus reaches its serving state. A fresh snapshot is taken on
    /// every call.
    fn status(&self) -> BridgeResult<ServerStatus>;

    /// Register the platform's periodic ping and vacuum jobs on its scheduler
    fn schedule_maintenance(&self) -> BridgeResult<()>;
}

#[cfg(test)]
#[path = "bus/bus_tests.rs"]
mod bus_tests;

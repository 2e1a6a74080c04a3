//! droidbridge-service - Lifecycle compositions over the process bus
//!
//! This crate provides the pieces the Android host drives:
//! - [`wait_for_url`] readiness polling against a status query
//! - [`ServerService`] / [`WorkerService`] bus compositions
//! - [`setup`] one-shot process setup (log directories, logging stack,
//!   platform maintenance jobs)

mod service;
mod setup;
mod startup;

pub use service::{ServerService, WorkerService};
pub use setup::setup;
pub use startup::{DEFAULT_STARTUP_TIMEOUT, POLL_INTERVAL, wait_for_url};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{ServerService, WorkerService, setup, wait_for_url};
}

//! Server and worker bus compositions

use crate::startup::{DEFAULT_STARTUP_TIMEOUT, wait_for_url};
use droidbridge_core::{BridgeResult, ProcessBus};
use once_cell::sync::OnceCell;
use std::time::Duration;

/// UI-facing service: the bus carrying the HTTP and zip-content plugins
///
/// Drives start/stop transitions and resolves the serving URL through the
/// readiness poll. The first successfully resolved URL is cached for the
/// service's lifetime; the bus keeps its port across that lifetime.
pub struct ServerService<B: ProcessBus> {
    bus: B,
    startup_timeout: Duration,
    url: OnceCell<String>,
}

impl<B: ProcessBus> ServerService<B> {
    /// Create a service over the given bus
    pub fn new(bus: B) -> Self {
        Self {
            bus,
            startup_timeout: DEFAULT_STARTUP_TIMEOUT,
            url: OnceCell::new(),
        }
    }

    /// Override the startup wait ceiling
    pub fn with_startup_timeout(mut self, timeout: Duration) -> Self {
        self.startup_timeout = timeout;
        self
    }

    /// Start the bus
    pub fn start(&self) -> BridgeResult<()> {
        tracing::info!("Starting server bus");
        self.bus.start()?;
        tracing::debug!("Server bus started");
        Ok(())
    }

    /// Resolve the serving URL, waiting up to the startup timeout
    ///
    /// Polls the bus status until it serves or the deadline elapses; a
    /// deadline overrun surfaces as
    /// [`BridgeError::NotRunning`](droidbridge_core::BridgeError::NotRunning).
    pub fn url(&self) -> BridgeResult<String> {
        self.url_with_timeout(self.startup_timeout)
    }

    /// Resolve the serving URL with an explicit wait ceiling
    pub fn url_with_timeout(&self, timeout: Duration) -> BridgeResult<String> {
        if let Some(url) = self.url.get() {
            return Ok(url.clone());
        }

        let url = wait_for_url(|| self.bus.status(), timeout)?;
        Ok(self.url.get_or_init(|| url).clone())
    }

    /// Stop the bus
    pub fn stop(&self) -> BridgeResult<()> {
        tracing::info!("Stopping server bus");
        self.bus.stop()?;
        tracing::debug!("Server bus stopped");
        Ok(())
    }

    /// The underlying bus
    pub fn bus(&self) -> &B {
        &self.bus
    }
}

/// Background service: the bus carrying the platform's task services
///
/// No HTTP endpoint, so there is no URL to resolve.
pub struct WorkerService<B: ProcessBus> {
    bus: B,
}

impl<B: ProcessBus> WorkerService<B> {
    /// Create a service over the given bus
    pub fn new(bus: B) -> Self {
        Self { bus }
    }

    /// Start the bus
    pub fn start(&self) -> BridgeResult<()> {
        tracing::info!("Starting worker bus");
        self.bus.start()?;
        tracing::debug!("Worker bus started");
        Ok(())
    }

    /// Stop the bus
    pub fn stop(&self) -> BridgeResult<()> {
        tracing::info!("Stopping worker bus");
        self.bus.stop()?;
        tracing::debug!("Worker bus stopped");
        Ok(())
    }

    /// The underlying bus
    pub fn bus(&self) -> &B {
        &self.bus
    }
}

#[cfg(test)]
#[path = "service/service_tests.rs"]
mod service_tests;

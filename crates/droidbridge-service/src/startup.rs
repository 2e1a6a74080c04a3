//! Readiness polling against the process bus

use droidbridge_core::{BridgeError, BridgeResult, ServerStatus};
use std::time::{Duration, Instant};

/// Fixed sleep between status polls
pub const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Default ceiling on the startup wait
pub const DEFAULT_STARTUP_TIMEOUT: Duration = Duration::from_secs(10);

/// Poll `query` until the server reports a serving status or `timeout`
/// elapses.
///
/// Returns the loopback URL built from the first successful status; success
/// is never deferred past the first positive observation. `NotRunning` is
/// the only retryable failure; any other error is returned after a single
/// occurrence. The deadline is checked only after a `NotRunning`
/// observation, so a first-call success returns without sleeping.
///
/// This is a bounded spin-poll, not backoff: the expected wait is
/// sub-second and the ceiling defaults to ten seconds.
pub fn wait_for_url<F>(mut query: F, timeout: Duration) -> BridgeResult<String>
where
    F: FnMut() -> BridgeResult<ServerStatus>,
{
    let deadline = Instant::now() + timeout;

    loop {
        match query() {
            Ok(status) => {
                let url = status.base_url();
                tracing::debug!("Server ready on {}", url);
                return Ok(url);
            }
            Err(BridgeError::NotRunning) => {
                if Instant::now() >= deadline {
                    tracing::warn!("Server not running after {:?}", timeout);
                    return Err(BridgeError::NotRunning);
                }
                std::thread::sleep(POLL_INTERVAL);
            }
            Err(other) => return Err(other),
        }
    }
}

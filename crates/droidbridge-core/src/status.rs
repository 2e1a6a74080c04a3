//! Serving-state snapshot

use serde::{Deserialize, Serialize};

/// Snapshot of the embedded server's serving state
///
/// Produced by the platform's process bus on each status query and consumed
/// read-only; a new snapshot is taken on every poll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerStatus {
    /// Address the server reported binding to
    pub host: String,
    /// Process id of the serving process
    pub pid: u32,
    /// TCP port the HTTP plugin is listening on
    pub port: u16,
}

impl ServerStatus {
    /// Create a new status snapshot
    pub fn new(host: impl Into<String>, pid: u32, port: u16) -> Self {
        Self {
            host: host.into(),
            pid,
            port,
        }
    }

    /// Loopback URL the host view should load.
    ///
    /// The platform binds loopback only, so the URL is always built against
    /// 127.0.0.1 regardless of the reported host.
    pub fn base_url(&self) -> String {
        format!("http://127.0.0.1:{}/", self.port)
    }
}

impl std::fmt::Display for ServerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{} (pid {})", self.host, self.port, self.pid)
    }
}

#[cfg(test)]
#[path = "status/status_tests.rs"]
mod status_tests;

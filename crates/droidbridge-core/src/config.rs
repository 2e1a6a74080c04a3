//! Typed platform configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Configuration handed to the embedded platform's initializer
///
/// Every field used to travel to the platform as an environment variable;
/// here each one is named and typed, and the whole struct is serialized to
/// JSON for the platform's C ABI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformConfig {
    /// Platform home (data) directory
    pub home: PathBuf,

    /// Address the HTTP plugins bind to
    #[serde(default = "default_listen_address")]
    pub listen_address: String,

    /// Free-form run mode tag reported through the platform's telemetry ping
    #[serde(default)]
    pub run_mode: Option<String>,

    /// Provisioning file applied by the platform on first launch
    #[serde(default)]
    pub automatic_provision_file: Option<PathBuf>,

    /// Lower the root log level to DEBUG
    #[serde(default)]
    pub debug: bool,

    /// Lower the database target's log level to DEBUG
    #[serde(default)]
    pub debug_database: bool,

    /// Startup wait ceiling for get-url, in milliseconds
    #[serde(default = "default_startup_timeout_ms")]
    pub startup_timeout_ms: u64,
}

fn default_listen_address() -> String {
    "127.0.0.1".to_string()
}

fn default_startup_timeout_ms() -> u64 {
    10_000
}

impl PlatformConfig {
    /// Create a configuration rooted at the given home directory
    pub fn new(home: impl Into<PathBuf>) -> Self {
        Self {
            home: home.into(),
            listen_address: default_listen_address(),
            run_mode: None,
            automatic_provision_file: None,
            debug: false,
            debug_database: false,
            startup_timeout_ms: default_startup_timeout_ms(),
        }
    }

    /// Parse a configuration from JSON bytes
    ///
    /// `home` is required; everything else takes its documented default.
    pub fn from_json(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    /// Serialize for the platform's C ABI
    pub fn to_json(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }

    /// Set the run mode tag
    pub fn with_run_mode(mut self, run_mode: impl Into<String>) -> Self {
        self.run_mode = Some(run_mode.into());
        self
    }

    /// Set the provisioning file applied on first launch
    pub fn with_provision_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.automatic_provision_file = Some(path.into());
        self
    }

    /// Enable debug logging
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Directory the log files live in
    pub fn log_root(&self) -> PathBuf {
        self.home.join("logs")
    }

    /// Startup wait ceiling as a duration
    pub fn startup_timeout(&self) -> Duration {
        Duration::from_millis(self.startup_timeout_ms)
    }

    /// Home directory as a path
    pub fn home(&self) -> &Path {
        &self.home
    }
}

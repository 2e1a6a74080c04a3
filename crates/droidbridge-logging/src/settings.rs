//! Logging bootstrap settings

use droidbridge_core::{PlatformConfig, Severity};
use std::path::PathBuf;

/// Default tag handed to the native sink
pub const DEFAULT_TAG: &str = "DroidBridge";

/// Default bound on rotated log files
pub const DEFAULT_MAX_LOG_FILES: usize = 5;

/// Settings for [`init_logging`](crate::init_logging)
///
/// Derived from the platform configuration; the log root is always
/// `<home>/logs`.
#[derive(Debug, Clone)]
pub struct LogSettings {
    /// Directory the rotating file output writes under
    pub log_root: PathBuf,
    /// Tag handed to the native sink
    pub tag: String,
    /// Lower the root level to DEBUG
    pub debug: bool,
    /// Lower the database target's level to DEBUG
    pub debug_database: bool,
    /// Bound on rotated log files
    pub max_log_files: usize,
}

impl LogSettings {
    /// Derive settings from the platform configuration
    pub fn from_config(config: &PlatformConfig) -> Self {
        Self {
            log_root: config.log_root(),
            tag: DEFAULT_TAG.to_string(),
            debug: config.debug,
            debug_database: config.debug_database,
            max_log_files: DEFAULT_MAX_LOG_FILES,
        }
    }

    /// Root level implied by the debug flag
    pub fn root_severity(&self) -> Severity {
        if self.debug {
            Severity::Debug
        } else {
            Severity::Info
        }
    }
}

#[cfg(test)]
#[path = "settings/settings_tests.rs"]
mod settings_tests;

//! Dynamic log level reloading support

use droidbridge_core::Severity;
use once_cell::sync::OnceCell;
use parking_lot::Mutex;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::reload;

/// Handle for dynamically reloading the root log level
///
/// The per-target overrides captured at init time are re-applied on every
/// reload; only the root level changes.
pub struct ReloadHandle {
    handle: Mutex<Option<reload::Handle<EnvFilter, tracing_subscriber::Registry>>>,
    target_directives: Mutex<String>,
}

impl ReloadHandle {
    /// Create an empty reload handle
    pub fn new() -> Self {
        Self {
            handle: Mutex::new(None),
            target_directives: Mutex::new(String::new()),
        }
    }

    /// Get the global reload handle
    pub fn global() -> &'static ReloadHandle {
        static INSTANCE: OnceCell<ReloadHandle> = OnceCell::new();
        INSTANCE.get_or_init(ReloadHandle::new)
    }

    /// Set the reload handle (called during initialization)
    pub fn set_handle(
        &self,
        handle: reload::Handle<EnvFilter, tracing_subscriber::Registry>,
        target_directives: impl Into<String>,
    ) {
        *self.handle.lock() = Some(handle);
        *self.target_directives.lock() = target_directives.into();
    }

    /// Reload the filter with a new root level
    pub fn reload_root(&self, severity: Severity) -> Result<(), String> {
        let guard = self.handle.lock();
        let handle = guard
            .as_ref()
            .ok_or_else(|| "Reload handle not initialized".to_string())?;

        let targets = self.target_directives.lock();
        let directives = if targets.is_empty() {
            severity.as_filter_str().to_string()
        } else {
            format!("{},{}", severity.as_filter_str(), targets)
        };
        drop(targets);

        let filter = EnvFilter::try_new(&directives)
            .map_err(|e| format!("Bad filter directives: {}", e))?;
        handle
            .reload(filter)
            .map_err(|e| format!("Failed to reload filter: {}", e))?;
        Ok(())
    }
}

impl Default for ReloadHandle {
    fn default() -> Self {
        Self::new()
    }
}

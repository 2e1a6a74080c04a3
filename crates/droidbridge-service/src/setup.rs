//! One-shot process setup

use droidbridge_core::{
    BridgeError, BridgeResult, PlatformConfig, ProcessBus, SetupGuard, SetupOutcome,
};
use droidbridge_logging::{LogSettings, init_logging};

/// Process-wide guard; setup runs once per process, reset only on restart
static SETUP_GUARD: SetupGuard = SetupGuard::new();

/// Run the one-shot process setup
///
/// Creates the log directory, initializes the logging stack, and registers
/// the platform's periodic maintenance jobs. Subsequent calls are logged
/// no-ops; a failed attempt leaves the guard unset so setup can be retried.
pub fn setup(config: &PlatformConfig, bus: &dyn ProcessBus) -> BridgeResult<SetupOutcome> {
    setup_with(&SETUP_GUARD, config, bus)
}

fn setup_with(
    guard: &SetupGuard,
    config: &PlatformConfig,
    bus: &dyn ProcessBus,
) -> BridgeResult<SetupOutcome> {
    let outcome = guard.initialize(|| {
        std::fs::create_dir_all(config.log_root()).map_err(|e| {
            BridgeError::InitializationFailed(format!(
                "create log root {}: {}",
                config.log_root().display(),
                e
            ))
        })?;

        init_logging(&LogSettings::from_config(config))?;

        tracing::info!("Running platform setup in {}", config.home.display());
        bus.schedule_maintenance()?;
        Ok::<(), BridgeError>(())
    })?;

    if outcome == SetupOutcome::AlreadyDone {
        tracing::debug!("Skipping platform setup");
    }

    Ok(outcome)
}

#[cfg(test)]
#[path = "setup/setup_tests.rs"]
mod setup_tests;

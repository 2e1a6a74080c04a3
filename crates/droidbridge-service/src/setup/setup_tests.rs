#![allow(non_snake_case)]

use super::*;
use droidbridge_core::ServerStatus;
use std::sync::atomic::{AtomicUsize, Ordering};

struct MaintenanceBus {
    scheduled: AtomicUsize,
    fail_maintenance: bool,
}

impl MaintenanceBus {
    fn new() -> Self {
        Self {
            scheduled: AtomicUsize::new(0),
            fail_maintenance: false,
        }
    }

    fn failing() -> Self {
        Self {
            scheduled: AtomicUsize::new(0),
            fail_maintenance: true,
        }
    }
}

impl ProcessBus for MaintenanceBus {
    fn start(&self) -> BridgeResult<()> {
        Ok(())
    }

    fn stop(&self) -> BridgeResult<()> {
        Ok(())
    }

    fn status(&self) -> BridgeResult<ServerStatus> {
        Err(BridgeError::NotRunning)
    }

    fn schedule_maintenance(&self) -> BridgeResult<()> {
        self.scheduled.fetch_add(1, Ordering::SeqCst);
        if self.fail_maintenance {
            return Err(BridgeError::PlatformError(
                "scheduler unavailable".to_string(),
            ));
        }
        Ok(())
    }
}

fn test_config(dir: &std::path::Path) -> PlatformConfig {
    PlatformConfig::new(dir)
}

#[test]
fn setup___first_call___creates_log_root_and_schedules_maintenance() {
    let home = tempfile::tempdir().unwrap();
    let guard = SetupGuard::new();
    let bus = MaintenanceBus::new();
    let config = test_config(home.path());

    let outcome = setup_with(&guard, &config, &bus).unwrap();

    assert_eq!(outcome, SetupOutcome::Performed);
    assert!(config.log_root().is_dir());
    assert_eq!(bus.scheduled.load(Ordering::SeqCst), 1);
}

#[test]
fn setup___second_call___is_skipped_noop() {
    let home = tempfile::tempdir().unwrap();
    let guard = SetupGuard::new();
    let bus = MaintenanceBus::new();
    let config = test_config(home.path());

    setup_with(&guard, &config, &bus).unwrap();
    let outcome = setup_with(&guard, &config, &bus).unwrap();

    assert_eq!(outcome, SetupOutcome::AlreadyDone);
    assert_eq!(bus.scheduled.load(Ordering::SeqCst), 1);
}

#[test]
fn setup___maintenance_failure___leaves_guard_unset_for_retry() {
    let home = tempfile::tempdir().unwrap();
    let guard = SetupGuard::new();
    let config = test_config(home.path());

    let failing = MaintenanceBus::failing();
    let result = setup_with(&guard, &config, &failing);
    assert!(matches!(result, Err(BridgeError::PlatformError(_))));
    assert!(!guard.is_done());

    let healthy = MaintenanceBus::new();
    let outcome = setup_with(&guard, &config, &healthy).unwrap();
    assert_eq!(outcome, SetupOutcome::Performed);
}

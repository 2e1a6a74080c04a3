#![allow(non_snake_case)]

use super::*;
use droidbridge_core::{BridgeError, ServerStatus};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Bus whose status answers are scripted up front
struct ScriptedBus {
    starts: AtomicUsize,
    stops: AtomicUsize,
    statuses: Mutex<Vec<BridgeResult<ServerStatus>>>,
    status_calls: AtomicUsize,
}

impl ScriptedBus {
    fn new(statuses: Vec<BridgeResult<ServerStatus>>) -> Self {
        Self {
            starts: AtomicUsize::new(0),
            stops: AtomicUsize::new(0),
            statuses: Mutex::new(statuses),
            status_calls: AtomicUsize::new(0),
        }
    }

    fn serving_immediately(port: u16) -> Self {
        Self::new(vec![Ok(ServerStatus::new("127.0.0.1", 1, port))])
    }
}

impl ProcessBus for ScriptedBus {
    fn start(&self) -> BridgeResult<()> {
        self.starts.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn stop(&self) -> BridgeResult<()> {
        self.stops.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn status(&self) -> BridgeResult<ServerStatus> {
        self.status_calls.fetch_add(1, Ordering::SeqCst);
        let mut statuses = self.statuses.lock().unwrap();
        if statuses.len() > 1 {
            statuses.remove(0)
        } else {
            // Last scripted answer repeats forever
            match &statuses[0] {
                Ok(status) => Ok(status.clone()),
                Err(BridgeError::NotRunning) => Err(BridgeError::NotRunning),
                Err(e) => Err(BridgeError::Internal(e.to_string())),
            }
        }
    }

    fn schedule_maintenance(&self) -> BridgeResult<()> {
        Ok(())
    }
}

// ServerService

#[test]
fn ServerService___start___delegates_to_bus() {
    let service = ServerService::new(ScriptedBus::serving_immediately(8080));

    service.start().unwrap();

    assert_eq!(service.bus().starts.load(Ordering::SeqCst), 1);
}

#[test]
fn ServerService___url___resolves_from_serving_status() {
    let service = ServerService::new(ScriptedBus::serving_immediately(8080));

    let url = service.url().unwrap();

    assert_eq!(url, "http://127.0.0.1:8080/");
}

#[test]
fn ServerService___url___waits_through_not_running() {
    let bus = ScriptedBus::new(vec![
        Err(BridgeError::NotRunning),
        Err(BridgeError::NotRunning),
        Ok(ServerStatus::new("127.0.0.1", 1234, 8080)),
    ]);
    let service = ServerService::new(bus).with_startup_timeout(Duration::from_secs(10));

    let url = service.url().unwrap();

    assert_eq!(url, "http://127.0.0.1:8080/");
    assert_eq!(service.bus().status_calls.load(Ordering::SeqCst), 3);
}

#[test]
fn ServerService___url_twice___second_call_uses_cache() {
    let service = ServerService::new(ScriptedBus::serving_immediately(8080));

    let first = service.url().unwrap();
    let second = service.url().unwrap();

    assert_eq!(first, second);
    assert_eq!(service.bus().status_calls.load(Ordering::SeqCst), 1);
}

#[test]
fn ServerService___url_on_dead_bus___surfaces_not_running() {
    let bus = ScriptedBus::new(vec![Err(BridgeError::NotRunning)]);
    let service = ServerService::new(bus).with_startup_timeout(Duration::from_millis(300));

    let result = service.url();

    assert!(matches!(result, Err(BridgeError::NotRunning)));
}

#[test]
fn ServerService___stop___delegates_to_bus() {
    let service = ServerService::new(ScriptedBus::serving_immediately(8080));

    service.stop().unwrap();

    assert_eq!(service.bus().stops.load(Ordering::SeqCst), 1);
}

// WorkerService

#[test]
fn WorkerService___start_and_stop___delegate_to_bus() {
    let service = WorkerService::new(ScriptedBus::serving_immediately(0));

    service.start().unwrap();
    service.stop().unwrap();

    assert_eq!(service.bus().starts.load(Ordering::SeqCst), 1);
    assert_eq!(service.bus().stops.load(Ordering::SeqCst), 1);
}

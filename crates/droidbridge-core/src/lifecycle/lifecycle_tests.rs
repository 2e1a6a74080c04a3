#![allow(non_snake_case)]

use super::*;
use std::sync::atomic::{AtomicUsize, Ordering};

#[test]
fn SetupGuard___first_call___runs_closure() {
    let guard = SetupGuard::new();
    let calls = AtomicUsize::new(0);

    let outcome = guard
        .initialize(|| -> Result<(), ()> {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        })
        .unwrap();

    assert_eq!(outcome, SetupOutcome::Performed);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(guard.is_done());
}

#[test]
fn SetupGuard___second_call___skips_closure() {
    let guard = SetupGuard::new();
    let calls = AtomicUsize::new(0);

    for _ in 0..3 {
        guard
            .initialize(|| -> Result<(), ()> {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok(())
            })
            .unwrap();
    }

    let outcome = guard.initialize(|| -> Result<(), ()> { Ok(()) }).unwrap();

    assert_eq!(outcome, SetupOutcome::AlreadyDone);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn SetupGuard___failed_closure___leaves_guard_unset() {
    let guard = SetupGuard::new();

    let result = guard.initialize(|| Err::<(), &str>("setup failed"));

    assert_eq!(result, Err("setup failed"));
    assert!(!guard.is_done());
}

#[test]
fn SetupGuard___failure_then_success___second_attempt_runs() {
    let guard = SetupGuard::new();

    let _ = guard.initialize(|| Err::<(), &str>("first attempt"));
    let outcome = guard.initialize(|| -> Result<(), &str> { Ok(()) }).unwrap();

    assert_eq!(outcome, SetupOutcome::Performed);
    assert!(guard.is_done());
}

#[test]
fn SetupGuard___concurrent_calls___exactly_one_runs() {
    use std::sync::Arc;

    let guard = Arc::new(SetupGuard::new());
    let calls = Arc::new(AtomicUsize::new(0));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let guard = Arc::clone(&guard);
            let calls = Arc::clone(&calls);
            std::thread::spawn(move || {
                guard
                    .initialize(|| -> Result<(), ()> {
                        calls.fetch_add(1, Ordering::SeqCst);
                        Ok(())
                    })
                    .unwrap()
            })
        })
        .collect();

    let outcomes: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(
        outcomes
            .iter()
            .filter(|o| **o == SetupOutcome::Performed)
            .count(),
        1
    );
}

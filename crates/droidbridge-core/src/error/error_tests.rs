#![allow(non_snake_case)]

use super::*;

// Error codes

#[test]
fn BridgeError___error_code___stable_per_variant() {
    assert_eq!(BridgeError::NotRunning.error_code(), 1);
    assert_eq!(
        BridgeError::InitializationFailed("x".to_string()).error_code(),
        3
    );
    assert_eq!(BridgeError::PlatformError("x".to_string()).error_code(), 7);
}

#[test]
fn BridgeError___from_code___roundtrips_not_running() {
    let err = BridgeError::from_code(1, "ignored".to_string());

    assert!(matches!(err, BridgeError::NotRunning));
}

#[test]
fn BridgeError___from_code___unknown_code_becomes_internal() {
    let err = BridgeError::from_code(99, "boom".to_string());

    assert!(matches!(err, BridgeError::Internal(msg) if msg == "boom"));
}

// Retryability

#[test]
fn BridgeError___not_running___is_retryable() {
    assert!(BridgeError::NotRunning.is_retryable());
}

#[test]
fn BridgeError___other_variants___not_retryable() {
    let errors = [
        BridgeError::InitializationFailed("x".to_string()),
        BridgeError::ConfigError("x".to_string()),
        BridgeError::PlatformError("x".to_string()),
        BridgeError::Internal("x".to_string()),
    ];

    for err in errors {
        assert!(!err.is_retryable(), "{:?} should not be retryable", err);
    }
}

// Display

#[test]
fn BridgeError___display___includes_message() {
    let err = BridgeError::PlatformError("bus start returned -1".to_string());

    assert_eq!(err.to_string(), "platform error: bus start returned -1");
}

#[test]
fn BridgeError___from_serde_error___becomes_serialization_error() {
    let serde_err = serde_json::from_str::<serde_json::Value>("{not json")
        .expect_err("parse should fail");

    let err = BridgeError::from(serde_err);

    assert!(matches!(err, BridgeError::SerializationError(_)));
}

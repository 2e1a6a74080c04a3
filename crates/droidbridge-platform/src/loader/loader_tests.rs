#![allow(non_snake_case)]

use super::*;

// FfiServerStatus marshaling

#[test]
fn FfiServerStatus___to_status___reads_nul_terminated_host() {
    let mut raw = FfiServerStatus::zeroed();
    raw.pid = 1234;
    raw.port = 8080;
    raw.host[..9].copy_from_slice(b"127.0.0.1");

    let status = raw.to_status();

    assert_eq!(status, ServerStatus::new("127.0.0.1", 1234, 8080));
}

#[test]
fn FfiServerStatus___to_status___empty_host_stays_empty() {
    let raw = FfiServerStatus::zeroed();

    let status = raw.to_status();

    assert_eq!(status.host, "");
    assert_eq!(status.pid, 0);
    assert_eq!(status.port, 0);
}

#[test]
fn FfiServerStatus___to_status___full_buffer_without_nul_is_handled() {
    let mut raw = FfiServerStatus::zeroed();
    raw.host = [b'a'; 48];

    let status = raw.to_status();

    assert_eq!(status.host.len(), 48);
}

#[test]
fn FfiServerStatus___to_status___invalid_utf8_is_replaced() {
    let mut raw = FfiServerStatus::zeroed();
    raw.host[0] = 0xFF;
    raw.host[1] = b'x';

    let status = raw.to_status();

    assert!(status.host.contains('x'));
}

// Library loading failures

#[test]
fn load_platform___missing_library___returns_library_load_error() {
    let config = PlatformConfig::new("/data/platform");

    let result = load_platform("/nonexistent/libplatform.so", &config, BusProfile::Server);

    assert!(matches!(result, Err(LoadError::LibraryLoad(_))));
}

#[test]
fn LoadError___library_load___converts_to_initialization_failed() {
    let err = LoadError::LibraryLoad("no such file".to_string());

    let bridge_err = BridgeError::from(err);

    assert!(matches!(bridge_err, BridgeError::InitializationFailed(_)));
}

#![allow(non_snake_case)]

use super::*;

#[test]
fn JniError___bridge_errors___keep_their_own_codes() {
    let err = JniError::Bridge(BridgeError::NotRunning);

    assert_eq!(err.code(), 1);
}

#[test]
fn JniError___string_conversion___uses_jni_range() {
    let err = JniError::StringConversion("bad utf-16".to_string());

    assert_eq!(err.code(), 20);
}

#[test]
fn JniError___invalid_handle___uses_jni_range() {
    let err = JniError::InvalidHandle(7);

    assert_eq!(err.code(), 21);
    assert_eq!(err.to_string(), "invalid handle: 7");
}

#[test]
fn JniError___invalid_config_load___maps_to_config_error_code() {
    let err = JniError::Load(LoadError::InvalidConfig("home is required".to_string()));

    assert_eq!(err.code(), 5);
}

#[test]
fn JniError___library_load___maps_to_initialization_code() {
    let err = JniError::Load(LoadError::LibraryLoad("missing".to_string()));

    assert_eq!(err.code(), 3);
}

#[test]
fn JniError___bridge_display___is_transparent() {
    let err = JniError::Bridge(BridgeError::NotRunning);

    assert_eq!(err.to_string(), "server is not running");
}

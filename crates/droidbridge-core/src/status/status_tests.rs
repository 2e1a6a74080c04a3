#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

#[test_case(8080, "http://127.0.0.1:8080/")]
#[test_case(80, "http://127.0.0.1:80/")]
#[test_case(65535, "http://127.0.0.1:65535/")]
fn ServerStatus___base_url___built_from_port(port: u16, expected: &str) {
    let status = ServerStatus::new("127.0.0.1", 1234, port);

    assert_eq!(status.base_url(), expected);
}

#[test]
fn ServerStatus___base_url___ignores_reported_host() {
    let status = ServerStatus::new("0.0.0.0", 1, 8080);

    assert_eq!(status.base_url(), "http://127.0.0.1:8080/");
}

#[test]
fn ServerStatus___display___shows_endpoint_and_pid() {
    let status = ServerStatus::new("127.0.0.1", 42, 8080);

    assert_eq!(status.to_string(), "127.0.0.1:8080 (pid 42)");
}

#[test]
fn ServerStatus___json___roundtrips() {
    let status = ServerStatus::new("127.0.0.1", 1234, 8080);

    let json = serde_json::to_string(&status).unwrap();
    let back: ServerStatus = serde_json::from_str(&json).unwrap();

    assert_eq!(back, status);
}

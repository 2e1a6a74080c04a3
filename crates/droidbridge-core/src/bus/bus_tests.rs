#![allow(non_snake_case)]

use super::*;

#[test]
fn BusProfile___server___enables_http_and_zip_content() {
    let plugins = BusProfile::Server.plugins();

    assert_eq!(plugins, ["http-server", "zip-content-server"]);
}

#[test]
fn BusProfile___worker___enables_background_services_only() {
    let plugins = BusProfile::Worker.plugins();

    assert_eq!(plugins, ["background-services"]);
}

#[test]
fn BusProfile___as_u8___roundtrips_through_from_u8() {
    for profile in [BusProfile::Server, BusProfile::Worker] {
        assert_eq!(BusProfile::from_u8(profile.as_u8()), Some(profile));
    }
}

#[test]
fn BusProfile___from_u8___rejects_unknown_values() {
    assert_eq!(BusProfile::from_u8(2), None);
    assert_eq!(BusProfile::from_u8(255), None);
}

#[test]
fn BusProfile___display___shows_profile_name() {
    assert_eq!(BusProfile::Server.to_string(), "server");
    assert_eq!(BusProfile::Worker.to_string(), "worker");
}

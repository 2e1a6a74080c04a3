#![allow(non_snake_case)]

use super::*;

#[test]
fn LogSettings___from_config___derives_log_root_under_home() {
    let config = PlatformConfig::new("/data/platform");

    let settings = LogSettings::from_config(&config);

    assert_eq!(settings.log_root, PathBuf::from("/data/platform/logs"));
    assert_eq!(settings.tag, DEFAULT_TAG);
    assert_eq!(settings.max_log_files, DEFAULT_MAX_LOG_FILES);
}

#[test]
fn LogSettings___root_severity___info_by_default() {
    let settings = LogSettings::from_config(&PlatformConfig::new("/d"));

    assert_eq!(settings.root_severity(), Severity::Info);
}

#[test]
fn LogSettings___root_severity___debug_when_flag_set() {
    let config = PlatformConfig::new("/d").with_debug(true);

    let settings = LogSettings::from_config(&config);

    assert_eq!(settings.root_severity(), Severity::Debug);
}

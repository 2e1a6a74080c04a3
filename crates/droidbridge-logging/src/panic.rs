//! Panic routing to the native log

use crate::bridge::LogBridge;
use crate::record::LogRecord;
use droidbridge_core::Severity;
use once_cell::sync::OnceCell;

static HOOK_INSTALLED: OnceCell<()> = OnceCell::new();

/// Install a panic hook that surfaces panics at Assert priority
///
/// The previously installed hook still runs afterwards. Installing twice is
/// a no-op; the first tag wins.
pub fn install_panic_hook(tag: &str) {
    let tag = tag.to_string();
    HOOK_INSTALLED.get_or_init(move || {
        let bridge = LogBridge::new(tag);
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let record = LogRecord::new("panic", Severity::Critical, info.to_string());
            bridge.emit(&record);
            previous(info);
        }));
    });
}

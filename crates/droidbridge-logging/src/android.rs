//! Native Android sink

use crate::sink::{LogSink, SinkError, SinkResult};
use droidbridge_core::LogPriority;
use std::ffi::CString;
use std::os::raw::c_int;

/// Sink dispatching to the Android log via liblog
///
/// Lines written here are viewable with `adb logcat` and filterable by the
/// translated priority.
#[derive(Debug, Default)]
pub struct AndroidSink;

impl LogSink for AndroidSink {
    fn write(&self, priority: LogPriority, tag: &str, message: &str) -> SinkResult {
        let tag = CString::new(tag).map_err(|e| SinkError::Write(e.to_string()))?;
        let text = CString::new(message).map_err(|e| SinkError::Write(e.to_string()))?;

        // SAFETY: both pointers are valid NUL-terminated strings for the
        // duration of the call.
        let rc = unsafe {
            android_log_sys::__android_log_write(
                priority.as_u8() as c_int,
                tag.as_ptr(),
                text.as_ptr(),
            )
        };
        if rc < 0 {
            return Err(SinkError::Write(format!(
                "__android_log_write returned {}",
                rc
            )));
        }
        Ok(())
    }
}

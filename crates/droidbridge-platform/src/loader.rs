//! Dynamic library loading for the embedded platform.

use crate::error::LoadError;
use droidbridge_core::{BridgeError, BridgeResult, BusProfile, PlatformConfig, ProcessBus, ServerStatus};
use libloading::{Library, Symbol};
use std::ffi::c_void;

/// Status codes returned by `platform_bus_status`
const STATUS_SERVING: i32 = 0;
const STATUS_NOT_RUNNING: i32 = 1;

/// Serving-state snapshot as laid out by the platform's C ABI
#[repr(C)]
struct FfiServerStatus {
    /// Process id of the serving process
    pid: u32,
    /// Listening port of the HTTP plugin
    port: u16,
    /// Bound address, NUL-terminated UTF-8
    host: [u8; 48],
}

impl FfiServerStatus {
    fn zeroed() -> Self {
        Self {
            pid: 0,
            port: 0,
            host: [0; 48],
        }
    }

    /// Convert the raw struct into the owned snapshot
    fn to_status(&self) -> ServerStatus {
        let len = self.host.iter().position(|b| *b == 0).unwrap_or(self.host.len());
        let host = String::from_utf8_lossy(&self.host[..len]).into_owned();
        ServerStatus::new(host, self.pid, self.port)
    }
}

// Type signatures for the platform's FFI functions
type BusCreateFn = unsafe extern "C" fn(
    config_json: *const u8,
    config_len: usize,
    profile: u8,
) -> *mut c_void;
type BusStartFn = unsafe extern "C" fn(bus: *mut c_void) -> i32;
type BusStopFn = unsafe extern "C" fn(bus: *mut c_void) -> i32;
type BusStatusFn = unsafe extern "C" fn(bus: *mut c_void, out: *mut FfiServerStatus) -> i32;
type BusScheduleMaintenanceFn = unsafe extern "C" fn(bus: *mut c_void) -> i32;
type BusDestroyFn = unsafe extern "C" fn(bus: *mut c_void);

/// Function pointers resolved from the platform library
struct PlatformFfi {
    start: BusStartFn,
    stop: BusStopFn,
    status: BusStatusFn,
    schedule_maintenance: BusScheduleMaintenanceFn,
    destroy: BusDestroyFn,
}

/// A loaded platform bus, keeping the library alive while in use
///
/// Implements [`ProcessBus`] by forwarding every call through the resolved
/// function pointers. Dropping the value destroys the bus before the library
/// is unloaded.
pub struct LoadedPlatform {
    /// The loaded library (must outlive every call through `ffi`)
    _library: Library,

    /// Opaque bus handle returned by `platform_bus_create`
    bus: *mut c_void,

    /// Resolved function pointers
    ffi: PlatformFfi,

    /// Profile this bus was created with
    profile: BusProfile,
}

// SAFETY: the platform ABI contract requires every bus function to be
// callable from any thread; the handle itself is never mutated on this side.
unsafe impl Send for LoadedPlatform {}
unsafe impl Sync for LoadedPlatform {}

impl LoadedPlatform {
    /// Profile this bus was created with
    pub fn profile(&self) -> BusProfile {
        self.profile
    }
}

impl ProcessBus for LoadedPlatform {
    fn start(&self) -> BridgeResult<()> {
        // SAFETY: bus is the valid handle returned by platform_bus_create
        let rc = unsafe { (self.ffi.start)(self.bus) };
        if rc != 0 {
            return Err(BridgeError::PlatformError(format!(
                "bus start returned {}",
                rc
            )));
        }
        Ok(())
    }

    fn stop(&self) -> BridgeResult<()> {
        // SAFETY: bus is the valid handle returned by platform_bus_create
        let rc = unsafe { (self.ffi.stop)(self.bus) };
        if rc != 0 {
            return Err(BridgeError::ShutdownFailed(format!(
                "bus stop returned {}",
                rc
            )));
        }
        Ok(())
    }

    fn status(&self) -> BridgeResult<ServerStatus> {
        let mut raw = FfiServerStatus::zeroed();
        // SAFETY: bus is valid and `raw` lives across the call
        let rc = unsafe { (self.ffi.status)(self.bus, &mut raw) };
        match rc {
            STATUS_SERVING => Ok(raw.to_status()),
            STATUS_NOT_RUNNING => Err(BridgeError::NotRunning),
            other => Err(BridgeError::PlatformError(format!(
                "bus status returned {}",
                other
            ))),
        }
    }

    fn schedule_maintenance(&self) -> BridgeResult<()> {
        // SAFETY: bus is the valid handle returned by platform_bus_create
        let rc = unsafe { (self.ffi.schedule_maintenance)(self.bus) };
        if rc != 0 {
            return Err(BridgeError::PlatformError(format!(
                "schedule_maintenance returned {}",
                rc
            )));
        }
        Ok(())
    }
}

impl Drop for LoadedPlatform {
    fn drop(&mut self) {
        // SAFETY: bus is valid and not used after this point
        unsafe { (self.ffi.destroy)(self.bus) };
    }
}

/// Load the platform library and create a bus for the given profile.
///
/// # Parameters
/// - `library_path`: Path to the platform shared library
/// - `config`: Typed configuration serialized to the platform initializer
/// - `profile`: Plugin set the bus enables
pub fn load_platform(
    library_path: &str,
    config: &PlatformConfig,
    profile: BusProfile,
) -> Result<LoadedPlatform, LoadError> {
    let config_json = config
        .to_json()
        .map_err(|e| LoadError::InvalidConfig(e.to_string()))?;

    // SAFETY: loading a shared library; the caller is responsible for the
    // path being valid and trusted.
    let library = unsafe { Library::new(library_path) }
        .map_err(|e| LoadError::LibraryLoad(format!("{}: {}", library_path, e)))?;

    // SAFETY: resolving function pointers from the loaded library.
    let create_fn: Symbol<BusCreateFn> = unsafe { library.get(b"platform_bus_create\0") }
        .map_err(|e| LoadError::SymbolNotFound(format!("platform_bus_create: {}", e)))?;

    let start_fn: Symbol<BusStartFn> = unsafe { library.get(b"platform_bus_start\0") }
        .map_err(|e| LoadError::SymbolNotFound(format!("platform_bus_start: {}", e)))?;

    let stop_fn: Symbol<BusStopFn> = unsafe { library.get(b"platform_bus_stop\0") }
        .map_err(|e| LoadError::SymbolNotFound(format!("platform_bus_stop: {}", e)))?;

    let status_fn: Symbol<BusStatusFn> = unsafe { library.get(b"platform_bus_status\0") }
        .map_err(|e| LoadError::SymbolNotFound(format!("platform_bus_status: {}", e)))?;

    let schedule_fn: Symbol<BusScheduleMaintenanceFn> =
        unsafe { library.get(b"platform_bus_schedule_maintenance\0") }.map_err(|e| {
            LoadError::SymbolNotFound(format!("platform_bus_schedule_maintenance: {}", e))
        })?;

    let destroy_fn: Symbol<BusDestroyFn> = unsafe { library.get(b"platform_bus_destroy\0") }
        .map_err(|e| LoadError::SymbolNotFound(format!("platform_bus_destroy: {}", e)))?;

    // Store function pointers (they must outlive the Symbol borrows)
    let ffi = PlatformFfi {
        start: *start_fn,
        stop: *stop_fn,
        status: *status_fn,
        schedule_maintenance: *schedule_fn,
        destroy: *destroy_fn,
    };

    // SAFETY: config_json is valid for its length; the platform copies what
    // it needs before returning.
    let bus = unsafe { create_fn(config_json.as_ptr(), config_json.len(), profile.as_u8()) };
    if bus.is_null() {
        return Err(LoadError::CreateFailed(
            "platform_bus_create returned null (check platform logs for details)".to_string(),
        ));
    }

    tracing::debug!("Loaded platform {} bus from {}", profile, library_path);

    Ok(LoadedPlatform {
        _library: library,
        bus,
        ffi,
        profile,
    })
}

#[cfg(test)]
#[path = "loader/loader_tests.rs"]
mod loader_tests;

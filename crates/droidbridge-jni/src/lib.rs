//! droidbridge-jni - JNI bindings for the Android host
//!
//! This crate exposes the bridge lifecycle to the Android host classes:
//!
//! - `org.droidbridge.ServerBridge` - the UI-facing server bus
//!   (create / start / get-url / stop / destroy)
//! - `org.droidbridge.WorkerBridge` - the background worker bus
//!   (create / start / stop / destroy)
//!
//! # Architecture
//!
//! `nativeCreate` parses the typed configuration, binds the platform
//! library with the matching bus profile, runs the one-shot process setup
//! (log directories, logging stack, maintenance jobs), and registers the
//! service under a numeric handle. Every other entry point resolves that
//! handle and forwards to the service.
//!
//! Failures surface as a thrown `org.droidbridge.BridgeException`; panics
//! are caught at the boundary and surface the same way, never as an unwind
//! into the JVM.

mod error;

use droidbridge_core::{BridgeError, BusProfile, PlatformConfig, Severity};
#[cfg(target_os = "android")]
use droidbridge_logging::AndroidSink;
#[cfg(not(target_os = "android"))]
use droidbridge_logging::StderrSink;
use droidbridge_logging::{ReloadHandle, SinkRegistry};
use droidbridge_platform::{LoadedPlatform, load_platform};
use droidbridge_service::{ServerService, WorkerService};
use error::{JniError, PANIC_CODE};
use jni::JNIEnv;
use jni::objects::{JByteArray, JClass, JString};
use jni::sys::{jint, jlong, jstring};
use once_cell::sync::OnceCell;
use std::collections::HashMap;
use std::panic::AssertUnwindSafe;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

// Global registries of live services
// Handle IDs are shared across both maps so a server handle can never be
// mistaken for a worker handle.
static SERVER_SERVICES: Mutex<Option<HashMap<u64, Arc<ServerService<LoadedPlatform>>>>> =
    Mutex::new(None);
static WORKER_SERVICES: Mutex<Option<HashMap<u64, Arc<WorkerService<LoadedPlatform>>>>> =
    Mutex::new(None);
static NEXT_HANDLE: AtomicU64 = AtomicU64::new(1);

fn next_handle() -> u64 {
    NEXT_HANDLE.fetch_add(1, Ordering::SeqCst)
}

fn register_server(service: ServerService<LoadedPlatform>) -> u64 {
    let handle = next_handle();
    let mut guard = SERVER_SERVICES.lock().unwrap();
    guard
        .get_or_insert_with(HashMap::new)
        .insert(handle, Arc::new(service));
    handle
}

fn register_worker(service: WorkerService<LoadedPlatform>) -> u64 {
    let handle = next_handle();
    let mut guard = WORKER_SERVICES.lock().unwrap();
    guard
        .get_or_insert_with(HashMap::new)
        .insert(handle, Arc::new(service));
    handle
}

/// Get a service reference (Arc-cloned so the mutex is not held during calls)
fn get_server(handle: u64) -> Option<Arc<ServerService<LoadedPlatform>>> {
    let guard = SERVER_SERVICES.lock().unwrap();
    guard.as_ref().and_then(|map| map.get(&handle).map(Arc::clone))
}

fn get_worker(handle: u64) -> Option<Arc<WorkerService<LoadedPlatform>>> {
    let guard = WORKER_SERVICES.lock().unwrap();
    guard.as_ref().and_then(|map| map.get(&handle).map(Arc::clone))
}

fn remove_server(handle: u64) -> Option<Arc<ServerService<LoadedPlatform>>> {
    let mut guard = SERVER_SERVICES.lock().unwrap();
    guard.as_mut().and_then(|map| map.remove(&handle))
}

fn remove_worker(handle: u64) -> Option<Arc<WorkerService<LoadedPlatform>>> {
    let mut guard = WORKER_SERVICES.lock().unwrap();
    guard.as_mut().and_then(|map| map.remove(&handle))
}

/// Register the native sink once per process
///
/// The sink object is constructed here and passed in directly; nothing is
/// resolved by name.
fn ensure_native_sink() {
    static SINK_REGISTERED: OnceCell<()> = OnceCell::new();
    SINK_REGISTERED.get_or_init(|| {
        #[cfg(target_os = "android")]
        SinkRegistry::global().set_sink(Some(Arc::new(AndroidSink)));
        #[cfg(not(target_os = "android"))]
        SinkRegistry::global().set_sink(Some(Arc::new(StderrSink)));
    });
}

fn throw_bridge_exception(env: &mut JNIEnv, code: u32, message: &str) {
    // An exception may already be pending (e.g. from a failed conversion);
    // throwing again would abort, so clear it first.
    let _ = env.exception_clear();
    let _ = env.throw_new(
        "org/droidbridge/BridgeException",
        format!("[{}] {}", code, message),
    );
}

fn read_config(env: &mut JNIEnv, config_json: &JByteArray) -> Result<PlatformConfig, JniError> {
    if config_json.is_null() {
        return Err(JniError::Bridge(BridgeError::ConfigError(
            "configuration with a home directory is required".to_string(),
        )));
    }
    let bytes = env
        .convert_byte_array(config_json)
        .map_err(|e| JniError::ArrayAccess(e.to_string()))?;
    PlatformConfig::from_json(&bytes)
        .map_err(|e| JniError::Bridge(BridgeError::ConfigError(e.to_string())))
}

fn read_string(env: &mut JNIEnv, value: &JString) -> Result<String, JniError> {
    Ok(env
        .get_string(value)
        .map_err(|e| JniError::StringConversion(e.to_string()))?
        .into())
}

// ============================================================================
// ServerBridge native methods
// ============================================================================

/// Create the server service.
///
/// Binds the platform library with the server profile, runs the one-shot
/// process setup, and returns a handle for the other entry points.
#[unsafe(no_mangle)]
pub extern "system" fn Java_org_droidbridge_ServerBridge_nativeCreate<'local>(
    mut env: JNIEnv<'local>,
    _class: JClass<'local>,
    library_path: JString<'local>,
    config_json: JByteArray<'local>,
) -> jlong {
    match std::panic::catch_unwind(AssertUnwindSafe(|| {
        create_server_impl(&mut env, library_path, config_json)
    })) {
        Ok(Ok(handle)) => handle as jlong,
        Ok(Err(e)) => {
            throw_bridge_exception(&mut env, e.code(), &e.to_string());
            0
        }
        Err(_) => {
            throw_bridge_exception(&mut env, PANIC_CODE, "panic in nativeCreate");
            0
        }
    }
}

fn create_server_impl(
    env: &mut JNIEnv,
    library_path: JString,
    config_json: JByteArray,
) -> Result<u64, JniError> {
    let path = read_string(env, &library_path)?;
    let config = read_config(env, &config_json)?;

    ensure_native_sink();

    let platform = load_platform(&path, &config, BusProfile::Server)?;
    droidbridge_service::setup(&config, &platform)?;

    let service = ServerService::new(platform).with_startup_timeout(config.startup_timeout());
    Ok(register_server(service))
}

/// Start the server bus.
#[unsafe(no_mangle)]
pub extern "system" fn Java_org_droidbridge_ServerBridge_nativeStart<'local>(
    mut env: JNIEnv<'local>,
    _class: JClass<'local>,
    handle: jlong,
) {
    let result = std::panic::catch_unwind(AssertUnwindSafe(|| {
        let service = get_server(handle as u64).ok_or(JniError::InvalidHandle(handle as u64))?;
        service.start().map_err(JniError::from)
    }));
    report_unit_result(&mut env, result, "nativeStart");
}

/// Resolve the serving URL, waiting up to `timeout_ms`.
///
/// A non-positive timeout uses the configured default. Throws
/// BridgeException once the deadline elapses without the bus serving.
#[unsafe(no_mangle)]
pub extern "system" fn Java_org_droidbridge_ServerBridge_nativeGetUrl<'local>(
    mut env: JNIEnv<'local>,
    _class: JClass<'local>,
    handle: jlong,
    timeout_ms: jlong,
) -> jstring {
    let result = std::panic::catch_unwind(AssertUnwindSafe(|| {
        let service = get_server(handle as u64).ok_or(JniError::InvalidHandle(handle as u64))?;
        let url = if timeout_ms > 0 {
            service.url_with_timeout(Duration::from_millis(timeout_ms as u64))
        } else {
            service.url()
        }?;
        Ok::<String, JniError>(url)
    }));

    match result {
        Ok(Ok(url)) => match env.new_string(&url) {
            Ok(jstr) => jstr.into_raw(),
            Err(e) => {
                throw_bridge_exception(&mut env, 20, &e.to_string());
                std::ptr::null_mut()
            }
        },
        Ok(Err(e)) => {
            throw_bridge_exception(&mut env, e.code(), &e.to_string());
            std::ptr::null_mut()
        }
        Err(_) => {
            throw_bridge_exception(&mut env, PANIC_CODE, "panic in nativeGetUrl");
            std::ptr::null_mut()
        }
    }
}

/// Stop the server bus.
#[unsafe(no_mangle)]
pub extern "system" fn Java_org_droidbridge_ServerBridge_nativeStop<'local>(
    mut env: JNIEnv<'local>,
    _class: JClass<'local>,
    handle: jlong,
) {
    let result = std::panic::catch_unwind(AssertUnwindSafe(|| {
        let service = get_server(handle as u64).ok_or(JniError::InvalidHandle(handle as u64))?;
        service.stop().map_err(JniError::from)
    }));
    report_unit_result(&mut env, result, "nativeStop");
}

/// Drop the server service.
///
/// Stops nothing by itself; the host is expected to call nativeStop first.
#[unsafe(no_mangle)]
pub extern "system" fn Java_org_droidbridge_ServerBridge_nativeDestroy<'local>(
    _env: JNIEnv<'local>,
    _class: JClass<'local>,
    handle: jlong,
) {
    let _ = remove_server(handle as u64);
}

/// Change the minimum severity forwarded to the native sink.
#[unsafe(no_mangle)]
pub extern "system" fn Java_org_droidbridge_ServerBridge_nativeSetLogLevel<'local>(
    _env: JNIEnv<'local>,
    _class: JClass<'local>,
    _handle: jlong,
    level: jint,
) {
    let severity = Severity::from_u8(level.clamp(0, u8::MAX as jint) as u8);
    SinkRegistry::global().set_min_severity(severity);
    if let Err(e) = ReloadHandle::global().reload_root(severity) {
        tracing::warn!("Failed to reload tracing filter: {}", e);
    }
}

// ============================================================================
// WorkerBridge native methods
// ============================================================================

/// Create the worker service.
#[unsafe(no_mangle)]
pub extern "system" fn Java_org_droidbridge_WorkerBridge_nativeCreate<'local>(
    mut env: JNIEnv<'local>,
    _class: JClass<'local>,
    library_path: JString<'local>,
    config_json: JByteArray<'local>,
) -> jlong {
    match std::panic::catch_unwind(AssertUnwindSafe(|| {
        create_worker_impl(&mut env, library_path, config_json)
    })) {
        Ok(Ok(handle)) => handle as jlong,
        Ok(Err(e)) => {
            throw_bridge_exception(&mut env, e.code(), &e.to_string());
            0
        }
        Err(_) => {
            throw_bridge_exception(&mut env, PANIC_CODE, "panic in nativeCreate");
            0
        }
    }
}

fn create_worker_impl(
    env: &mut JNIEnv,
    library_path: JString,
    config_json: JByteArray,
) -> Result<u64, JniError> {
    let path = read_string(env, &library_path)?;
    let config = read_config(env, &config_json)?;

    ensure_native_sink();

    let platform = load_platform(&path, &config, BusProfile::Worker)?;
    droidbridge_service::setup(&config, &platform)?;

    Ok(register_worker(WorkerService::new(platform)))
}

/// Start the worker bus.
#[unsafe(no_mangle)]
pub extern "system" fn Java_org_droidbridge_WorkerBridge_nativeStart<'local>(
    mut env: JNIEnv<'local>,
    _class: JClass<'local>,
    handle: jlong,
) {
    let result = std::panic::catch_unwind(AssertUnwindSafe(|| {
        let service = get_worker(handle as u64).ok_or(JniError::InvalidHandle(handle as u64))?;
        service.start().map_err(JniError::from)
    }));
    report_unit_result(&mut env, result, "nativeStart");
}

/// Stop the worker bus.
#[unsafe(no_mangle)]
pub extern "system" fn Java_org_droidbridge_WorkerBridge_nativeStop<'local>(
    mut env: JNIEnv<'local>,
    _class: JClass<'local>,
    handle: jlong,
) {
    let result = std::panic::catch_unwind(AssertUnwindSafe(|| {
        let service = get_worker(handle as u64).ok_or(JniError::InvalidHandle(handle as u64))?;
        service.stop().map_err(JniError::from)
    }));
    report_unit_result(&mut env, result, "nativeStop");
}

/// Drop the worker service.
#[unsafe(no_mangle)]
pub extern "system" fn Java_org_droidbridge_WorkerBridge_nativeDestroy<'local>(
    _env: JNIEnv<'local>,
    _class: JClass<'local>,
    handle: jlong,
) {
    let _ = remove_worker(handle as u64);
}

/// Throw for a failed or panicked unit-returning entry point
fn report_unit_result(
    env: &mut JNIEnv,
    result: std::thread::Result<Result<(), JniError>>,
    name: &str,
) {
    match result {
        Ok(Ok(())) => {}
        Ok(Err(e)) => throw_bridge_exception(env, e.code(), &e.to_string()),
        Err(_) => throw_bridge_exception(env, PANIC_CODE, &format!("panic in {}", name)),
    }
}

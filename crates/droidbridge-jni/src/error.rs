//! Error types for JNI operations.

use droidbridge_core::BridgeError;
use droidbridge_platform::LoadError;
use thiserror::Error;

/// Error code reported when a panic is caught at the boundary
pub const PANIC_CODE: u32 = 99;

/// Errors that can occur during JNI operations.
#[derive(Debug, Error)]
pub enum JniError {
    /// Failed to convert a Java string to Rust.
    #[error("string conversion failed: {0}")]
    StringConversion(String),

    /// Failed to access a Java byte array.
    #[error("byte array access failed: {0}")]
    ArrayAccess(String),

    /// No live service for the given handle.
    #[error("invalid handle: {0}")]
    InvalidHandle(u64),

    /// Failed to bind the platform library.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// A bridge operation failed.
    #[error(transparent)]
    Bridge(#[from] BridgeError),
}

impl JniError {
    /// Get the error code for this error.
    ///
    /// Bridge errors keep their own codes; JNI-specific failures use the
    /// 20+ range so the host can tell them apart.
    pub fn code(&self) -> u32 {
        match self {
            JniError::StringConversion(_) => 20,
            JniError::ArrayAccess(_) => 20,
            JniError::InvalidHandle(_) => 21,
            JniError::Load(LoadError::InvalidConfig(_)) => 5, // ConfigError
            JniError::Load(_) => 3,                           // InitializationFailed
            JniError::Bridge(e) => e.error_code(),
        }
    }
}

#[cfg(test)]
#[path = "error/error_tests.rs"]
mod error_tests;

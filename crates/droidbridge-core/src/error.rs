//! Error types for the bridge

use thiserror::Error;

/// Result type alias for bridge operations
pub type BridgeResult<T> = Result<T, BridgeError>;

/// Error type for bridge operations
#[derive(Error, Debug)]
pub enum BridgeError {
    /// The embedded server has not reached its serving state
    ///
    /// Retryable while a startup deadline has not elapsed; fatal once it has.
    #[error("server is not running")]
    NotRunning,

    /// Operation attempted in the wrong lifecycle state
    #[error("invalid lifecycle state: expected {expected}, got {actual}")]
    InvalidState { expected: String, actual: String },

    /// Failed to initialize the bridge or the platform
    #[error("initialization failed: {0}")]
    InitializationFailed(String),

    /// Failed to shut the platform down
    #[error("shutdown failed: {0}")]
    ShutdownFailed(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    ConfigError(String),

    /// Serialization/deserialization error
    #[error("serialization error: {0}")]
    SerializationError(String),

    /// The platform reported a failure through its C ABI
    #[error("platform error: {0}")]
    PlatformError(String),

    /// Internal error
    #[error("internal error: {0}")]
    Internal(String),
}

impl BridgeError {
    /// Returns an error code suitable for the JNI boundary
    pub fn error_code(&self) -> u32 {
        match self {
            BridgeError::NotRunning => 1,
            BridgeError::InvalidState { .. } => 2,
            BridgeError::InitializationFailed(_) => 3,
            BridgeError::ShutdownFailed(_) => 4,
            BridgeError::ConfigError(_) => 5,
            BridgeError::SerializationError(_) => 6,
            BridgeError::PlatformError(_) => 7,
            BridgeError::Internal(_) => 8,
        }
    }

    /// Create an error from an error code and message
    pub fn from_code(code: u32, message: String) -> Self {
        match code {
            1 => BridgeError::NotRunning,
            2 => BridgeError::InvalidState {
                expected: String::new(),
                actual: message,
            },
            3 => BridgeError::InitializationFailed(message),
            4 => BridgeError::ShutdownFailed(message),
            5 => BridgeError::ConfigError(message),
            6 => BridgeError::SerializationError(message),
            7 => BridgeError::PlatformError(message),
            _ => BridgeError::Internal(message),
        }
    }

    /// Whether a startup poll may retry after this error
    pub fn is_retryable(&self) -> bool {
        matches!(self, BridgeError::NotRunning)
    }
}

impl From<serde_json::Error> for BridgeError {
    fn from(err: serde_json::Error) -> Self {
        BridgeError::SerializationError(err.to_string())
    }
}

#[cfg(test)]
#[path = "error/error_tests.rs"]
mod error_tests;

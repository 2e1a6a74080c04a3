//! Error types for platform loading

use droidbridge_core::BridgeError;
use thiserror::Error;

/// Errors that can occur while binding the platform library
#[derive(Debug, Error)]
pub enum LoadError {
    /// Failed to load the platform shared library
    #[error("failed to load library: {0}")]
    LibraryLoad(String),

    /// A required symbol is missing from the library
    #[error("symbol not found: {0}")]
    SymbolNotFound(String),

    /// The platform initializer rejected the configuration
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The platform failed to create a bus
    #[error("bus creation failed: {0}")]
    CreateFailed(String),
}

impl From<LoadError> for BridgeError {
    fn from(err: LoadError) -> Self {
        match err {
            LoadError::InvalidConfig(msg) => BridgeError::ConfigError(msg),
            other => BridgeError::InitializationFailed(other.to_string()),
        }
    }
}

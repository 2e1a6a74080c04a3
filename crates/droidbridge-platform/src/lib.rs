//! droidbridge-platform - Dynamic binding to the embedded platform
//!
//! The embedded platform ships as a shared library exposing a small C ABI
//! around its process bus. This crate loads that library, resolves the
//! symbols, and wraps the result in a [`LoadedPlatform`] implementing
//! [`ProcessBus`](droidbridge_core::ProcessBus).
//!
//! The bus state machine, HTTP plugins, and task scheduler all live on the
//! platform side of this ABI; nothing here reimplements them.

mod error;
mod loader;

pub use error::LoadError;
pub use loader::{LoadedPlatform, load_platform};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{LoadError, LoadedPlatform, load_platform};
}

//! Error types for the PortalBSP engine
//!
//! This module defines the error types used throughout the engine.
//! The visibility walk itself has no recoverable-error taxonomy: content
//! degeneracies are skipped silently, and the only self-reported condition
//! is a malformed BSP detected by the traversal depth guard.

use std::fmt;

/// Result type for PortalBSP engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// PortalBSP engine errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Device-specific submission error (reported by the render backend)
    DeviceError(String),

    /// BSP content violated a structural precondition (e.g. cyclic node graph)
    MalformedBsp(String),

    /// Invalid resource reference (material, bound, vertex range)
    InvalidResource(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DeviceError(msg) => write!(f, "Device error: {}", msg),
            Error::MalformedBsp(msg) => write!(f, "Malformed BSP: {}", msg),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

/// Construct an `Error::DeviceError` with a formatted message and log it.
///
/// Mirrors the logging macros: the source string names the module that
/// raised the error.
#[macro_export]
macro_rules! engine_err {
    ($source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::engine_error!($source, "{}", message);
        $crate::portalbsp::Error::DeviceError(message)
    }};
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;

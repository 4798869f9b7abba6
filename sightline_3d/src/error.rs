//! Error types for the Sightline3D camera core
//!
//! This module defines the error types used throughout the crate,
//! covering hosting-surface queries, configuration parsing and scene
//! bookkeeping.

use std::fmt;

/// Result type for Sightline3D operations
pub type Result<T> = std::result::Result<T, Error>;

/// Sightline3D errors
#[derive(Debug, Clone)]
pub enum Error {
    /// The hosting surface could not be queried (no containing element, lock poisoned)
    SurfaceUnavailable(String),

    /// Configuration rejected at the configuration boundary
    InvalidConfig(String),

    /// Camera node key does not resolve to a live node
    InvalidNode(String),

    /// Scene or scene manager bookkeeping error
    SceneError(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::SurfaceUnavailable(msg) => write!(f, "Surface unavailable: {}", msg),
            Error::InvalidConfig(msg) => write!(f, "Invalid config: {}", msg),
            Error::InvalidNode(msg) => write!(f, "Invalid node: {}", msg),
            Error::SceneError(msg) => write!(f, "Scene error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

// ===== ERROR MACROS =====

/// Log an ERROR message and build an `Error::SceneError` from it
///
/// # Example
///
/// ```ignore
/// let err = engine_err!("sightline::SceneManager", "Scene '{}' already exists", name);
/// ```
#[macro_export]
macro_rules! engine_err {
    ($source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::engine_error!($source, "{}", message);
        $crate::sightline::Error::SceneError(message)
    }};
}

/// Log an ERROR message and return early with an `Error::SceneError`
///
/// # Example
///
/// ```ignore
/// engine_bail!("sightline::SceneManager", "Scene '{}' already exists", name);
/// ```
#[macro_export]
macro_rules! engine_bail {
    ($source:expr, $($arg:tt)*) => {
        return Err($crate::engine_err!($source, $($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;

//! Error handling for the dynarray library
//!
//! Index violations are caller programming errors: they are returned
//! immediately and never retried or logged.

use thiserror::Error;

/// Main error type for the dynarray library
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DynArrayError {
    /// Index outside the live region `[0, size)`
    #[error("Out of bounds: index {index}, size {size}")]
    OutOfBounds {
        /// The invalid index
        index: usize,
        /// The logical size at the time of the call
        size: usize,
    },

    /// Configuration or parameter errors
    #[error("Invalid configuration: {message}")]
    Configuration {
        /// Configuration error message
        message: String,
    },
}

impl DynArrayError {
    /// Create an out of bounds error
    pub fn out_of_bounds(index: usize, size: usize) -> Self {
        Self::OutOfBounds { index, size }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Check if this is a recoverable error
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::OutOfBounds { .. } => false,
            Self::Configuration { .. } => false,
        }
    }

    /// Get the error category for logging/metrics
    pub fn category(&self) -> &'static str {
        match self {
            Self::OutOfBounds { .. } => "bounds",
            Self::Configuration { .. } => "config",
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, DynArrayError>;

/// Assert that an index addresses a live element
#[inline]
pub fn check_bounds(index: usize, size: usize) -> Result<()> {
    if index >= size {
        Err(DynArrayError::out_of_bounds(index, size))
    } else {
        Ok(())
    }
}

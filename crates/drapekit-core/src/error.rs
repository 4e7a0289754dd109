//! Error handling for DrapeKit
//!
//! Provides error types for the layers of the application:
//! - Gesture errors (engine configuration)
//! - Layout errors (export and prompt construction)
//!
//! Pointer handling itself never fails: a tick that cannot be resolved is
//! skipped. The types here cover configuration and export paths.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Gesture engine error type
///
/// Raised when an engine is configured with values that would break its
/// output invariants.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GestureError {
    /// Minimum scale is below the hard floor or not finite
    #[error("Invalid minimum scale {value}: must be finite and at least {floor}")]
    InvalidMinScale {
        /// The rejected value.
        value: f64,
        /// The hard floor it was checked against.
        floor: f64,
    },
}

/// Layout export error type
#[derive(Error, Debug)]
pub enum LayoutError {
    /// There is nothing to export
    #[error("Layout has no garments")]
    Empty,

    /// Container size is unusable for relative placement
    #[error("Invalid container size {width}x{height}")]
    InvalidContainer {
        /// Container width.
        width: f64,
        /// Container height.
        height: f64,
    },

    /// JSON serialization failed
    #[error("Failed to serialize layout: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Main error type for DrapeKit
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Gesture error
    #[error(transparent)]
    Gesture(#[from] GestureError),

    /// Layout error
    #[error(transparent)]
    Layout(#[from] LayoutError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a gesture error
    pub fn is_gesture_error(&self) -> bool {
        matches!(self, Error::Gesture(_))
    }

    /// Check if this is a layout error
    pub fn is_layout_error(&self) -> bool {
        matches!(self, Error::Layout(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;

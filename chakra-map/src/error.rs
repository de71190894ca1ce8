//! Error types for map operations.

use thiserror::Error;

use crate::grid::ConfigError;

/// Map errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// No layer with this name exists
    #[error("Unknown layer: {0}")]
    UnknownLayer(String),

    /// Width or height was zero or larger than `i32::MAX`
    #[error("Invalid dimensions {width}x{height}: width and height must be in 1..=i32::MAX")]
    InvalidDimensions {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
    },

    /// Configuration rejected by validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
}

/// Result alias for map operations.
pub type Result<T> = std::result::Result<T, MapError>;

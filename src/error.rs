use std::collections::TryReserveError;
use thiserror::Error;

/// Errors that can occur while allocating the canvas and its history ring.
///
/// These are only produced at construction time. Once a canvas exists every
/// editing operation is infallible.
#[derive(Error, Debug)]
pub enum CanvasError {
    #[error("Invalid canvas dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("History capacity must be at least 2, got {0}")]
    InvalidHistoryCapacity(usize),

    #[error("Failed to allocate {bytes} bytes of pixel storage")]
    AllocationFailed {
        bytes: usize,
        #[source]
        source: TryReserveError,
    },
}

/// Errors raised while loading or validating a [`crate::CanvasConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config value: {0}")]
    Invalid(String),
}

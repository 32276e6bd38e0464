//! Error types for the reading order library.
//!
//! Ordering itself never fails: degenerate geometry is filtered or guarded.
//! Errors only come from the surfaces around it (configuration, box
//! construction, command-line input and I/O).

/// Result type alias for reading order operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur around reading order detection.
#[derive(Debug, thiserror::Error)]
#[allow(clippy::enum_variant_names)] // "Invalid" prefix is intentional for clarity
pub enum Error {
    /// Configuration value out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Bounding box with non-finite or inverted extents
    #[error("Invalid bounding box: {0}")]
    InvalidBoundingBox(String),

    /// Bad command-line argument or strategy name
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

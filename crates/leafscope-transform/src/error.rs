//! Error types for leafscope-transform

use thiserror::Error;

/// Errors that can occur during multi-resolution transforms
#[derive(Debug, Error)]
pub enum TransformError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] leafscope_core::Error),

    /// The 2x2 block decomposition needs even dimensions
    #[error("odd dimensions {width}x{height}: wavelet decomposition needs even width and height")]
    OddDimensions {
        /// Source width
        width: u32,
        /// Source height
        height: u32,
    },
}

/// Result type for transform operations
pub type TransformResult<T> = Result<T, TransformError>;

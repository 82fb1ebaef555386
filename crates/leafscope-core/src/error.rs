//! Error types for leafscope-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal storage details.

use thiserror::Error;

/// leafscope core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid raster dimensions
    #[error("invalid raster dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Pixel data does not match the declared dimensions
    #[error("buffer size mismatch: {width}x{height} needs {expected} values, got {actual}")]
    BufferSizeMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    /// Coordinate out of bounds
    #[error("coordinate out of bounds: ({x}, {y}) in {width}x{height}")]
    IndexOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Memory allocation failed
    #[error("memory allocation failed for {0} pixels")]
    AllocationFailed(usize),
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;

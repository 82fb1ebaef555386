//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur during regression testing
#[derive(Debug, Error)]
pub enum TestError {
    /// Failed to build a synthetic test image
    #[error("failed to build test image '{name}': {message}")]
    ImageBuild { name: String, message: String },

    /// Failed to write an image
    #[error("failed to write image '{path}': {message}")]
    ImageWrite { path: String, message: String },
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;

//! Error types for the leafscope facade

use leafscope_color::ColorError;
use leafscope_core::Error as CoreError;
use leafscope_filter::FilterError;
use leafscope_transform::TransformError;
use thiserror::Error;

/// Errors from rendering a view or handling a classification record
#[derive(Debug, Error)]
pub enum ViewError {
    /// A view name that is not in the catalogue
    #[error("unknown view: {0:?}")]
    UnknownView(String),

    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] CoreError),

    /// Point transform error
    #[error("color error: {0}")]
    Color(#[from] ColorError),

    /// Neighborhood operator error
    #[error("filter error: {0}")]
    Filter(#[from] FilterError),

    /// Wavelet error
    #[error("transform error: {0}")]
    Transform(#[from] TransformError),

    /// Classification record failed to parse
    #[error("classification JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Classification record parsed but holds out-of-range values
    #[error("invalid classification: {0}")]
    InvalidClassification(String),
}

impl ViewError {
    /// Whether this error comes from the source's dimensions: zero-sized
    /// input anywhere in the pipeline, or odd sizes rejected by the wavelet.
    pub fn is_invalid_dimensions(&self) -> bool {
        let core = match self {
            ViewError::Core(e) => e,
            ViewError::Color(ColorError::Core(e)) => e,
            ViewError::Filter(FilterError::Core(e)) => e,
            ViewError::Transform(TransformError::Core(e)) => e,
            ViewError::Transform(TransformError::OddDimensions { .. }) => return true,
            _ => return false,
        };
        matches!(core, CoreError::InvalidDimension { .. })
    }
}

/// Result type for facade operations
pub type ViewResult<T> = Result<T, ViewError>;

//! leafscope-filter - 3x3 neighborhood operators
//!
//! This crate provides the windowed views of the analysis pipeline:
//!
//! - Convolution of a luminance plane with a small kernel
//! - Sobel gradient family (magnitude, skeleton, blueprint, direction)
//! - Laplacian zero-crossing view
//! - Local variance feature map
//!
//! Every operator samples with clamp-to-edge addressing, so images as small
//! as 1x1 are valid input.

pub mod convolve;
pub mod edge;
mod error;
pub mod kernel;
pub mod windowed;

pub use error::{FilterError, FilterResult};
pub use kernel::Kernel;

// Re-export commonly used functions
pub use convolve::convolve_luma;
pub use edge::{
    EdgeOptions, SobelGradients, blueprint, gradient_direction, gradient_magnitude,
    laplacian_response, skeleton, sobel_gradients, zero_crossing,
};
pub use windowed::{LocalStats, feature_map, local_stats, pixel_feature};

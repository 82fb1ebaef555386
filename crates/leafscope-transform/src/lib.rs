//! leafscope-transform - Multi-resolution transforms
//!
//! This crate provides the single-level Haar wavelet decomposition used by
//! the wavelet view: the luminance image is split into 2x2 blocks and each
//! block contributes one coefficient to each of four subbands, which are
//! tiled back into a canvas the size of the source.

mod error;
pub mod wavelet;

pub use error::{TransformError, TransformResult};
pub use wavelet::{
    OddDimensionPolicy, WaveletCoefficients, WaveletOptions, haar_block, haar_coefficients,
    haar_decompose,
};

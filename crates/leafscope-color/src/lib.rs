//! leafscope Color - Per-pixel color remaps
//!
//! Every function here reads one source pixel and writes one opaque output
//! pixel; no neighbor access is needed:
//!
//! - **Color space conversion** ([`colorspace`]): RGB <-> HSV, RGB -> gray
//! - **Thresholding** ([`threshold`]): Binary conversion at a luminance threshold
//! - **Coloring** ([`coloring`]): False-color heatmap, X-ray inversion, eco tint

pub mod coloring;
pub mod colorspace;
pub mod error;
pub mod threshold;

// Re-export core types
pub use leafscope_core;

// Re-export error types
pub use error::{ColorError, ColorResult};

// Re-export color space types and functions
pub use colorspace::{
    // Types
    Hsv,
    // Pixel-level conversions
    hsv_to_rgb,
    rgb_to_gray,
    rgb_to_hsv,
    // Image-level conversions
    convert_to_gray,
    hsv_recolor,
    pixel_hsv_recolor,
};

// Re-export threshold functions
pub use threshold::{DEFAULT_BINARY_THRESHOLD, pixel_threshold, threshold_to_binary};

// Re-export coloring functions
pub use coloring::{
    // Image-level functions
    eco_tint,
    heatmap,
    xray,
    // Pixel-level functions
    pixel_eco_tint,
    pixel_heatmap,
    pixel_xray,
};

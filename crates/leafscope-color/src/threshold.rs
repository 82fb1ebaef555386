//! Binary thresholding
//!
//! Pixels brighter than the threshold become white, all others black.
//! Brightness is the BT.601 luminance, compared unrounded.

use crate::ColorResult;
use leafscope_core::{RasterBuffer, color, pixel_luminance};

/// Default luminance threshold for the binary view.
pub const DEFAULT_BINARY_THRESHOLD: u8 = 128;

/// Threshold one packed pixel: white if luminance > `threshold`, else black.
#[inline]
pub fn pixel_threshold(pixel: u32, threshold: u8) -> u32 {
    if pixel_luminance(pixel) > threshold as f32 {
        color::WHITE
    } else {
        color::BLACK
    }
}

/// Convert an image to a black/white image at `threshold`.
///
/// Output pixels are opaque `(255,255,255)` or `(0,0,0)`; there are no
/// intermediate values.
pub fn threshold_to_binary(pix: &RasterBuffer, threshold: u8) -> ColorResult<RasterBuffer> {
    Ok(pix.map_pixels(|p| pixel_threshold(p, threshold))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_strict() {
        let at = color::compose_gray(128);
        let above = color::compose_gray(129);
        assert_eq!(pixel_threshold(at, 128), color::BLACK);
        assert_eq!(pixel_threshold(above, 128), color::WHITE);
    }

    #[test]
    fn test_threshold_uses_luminance() {
        // Pure red has luminance ~76, pure green ~150
        assert_eq!(pixel_threshold(color::compose_rgb(255, 0, 0), 128), color::BLACK);
        assert_eq!(pixel_threshold(color::compose_rgb(0, 255, 0), 128), color::WHITE);
    }

    #[test]
    fn test_threshold_output_is_opaque() {
        let pix = RasterBuffer::new_filled(2, 2, color::compose_rgba(200, 200, 200, 0)).unwrap();
        let out = threshold_to_binary(&pix, DEFAULT_BINARY_THRESHOLD).unwrap();
        assert!(out.data().iter().all(|&p| p == color::WHITE));
    }
}

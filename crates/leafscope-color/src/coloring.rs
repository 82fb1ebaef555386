//! False-color and tint remaps
//!
//! # Overview
//!
//! 1. **Heatmap** ([`heatmap`]): luminance mapped blue -> green -> red
//! 2. **X-ray** ([`xray`]): inverted luminance with doubled contrast around mid-gray
//! 3. **Eco tint** ([`eco_tint`]): green boost with red and blue damped
//!
//! All outputs are opaque.

use crate::ColorResult;
use leafscope_core::{RasterBuffer, color, luminance};

// =============================================================================
// Pixel-level functions
// =============================================================================

/// Map a luminance value to a blue -> green -> red false color.
///
/// With `t = y / 255`: below one half the color runs from pure blue to pure
/// green, above it from pure green to pure red.
pub fn pixel_heatmap(y: f32) -> (u8, u8, u8) {
    let t = y / 255.0;
    if t < 0.5 {
        (
            0,
            color::clamp_channel(255.0 * 2.0 * t),
            color::clamp_channel(255.0 * (1.0 - 2.0 * t)),
        )
    } else {
        (
            color::clamp_channel(255.0 * (2.0 * t - 1.0)),
            color::clamp_channel(255.0 * (2.0 - 2.0 * t)),
            0,
        )
    }
}

/// Invert a luminance value and stretch it around mid-gray.
///
/// `v = clamp((255 - y - 128) * 2 + 128, 0, 255)`
#[inline]
pub fn pixel_xray(y: f32) -> u8 {
    color::clamp_channel((255.0 - y - 128.0) * 2.0 + 128.0)
}

/// Boost green and damp red and blue: `(R*0.8, G*1.2, B*0.8)`, clamped.
#[inline]
pub fn pixel_eco_tint(r: u8, g: u8, b: u8) -> (u8, u8, u8) {
    (
        color::clamp_channel(r as f32 * 0.8),
        color::clamp_channel(g as f32 * 1.2),
        color::clamp_channel(b as f32 * 0.8),
    )
}

// =============================================================================
// Image-level functions
// =============================================================================

/// False-color heatmap of an image's luminance.
pub fn heatmap(pix: &RasterBuffer) -> ColorResult<RasterBuffer> {
    Ok(pix.map_pixels(|p| {
        let (r, g, b) = color::extract_rgb(p);
        let (hr, hg, hb) = pixel_heatmap(luminance(r, g, b));
        color::compose_rgb(hr, hg, hb)
    })?)
}

/// X-ray style inverted, contrast-stretched gray image.
pub fn xray(pix: &RasterBuffer) -> ColorResult<RasterBuffer> {
    Ok(pix.map_pixels(|p| {
        let (r, g, b) = color::extract_rgb(p);
        color::compose_gray(pixel_xray(luminance(r, g, b)))
    })?)
}

/// Green-boosted tint of an image.
pub fn eco_tint(pix: &RasterBuffer) -> ColorResult<RasterBuffer> {
    Ok(pix.map_pixels(|p| {
        let (r, g, b) = color::extract_rgb(p);
        let (er, eg, eb) = pixel_eco_tint(r, g, b);
        color::compose_rgb(er, eg, eb)
    })?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heatmap_endpoints() {
        assert_eq!(pixel_heatmap(0.0), (0, 0, 255));
        assert_eq!(pixel_heatmap(255.0), (255, 0, 0));
    }

    #[test]
    fn test_heatmap_midpoint_is_green() {
        let (r, g, b) = pixel_heatmap(127.0);
        assert!(g > r && g > b, "got ({r},{g},{b})");
        let (r, g, b) = pixel_heatmap(128.0);
        assert!(g > r && g > b, "got ({r},{g},{b})");
    }

    #[test]
    fn test_xray_inverts_and_clamps() {
        assert_eq!(pixel_xray(0.0), 255);
        assert_eq!(pixel_xray(255.0), 0);
        assert_eq!(pixel_xray(127.0), 128);
        assert_eq!(pixel_xray(100.0), 182);
    }

    #[test]
    fn test_eco_tint_saturates_green() {
        assert_eq!(pixel_eco_tint(100, 250, 50), (80, 255, 40));
        assert_eq!(pixel_eco_tint(0, 0, 0), (0, 0, 0));
    }

    #[test]
    fn test_image_level_outputs_opaque() {
        let pix = RasterBuffer::new_filled(3, 3, color::compose_rgba(10, 120, 30, 5)).unwrap();
        for out in [heatmap(&pix), xray(&pix), eco_tint(&pix)] {
            let out = out.unwrap();
            assert!(out.data().iter().all(|&p| color::alpha(p) == 255));
        }
    }
}

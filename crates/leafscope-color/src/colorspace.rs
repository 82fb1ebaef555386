//! Color space conversion
//!
//! Provides conversion between RGB and HSV, and RGB to grayscale.
//!
//! HSV components are all normalized to `[0.0, 1.0]`; hue 1.0 is the same
//! angle as hue 0.0.

use crate::ColorResult;
use leafscope_core::{RasterBuffer, color, luminance};

/// HSV color representation
///
/// - `h`: Hue in range [0.0, 1.0) (red at 0, green at 1/3, blue at 2/3)
/// - `s`: Saturation in range [0.0, 1.0]
/// - `v`: Value in range [0.0, 1.0]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub h: f32,
    pub s: f32,
    pub v: f32,
}

impl Hsv {
    /// Create a new HSV color
    pub fn new(h: f32, s: f32, v: f32) -> Self {
        Self { h, s, v }
    }
}

/// Convert RGB to grayscale using ITU-R BT.601 coefficients
///
/// Formula: gray = 0.299*R + 0.587*G + 0.114*B, narrowed to 8 bits.
#[inline]
pub fn rgb_to_gray(r: u8, g: u8, b: u8) -> u8 {
    color::clamp_channel(luminance(r, g, b))
}

/// Convert RGB values to HSV
///
/// Uses the six-sector formula: the hue is measured from whichever channel
/// is the maximum. Saturation is 0 when the maximum is 0, and hue is 0 for
/// any gray.
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> Hsv {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let v = max as f32 / 255.0;
    if max == 0 {
        return Hsv::new(0.0, 0.0, v);
    }

    let delta = (max - min) as f32;
    let s = delta / max as f32;
    if max == min {
        return Hsv::new(0.0, s, v);
    }

    let (rf, gf, bf) = (r as f32, g as f32, b as f32);
    let sector = if max == r {
        (gf - bf) / delta + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (bf - rf) / delta + 2.0
    } else {
        (rf - gf) / delta + 4.0
    };

    Hsv::new(sector / 6.0, s, v)
}

/// Convert HSV values to RGB
///
/// Input HSV should have all components in range [0.0, 1.0]. Hue is taken
/// modulo 1, so `h = 1.0` maps to red like `h = 0.0`.
pub fn hsv_to_rgb(hsv: Hsv) -> (u8, u8, u8) {
    let Hsv { h, s, v } = hsv;
    let scaled = h * 6.0;
    let i = scaled.floor();
    let f = scaled - i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let (r, g, b) = match (i as i32).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    (
        color::clamp_channel(r * 255.0),
        color::clamp_channel(g * 255.0),
        color::clamp_channel(b * 255.0),
    )
}

/// Convert a color image to gray, replicated on R, G and B.
///
/// Source alpha is discarded; every output pixel is opaque.
pub fn convert_to_gray(pix: &RasterBuffer) -> ColorResult<RasterBuffer> {
    Ok(pix.map_pixels(|p| {
        let (r, g, b) = color::extract_rgb(p);
        color::compose_gray(rgb_to_gray(r, g, b))
    })?)
}

/// Re-encode one pixel's HSV components as display RGB.
///
/// R carries hue, G saturation and B value, each scaled to [0, 255]. This
/// is a diagnostic view, not a perceptual transform.
#[inline]
pub fn pixel_hsv_recolor(r: u8, g: u8, b: u8) -> (u8, u8, u8) {
    let hsv = rgb_to_hsv(r, g, b);
    (
        color::clamp_channel(hsv.h * 255.0),
        color::clamp_channel(hsv.s * 255.0),
        color::clamp_channel(hsv.v * 255.0),
    )
}

/// Recolor an image so that R, G, B show its H, S, V components.
pub fn hsv_recolor(pix: &RasterBuffer) -> ColorResult<RasterBuffer> {
    Ok(pix.map_pixels(|p| {
        let (r, g, b) = color::extract_rgb(p);
        let (h, s, v) = pixel_hsv_recolor(r, g, b);
        color::compose_rgb(h, s, v)
    })?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_rgb_to_hsv_primaries() {
        let red = rgb_to_hsv(255, 0, 0);
        assert!(close(red.h, 0.0) && close(red.s, 1.0) && close(red.v, 1.0));
        let green = rgb_to_hsv(0, 255, 0);
        assert!(close(green.h, 1.0 / 3.0));
        let blue = rgb_to_hsv(0, 0, 255);
        assert!(close(blue.h, 2.0 / 3.0));
    }

    #[test]
    fn test_rgb_to_hsv_magenta_wraps_below_one() {
        // max is red and g < b, so the sector is shifted by 6
        let hsv = rgb_to_hsv(255, 0, 128);
        assert!(hsv.h > 0.9 && hsv.h < 1.0);
    }

    #[test]
    fn test_rgb_to_hsv_gray_and_black() {
        let gray = rgb_to_hsv(128, 128, 128);
        assert_eq!((gray.h, gray.s), (0.0, 0.0));
        assert!(close(gray.v, 128.0 / 255.0));
        assert_eq!(rgb_to_hsv(0, 0, 0), Hsv::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_hsv_to_rgb_sectors() {
        assert_eq!(hsv_to_rgb(Hsv::new(0.0, 1.0, 1.0)), (255, 0, 0));
        assert_eq!(hsv_to_rgb(Hsv::new(1.0, 1.0, 1.0)), (255, 0, 0));
        assert_eq!(hsv_to_rgb(Hsv::new(1.0 / 3.0, 1.0, 1.0)), (0, 255, 0));
        assert_eq!(hsv_to_rgb(Hsv::new(2.0 / 3.0, 1.0, 1.0)), (0, 0, 255));
        assert_eq!(hsv_to_rgb(Hsv::new(0.5, 0.0, 0.5)), (128, 128, 128));
    }

    #[test]
    fn test_hsv_roundtrip() {
        let colors = [(255, 255, 0), (0, 255, 255), (128, 64, 32), (10, 200, 90)];
        for (r, g, b) in colors {
            let (rr, rg, rb) = hsv_to_rgb(rgb_to_hsv(r, g, b));
            assert!(
                (rr as i32 - r as i32).abs() <= 1
                    && (rg as i32 - g as i32).abs() <= 1
                    && (rb as i32 - b as i32).abs() <= 1,
                "roundtrip failed for ({r},{g},{b}): got ({rr},{rg},{rb})"
            );
        }
    }

    #[test]
    fn test_rgb_to_gray() {
        assert_eq!(rgb_to_gray(0, 0, 0), 0);
        assert_eq!(rgb_to_gray(255, 255, 255), 255);
        assert_eq!(rgb_to_gray(255, 0, 0), 76);
        assert_eq!(rgb_to_gray(0, 255, 0), 150);
    }

    #[test]
    fn test_pixel_hsv_recolor() {
        assert_eq!(pixel_hsv_recolor(0, 255, 0), (85, 255, 255));
        assert_eq!(pixel_hsv_recolor(100, 100, 100), (0, 0, 100));
    }
}

//! leafscope Core - Basic data structures for raster analysis
//!
//! This crate provides the fundamental data structures shared by every
//! leafscope transform:
//!
//! - [`RasterBuffer`] / [`RasterMut`] - The RGBA image container (immutable / mutable)
//! - [`LumaPlane`] - Floating-point luminance image with clamp-to-edge sampling
//! - [`color`] - Packed pixel helpers and 8-bit narrowing

pub mod error;
pub mod luma;
pub mod raster;

pub use error::{Error, Result};
pub use luma::{LumaPlane, luminance, pixel_luminance};
pub use raster::{RasterBuffer, RasterMut};

/// Color channel helpers for packed 32-bit RGBA pixels.
///
/// # Pixel format
///
/// Pixels are stored as `0xRRGGBBAA` (red in MSB, alpha in LSB).
pub mod color {
    /// Shift amounts for extracting color channels
    pub const RED_SHIFT: u32 = 24;
    pub const GREEN_SHIFT: u32 = 16;
    pub const BLUE_SHIFT: u32 = 8;
    pub const ALPHA_SHIFT: u32 = 0;

    /// Fully opaque alpha value
    pub const OPAQUE: u8 = 255;

    /// Opaque black, the fill value for uncovered output pixels.
    pub const BLACK: u32 = 0x0000_00ff;

    /// Opaque white.
    pub const WHITE: u32 = 0xffff_ffff;

    /// Extract red component from a 32-bit pixel.
    #[inline]
    pub fn red(pixel: u32) -> u8 {
        ((pixel >> RED_SHIFT) & 0xff) as u8
    }

    /// Extract green component from a 32-bit pixel.
    #[inline]
    pub fn green(pixel: u32) -> u8 {
        ((pixel >> GREEN_SHIFT) & 0xff) as u8
    }

    /// Extract blue component from a 32-bit pixel.
    #[inline]
    pub fn blue(pixel: u32) -> u8 {
        ((pixel >> BLUE_SHIFT) & 0xff) as u8
    }

    /// Extract alpha component from a 32-bit pixel.
    #[inline]
    pub fn alpha(pixel: u32) -> u8 {
        ((pixel >> ALPHA_SHIFT) & 0xff) as u8
    }

    /// Compose an opaque 32-bit RGB pixel (alpha = 255).
    #[inline]
    pub fn compose_rgb(r: u8, g: u8, b: u8) -> u32 {
        compose_rgba(r, g, b, OPAQUE)
    }

    /// Compose a 32-bit RGBA pixel.
    #[inline]
    pub fn compose_rgba(r: u8, g: u8, b: u8, a: u8) -> u32 {
        ((r as u32) << RED_SHIFT)
            | ((g as u32) << GREEN_SHIFT)
            | ((b as u32) << BLUE_SHIFT)
            | ((a as u32) << ALPHA_SHIFT)
    }

    /// Compose an opaque gray pixel with `v` on all three channels.
    #[inline]
    pub fn compose_gray(v: u8) -> u32 {
        compose_rgb(v, v, v)
    }

    /// Extract RGB values from a 32-bit pixel.
    #[inline]
    pub fn extract_rgb(pixel: u32) -> (u8, u8, u8) {
        (red(pixel), green(pixel), blue(pixel))
    }

    /// Extract RGBA values from a 32-bit pixel.
    #[inline]
    pub fn extract_rgba(pixel: u32) -> (u8, u8, u8, u8) {
        (red(pixel), green(pixel), blue(pixel), alpha(pixel))
    }

    /// Narrow a floating-point channel value to 8 bits.
    ///
    /// The value is clamped to `[0, 255]` and rounded to the nearest
    /// integer, ties to even (the behavior of a clamped 8-bit canvas store).
    /// NaN narrows to 0.
    #[inline]
    pub fn clamp_channel(v: f32) -> u8 {
        if v.is_nan() {
            return 0;
        }
        v.clamp(0.0, 255.0).round_ties_even() as u8
    }

    /// Compose an opaque pixel from floating-point channels.
    #[inline]
    pub fn compose_rgb_f32(r: f32, g: f32, b: f32) -> u32 {
        compose_rgb(clamp_channel(r), clamp_channel(g), clamp_channel(b))
    }

}

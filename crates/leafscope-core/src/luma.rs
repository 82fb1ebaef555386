//! Luminance conversion and the floating-point luminance plane
//!
//! Every grayscale-derived view uses the same ITU-R BT.601 weighting so that
//! tonal mapping stays consistent across views. Neighborhood operators
//! convert the source once into a [`LumaPlane`] and sample that instead of
//! recomputing luminance nine times per pixel.

use crate::color;
use crate::error::{Error, Result};
use crate::raster::RasterBuffer;

/// Luminance of an RGB triple using ITU-R BT.601 weights.
///
/// Formula: `0.299*R + 0.587*G + 0.114*B`, unrounded, in `[0, 255]`.
#[inline]
pub fn luminance(r: u8, g: u8, b: u8) -> f32 {
    0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32
}

/// Luminance of a packed RGBA pixel. Alpha is ignored.
#[inline]
pub fn pixel_luminance(pixel: u32) -> f32 {
    let (r, g, b) = color::extract_rgb(pixel);
    luminance(r, g, b)
}

/// Floating-point luminance image
///
/// One `f32` per pixel, row-major with no padding. The pixel at (x, y) is at
/// index `y * width + x`.
#[derive(Debug, Clone, PartialEq)]
pub struct LumaPlane {
    width: u32,
    height: u32,
    data: Vec<f32>,
}

impl LumaPlane {
    /// Compute the luminance of every pixel of `raster`.
    pub fn from_raster(raster: &RasterBuffer) -> Result<Self> {
        let len = raster.pixel_count();
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| Error::AllocationFailed(len))?;
        data.extend(raster.data().iter().map(|&p| pixel_luminance(p)));
        Ok(LumaPlane {
            width: raster.width(),
            height: raster.height(),
            data,
        })
    }

    /// Create a plane from raw row-major values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for a zero dimension and
    /// [`Error::BufferSizeMismatch`] if `data.len() != width * height`.
    pub fn from_data(width: u32, height: u32, data: Vec<f32>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let expected = width as usize * height as usize;
        if data.len() != expected {
            return Err(Error::BufferSizeMismatch {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }
        Ok(LumaPlane {
            width,
            height,
            data,
        })
    }

    /// Get the plane width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the plane height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the raw values.
    #[inline]
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Get the value at (x, y), or `None` outside the plane.
    pub fn get(&self, x: u32, y: u32) -> Option<f32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[y as usize * self.width as usize + x as usize])
    }

    /// Sample with clamp-to-edge addressing, as [`RasterBuffer::sample_clamped`].
    #[inline]
    pub fn sample_clamped(&self, x: i32, y: i32) -> f32 {
        let cx = x.clamp(0, self.width as i32 - 1) as usize;
        let cy = y.clamp(0, self.height as i32 - 1) as usize;
        self.data[cy * self.width as usize + cx]
    }

    /// Gather the clamped 3x3 neighborhood centered on (x, y).
    ///
    /// Order is row-major: `[NW, N, NE, W, C, E, SW, S, SE]`.
    #[inline]
    pub fn window3x3(&self, x: u32, y: u32) -> [f32; 9] {
        let (x, y) = (x as i32, y as i32);
        let mut out = [0.0f32; 9];
        let mut i = 0;
        for dy in -1..=1 {
            for dx in -1..=1 {
                out[i] = self.sample_clamped(x + dx, y + dy);
                i += 1;
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luminance_weights() {
        assert_eq!(luminance(0, 0, 0), 0.0);
        assert!((luminance(255, 255, 255) - 255.0).abs() < 1e-3);
        assert!((luminance(255, 0, 0) - 76.245).abs() < 1e-3);
        assert!((luminance(0, 255, 0) - 149.685).abs() < 1e-3);
        assert!((luminance(0, 0, 255) - 29.07).abs() < 1e-3);
    }

    #[test]
    fn test_pixel_luminance_ignores_alpha() {
        let opaque = color::compose_rgba(10, 20, 30, 255);
        let clear = color::compose_rgba(10, 20, 30, 0);
        assert_eq!(pixel_luminance(opaque), pixel_luminance(clear));
    }

    #[test]
    fn test_window_clamps_at_corner() {
        let plane = LumaPlane::from_data(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(
            plane.window3x3(0, 0),
            [1.0, 1.0, 2.0, 1.0, 1.0, 2.0, 3.0, 3.0, 4.0]
        );
        assert_eq!(
            plane.window3x3(1, 1),
            [1.0, 2.0, 2.0, 3.0, 4.0, 4.0, 3.0, 4.0, 4.0]
        );
    }

    #[test]
    fn test_from_raster_matches_pixels() {
        let raster = RasterBuffer::new_filled(3, 1, color::compose_rgb(100, 100, 100)).unwrap();
        let plane = LumaPlane::from_raster(&raster).unwrap();
        assert_eq!(plane.width(), 3);
        assert!(plane.data().iter().all(|&v| (v - 100.0).abs() < 1e-3));
    }
}

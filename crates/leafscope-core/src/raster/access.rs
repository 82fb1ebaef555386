//! Pixel access functions
//!
//! Low-level functions for getting and setting individual pixels, plus the
//! clamp-to-edge sampler that every neighborhood operator goes through.

use super::{RasterBuffer, RasterMut};
use crate::color;
use crate::error::{Error, Result};

impl RasterBuffer {
    /// Get a pixel value at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Get a pixel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the computed index falls outside the pixel data.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u32 {
        self.data()[y as usize * self.width() as usize + x as usize]
    }

    /// Get RGB values at (x, y).
    pub fn get_rgb(&self, x: u32, y: u32) -> Option<(u8, u8, u8)> {
        self.get_pixel(x, y).map(color::extract_rgb)
    }

    /// Get RGBA values at (x, y).
    pub fn get_rgba(&self, x: u32, y: u32) -> Option<(u8, u8, u8, u8)> {
        self.get_pixel(x, y).map(color::extract_rgba)
    }

    /// Sample with clamp-to-edge addressing.
    ///
    /// `x` is clamped to `[0, width-1]` and `y` to `[0, height-1]`
    /// independently, so any signed coordinate yields a valid pixel.
    ///
    /// ```
    /// use leafscope_core::{RasterBuffer, color};
    ///
    /// let raster = RasterBuffer::from_fn(2, 2, |x, y| color::compose_gray((x + 2 * y) as u8)).unwrap();
    /// assert_eq!(raster.sample_clamped(-5, -5), raster.get_pixel_unchecked(0, 0));
    /// assert_eq!(raster.sample_clamped(9, 0), raster.get_pixel_unchecked(1, 0));
    /// ```
    #[inline]
    pub fn sample_clamped(&self, x: i32, y: i32) -> u32 {
        let cx = x.clamp(0, self.width() as i32 - 1) as u32;
        let cy = y.clamp(0, self.height() as i32 - 1) as u32;
        self.get_pixel_unchecked(cx, cy)
    }
}

impl RasterMut {
    /// Get a pixel value at (x, y).
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Get a pixel value without bounds checking.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u32 {
        self.data()[y as usize * self.width() as usize + x as usize]
    }

    /// Set a pixel value at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, val: u32) -> Result<()> {
        if x >= self.width() || y >= self.height() {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                width: self.width(),
                height: self.height(),
            });
        }
        self.set_pixel_unchecked(x, y, val);
        Ok(())
    }

    /// Set a pixel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the computed index falls outside the pixel data.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, val: u32) {
        let w = self.width() as usize;
        self.data_mut()[y as usize * w + x as usize] = val;
    }

    /// Set an opaque RGB pixel at (x, y).
    pub fn set_rgb(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8) -> Result<()> {
        self.set_pixel(x, y, color::compose_rgb(r, g, b))
    }

    /// Set an RGBA pixel at (x, y).
    pub fn set_rgba(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8, a: u8) -> Result<()> {
        self.set_pixel(x, y, color::compose_rgba(r, g, b, a))
    }
}

//! RasterBuffer - The main image container
//!
//! `RasterBuffer` is the pixel type every leafscope transform reads from and
//! writes to: a row-major grid of RGBA pixels, row 0 first.
//!
//! # Pixel layout
//!
//! - One packed 32-bit word per pixel, no row padding
//! - Color order is RGBA (red in MSB), see [`crate::color`]
//!
//! # Ownership model
//!
//! `RasterBuffer` uses `Arc` for cheap cloning (shared ownership), so one
//! decoded source can be read by several transforms at once. To modify pixel
//! data, convert to `RasterMut` via [`RasterBuffer::try_into_mut`] or
//! [`RasterBuffer::to_mut`], then convert back with `Into<RasterBuffer>`.

mod access;

use crate::color;
use crate::error::{Error, Result};
use std::sync::Arc;

/// Internal raster data
#[derive(Debug, PartialEq, Eq)]
struct RasterData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Packed RGBA pixels (row-major, no padding)
    data: Vec<u32>,
}

/// Compute the pixel count for the given dimensions.
///
/// # Errors
///
/// Returns [`Error::InvalidDimension`] if either dimension is 0 or the
/// product does not fit in `usize`.
fn pixel_count(width: u32, height: u32) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimension { width, height });
    }
    (width as usize)
        .checked_mul(height as usize)
        .ok_or(Error::InvalidDimension { width, height })
}

/// Allocate a pixel vector, reporting exhaustion instead of aborting.
fn alloc_pixels(len: usize, fill: u32) -> Result<Vec<u32>> {
    let mut data = Vec::new();
    data.try_reserve_exact(len)
        .map_err(|_| Error::AllocationFailed(len))?;
    data.resize(len, fill);
    Ok(data)
}

/// RasterBuffer - Main image container
///
/// # Examples
///
/// ```
/// use leafscope_core::{RasterBuffer, color};
///
/// let raster = RasterBuffer::new_filled(4, 3, color::compose_rgb(10, 200, 30)).unwrap();
/// assert_eq!(raster.width(), 4);
/// assert_eq!(raster.height(), 3);
/// assert_eq!(raster.get_rgba(0, 0), Some((10, 200, 30, 255)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterBuffer {
    inner: Arc<RasterData>,
}

impl RasterBuffer {
    /// Create a new raster with every pixel set to `0` (transparent black).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0, and
    /// [`Error::AllocationFailed`] if the pixel storage cannot be reserved.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::new_filled(width, height, 0)
    }

    /// Create a new raster with every pixel set to `pixel`.
    pub fn new_filled(width: u32, height: u32, pixel: u32) -> Result<Self> {
        let len = pixel_count(width, height)?;
        let data = alloc_pixels(len, pixel)?;
        Ok(Self::from_parts(width, height, data))
    }

    /// Create a raster from packed `0xRRGGBBAA` pixels.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferSizeMismatch`] if `data.len() != width * height`.
    pub fn from_pixels(width: u32, height: u32, data: Vec<u32>) -> Result<Self> {
        let expected = pixel_count(width, height)?;
        if data.len() != expected {
            return Err(Error::BufferSizeMismatch {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self::from_parts(width, height, data))
    }

    /// Create a raster from interleaved 8-bit RGBA bytes.
    ///
    /// This is the layout produced by most decoders: `[r, g, b, a, r, g, ...]`.
    pub fn from_rgba_bytes(width: u32, height: u32, bytes: &[u8]) -> Result<Self> {
        let expected = pixel_count(width, height)?;
        if bytes.len() != expected * 4 {
            return Err(Error::BufferSizeMismatch {
                width,
                height,
                expected: expected * 4,
                actual: bytes.len(),
            });
        }
        let mut data = Vec::new();
        data.try_reserve_exact(expected)
            .map_err(|_| Error::AllocationFailed(expected))?;
        data.extend(
            bytes
                .chunks_exact(4)
                .map(|p| color::compose_rgba(p[0], p[1], p[2], p[3])),
        );
        Ok(Self::from_parts(width, height, data))
    }

    /// Create a raster by evaluating `f(x, y)` for every pixel, row by row.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Result<Self>
    where
        F: FnMut(u32, u32) -> u32,
    {
        let mut out = Self::new(width, height)?.into_mut();
        for y in 0..height {
            let row = out.row_data_mut(y);
            for (x, slot) in row.iter_mut().enumerate() {
                *slot = f(x as u32, y);
            }
        }
        Ok(out.into())
    }

    /// Create a new raster by applying `f` to every pixel of this one.
    ///
    /// The source is left untouched; the result has the same dimensions.
    pub fn map_pixels<F>(&self, f: F) -> Result<Self>
    where
        F: Fn(u32) -> u32,
    {
        let len = self.inner.data.len();
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| Error::AllocationFailed(len))?;
        data.extend(self.inner.data.iter().map(|&p| f(p)));
        Ok(Self::from_parts(self.inner.width, self.inner.height, data))
    }

    fn from_parts(width: u32, height: u32, data: Vec<u32>) -> Self {
        RasterBuffer {
            inner: Arc::new(RasterData {
                width,
                height,
                data,
            }),
        }
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the number of pixels (`width * height`).
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.inner.data.len()
    }

    /// Get raw access to the packed pixel data.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Get the pixels of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_data(&self, y: u32) -> &[u32] {
        let w = self.inner.width as usize;
        let start = y as usize * w;
        &self.inner.data[start..start + w]
    }

    /// Iterate over `(x, y, pixel)` in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32, u32)> + '_ {
        let w = self.inner.width;
        self.inner
            .data
            .iter()
            .enumerate()
            .map(move |(i, &p)| (i as u32 % w, i as u32 / w, p))
    }

    /// Serialize to interleaved 8-bit RGBA bytes.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.inner.data.len() * 4);
        for &p in &self.inner.data {
            let (r, g, b, a) = color::extract_rgba(p);
            bytes.extend_from_slice(&[r, g, b, a]);
        }
        bytes
    }

    /// Get the number of strong references to this raster's storage.
    #[inline]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Check if two rasters have the same width and height.
    pub fn sizes_equal(&self, other: &RasterBuffer) -> bool {
        self.inner.width == other.inner.width && self.inner.height == other.inner.height
    }

    /// Create a new zeroed raster with the same dimensions.
    pub fn create_template(&self) -> Result<Self> {
        Self::new(self.inner.width, self.inner.height)
    }

    /// Create a deep copy of this raster.
    ///
    /// Unlike `clone()` which shares data via `Arc`, this allocates
    /// completely independent storage.
    pub fn deep_clone(&self) -> Result<Self> {
        let mut data = Vec::new();
        data.try_reserve_exact(self.inner.data.len())
            .map_err(|_| Error::AllocationFailed(self.inner.data.len()))?;
        data.extend_from_slice(&self.inner.data);
        Ok(Self::from_parts(self.inner.width, self.inner.height, data))
    }

    /// Try to get mutable access to the image data.
    ///
    /// Succeeds only if there is exactly one reference to the data.
    pub fn try_into_mut(self) -> std::result::Result<RasterMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(RasterMut { inner: data }),
            Err(arc) => Err(RasterBuffer { inner: arc }),
        }
    }

    /// Get mutable access, copying the data only if it is shared.
    pub fn into_mut(self) -> RasterMut {
        match self.try_into_mut() {
            Ok(m) => m,
            Err(shared) => shared.to_mut(),
        }
    }

    /// Create a mutable copy of this raster.
    pub fn to_mut(&self) -> RasterMut {
        RasterMut {
            inner: RasterData {
                width: self.inner.width,
                height: self.inner.height,
                data: self.inner.data.clone(),
            },
        }
    }
}

/// Mutable raster
///
/// Allows modification of image data. Convert back to an immutable
/// [`RasterBuffer`] using `Into<RasterBuffer>`. Exclusive access is enforced
/// at compile time, so a transform can never write into a buffer another
/// transform is reading.
#[derive(Debug)]
pub struct RasterMut {
    inner: RasterData,
}

impl RasterMut {
    /// Get the image width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get raw access to the packed pixel data.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Get mutable raw access to the packed pixel data.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u32] {
        &mut self.inner.data
    }

    /// Get the mutable pixels of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_data_mut(&mut self, y: u32) -> &mut [u32] {
        let w = self.inner.width as usize;
        let start = y as usize * w;
        &mut self.inner.data[start..start + w]
    }

    /// Set every pixel to `pixel`.
    pub fn fill(&mut self, pixel: u32) {
        self.inner.data.fill(pixel);
    }
}

impl From<RasterMut> for RasterBuffer {
    fn from(m: RasterMut) -> Self {
        RasterBuffer {
            inner: Arc::new(m.inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_zero_dimensions() {
        assert!(matches!(
            RasterBuffer::new(0, 5),
            Err(Error::InvalidDimension {
                width: 0,
                height: 5
            })
        ));
        assert!(RasterBuffer::new(5, 0).is_err());
    }

    #[test]
    fn test_from_pixels_size_mismatch() {
        let err = RasterBuffer::from_pixels(2, 2, vec![0; 3]).unwrap_err();
        assert!(matches!(
            err,
            Error::BufferSizeMismatch {
                expected: 4,
                actual: 3,
                ..
            }
        ));
    }

    #[test]
    fn test_rgba_bytes_layout() {
        let bytes = [1u8, 2, 3, 4, 5, 6, 7, 8];
        let raster = RasterBuffer::from_rgba_bytes(2, 1, &bytes).unwrap();
        assert_eq!(raster.data(), &[0x0102_0304, 0x0506_0708]);
        assert_eq!(raster.to_rgba_bytes(), bytes.to_vec());
    }

    #[test]
    fn test_from_fn_row_major() {
        let raster = RasterBuffer::from_fn(3, 2, |x, y| y * 10 + x).unwrap();
        assert_eq!(raster.data(), &[0, 1, 2, 10, 11, 12]);
        assert_eq!(raster.row_data(1), &[10, 11, 12]);
        let coords: Vec<_> = raster.pixels().map(|(x, y, _)| (x, y)).collect();
        assert_eq!(coords[4], (1, 1));
    }

    #[test]
    fn test_map_pixels_leaves_source() {
        let raster = RasterBuffer::new_filled(2, 2, color::BLACK).unwrap();
        let inverted = raster.map_pixels(|p| !p | 0xff).unwrap();
        assert!(inverted.data().iter().all(|&p| p == color::WHITE));
        assert!(raster.data().iter().all(|&p| p == color::BLACK));
    }

    #[test]
    fn test_clone_shares_deep_clone_does_not() {
        let raster = RasterBuffer::new(2, 2).unwrap();
        let shared = raster.clone();
        assert_eq!(raster.ref_count(), 2);
        let copy = raster.deep_clone().unwrap();
        assert_eq!(copy.ref_count(), 1);
        assert_eq!(copy, shared);
    }

    #[test]
    fn test_try_into_mut_requires_unique() {
        let raster = RasterBuffer::new(2, 2).unwrap();
        let shared = raster.clone();
        let raster = raster.try_into_mut().unwrap_err();
        drop(shared);
        let mut m = raster.try_into_mut().unwrap();
        m.fill(color::WHITE);
        let back: RasterBuffer = m.into();
        assert!(back.data().iter().all(|&p| p == color::WHITE));
    }

    #[test]
    fn test_into_mut_copies_when_shared() {
        let raster = RasterBuffer::new(1, 1).unwrap();
        let keep = raster.clone();
        let mut m = raster.into_mut();
        m.fill(color::WHITE);
        assert_eq!(keep.data(), &[0]);
    }
}

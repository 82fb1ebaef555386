//! Synthetic test images
//!
//! Small deterministic rasters that exercise flat regions, smooth ramps,
//! hard edges and a leaf-like shape with a midrib.

use leafscope_core::{RasterBuffer, Result, color};

/// A single opaque color everywhere.
pub fn uniform(width: u32, height: u32, r: u8, g: u8, b: u8) -> Result<RasterBuffer> {
    RasterBuffer::new_filled(width, height, color::compose_rgb(r, g, b))
}

/// Gray ramp from black at the left edge to white at the right edge.
pub fn horizontal_ramp(width: u32, height: u32) -> Result<RasterBuffer> {
    let span = width.saturating_sub(1).max(1);
    RasterBuffer::from_fn(width, height, |x, _| {
        color::compose_gray((x * 255 / span) as u8)
    })
}

/// Black and white checkerboard with square cells of `cell` pixels.
pub fn checkerboard(width: u32, height: u32, cell: u32) -> Result<RasterBuffer> {
    let cell = cell.max(1);
    RasterBuffer::from_fn(width, height, |x, y| {
        if ((x / cell) + (y / cell)) % 2 == 0 {
            color::compose_gray(32)
        } else {
            color::compose_gray(220)
        }
    })
}

/// A green elliptical leaf with a pale midrib on a light background.
pub fn leaf(width: u32, height: u32) -> Result<RasterBuffer> {
    let cx = width as f32 / 2.0;
    let cy = height as f32 / 2.0;
    let rx = (width as f32 * 0.42).max(1.0);
    let ry = (height as f32 * 0.30).max(1.0);
    RasterBuffer::from_fn(width, height, |x, y| {
        let dx = (x as f32 + 0.5 - cx) / rx;
        let dy = (y as f32 + 0.5 - cy) / ry;
        if dx * dx + dy * dy > 1.0 {
            return color::compose_rgb(236, 232, 220);
        }
        if (y as f32 + 0.5 - cy).abs() < 1.0 {
            return color::compose_rgb(180, 210, 120);
        }
        // Darker toward the margin.
        let shade = (1.0 - (dx * dx + dy * dy)).sqrt();
        let g = 90.0 + 100.0 * shade;
        color::compose_rgb((30.0 + 20.0 * shade) as u8, g as u8, 40)
    })
}

/// Copy of `raster` with every alpha channel replaced by `alpha`.
pub fn with_alpha(raster: &RasterBuffer, alpha: u8) -> Result<RasterBuffer> {
    RasterBuffer::from_fn(raster.width(), raster.height(), |x, y| {
        let (r, g, b) = color::extract_rgb(raster.get_pixel_unchecked(x, y));
        color::compose_rgba(r, g, b, alpha)
    })
}

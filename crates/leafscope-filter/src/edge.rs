//! Edge detection views
//!
//! All views here start from the luminance plane of the source and a 3x3
//! window with clamp-to-edge sampling:
//!
//! - [`gradient_magnitude`]: `sqrt(Gx^2 + Gy^2)` as gray
//! - [`skeleton`]: magnitude kept only above a threshold
//! - [`blueprint`]: white strokes on an ink background
//! - [`gradient_direction`]: gradient angle as hue
//! - [`zero_crossing`]: Laplacian response biased around mid-gray

use crate::convolve::convolve_luma;
use crate::{FilterResult, Kernel};
use leafscope_color::{Hsv, hsv_to_rgb};
use leafscope_core::{LumaPlane, RasterBuffer, color};
use std::f32::consts::PI;

/// Thresholds and colors for the Sobel-based views.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeOptions {
    /// Skeleton keeps magnitudes strictly above this value (default 50)
    pub skeleton_threshold: f32,
    /// Blueprint draws white where magnitude exceeds this value (default 30)
    pub blueprint_threshold: f32,
    /// Direction view is black where magnitude is below this value (default 20)
    pub direction_threshold: f32,
    /// Blueprint background color (default `(30, 64, 175)`)
    pub blueprint_ink: (u8, u8, u8),
}

impl Default for EdgeOptions {
    fn default() -> Self {
        Self {
            skeleton_threshold: 50.0,
            blueprint_threshold: 30.0,
            direction_threshold: 20.0,
            blueprint_ink: (30, 64, 175),
        }
    }
}

/// Horizontal and vertical Sobel responses of a luminance plane.
#[derive(Debug, Clone, PartialEq)]
pub struct SobelGradients {
    /// Response to [`Kernel::sobel_horizontal`]
    pub gx: LumaPlane,
    /// Response to [`Kernel::sobel_vertical`]
    pub gy: LumaPlane,
}

impl SobelGradients {
    /// Gradient magnitude at (x, y). Coordinates must be in range.
    #[inline]
    pub fn magnitude_at(&self, x: u32, y: u32) -> f32 {
        let i = self.index(x, y);
        self.gx.data()[i].hypot(self.gy.data()[i])
    }

    /// Gradient angle at (x, y) mapped from `[-pi, pi]` to `[0, 1]`.
    #[inline]
    pub fn direction_at(&self, x: u32, y: u32) -> f32 {
        let i = self.index(x, y);
        (self.gy.data()[i].atan2(self.gx.data()[i]) + PI) / (2.0 * PI)
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.gx.width() as usize + x as usize
    }
}

/// Compute Sobel `Gx` and `Gy` over a luminance plane.
pub fn sobel_gradients(plane: &LumaPlane) -> FilterResult<SobelGradients> {
    Ok(SobelGradients {
        gx: convolve_luma(plane, &Kernel::sobel_horizontal())?,
        gy: convolve_luma(plane, &Kernel::sobel_vertical())?,
    })
}

/// Compute the Laplacian response of a luminance plane.
pub fn laplacian_response(plane: &LumaPlane) -> FilterResult<LumaPlane> {
    convolve_luma(plane, &Kernel::laplacian())
}

fn gradients_of(pix: &RasterBuffer) -> FilterResult<SobelGradients> {
    let plane = LumaPlane::from_raster(pix)?;
    sobel_gradients(&plane)
}

/// Render the Sobel gradient magnitude as an opaque gray image.
pub fn gradient_magnitude(pix: &RasterBuffer) -> FilterResult<RasterBuffer> {
    let grad = gradients_of(pix)?;
    Ok(RasterBuffer::from_fn(pix.width(), pix.height(), |x, y| {
        color::compose_gray(color::clamp_channel(grad.magnitude_at(x, y)))
    })?)
}

/// Render only strong edges: the magnitude where it exceeds
/// `options.skeleton_threshold`, black elsewhere.
pub fn skeleton(pix: &RasterBuffer, options: &EdgeOptions) -> FilterResult<RasterBuffer> {
    let grad = gradients_of(pix)?;
    Ok(RasterBuffer::from_fn(pix.width(), pix.height(), |x, y| {
        let mag = grad.magnitude_at(x, y);
        if mag > options.skeleton_threshold {
            color::compose_gray(color::clamp_channel(mag))
        } else {
            color::BLACK
        }
    })?)
}

/// Render edges as white lines on a blueprint-ink background.
pub fn blueprint(pix: &RasterBuffer, options: &EdgeOptions) -> FilterResult<RasterBuffer> {
    let grad = gradients_of(pix)?;
    let (ir, ig, ib) = options.blueprint_ink;
    let ink = color::compose_rgb(ir, ig, ib);
    Ok(RasterBuffer::from_fn(pix.width(), pix.height(), |x, y| {
        if grad.magnitude_at(x, y) > options.blueprint_threshold {
            color::WHITE
        } else {
            ink
        }
    })?)
}

/// Render gradient orientation as a fully saturated hue.
///
/// Pixels whose magnitude is below `options.direction_threshold` are black,
/// so flat regions do not show noise-driven hues.
pub fn gradient_direction(pix: &RasterBuffer, options: &EdgeOptions) -> FilterResult<RasterBuffer> {
    let grad = gradients_of(pix)?;
    Ok(RasterBuffer::from_fn(pix.width(), pix.height(), |x, y| {
        if grad.magnitude_at(x, y) < options.direction_threshold {
            return color::BLACK;
        }
        let (r, g, b) = hsv_to_rgb(Hsv::new(grad.direction_at(x, y), 1.0, 1.0));
        color::compose_rgb(r, g, b)
    })?)
}

/// Render the Laplacian as gray, `clamp(128 + 2 * lap)`.
///
/// Flat regions come out mid-gray; sign changes of the response show as
/// dark/light transitions.
pub fn zero_crossing(pix: &RasterBuffer) -> FilterResult<RasterBuffer> {
    let plane = LumaPlane::from_raster(pix)?;
    let lap = laplacian_response(&plane)?;
    let data = lap.data();
    let w = pix.width() as usize;
    Ok(RasterBuffer::from_fn(pix.width(), pix.height(), |x, y| {
        let v = data[y as usize * w + x as usize];
        color::compose_gray(color::clamp_channel(128.0 + v * 2.0))
    })?)
}

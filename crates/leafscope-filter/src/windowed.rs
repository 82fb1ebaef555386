//! Windowed statistics and the feature map view
//!
//! Computes the mean and variance of luminance over the clamped 3x3 window
//! around each pixel. The window always holds nine samples; at borders some
//! of them repeat the edge pixel.

use crate::FilterResult;
use leafscope_core::{Error, LumaPlane, RasterBuffer, color};

/// Per-pixel 3x3 mean and variance planes.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalStats {
    /// Window mean of luminance
    pub mean: LumaPlane,
    /// Window population variance of luminance
    pub variance: LumaPlane,
}

/// Compute 3x3 window mean and variance of a luminance plane.
///
/// Variance is the population variance of the nine window samples,
/// computed about the window mean so a constant window gives exactly zero
/// up to rounding of the mean.
pub fn local_stats(plane: &LumaPlane) -> FilterResult<LocalStats> {
    let len = plane.data().len();
    let mut mean = Vec::new();
    let mut variance = Vec::new();
    mean.try_reserve_exact(len)
        .map_err(|_| Error::AllocationFailed(len))?;
    variance
        .try_reserve_exact(len)
        .map_err(|_| Error::AllocationFailed(len))?;

    for y in 0..plane.height() {
        for x in 0..plane.width() {
            let window = plane.window3x3(x, y);
            let m = window.iter().sum::<f32>() / 9.0;
            let var = window.iter().map(|v| (v - m) * (v - m)).sum::<f32>() / 9.0;
            mean.push(m);
            variance.push(var);
        }
    }

    Ok(LocalStats {
        mean: LumaPlane::from_data(plane.width(), plane.height(), mean)?,
        variance: LumaPlane::from_data(plane.width(), plane.height(), variance)?,
    })
}

/// Map a window variance to the feature map color.
///
/// `display = min(255, 4 * sqrt(variance))`, rendered as
/// `(display, 0.8 * display, 255 - display)`.
#[inline]
pub fn pixel_feature(variance: f32) -> u32 {
    let display = (variance.max(0.0).sqrt() * 4.0).min(255.0);
    color::compose_rgb(
        color::clamp_channel(display),
        color::clamp_channel(display * 0.8),
        color::clamp_channel(255.0 - display),
    )
}

/// Render local texture as a blue (smooth) to orange (busy) map.
pub fn feature_map(pix: &RasterBuffer) -> FilterResult<RasterBuffer> {
    let plane = LumaPlane::from_raster(pix)?;
    let stats = local_stats(&plane)?;
    let var = stats.variance.data();
    let w = pix.width() as usize;
    Ok(RasterBuffer::from_fn(pix.width(), pix.height(), |x, y| {
        pixel_feature(var[y as usize * w + x as usize])
    })?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_window() {
        let plane = LumaPlane::from_data(3, 3, vec![42.0; 9]).unwrap();
        let stats = local_stats(&plane).unwrap();
        assert!(stats.mean.data().iter().all(|&m| (m - 42.0).abs() < 1e-4));
        assert!(stats.variance.data().iter().all(|&v| v < 1e-6));
    }

    #[test]
    fn test_center_spike_variance() {
        // One 90 among eight zeros: mean 10, variance (80^2 + 8*10^2)/9 = 800
        let mut data = vec![0.0; 9];
        data[4] = 90.0;
        let plane = LumaPlane::from_data(3, 3, data).unwrap();
        let stats = local_stats(&plane).unwrap();
        assert!((stats.mean.get(1, 1).unwrap() - 10.0).abs() < 1e-4);
        assert!((stats.variance.get(1, 1).unwrap() - 800.0).abs() < 1e-2);
    }

    #[test]
    fn test_pixel_feature_colors() {
        assert_eq!(pixel_feature(0.0), color::compose_rgb(0, 0, 255));
        // sqrt(100) * 4 = 40
        assert_eq!(pixel_feature(100.0), color::compose_rgb(40, 32, 215));
        assert_eq!(pixel_feature(1.0e6), color::compose_rgb(255, 204, 0));
    }

    #[test]
    fn test_feature_map_flat_is_blue() {
        let pix = RasterBuffer::new_filled(4, 4, color::compose_rgb(17, 99, 3)).unwrap();
        let out = feature_map(&pix).unwrap();
        assert!(out.data().iter().all(|&p| p == color::compose_rgb(0, 0, 255)));
    }

    #[test]
    fn test_feature_map_single_pixel() {
        let pix = RasterBuffer::new_filled(1, 1, color::WHITE).unwrap();
        let out = feature_map(&pix).unwrap();
        assert_eq!(out.get_rgb(0, 0), Some((0, 0, 255)));
    }
}

//! Single-level Haar wavelet decomposition
//!
//! For each non-overlapping 2x2 block with luminance corners
//! `p1` (top-left), `p2` (top-right), `p3` (bottom-left), `p4` (bottom-right):
//!
//! ```text
//! LL = (p1 + p2 + p3 + p4) / 4
//! LH = (p1 + p2 - p3 - p4) / 4
//! HL = (p1 - p2 + p3 - p4) / 4
//! HH = (p1 - p2 - p3 + p4) / 4
//! ```
//!
//! The rendered view places the subbands in quadrants of size
//! `width/2 x height/2`: LL top-left, LH top-right, HL bottom-left and
//! HH bottom-right. Detail bands are shown offset by 128 so that a zero
//! response is mid-gray.

use crate::{TransformError, TransformResult};
use leafscope_core::{Error, LumaPlane, RasterBuffer, color};

/// Display offset added to the three detail subbands.
const DETAIL_BIAS: f32 = 128.0;

/// How to handle a source with an odd width or height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OddDimensionPolicy {
    /// Fail with [`TransformError::OddDimensions`]
    #[default]
    Reject,
    /// Drop the last column and/or row; uncovered output pixels are black
    Truncate,
}

/// Options for [`haar_decompose`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WaveletOptions {
    /// Odd-dimension handling
    pub odd: OddDimensionPolicy,
}

/// The four subbands of a one-level decomposition.
///
/// Each band is `half_width x half_height`, row-major. Detail bands hold
/// the signed, unbiased coefficients.
#[derive(Debug, Clone, PartialEq)]
pub struct WaveletCoefficients {
    half_width: u32,
    half_height: u32,
    ll: Vec<f32>,
    lh: Vec<f32>,
    hl: Vec<f32>,
    hh: Vec<f32>,
}

impl WaveletCoefficients {
    /// Width of each subband.
    pub fn half_width(&self) -> u32 {
        self.half_width
    }

    /// Height of each subband.
    pub fn half_height(&self) -> u32 {
        self.half_height
    }

    /// Approximation band.
    pub fn ll(&self) -> &[f32] {
        &self.ll
    }

    /// Vertical-difference band.
    pub fn lh(&self) -> &[f32] {
        &self.lh
    }

    /// Horizontal-difference band.
    pub fn hl(&self) -> &[f32] {
        &self.hl
    }

    /// Diagonal band.
    pub fn hh(&self) -> &[f32] {
        &self.hh
    }

    /// Coefficients `[LL, LH, HL, HH]` of block (bx, by).
    pub fn block(&self, bx: u32, by: u32) -> Option<[f32; 4]> {
        if bx >= self.half_width || by >= self.half_height {
            return None;
        }
        let i = by as usize * self.half_width as usize + bx as usize;
        Some([self.ll[i], self.lh[i], self.hl[i], self.hh[i]])
    }

    /// Tile the subbands into a `width x height` gray canvas.
    ///
    /// Pixels not covered by a quadrant are opaque black.
    pub fn to_raster(&self, width: u32, height: u32) -> TransformResult<RasterBuffer> {
        let mut out = RasterBuffer::new_filled(width, height, color::BLACK)?.into_mut();
        let (hw, hh) = (self.half_width, self.half_height);
        for by in 0..hh {
            for bx in 0..hw {
                let i = by as usize * hw as usize + bx as usize;
                let tiles = [
                    (bx, by, self.ll[i]),
                    (bx + hw, by, self.lh[i] + DETAIL_BIAS),
                    (bx, by + hh, self.hl[i] + DETAIL_BIAS),
                    (bx + hw, by + hh, self.hh[i] + DETAIL_BIAS),
                ];
                for (x, y, v) in tiles {
                    out.set_pixel(x, y, color::compose_gray(color::clamp_channel(v)))?;
                }
            }
        }
        Ok(out.into())
    }
}

/// Haar coefficients `[LL, LH, HL, HH]` of one 2x2 block.
#[inline]
pub fn haar_block(p1: f32, p2: f32, p3: f32, p4: f32) -> [f32; 4] {
    [
        (p1 + p2 + p3 + p4) / 4.0,
        (p1 + p2 - p3 - p4) / 4.0,
        (p1 - p2 + p3 - p4) / 4.0,
        (p1 - p2 - p3 + p4) / 4.0,
    ]
}

/// Decompose a luminance plane into its four Haar subbands.
///
/// # Errors
///
/// With [`OddDimensionPolicy::Reject`], an odd width or height returns
/// [`TransformError::OddDimensions`].
pub fn haar_coefficients(
    plane: &LumaPlane,
    policy: OddDimensionPolicy,
) -> TransformResult<WaveletCoefficients> {
    let (w, h) = (plane.width(), plane.height());
    if w % 2 != 0 || h % 2 != 0 {
        match policy {
            OddDimensionPolicy::Reject => {
                return Err(TransformError::OddDimensions {
                    width: w,
                    height: h,
                });
            }
            OddDimensionPolicy::Truncate => {
                log::warn!(
                    "wavelet: {}x{} is odd, dropping {} column(s) and {} row(s)",
                    w,
                    h,
                    w % 2,
                    h % 2
                );
            }
        }
    }

    let (hw, hh) = (w / 2, h / 2);
    let len = hw as usize * hh as usize;
    let mut bands: [Vec<f32>; 4] = Default::default();
    for band in &mut bands {
        band.try_reserve_exact(len)
            .map_err(|_| Error::AllocationFailed(len))?;
    }

    let data = plane.data();
    let stride = w as usize;
    for by in 0..hh as usize {
        let top = 2 * by * stride;
        let bottom = top + stride;
        for bx in 0..hw as usize {
            let x = 2 * bx;
            let coeffs = haar_block(
                data[top + x],
                data[top + x + 1],
                data[bottom + x],
                data[bottom + x + 1],
            );
            for (band, c) in bands.iter_mut().zip(coeffs) {
                band.push(c);
            }
        }
    }

    let [ll, lh, hl, hh_band] = bands;
    Ok(WaveletCoefficients {
        half_width: hw,
        half_height: hh,
        ll,
        lh,
        hl,
        hh: hh_band,
    })
}

/// Render the one-level Haar decomposition of an image.
///
/// The output has the source's dimensions and is opaque gray.
pub fn haar_decompose(pix: &RasterBuffer, options: &WaveletOptions) -> TransformResult<RasterBuffer> {
    let plane = LumaPlane::from_raster(pix)?;
    let coeffs = haar_coefficients(&plane, options.odd)?;
    coeffs.to_raster(pix.width(), pix.height())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block_image(p: [u8; 4]) -> RasterBuffer {
        RasterBuffer::from_fn(2, 2, |x, y| color::compose_gray(p[(y * 2 + x) as usize])).unwrap()
    }

    #[test]
    fn test_haar_block_worked_example() {
        let [ll, lh, hl, hh] = haar_block(100.0, 150.0, 50.0, 200.0);
        assert_eq!((ll, lh, hl, hh), (125.0, 0.0, -50.0, 25.0));
    }

    #[test]
    fn test_decompose_worked_example() {
        let pix = block_image([100, 150, 50, 200]);
        let out = haar_decompose(&pix, &WaveletOptions::default()).unwrap();
        assert_eq!(out.get_rgb(0, 0), Some((125, 125, 125)));
        assert_eq!(out.get_rgb(1, 0), Some((128, 128, 128)));
        assert_eq!(out.get_rgb(0, 1), Some((78, 78, 78)));
        assert_eq!(out.get_rgb(1, 1), Some((153, 153, 153)));
    }

    #[test]
    fn test_odd_dimensions_rejected_by_default() {
        let pix = RasterBuffer::new_filled(3, 2, color::WHITE).unwrap();
        let err = haar_decompose(&pix, &WaveletOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            TransformError::OddDimensions {
                width: 3,
                height: 2
            }
        ));
    }

    #[test]
    fn test_truncate_leaves_black_margin() {
        let pix = RasterBuffer::new_filled(5, 3, color::compose_gray(60)).unwrap();
        let opts = WaveletOptions {
            odd: OddDimensionPolicy::Truncate,
        };
        let out = haar_decompose(&pix, &opts).unwrap();
        assert_eq!((out.width(), out.height()), (5, 3));
        assert_eq!(out.get_rgb(0, 0), Some((60, 60, 60)));
        assert_eq!(out.get_rgb(2, 0), Some((128, 128, 128)));
        assert_eq!(out.get_pixel(4, 0), Some(color::BLACK));
        assert_eq!(out.get_pixel(0, 2), Some(color::BLACK));
    }

    #[test]
    fn test_truncate_single_pixel_is_black() {
        let pix = RasterBuffer::new_filled(1, 1, color::WHITE).unwrap();
        let opts = WaveletOptions {
            odd: OddDimensionPolicy::Truncate,
        };
        let out = haar_decompose(&pix, &opts).unwrap();
        assert_eq!(out.data(), &[color::BLACK]);
    }

    #[test]
    fn test_coefficient_bands() {
        let plane = LumaPlane::from_data(4, 2, vec![1.0, 3.0, 5.0, 5.0, 1.0, 3.0, 5.0, 5.0]).unwrap();
        let c = haar_coefficients(&plane, OddDimensionPolicy::Reject).unwrap();
        assert_eq!((c.half_width(), c.half_height()), (2, 1));
        assert_eq!(c.block(0, 0), Some([2.0, 0.0, -1.0, 0.0]));
        assert_eq!(c.block(1, 0), Some([5.0, 0.0, 0.0, 0.0]));
        assert_eq!(c.block(2, 0), None);
    }
}

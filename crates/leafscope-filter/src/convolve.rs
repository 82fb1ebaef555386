//! Convolution operations
//!
//! Convolves a floating-point luminance plane with a [`Kernel`]. Results are
//! kept unclamped so that signed responses (Sobel, Laplacian) survive until
//! each view decides how to display them.

use crate::{FilterResult, Kernel};
use leafscope_core::{Error, LumaPlane};

/// Convolve a luminance plane with a kernel.
///
/// Uses replicate (clamp) border handling: samples outside the plane take
/// the value of the nearest edge pixel. The output has the input's size.
pub fn convolve_luma(plane: &LumaPlane, kernel: &Kernel) -> FilterResult<LumaPlane> {
    let w = plane.width() as i32;
    let h = plane.height() as i32;
    let kw = kernel.width() as i32;
    let kh = kernel.height() as i32;
    let cx = kernel.center_x() as i32;
    let cy = kernel.center_y() as i32;
    let kdata = kernel.data();

    let len = plane.data().len();
    let mut out = Vec::new();
    out.try_reserve_exact(len)
        .map_err(|_| Error::AllocationFailed(len))?;

    for y in 0..h {
        for x in 0..w {
            let mut sum = 0.0f32;
            for ky in 0..kh {
                for kx in 0..kw {
                    let k = kdata[(ky * kw + kx) as usize];
                    if k != 0.0 {
                        sum += k * plane.sample_clamped(x + kx - cx, y + ky - cy);
                    }
                }
            }
            out.push(sum);
        }
    }

    Ok(LumaPlane::from_data(plane.width(), plane.height(), out)?)
}

//! Convolution kernels
//!
//! Small rectangular weight grids with a designated center. The fixed
//! kernels used by the edge views are 3x3 with center (1, 1).

use crate::{FilterError, FilterResult};

/// A 2D convolution kernel
///
/// Applied as a correlation: weight `(kx, ky)` multiplies the sample at
/// offset `(kx - cx, ky - cy)` from the output pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    /// Width of the kernel
    width: u32,
    /// Height of the kernel
    height: u32,
    /// X coordinate of the center
    cx: u32,
    /// Y coordinate of the center
    cy: u32,
    /// Kernel data (row-major order)
    data: Vec<f32>,
}

impl Kernel {
    /// Create a kernel from row-major values, centered at
    /// `(width / 2, height / 2)`.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidKernel`] if a dimension is 0 or
    /// `data.len() != width * height`.
    pub fn from_slice(width: u32, height: u32, data: &[f32]) -> FilterResult<Self> {
        if width == 0 || height == 0 {
            return Err(FilterError::InvalidKernel(format!(
                "kernel dimensions must be nonzero, got {width}x{height}"
            )));
        }
        let expected = width as usize * height as usize;
        if data.len() != expected {
            return Err(FilterError::InvalidKernel(format!(
                "expected {expected} values, got {}",
                data.len()
            )));
        }
        Ok(Kernel {
            width,
            height,
            cx: width / 2,
            cy: height / 2,
            data: data.to_vec(),
        })
    }

    fn fixed3x3(data: [f32; 9]) -> Self {
        Kernel {
            width: 3,
            height: 3,
            cx: 1,
            cy: 1,
            data: data.to_vec(),
        }
    }

    /// Sobel kernel responding to horizontal intensity change (`Gx`).
    ///
    /// ```text
    /// -1  0  1
    /// -2  0  2
    /// -1  0  1
    /// ```
    pub fn sobel_horizontal() -> Self {
        Self::fixed3x3([-1.0, 0.0, 1.0, -2.0, 0.0, 2.0, -1.0, 0.0, 1.0])
    }

    /// Sobel kernel responding to vertical intensity change (`Gy`).
    ///
    /// ```text
    /// -1 -2 -1
    ///  0  0  0
    ///  1  2  1
    /// ```
    pub fn sobel_vertical() -> Self {
        Self::fixed3x3([-1.0, -2.0, -1.0, 0.0, 0.0, 0.0, 1.0, 2.0, 1.0])
    }

    /// 4-neighbor Laplacian kernel.
    pub fn laplacian() -> Self {
        Self::fixed3x3([0.0, 1.0, 0.0, 1.0, -4.0, 1.0, 0.0, 1.0, 0.0])
    }

    /// Get the kernel width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the kernel height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the center X coordinate.
    #[inline]
    pub fn center_x(&self) -> u32 {
        self.cx
    }

    /// Get the center Y coordinate.
    #[inline]
    pub fn center_y(&self) -> u32 {
        self.cy
    }

    /// Get the kernel data.
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Get a value at (x, y).
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<f32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[y as usize * self.width as usize + x as usize])
    }

    /// Get the sum of all kernel values.
    pub fn sum(&self) -> f32 {
        self.data.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_kernels_are_zero_sum() {
        for k in [
            Kernel::sobel_horizontal(),
            Kernel::sobel_vertical(),
            Kernel::laplacian(),
        ] {
            assert_eq!(k.sum(), 0.0);
            assert_eq!((k.center_x(), k.center_y()), (1, 1));
        }
    }

    #[test]
    fn test_sobel_layout() {
        let gx = Kernel::sobel_horizontal();
        assert_eq!(gx.get(0, 1), Some(-2.0));
        assert_eq!(gx.get(2, 1), Some(2.0));
        let gy = Kernel::sobel_vertical();
        assert_eq!(gy.get(1, 0), Some(-2.0));
        assert_eq!(gy.get(1, 2), Some(2.0));
        assert_eq!(gy.get(3, 0), None);
    }

    #[test]
    fn test_from_slice_validation() {
        assert!(Kernel::from_slice(0, 3, &[]).is_err());
        assert!(Kernel::from_slice(2, 2, &[1.0; 3]).is_err());
        let k = Kernel::from_slice(5, 1, &[1.0; 5]).unwrap();
        assert_eq!((k.center_x(), k.center_y()), (2, 0));
    }
}

//! Analysis options

use leafscope_color::DEFAULT_BINARY_THRESHOLD;
use leafscope_filter::EdgeOptions;
use leafscope_transform::{OddDimensionPolicy, WaveletOptions};

/// Tunable parameters shared by all views.
///
/// The defaults reproduce the reference catalogue; [`crate::render`] always
/// uses them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisOptions {
    /// Binary view: white where luminance exceeds this (default 128)
    pub binary_threshold: u8,
    /// Skeleton view magnitude cutoff (default 50)
    pub skeleton_threshold: f32,
    /// Blueprint view magnitude cutoff (default 30)
    pub blueprint_threshold: f32,
    /// Gradient direction view magnitude floor (default 20)
    pub direction_threshold: f32,
    /// Blueprint background (default `(30, 64, 175)`)
    pub blueprint_ink: (u8, u8, u8),
    /// Wavelet handling of odd sizes (default reject)
    pub wavelet_odd: OddDimensionPolicy,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        let edge = EdgeOptions::default();
        Self {
            binary_threshold: DEFAULT_BINARY_THRESHOLD,
            skeleton_threshold: edge.skeleton_threshold,
            blueprint_threshold: edge.blueprint_threshold,
            direction_threshold: edge.direction_threshold,
            blueprint_ink: edge.blueprint_ink,
            wavelet_odd: OddDimensionPolicy::default(),
        }
    }
}

impl AnalysisOptions {
    /// Options for the Sobel-based views.
    pub fn edge_options(&self) -> EdgeOptions {
        EdgeOptions {
            skeleton_threshold: self.skeleton_threshold,
            blueprint_threshold: self.blueprint_threshold,
            direction_threshold: self.direction_threshold,
            blueprint_ink: self.blueprint_ink,
        }
    }

    /// Options for the wavelet view.
    pub fn wavelet_options(&self) -> WaveletOptions {
        WaveletOptions {
            odd: self.wavelet_odd,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = AnalysisOptions::default();
        assert_eq!(opts.binary_threshold, 128);
        assert_eq!(opts.skeleton_threshold, 50.0);
        assert_eq!(opts.blueprint_threshold, 30.0);
        assert_eq!(opts.direction_threshold, 20.0);
        assert_eq!(opts.blueprint_ink, (30, 64, 175));
        assert_eq!(opts.wavelet_odd, OddDimensionPolicy::Reject);
        assert_eq!(opts.edge_options(), EdgeOptions::default());
    }
}

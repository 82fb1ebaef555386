//! The view catalogue
//!
//! [`ViewSelector`] is a closed set; every value maps to exactly one
//! transform. Names are stable, lowercase and hyphenated so they can be used
//! in file names and on the command line.

use crate::{ViewError, ViewResult};
use std::fmt;
use std::str::FromStr;

/// Which representation of the source to render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ViewSelector {
    /// Unmodified copy of the source
    Original,
    /// BT.601 luminance as gray
    Grayscale,
    /// Strong Sobel edges only
    Skeleton,
    /// Luminance as blue-green-red false color
    Heatmap,
    /// White edges on blueprint ink
    Blueprint,
    /// Inverted, contrast-stretched luminance
    XRay,
    /// Green-boosted tint
    Eco,
    /// Black/white luminance threshold
    Binary,
    /// H, S, V shown as R, G, B
    HsvRecolor,
    /// Sobel gradient magnitude
    GradientMagnitude,
    /// Sobel gradient angle as hue
    GradientDirection,
    /// Laplacian response around mid-gray
    ZeroCrossing,
    /// One-level Haar subbands in quadrants
    Wavelet,
    /// Local 3x3 variance map
    FeatureMap,
}

/// Broad family of a view, by the pixels each output depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    /// Output equals the input
    Identity,
    /// Each output pixel depends only on the same input pixel
    Point,
    /// Each output pixel depends on the clamped 3x3 window around it
    Neighborhood,
    /// Output pixels come from 2x2 input blocks, re-tiled
    MultiResolution,
}

impl ViewSelector {
    /// Every view, in catalogue order.
    pub const ALL: [ViewSelector; 14] = [
        ViewSelector::Original,
        ViewSelector::Grayscale,
        ViewSelector::Skeleton,
        ViewSelector::Heatmap,
        ViewSelector::Blueprint,
        ViewSelector::XRay,
        ViewSelector::Eco,
        ViewSelector::Binary,
        ViewSelector::HsvRecolor,
        ViewSelector::GradientMagnitude,
        ViewSelector::GradientDirection,
        ViewSelector::ZeroCrossing,
        ViewSelector::Wavelet,
        ViewSelector::FeatureMap,
    ];

    /// Stable machine name, e.g. `"gradient-magnitude"`.
    pub fn name(self) -> &'static str {
        match self {
            ViewSelector::Original => "original",
            ViewSelector::Grayscale => "grayscale",
            ViewSelector::Skeleton => "skeleton",
            ViewSelector::Heatmap => "heatmap",
            ViewSelector::Blueprint => "blueprint",
            ViewSelector::XRay => "xray",
            ViewSelector::Eco => "eco",
            ViewSelector::Binary => "binary",
            ViewSelector::HsvRecolor => "hsv-recolor",
            ViewSelector::GradientMagnitude => "gradient-magnitude",
            ViewSelector::GradientDirection => "gradient-direction",
            ViewSelector::ZeroCrossing => "zero-crossing",
            ViewSelector::Wavelet => "wavelet",
            ViewSelector::FeatureMap => "feature-map",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            ViewSelector::Original => "Original",
            ViewSelector::Grayscale => "Grayscale",
            ViewSelector::Skeleton => "Skeleton",
            ViewSelector::Heatmap => "Heatmap",
            ViewSelector::Blueprint => "Blueprint",
            ViewSelector::XRay => "X-Ray",
            ViewSelector::Eco => "Eco",
            ViewSelector::Binary => "Binary",
            ViewSelector::HsvRecolor => "HSV Recolor",
            ViewSelector::GradientMagnitude => "Gradient Magnitude",
            ViewSelector::GradientDirection => "Gradient Direction",
            ViewSelector::ZeroCrossing => "Zero Crossing",
            ViewSelector::Wavelet => "Wavelet",
            ViewSelector::FeatureMap => "Feature Map",
        }
    }

    /// One-line description of what the view shows.
    pub fn description(self) -> &'static str {
        match self {
            ViewSelector::Original => "the source image as decoded",
            ViewSelector::Grayscale => "perceptual brightness only",
            ViewSelector::Skeleton => "vein and margin edges above the noise floor",
            ViewSelector::Heatmap => "brightness as blue (dark) through green to red (bright)",
            ViewSelector::Blueprint => "edges drawn in white on blueprint blue",
            ViewSelector::XRay => "inverted brightness with doubled contrast",
            ViewSelector::Eco => "green channel boosted, red and blue damped",
            ViewSelector::Binary => "bright areas white, dark areas black",
            ViewSelector::HsvRecolor => "hue, saturation and value in the red, green and blue channels",
            ViewSelector::GradientMagnitude => "edge strength at every pixel",
            ViewSelector::GradientDirection => "edge orientation as hue, black where edges are weak",
            ViewSelector::ZeroCrossing => "second-derivative response centered on mid-gray",
            ViewSelector::Wavelet => "approximation and detail subbands of one Haar level",
            ViewSelector::FeatureMap => "local texture: blue where smooth, orange where busy",
        }
    }

    /// Pixel dependency family of this view.
    pub fn kind(self) -> ViewKind {
        match self {
            ViewSelector::Original => ViewKind::Identity,
            ViewSelector::Grayscale
            | ViewSelector::Heatmap
            | ViewSelector::XRay
            | ViewSelector::Eco
            | ViewSelector::Binary
            | ViewSelector::HsvRecolor => ViewKind::Point,
            ViewSelector::Skeleton
            | ViewSelector::Blueprint
            | ViewSelector::GradientMagnitude
            | ViewSelector::GradientDirection
            | ViewSelector::ZeroCrossing
            | ViewSelector::FeatureMap => ViewKind::Neighborhood,
            ViewSelector::Wavelet => ViewKind::MultiResolution,
        }
    }

    /// Whether the view reads a 3x3 window around each pixel.
    pub fn is_neighborhood(self) -> bool {
        self.kind() == ViewKind::Neighborhood
    }
}

impl fmt::Display for ViewSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lowercase and drop separators so `"Zero_Crossing"`, `"zero-crossing"` and
/// `"zerocrossing"` compare equal.
fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

impl FromStr for ViewSelector {
    type Err = ViewError;

    fn from_str(s: &str) -> ViewResult<Self> {
        let wanted = normalize(s.trim());
        ViewSelector::ALL
            .into_iter()
            .find(|v| normalize(v.name()) == wanted)
            .ok_or_else(|| ViewError::UnknownView(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_unique_and_round_trip() {
        let names: HashSet<_> = ViewSelector::ALL.iter().map(|v| v.name()).collect();
        assert_eq!(names.len(), ViewSelector::ALL.len());
        for v in ViewSelector::ALL {
            assert_eq!(v.name().parse::<ViewSelector>().unwrap(), v);
            assert_eq!(v.to_string(), v.name());
        }
    }

    #[test]
    fn test_parse_accepts_separator_variants() {
        for s in ["zero-crossing", "Zero_Crossing", "ZEROCROSSING", " zero crossing "] {
            assert_eq!(s.parse::<ViewSelector>().unwrap(), ViewSelector::ZeroCrossing);
        }
        assert_eq!("X-Ray".parse::<ViewSelector>().unwrap(), ViewSelector::XRay);
        assert_eq!("HSVRecolor".parse::<ViewSelector>().unwrap(), ViewSelector::HsvRecolor);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "sepia".parse::<ViewSelector>().unwrap_err();
        assert!(matches!(err, ViewError::UnknownView(ref s) if s == "sepia"));
        assert!("".parse::<ViewSelector>().is_err());
    }

    #[test]
    fn test_kinds() {
        let neighborhood = ViewSelector::ALL
            .iter()
            .filter(|v| v.is_neighborhood())
            .count();
        assert_eq!(neighborhood, 6);
        assert_eq!(ViewSelector::Wavelet.kind(), ViewKind::MultiResolution);
        assert_eq!(ViewSelector::Binary.kind(), ViewKind::Point);
    }
}

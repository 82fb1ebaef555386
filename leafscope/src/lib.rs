//! leafscope - Multi-view raster analysis of leaf imagery
//!
//! Given one decoded source image, leafscope derives a fixed catalogue of
//! alternate representations for visual inspection: point-wise color
//! remaps, 3x3 neighborhood views built on Sobel and Laplacian responses,
//! a local-variance feature map, and a one-level Haar decomposition.
//!
//! # Example
//!
//! ```
//! use leafscope::{RasterBuffer, ViewSelector, color, render};
//!
//! let source = RasterBuffer::new_filled(4, 4, color::compose_rgb(40, 160, 60)).unwrap();
//! let gray = render(&source, ViewSelector::Grayscale).unwrap();
//! let (r, g, b) = gray.get_rgb(0, 0).unwrap();
//! assert!(r == g && g == b);
//! ```

mod classification;
mod error;
mod options;
mod render;
mod view;

pub use classification::LeafIdentification;
pub use error::{ViewError, ViewResult};
pub use options::AnalysisOptions;
pub use render::{render, render_all, render_many, render_with_options};
pub use view::{ViewKind, ViewSelector};

// Re-export the raster types every caller needs
pub use leafscope_core::{Error, LumaPlane, RasterBuffer, RasterMut, color, luminance};

// Re-export the operator crates as modules
pub use leafscope_color as point;
pub use leafscope_filter as filter;
pub use leafscope_io as io;
pub use leafscope_transform as transform;

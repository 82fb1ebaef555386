//! leafscope-test - Regression test framework for leafscope
//!
//! This crate provides a small regression test framework supporting three
//! modes:
//!
//! - **Generate**: Create golden files for comparison
//! - **Compare**: Compare results with golden files
//! - **Display**: Run tests without comparison (visual inspection)
//!
//! Test inputs are generated in memory by [`synthetic`] rather than loaded
//! from disk, so every regression test is self-contained.
//!
//! # Usage
//!
//! ```ignore
//! use leafscope_test::{RegParams, load_test_image};
//!
//! let mut rp = RegParams::new("grayscale");
//! let pix = load_test_image("leaf64").unwrap();
//! rp.compare_values(64.0, pix.width() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "generate", "compare", or "display"

mod error;
mod params;
pub mod synthetic;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use leafscope_core::RasterBuffer;

/// Load a named synthetic test image
///
/// # Arguments
///
/// * `name` - One of `"leaf64"`, `"leaf63"`, `"ramp32"`, `"checker16"`,
///   `"flat8"`, `"translucent16"`
///
/// # Returns
///
/// The generated image, or an error for an unknown name.
pub fn load_test_image(name: &str) -> TestResult<RasterBuffer> {
    let built = match name {
        "leaf64" => synthetic::leaf(64, 64),
        "leaf63" => synthetic::leaf(63, 47),
        "ramp32" => synthetic::horizontal_ramp(32, 8),
        "checker16" => synthetic::checkerboard(16, 16, 4),
        "flat8" => synthetic::uniform(8, 8, 90, 160, 60),
        "translucent16" => synthetic::leaf(16, 16).and_then(|p| synthetic::with_alpha(&p, 40)),
        _ => {
            return Err(TestError::ImageBuild {
                name: name.to_string(),
                message: "unknown synthetic image".to_string(),
            });
        }
    };
    built.map_err(|e| TestError::ImageBuild {
        name: name.to_string(),
        message: e.to_string(),
    })
}

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // leafscope-test is at crates/leafscope-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the golden files directory
pub fn golden_dir() -> String {
    format!("{}/tests/golden", workspace_root())
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}

//! Regression test parameters and operations

use crate::error::{TestError, TestResult};
use crate::{golden_dir, regout_dir};
use leafscope_core::RasterBuffer;
use leafscope_io::ImageFormat;
use std::fs;
use std::path::Path;

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Generate golden files
    Generate,
    /// Compare with golden files (default)
    #[default]
    Compare,
    /// Display mode - run without comparison
    Display,
}

impl RegTestMode {
    /// Parse mode from environment variable or string
    pub fn from_env() -> Self {
        match std::env::var("REGTEST_MODE")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "generate" => Self::Generate,
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// Tracks the state of a regression test, including the test name,
/// current index, mode, and success status.
pub struct RegParams {
    /// Name of the test (e.g., "wavelet")
    pub test_name: String,
    /// Current test index (incremented before each check)
    index: usize,
    /// Test mode (generate, compare, or display)
    pub mode: RegTestMode,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// The mode is taken from the `REGTEST_MODE` environment variable.
    pub fn new(test_name: &str) -> Self {
        let mode = RegTestMode::from_env();

        if mode != RegTestMode::Compare {
            let _ = fs::create_dir_all(golden_dir());
            let _ = fs::create_dir_all(regout_dir());
        }

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");
        eprintln!("Mode: {:?}", mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current test index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if in display mode
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    fn fail(&mut self, msg: String) {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
    }

    /// Compare two floating-point values
    ///
    /// Returns `true` if `|expected - actual| <= delta`.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            self.fail(msg);
            false
        } else {
            true
        }
    }

    /// Record a boolean condition as a check.
    pub fn check(&mut self, condition: bool, what: &str) -> bool {
        self.index += 1;
        if !condition {
            let msg = format!(
                "Failure in {}_reg: check for index {} - {}",
                self.test_name, self.index, what
            );
            self.fail(msg);
        }
        condition
    }

    /// Compare two rasters for exact pixel equality
    pub fn compare_raster(&mut self, pix1: &RasterBuffer, pix2: &RasterBuffer) -> bool {
        self.index += 1;

        if !pix1.sizes_equal(pix2) {
            let msg = format!(
                "Failure in {}_reg: raster comparison for index {} - dimension mismatch \
                 ({}x{} vs {}x{})",
                self.test_name,
                self.index,
                pix1.width(),
                pix1.height(),
                pix2.width(),
                pix2.height()
            );
            self.fail(msg);
            return false;
        }

        if let Some((x, y, _)) = pix1
            .pixels()
            .find(|&(x, y, p)| p != pix2.get_pixel_unchecked(x, y))
        {
            let msg = format!(
                "Failure in {}_reg: raster comparison for index {} - pixel mismatch at ({}, {})",
                self.test_name, self.index, x, y
            );
            self.fail(msg);
            return false;
        }

        true
    }

    /// Compare two byte arrays
    pub fn compare_strings(&mut self, data1: &[u8], data2: &[u8]) -> bool {
        self.index += 1;

        if data1 != data2 {
            let msg = format!(
                "Failure in {}_reg: string comparison for index {}\n\
                 sizes: {} vs {}",
                self.test_name,
                self.index,
                data1.len(),
                data2.len()
            );
            self.fail(msg);
            false
        } else {
            true
        }
    }

    /// Write a raster to file and check against its golden file
    ///
    /// In compare mode nothing is written; the raster is only checked when a
    /// golden file for this index exists.
    pub fn write_raster_and_check(
        &mut self,
        pix: &RasterBuffer,
        format: ImageFormat,
    ) -> TestResult<()> {
        self.index += 1;

        let ext = format.extension();
        let golden_path = format!(
            "{}/{}_golden.{:02}.{}",
            golden_dir(),
            self.test_name,
            self.index,
            ext
        );

        match self.mode {
            RegTestMode::Generate => {
                self.write_local(pix, format, &golden_path)?;
                eprintln!("Generated: {}", golden_path);
            }
            RegTestMode::Display => {
                let local_path = format!(
                    "{}/{}.{:02}.{}",
                    regout_dir(),
                    self.test_name,
                    self.index,
                    ext
                );
                self.write_local(pix, format, &local_path)?;
            }
            RegTestMode::Compare => {
                if !Path::new(&golden_path).exists() {
                    eprintln!("No golden file for index {}, skipping", self.index);
                    return Ok(());
                }
                match leafscope_io::read_image(&golden_path) {
                    Ok(golden) if golden == *pix => {}
                    Ok(_) => {
                        let msg = format!(
                            "Failure in {}_reg, index {}: raster differs from {}",
                            self.test_name, self.index, golden_path
                        );
                        self.fail(msg);
                    }
                    Err(e) => {
                        let msg = format!(
                            "Failure in {}_reg, index {}: cannot read {}: {}",
                            self.test_name, self.index, golden_path, e
                        );
                        self.fail(msg);
                    }
                }
            }
        }

        Ok(())
    }

    fn write_local(&self, pix: &RasterBuffer, format: ImageFormat, path: &str) -> TestResult<()> {
        leafscope_io::write_image(pix, path, format).map_err(|e| TestError::ImageWrite {
            path: path.to_string(),
            message: e.to_string(),
        })
    }

    /// Clean up and report results
    ///
    /// Returns `true` if all checks passed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all tests have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leafscope_core::color;

    #[test]
    fn test_mode_from_env() {
        let mode = RegTestMode::from_env();
        assert!(matches!(
            mode,
            RegTestMode::Compare | RegTestMode::Generate | RegTestMode::Display
        ));
    }

    #[test]
    fn test_compare_values_within_delta() {
        let mut rp = RegParams::new("test");
        assert!(rp.compare_values(100.0, 100.5, 1.0));
        assert!(rp.is_success());
    }

    #[test]
    fn test_compare_values_failure() {
        let mut rp = RegParams::new("test");
        assert!(!rp.compare_values(100.0, 200.0, 0.0));
        assert!(!rp.is_success());
        assert_eq!(rp.failures().len(), 1);
    }

    #[test]
    fn test_compare_raster_pixel_mismatch() {
        let a = RasterBuffer::new_filled(3, 3, color::WHITE).unwrap();
        let mut m = a.to_mut();
        m.set_pixel(2, 1, color::BLACK).unwrap();
        let b: RasterBuffer = m.into();

        let mut rp = RegParams::new("test");
        assert!(rp.compare_raster(&a, &a.clone()));
        assert!(!rp.compare_raster(&a, &b));
        assert!(rp.failures()[0].contains("(2, 1)"));
        assert_eq!(rp.index(), 2);
    }
}

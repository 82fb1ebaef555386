//! leafscope-io - Image decode/encode glue
//!
//! Turns encoded image bytes into a [`RasterBuffer`] for the analysis
//! pipeline and encodes rendered views back into a container format. The
//! analysis crates never depend on this one.
//!
//! - PNG read/write (feature `png-format`, default)
//! - JPEG read/write (feature `jpeg`, default)

mod error;
pub mod format;
#[cfg(feature = "jpeg")]
pub mod jpeg;
#[cfg(feature = "png-format")]
pub mod png;

pub use error::{IoError, IoResult};
pub use format::{ImageFormat, detect_format, detect_format_from_bytes};

use leafscope_core::RasterBuffer;
use std::fs::File;
use std::io::{BufReader, BufWriter, Cursor, Write};
use std::path::Path;

/// Read an image from a file, detecting the format from its header.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<RasterBuffer> {
    let path = path.as_ref();
    let format = detect_format(path)?;
    log::debug!("reading {} as {:?}", path.display(), format);
    let reader = BufReader::new(File::open(path)?);
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::read_png(reader),
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpeg::read_jpeg(reader),
        #[allow(unreachable_patterns)]
        other => Err(disabled(other)),
    }
}

/// Read an image from memory, detecting the format from its header.
pub fn read_image_mem(data: &[u8]) -> IoResult<RasterBuffer> {
    let format = detect_format_from_bytes(data)?;
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::read_png(Cursor::new(data)),
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpeg::read_jpeg(data),
        #[allow(unreachable_patterns)]
        other => Err(disabled(other)),
    }
}

/// Write an image to a file in the given format.
pub fn write_image<P: AsRef<Path>>(
    pix: &RasterBuffer,
    path: P,
    format: ImageFormat,
) -> IoResult<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    write_image_to(pix, &mut writer, format)?;
    writer.flush()?;
    log::debug!("wrote {}", path.display());
    Ok(())
}

/// Encode an image into memory in the given format.
pub fn write_image_mem(pix: &RasterBuffer, format: ImageFormat) -> IoResult<Vec<u8>> {
    let mut buffer = Vec::new();
    write_image_to(pix, &mut buffer, format)?;
    Ok(buffer)
}

fn write_image_to<W: Write>(pix: &RasterBuffer, writer: W, format: ImageFormat) -> IoResult<()> {
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::write_png(pix, writer),
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpeg::write_jpeg(pix, writer, jpeg::DEFAULT_QUALITY),
        #[allow(unreachable_patterns)]
        other => {
            let _ = writer;
            Err(disabled(other))
        }
    }
}

/// Encode a JPEG into memory with an explicit quality.
#[cfg(feature = "jpeg")]
pub fn write_jpeg_mem(pix: &RasterBuffer, quality: u8) -> IoResult<Vec<u8>> {
    let mut buffer = Vec::new();
    jpeg::write_jpeg(pix, &mut buffer, quality)?;
    Ok(buffer)
}

#[allow(dead_code)]
fn disabled(format: ImageFormat) -> IoError {
    IoError::UnsupportedFormat(format!("{:?} support is not enabled", format))
}

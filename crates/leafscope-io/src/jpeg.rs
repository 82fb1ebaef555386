//! JPEG image format support
//!
//! Reads JPEG images using the `jpeg-decoder` crate and writes them with
//! `jpeg-encoder`. Grayscale JPEGs are replicated across R, G and B; CMYK
//! JPEGs are rejected. JPEG has no alpha channel, so alpha is dropped on
//! write and set to 255 on read.

use crate::{IoError, IoResult};
use jpeg_decoder::PixelFormat;
use leafscope_core::{RasterBuffer, color};
use std::io::{Read, Write};

/// Default quality used by [`crate::write_image`] for JPEG output.
pub const DEFAULT_QUALITY: u8 = 90;

/// Read a JPEG image from a reader.
///
/// # Arguments
/// * `reader` - A reader positioned at the JPEG SOI marker (`FF D8`)
pub fn read_jpeg<R: Read>(reader: R) -> IoResult<RasterBuffer> {
    let mut decoder = jpeg_decoder::Decoder::new(reader);
    let data = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(format!("JPEG decode error: {}", e)))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("JPEG header missing".to_string()))?;

    let width = info.width as u32;
    let height = info.height as u32;

    let raster = match info.pixel_format {
        PixelFormat::L8 => {
            check_len(&data, width, height, 1)?;
            RasterBuffer::from_fn(width, height, |x, y| {
                color::compose_gray(data[(y * width + x) as usize])
            })?
        }
        PixelFormat::L16 => {
            check_len(&data, width, height, 2)?;
            RasterBuffer::from_fn(width, height, |x, y| {
                // Big-endian samples; keep the high byte.
                color::compose_gray(data[(y * width + x) as usize * 2])
            })?
        }
        PixelFormat::RGB24 => {
            check_len(&data, width, height, 3)?;
            RasterBuffer::from_fn(width, height, |x, y| {
                let idx = (y * width + x) as usize * 3;
                color::compose_rgb(data[idx], data[idx + 1], data[idx + 2])
            })?
        }
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "{:?} JPEG images are not supported",
                other
            )));
        }
    };

    log::debug!(
        "decoded JPEG {}x{} ({:?})",
        width,
        height,
        info.pixel_format
    );
    Ok(raster)
}

fn check_len(data: &[u8], width: u32, height: u32, samples: usize) -> IoResult<()> {
    let expected = width as usize * height as usize * samples;
    if data.len() < expected {
        return Err(IoError::InvalidData(format!(
            "JPEG data too short: {} bytes for {}x{}",
            data.len(),
            width,
            height
        )));
    }
    Ok(())
}

/// Write a JPEG image.
///
/// # Arguments
/// * `quality` - Encoder quality, 1..=100
pub fn write_jpeg<W: Write>(pix: &RasterBuffer, writer: W, quality: u8) -> IoResult<()> {
    let width = u16::try_from(pix.width())
        .map_err(|_| IoError::EncodeError(format!("JPEG width {} too large", pix.width())))?;
    let height = u16::try_from(pix.height())
        .map_err(|_| IoError::EncodeError(format!("JPEG height {} too large", pix.height())))?;

    let mut rgb = Vec::with_capacity(pix.pixel_count() * 3);
    for &p in pix.data() {
        let (r, g, b) = color::extract_rgb(p);
        rgb.extend_from_slice(&[r, g, b]);
    }

    let encoder = jpeg_encoder::Encoder::new(writer, quality.clamp(1, 100));
    encoder
        .encode(&rgb, width, height, jpeg_encoder::ColorType::Rgb)
        .map_err(|e| IoError::EncodeError(format!("JPEG encode error: {}", e)))?;

    log::debug!("encoded JPEG {}x{} at quality {}", width, height, quality);
    Ok(())
}

//! PNG image format support
//!
//! Every PNG color type and bit depth is decoded to 8-bit RGBA: palettes and
//! low bit depths are expanded, 16-bit samples are stripped to their high
//! byte, and gray is replicated across R, G and B.

use crate::{IoError, IoResult};
use leafscope_core::{RasterBuffer, color};
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<RasterBuffer> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::EXPAND | Transformations::STRIP_16);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    if info.bit_depth != BitDepth::Eight {
        return Err(IoError::UnsupportedFormat(format!(
            "unexpected PNG output depth after expansion: {:?}",
            info.bit_depth
        )));
    }

    let samples = match info.color_type {
        ColorType::Grayscale => 1,
        ColorType::GrayscaleAlpha => 2,
        ColorType::Rgb => 3,
        ColorType::Rgba => 4,
        ColorType::Indexed => {
            return Err(IoError::UnsupportedFormat(
                "PNG palette was not expanded".to_string(),
            ));
        }
    };

    let width = info.width;
    let height = info.height;
    let bytes_per_row = info.line_size;
    let data = &buf[..info.buffer_size()];

    let raster = RasterBuffer::from_fn(width, height, |x, y| {
        let idx = y as usize * bytes_per_row + x as usize * samples;
        let px = &data[idx..idx + samples];
        match samples {
            1 => color::compose_rgba(px[0], px[0], px[0], 255),
            2 => color::compose_rgba(px[0], px[0], px[0], px[1]),
            3 => color::compose_rgba(px[0], px[1], px[2], 255),
            _ => color::compose_rgba(px[0], px[1], px[2], px[3]),
        }
    })?;

    log::debug!(
        "decoded PNG {}x{} ({:?}, {} samples)",
        width,
        height,
        info.color_type,
        samples
    );
    Ok(raster)
}

/// Write a PNG image
///
/// The raster is always written as 8-bit RGBA so that the alpha channel
/// round-trips.
pub fn write_png<W: Write>(pix: &RasterBuffer, writer: W) -> IoResult<()> {
    let mut encoder = Encoder::new(writer, pix.width(), pix.height());
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    writer
        .write_image_data(&pix.to_rgba_bytes())
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;
    writer
        .finish()
        .map_err(|e| IoError::EncodeError(format!("PNG finish error: {}", e)))?;

    log::debug!("encoded PNG {}x{}", pix.width(), pix.height());
    Ok(())
}

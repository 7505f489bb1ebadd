//! PNG encoding for reprojected rasters.
//!
//! Two layouts are written, both 8 bits per channel, no interlace:
//! - **Grayscale (color type 0)**: one byte per pixel
//! - **RGB (color type 2)**: three bytes per pixel
//!
//! Scanlines use filter type 0 and are compressed with zlib into a single
//! IDAT chunk.

use std::io::Write;
use std::path::Path;

use crate::error::{RenderError, RenderResult};

/// PNG file signature.
pub const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

/// Pixel layout of an encoded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorType {
    Gray,
    Rgb,
}

impl ColorType {
    /// IHDR color type code.
    pub fn code(self) -> u8 {
        match self {
            ColorType::Gray => 0,
            ColorType::Rgb => 2,
        }
    }

    pub fn bytes_per_pixel(self) -> usize {
        match self {
            ColorType::Gray => 1,
            ColorType::Rgb => 3,
        }
    }
}

/// Encode an 8-bit grayscale image.
pub fn encode_gray(pixels: &[u8], width: usize, height: usize) -> RenderResult<Vec<u8>> {
    encode(pixels, width, height, ColorType::Gray)
}

/// Encode an 8-bit RGB image from interleaved `r, g, b` bytes.
pub fn encode_rgb(pixels: &[u8], width: usize, height: usize) -> RenderResult<Vec<u8>> {
    encode(pixels, width, height, ColorType::Rgb)
}

/// Encode `pixels` as a PNG with the given layout.
pub fn encode(
    pixels: &[u8],
    width: usize,
    height: usize,
    color: ColorType,
) -> RenderResult<Vec<u8>> {
    if width == 0 || height == 0 {
        return Err(RenderError::InvalidDimensions { width, height });
    }
    let expected = width * height * color.bytes_per_pixel();
    if pixels.len() != expected {
        return Err(RenderError::BufferSize {
            expected,
            actual: pixels.len(),
        });
    }

    let mut png = Vec::new();
    png.extend_from_slice(&PNG_SIGNATURE);

    let mut ihdr_data = Vec::with_capacity(13);
    ihdr_data.extend_from_slice(&(width as u32).to_be_bytes());
    ihdr_data.extend_from_slice(&(height as u32).to_be_bytes());
    ihdr_data.push(8); // bit depth
    ihdr_data.push(color.code());
    ihdr_data.push(0); // compression method
    ihdr_data.push(0); // filter method
    ihdr_data.push(0); // interlace method
    write_chunk(&mut png, b"IHDR", &ihdr_data);

    let idat_data = deflate_idat(pixels, width * color.bytes_per_pixel(), height)
        .map_err(|e| RenderError::Encode(format!("IDAT compression failed: {}", e)))?;
    write_chunk(&mut png, b"IDAT", &idat_data);

    write_chunk(&mut png, b"IEND", &[]);

    Ok(png)
}

/// Write encoded PNG bytes to `path`, replacing any existing file.
pub fn write_png(path: impl AsRef<Path>, png: &[u8]) -> RenderResult<()> {
    let path = path.as_ref();
    gaussian_grid::io::write_atomic(path, png)?;
    tracing::info!(path = %path.display(), bytes = png.len(), "Wrote PNG");
    Ok(())
}

/// Write a PNG chunk: length, type, data, CRC over type and data.
fn write_chunk(png: &mut Vec<u8>, chunk_type: &[u8; 4], data: &[u8]) {
    png.extend_from_slice(&(data.len() as u32).to_be_bytes());
    png.extend_from_slice(chunk_type);
    png.extend_from_slice(data);

    let mut hasher = crc32fast::Hasher::new();
    hasher.update(chunk_type);
    hasher.update(data);
    png.extend_from_slice(&hasher.finalize().to_be_bytes());
}

/// Prefix each scanline with filter byte 0 and zlib-compress the result.
fn deflate_idat(pixels: &[u8], stride: usize, height: usize) -> std::io::Result<Vec<u8>> {
    let mut uncompressed = Vec::with_capacity(height * (1 + stride));
    for row in pixels.chunks_exact(stride) {
        uncompressed.push(0); // filter type: none
        uncompressed.extend_from_slice(row);
    }

    let mut encoder = flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::fast());
    encoder.write_all(&uncompressed)?;
    encoder.finish()
}

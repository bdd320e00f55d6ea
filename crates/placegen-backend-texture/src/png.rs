//! Deterministic PNG writer.
//!
//! Uses fixed compression settings so the same buffer always encodes to the
//! same bytes. Re-running the generator therefore leaves every file
//! byte-identical.

use std::io::Write;

use png::{BitDepth, ColorType, Compression, Encoder, FilterType};
use thiserror::Error;

use crate::buffer::SolidBuffer;

/// Errors from PNG operations.
#[derive(Debug, Error)]
pub enum PngError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG encoding error: {0}")]
    Encoding(#[from] png::EncodingError),

    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),
}

/// PNG export configuration for deterministic output.
#[derive(Debug, Clone)]
pub struct PngConfig {
    /// Compression level. Use a fixed value for determinism.
    pub compression: Compression,
    /// Filter type. Use a fixed value for determinism.
    pub filter: FilterType,
}

impl Default for PngConfig {
    fn default() -> Self {
        Self {
            compression: Compression::Default,
            // Solid rows gain nothing from prediction filters
            filter: FilterType::NoFilter,
        }
    }
}

/// Write a solid RGBA buffer to any writer.
pub fn write_rgba_to_writer<W: Write>(
    buffer: &SolidBuffer,
    writer: W,
    config: &PngConfig,
) -> Result<(), PngError> {
    if buffer.width == 0 || buffer.height == 0 {
        return Err(PngError::InvalidDimensions(format!(
            "{}x{} has no pixels",
            buffer.width, buffer.height
        )));
    }

    let mut encoder = Encoder::new(writer, buffer.width, buffer.height);
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);
    encoder.set_compression(config.compression);
    encoder.set_filter(config.filter);

    // The png crate doesn't add timestamps or other variable metadata by default
    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(&buffer.to_rgba8())?;
    png_writer.finish()?;

    Ok(())
}

/// Compute the BLAKE3 hash of PNG data.
pub fn hash_png(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

/// Encode to a Vec<u8> and return the bytes with their hash.
pub fn write_rgba_to_vec_with_hash(
    buffer: &SolidBuffer,
    config: &PngConfig,
) -> Result<(Vec<u8>, String), PngError> {
    let mut data = Vec::new();
    write_rgba_to_writer(buffer, &mut data, config)?;
    let hash = hash_png(&data);
    Ok((data, hash))
}

#[cfg(test)]
mod tests {
    use super::*;
    use placegen_spec::Rgba8;

    fn decode(data: &[u8]) -> (png::OutputInfo, Vec<u8>) {
        let decoder = png::Decoder::new(std::io::Cursor::new(data));
        let mut reader = decoder.read_info().unwrap();
        let mut pixels = vec![0u8; reader.output_buffer_size()];
        let info = reader.next_frame(&mut pixels).unwrap();
        pixels.truncate(info.buffer_size());
        (info, pixels)
    }

    #[test]
    fn test_rgba_deterministic() {
        let buffer = SolidBuffer::new(30, 30, Rgba8::opaque(255, 100, 0)).unwrap();
        let config = PngConfig::default();

        let (data1, hash1) = write_rgba_to_vec_with_hash(&buffer, &config).unwrap();
        let (data2, hash2) = write_rgba_to_vec_with_hash(&buffer, &config).unwrap();

        assert_eq!(data1, data2, "PNG data should be identical");
        assert_eq!(hash1, hash2, "PNG hashes should be identical");
        assert_eq!(hash1.len(), 64);
    }

    #[test]
    fn test_encodes_rgba8_exactly() {
        let color = Rgba8::new(139, 69, 19, 128);
        let buffer = SolidBuffer::new(4, 20, color).unwrap();
        let (data, _) = write_rgba_to_vec_with_hash(&buffer, &PngConfig::default()).unwrap();

        let (info, pixels) = decode(&data);
        assert_eq!((info.width, info.height), (4, 20));
        assert_eq!(info.color_type, ColorType::Rgba);
        assert_eq!(info.bit_depth, BitDepth::Eight);
        assert!(pixels.chunks_exact(4).all(|px| px == color.to_array()));
    }

    #[test]
    fn test_zero_sized_buffer_rejected() {
        let buffer = SolidBuffer {
            width: 0,
            height: 10,
            color: Rgba8::opaque(0, 0, 0),
        };
        let err = write_rgba_to_vec_with_hash(&buffer, &PngConfig::default()).unwrap_err();
        assert!(matches!(err, PngError::InvalidDimensions(_)));
    }

    #[test]
    fn test_different_colors_different_hashes() {
        let config = PngConfig::default();
        let red = SolidBuffer::new(20, 20, Rgba8::opaque(255, 0, 0)).unwrap();
        let green = SolidBuffer::new(20, 20, Rgba8::opaque(0, 255, 0)).unwrap();

        let (_, red_hash) = write_rgba_to_vec_with_hash(&red, &config).unwrap();
        let (_, green_hash) = write_rgba_to_vec_with_hash(&green, &config).unwrap();
        assert_ne!(red_hash, green_hash);
    }
}

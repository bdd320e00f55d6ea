//! Solid-color pixel buffer.

use placegen_spec::Rgba8;

/// A width x height buffer where every pixel is the same RGBA color.
///
/// Pixels are expanded to bytes only when encoding, so the buffer itself is
/// just its dimensions and fill color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolidBuffer {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Fill color.
    pub color: Rgba8,
}

impl SolidBuffer {
    /// Create a new buffer filled with a color.
    ///
    /// Returns `None` if either dimension is zero or the byte size overflows `usize`.
    pub fn new(width: u32, height: u32, color: Rgba8) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }
        (width as usize)
            .checked_mul(height as usize)?
            .checked_mul(4)?;
        Some(Self {
            width,
            height,
            color,
        })
    }

    /// Number of pixels.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Convert to 8-bit RGBA bytes, row-major.
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.color.to_array().repeat(self.pixel_count())
    }
}

//! 320×200 indexed-color frame.

use crate::invariant::{InvariantViolation, Quantity};

/// Frame width in pixels.
pub const FRAME_WIDTH: usize = 320;
/// Frame height in pixels.
pub const FRAME_HEIGHT: usize = 200;
/// Frame size in bytes.
pub const FRAME_LEN: usize = FRAME_WIDTH * FRAME_HEIGHT;

/// Palette indices, row-major, one byte per pixel.
#[derive(Clone, PartialEq, Eq)]
pub struct Framebuffer {
    pixels: Box<[u8; FRAME_LEN]>,
}

impl Framebuffer {
    /// A frame with every pixel set to index 0.
    pub fn new() -> Self {
        Self {
            pixels: Box::new([0; FRAME_LEN]),
        }
    }

    /// All pixels, row-major.
    pub fn pixels(&self) -> &[u8; FRAME_LEN] {
        &self.pixels
    }

    /// Pixel at column `x`, row `y`.
    pub fn pixel(&self, x: usize, y: usize) -> Option<u8> {
        if x >= FRAME_WIDTH || y >= FRAME_HEIGHT {
            return None;
        }
        Some(self.pixels[frame_offset(x, y)])
    }

    /// One row of pixels.
    pub fn row(&self, y: usize) -> Option<&[u8]> {
        let start = y.checked_mul(FRAME_WIDTH)?;
        let end = start.checked_add(FRAME_WIDTH)?;
        self.pixels.get(start..end)
    }

    pub(crate) fn put(&mut self, offset: isize, color: u8) -> Result<(), InvariantViolation> {
        let violation = || InvariantViolation {
            quantity: Quantity::PixelOffset,
            value: i32::try_from(offset).unwrap_or(i32::MAX),
        };
        let index = usize::try_from(offset).map_err(|_| violation())?;
        let pixel = self.pixels.get_mut(index).ok_or_else(violation)?;
        *pixel = color;
        Ok(())
    }
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Framebuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let drawn = self.pixels.iter().filter(|&&p| p != 0).count();
        f.debug_struct("Framebuffer")
            .field("width", &FRAME_WIDTH)
            .field("height", &FRAME_HEIGHT)
            .field("drawn", &drawn)
            .finish()
    }
}

/// Byte offset of column `x`, row `y`.
pub const fn frame_offset(x: usize, y: usize) -> usize {
    y * FRAME_WIDTH + x
}

//! Color map (`MAP.BIN`).
//!
//! The rasterizer addresses the map relative to a fixed base, with signed
//! offsets in `[-25334, 25339]`. Only that window is ever read.

use crate::error::AssetError;

/// Base offset the rasterizer's signed offsets are relative to.
pub const COLOR_MAP_BASE: usize = 0x62FC;

/// Smallest legal offset relative to [`COLOR_MAP_BASE`].
pub const MIN_COLOR_OFFSET: i16 = -25_334;

/// Largest legal offset relative to [`COLOR_MAP_BASE`].
pub const MAX_COLOR_OFFSET: i16 = 25_339;

const REQUIRED_LEN: usize = COLOR_MAP_BASE + MAX_COLOR_OFFSET as usize + 1;

/// Owned copy of the color map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorMap {
    bytes: Vec<u8>,
}

impl ColorMap {
    /// Take ownership of `MAP.BIN`. The map may be any size that covers the
    /// addressed window.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, AssetError> {
        if bytes.len() < REQUIRED_LEN {
            return Err(AssetError::ColorMapTooSmall {
                required: REQUIRED_LEN,
                actual: bytes.len(),
            });
        }
        Ok(Self { bytes })
    }

    /// Byte at `offset` relative to the base, or `None` outside the legal window.
    pub fn at(&self, offset: i16) -> Option<u8> {
        if !(MIN_COLOR_OFFSET..=MAX_COLOR_OFFSET).contains(&offset) {
            return None;
        }
        let index = COLOR_MAP_BASE.checked_add_signed(offset as isize)?;
        self.bytes.get(index).copied()
    }

    /// Minimum byte length of a usable color map.
    pub const fn required_len() -> usize {
        REQUIRED_LEN
    }
}

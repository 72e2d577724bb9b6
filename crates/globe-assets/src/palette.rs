//! 256-entry RGB palette (`PAL.BIN`).

use crate::error::{AssetError, AssetKind};

/// Size of `PAL.BIN`.
pub const PALETTE_LEN: usize = 256 * 3;

/// One palette color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Palette consumed by presentation; the rasterizer only produces indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: [Rgb; 256],
}

impl Palette {
    /// Decode 256 `R, G, B` triples.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AssetError> {
        if bytes.len() != PALETTE_LEN {
            return Err(AssetError::SizeMismatch {
                asset: AssetKind::Palette,
                expected: PALETTE_LEN,
                actual: bytes.len(),
            });
        }
        let mut colors = [Rgb::default(); 256];
        for (color, triple) in colors.iter_mut().zip(bytes.chunks_exact(3)) {
            *color = Rgb {
                r: triple[0],
                g: triple[1],
                b: triple[2],
            };
        }
        Ok(Self { colors })
    }

    /// Color for a framebuffer index.
    pub fn rgb_of(&self, index: u8) -> Rgb {
        self.colors[index as usize]
    }
}

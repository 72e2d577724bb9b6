//! The read-only asset store handed to the renderer.

use std::path::Path;

use crate::color_map::ColorMap;
use crate::error::{AssetError, AssetKind};
use crate::outline::{OUTLINE_LEN, Outline, parse_outline};
use crate::palette::Palette;
use crate::seed::SeedTable;
use crate::slices::{SLICE_TABLE_LEN, SliceTable};

/// Outline/slice asset file name.
pub const GLOBE_DATA_FILE: &str = "GLOBDATA.BIN";
/// Seed table file name.
pub const SEED_TABLE_FILE: &str = "TABLAT.BIN";
/// Color map file name.
pub const COLOR_MAP_FILE: &str = "MAP.BIN";
/// Palette file name.
pub const PALETTE_FILE: &str = "PAL.BIN";

/// Size of `GLOBDATA.BIN`: outline, slices and one trailing byte.
pub const GLOBE_DATA_LEN: usize = OUTLINE_LEN + SLICE_TABLE_LEN + 1;

/// Parsed, validated copies of the four static blobs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobeAssets {
    outline: Outline,
    slices: SliceTable,
    seed: SeedTable,
    color_map: ColorMap,
    palette: Palette,
}

impl GlobeAssets {
    /// Validate and copy the four blobs.
    pub fn from_bytes(
        globe_data: &[u8],
        seed_table: &[u8],
        color_map: Vec<u8>,
        palette: &[u8],
    ) -> Result<Self, AssetError> {
        let size_mismatch = AssetError::SizeMismatch {
            asset: AssetKind::GlobeData,
            expected: GLOBE_DATA_LEN,
            actual: globe_data.len(),
        };
        if globe_data.len() != GLOBE_DATA_LEN {
            return Err(size_mismatch);
        }
        let (outline_bytes, rest) = globe_data
            .split_first_chunk::<OUTLINE_LEN>()
            .ok_or(size_mismatch)?;

        Ok(Self {
            outline: parse_outline(outline_bytes)?,
            slices: SliceTable::from_bytes(&rest[..SLICE_TABLE_LEN])?,
            seed: SeedTable::from_bytes(seed_table)?,
            color_map: ColorMap::from_bytes(color_map)?,
            palette: Palette::from_bytes(palette)?,
        })
    }

    /// Assemble a store from already validated parts.
    pub fn from_parts(
        outline: Outline,
        slices: SliceTable,
        seed: SeedTable,
        color_map: ColorMap,
        palette: Palette,
    ) -> Self {
        Self {
            outline,
            slices,
            seed,
            color_map,
            palette,
        }
    }

    /// Read `GLOBDATA.BIN`, `TABLAT.BIN`, `MAP.BIN` and `PAL.BIN` from `dir`.
    pub fn load(dir: &Path) -> Result<Self, AssetError> {
        let read = |name: &str| {
            let path = dir.join(name);
            std::fs::read(&path).map_err(|source| AssetError::Io { path, source })
        };

        let globe_data = read(GLOBE_DATA_FILE)?;
        let seed_table = read(SEED_TABLE_FILE)?;
        let color_map = read(COLOR_MAP_FILE)?;
        let palette = read(PALETTE_FILE)?;

        let assets = Self::from_bytes(&globe_data, &seed_table, color_map, &palette)?;
        tracing::info!(
            "Loaded globe assets from {} ({} rings)",
            dir.display(),
            assets.outline.len()
        );
        Ok(assets)
    }

    /// Outline rings.
    pub fn outline(&self) -> &Outline {
        &self.outline
    }

    /// Slice tables.
    pub fn slices(&self) -> &SliceTable {
        &self.slices
    }

    /// Rotation seed table.
    pub fn seed(&self) -> &SeedTable {
        &self.seed
    }

    /// Color map.
    pub fn color_map(&self) -> &ColorMap {
        &self.color_map
    }

    /// Palette.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }
}

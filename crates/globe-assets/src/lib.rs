//! Static binary assets of the globe renderer.
//!
//! Four immutable blobs drive every frame: the outline/slice asset
//! (`GLOBDATA.BIN`), the rotation seed table (`TABLAT.BIN`), the color map
//! (`MAP.BIN`) and the palette (`PAL.BIN`). Each blob is size-checked, parsed and
//! copied into owned, bounds-checked value arrays once at load time; nothing
//! downstream ever reinterprets raw bytes.

mod color_map;
mod error;
mod outline;
mod palette;
mod seed;
mod slices;
mod store;

pub use color_map::{COLOR_MAP_BASE, ColorMap, MAX_COLOR_OFFSET, MIN_COLOR_OFFSET};
pub use error::{AssetError, AssetKind};
pub use outline::{
    MAX_RING_MAGNITUDE, MAX_RINGS, OUTLINE_LEN, Outline, Ring, parse_outline,
};
pub use palette::{PALETTE_LEN, Palette, Rgb};
pub use seed::{ROTATION_ENTRIES, RotationEntry, SEED_TABLE_LEN, SeedTable};
pub use slices::{SLICE_COUNT, SLICE_TABLE_LEN, SLICE_VALUES, Slice, SliceTable};
pub use store::{
    COLOR_MAP_FILE, GLOBE_DATA_FILE, GLOBE_DATA_LEN, GlobeAssets, PALETTE_FILE, SEED_TABLE_FILE,
};

//! Per-position slice tables that translate tilt values into rotation lookups.
//!
//! ## Binary Layout
//!
//! 64 slices of 200 bytes directly after the outline section:
//!
//! | Offset | Size | Field |
//! |--------|------|-------|
//! | 0 | 99 | `table0`: even rotation-table indices (0..=196) |
//! | 99 | 1 | Separator |
//! | 100 | 99 | `table1`: raw displacements (0..=99) |
//! | 199 | 1 | Separator |
//!
//! Value ranges are checked where the rasterizer reads them.

use crate::error::{AssetError, AssetKind};

/// Number of slices, one per ring position.
pub const SLICE_COUNT: usize = 64;

/// Meaningful entries per half slice.
pub const SLICE_VALUES: usize = 99;

const HALF_LEN: usize = SLICE_VALUES + 1;
const SLICE_LEN: usize = 2 * HALF_LEN;

/// Size of the slice section of `GLOBDATA.BIN`.
pub const SLICE_TABLE_LEN: usize = SLICE_COUNT * SLICE_LEN;

/// The `table0`/`table1` pair for one ring position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slice {
    table0: [u8; SLICE_VALUES],
    table1: [u8; SLICE_VALUES],
}

impl Slice {
    /// Build a slice from its two halves.
    pub const fn new(table0: [u8; SLICE_VALUES], table1: [u8; SLICE_VALUES]) -> Self {
        Self { table0, table1 }
    }

    /// Even rotation-table indices.
    pub fn table0(&self) -> &[u8; SLICE_VALUES] {
        &self.table0
    }

    /// Raw displacements.
    pub fn table1(&self) -> &[u8; SLICE_VALUES] {
        &self.table1
    }

    fn from_bytes(bytes: &[u8]) -> Self {
        let mut table0 = [0u8; SLICE_VALUES];
        let mut table1 = [0u8; SLICE_VALUES];
        table0.copy_from_slice(&bytes[..SLICE_VALUES]);
        table1.copy_from_slice(&bytes[HALF_LEN..HALF_LEN + SLICE_VALUES]);
        Self { table0, table1 }
    }
}

/// All 64 slices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliceTable {
    slices: Box<[Slice; SLICE_COUNT]>,
}

impl SliceTable {
    /// Copy the slice section out of its 12800 raw bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AssetError> {
        if bytes.len() != SLICE_TABLE_LEN {
            return Err(AssetError::SizeMismatch {
                asset: AssetKind::GlobeData,
                expected: SLICE_TABLE_LEN,
                actual: bytes.len(),
            });
        }
        let mut slices = Box::new([Slice::new([0; SLICE_VALUES], [0; SLICE_VALUES]); SLICE_COUNT]);
        for (slice, chunk) in slices.iter_mut().zip(bytes.chunks_exact(SLICE_LEN)) {
            *slice = Slice::from_bytes(chunk);
        }
        Ok(Self { slices })
    }

    /// Build a table from slices supplied directly.
    pub fn from_slices(slices: [Slice; SLICE_COUNT]) -> Self {
        Self {
            slices: Box::new(slices),
        }
    }

    /// Slice for ring position `index`, or `None` past the last slice.
    pub fn get(&self, index: usize) -> Option<&Slice> {
        self.slices.get(index)
    }

    /// All slices in position order.
    pub fn slices(&self) -> &[Slice; SLICE_COUNT] {
        &self.slices
    }
}

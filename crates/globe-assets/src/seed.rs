//! Rotation seed table (`TABLAT.BIN`).
//!
//! 99 little-endian records of four `u16` fields. The first two fields seed the
//! per-frame rotation table; the fixed-point pair is overwritten on every
//! rebuild. What the seed magnitude and seed scale stand for is not documented
//! by the data, so they are carried as plain numbers.

use crate::error::{AssetError, AssetKind};

/// Entries in the seed table and in every rotation table built from it.
pub const ROTATION_ENTRIES: usize = 99;

const ENTRY_LEN: usize = 8;

/// Size of `TABLAT.BIN`.
pub const SEED_TABLE_LEN: usize = ROTATION_ENTRIES * ENTRY_LEN;

/// One rotation-table record.
///
/// Layout (8 bytes, little-endian):
///   - `[0..2]` seed_magnitude
///   - `[2..4]` seed_scale
///   - `[4..6]` fp_hi: integer word of the derived 16.16 value
///   - `[6..8]` fp_lo: fractional word of the derived 16.16 value
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RotationEntry {
    /// Seed magnitude, copied unchanged from the seed table.
    pub seed_magnitude: u16,
    /// Seed scale, copied unchanged from the seed table.
    pub seed_scale: u16,
    /// Integer word of the derived fixed-point value.
    pub fp_hi: u16,
    /// Fractional word of the derived fixed-point value.
    pub fp_lo: u16,
}

static_assertions::assert_eq_size!(RotationEntry, [u8; ENTRY_LEN]);

impl RotationEntry {
    /// Entry with the given seeds and a zero fixed-point value.
    pub const fn seed(seed_magnitude: u16, seed_scale: u16) -> Self {
        Self {
            seed_magnitude,
            seed_scale,
            fp_hi: 0,
            fp_lo: 0,
        }
    }

    fn from_le_bytes(chunk: &[u8]) -> Self {
        let word = |i: usize| u16::from_le_bytes([chunk[2 * i], chunk[2 * i + 1]]);
        Self {
            seed_magnitude: word(0),
            seed_scale: word(1),
            fp_hi: word(2),
            fp_lo: word(3),
        }
    }
}

/// The immutable seed records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedTable {
    entries: [RotationEntry; ROTATION_ENTRIES],
}

impl SeedTable {
    /// Decode `TABLAT.BIN`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AssetError> {
        if bytes.len() != SEED_TABLE_LEN {
            return Err(AssetError::SizeMismatch {
                asset: AssetKind::SeedTable,
                expected: SEED_TABLE_LEN,
                actual: bytes.len(),
            });
        }
        let mut entries = [RotationEntry::default(); ROTATION_ENTRIES];
        for (entry, chunk) in entries.iter_mut().zip(bytes.chunks_exact(ENTRY_LEN)) {
            *entry = RotationEntry::from_le_bytes(chunk);
        }
        Ok(Self { entries })
    }

    /// Build a table from records supplied directly.
    pub const fn from_entries(entries: [RotationEntry; ROTATION_ENTRIES]) -> Self {
        Self { entries }
    }

    /// Records in index order.
    pub fn entries(&self) -> &[RotationEntry; ROTATION_ENTRIES] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_little_endian() {
        let mut bytes = vec![0u8; SEED_TABLE_LEN];
        bytes[8..16].copy_from_slice(&[0xF6, 0x62, 0xC7, 0x00, 0x8D, 0x01, 0x34, 0x12]);
        let table = SeedTable::from_bytes(&bytes).unwrap();
        let entry = table.entries()[1];
        assert_eq!(entry.seed_magnitude, 25_334);
        assert_eq!(entry.seed_scale, 199);
        assert_eq!(entry.fp_hi, 397);
        assert_eq!(entry.fp_lo, 0x1234);
        assert_eq!(table.entries()[0], RotationEntry::default());
    }

    #[test]
    fn test_wrong_size_rejected() {
        assert!(matches!(
            SeedTable::from_bytes(&[0u8; 800]),
            Err(AssetError::SizeMismatch {
                asset: AssetKind::SeedTable,
                expected: 792,
                actual: 800
            })
        ));
    }
}

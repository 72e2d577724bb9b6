//! Per-frame rotation table.
//!
//! The rotation angle is the fractional word of a 16.16 value. Entry 0 stores the
//! angle scaled by 398 and floored; every other entry stores `2 * step * scale`
//! where `step` is that floored value, rounded and divided back down by 398.

use std::num::NonZeroU32;

use globe_assets::{ROTATION_ENTRIES, RotationEntry, SeedTable};
use globe_math::Fixed16_16;

use crate::invariant::{InvariantViolation, Quantity, check};

/// Scale factor between the rotation fraction and the integer word of entry 0.
pub const ROTATION_SPAN: NonZeroU32 = match NonZeroU32::new(398) {
    Some(span) => span,
    None => unreachable!(),
};

/// The 99 rotation entries used for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationTable {
    entries: [RotationEntry; ROTATION_ENTRIES],
}

impl RotationTable {
    /// Entries in index order.
    pub fn entries(&self) -> &[RotationEntry; ROTATION_ENTRIES] {
        &self.entries
    }

    /// Entry at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<&RotationEntry> {
        self.entries.get(index)
    }

    /// Number of entries (always 99).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Derive the rotation table for `rotation` from the immutable seed records.
///
/// Fails if entry 0 has a non-zero seed magnitude or a zero seed scale, or if any
/// later entry has a zero seed magnitude; those mean the seed table is corrupted.
pub fn build_rotation_table(
    seed: &SeedTable,
    rotation: u16,
) -> Result<RotationTable, InvariantViolation> {
    let mut entries = *seed.entries();

    let (first, rest) = entries.split_at_mut(1);
    let first = &mut first[0];
    check(Quantity::FirstSeedMagnitude, first.seed_magnitude)?;
    check(Quantity::FirstSeedScale, first.seed_scale)?;

    let base = Fixed16_16::from_fraction(rotation)
        .wrapping_mul_int(ROTATION_SPAN.get())
        .floor();
    first.fp_hi = base.hi();
    first.fp_lo = base.lo();

    let step = (base + Fixed16_16::HALF).div_int(ROTATION_SPAN).lo();

    for entry in rest {
        check(Quantity::SeedMagnitude, entry.seed_magnitude)?;
        let derived =
            Fixed16_16::from_fraction(step).wrapping_mul_int(2 * u32::from(entry.seed_scale));
        entry.fp_hi = derived.hi();
        entry.fp_lo = derived.lo();
    }

    Ok(RotationTable { entries })
}

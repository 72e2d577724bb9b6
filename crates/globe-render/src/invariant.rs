//! Range invariants of the table builders and the rasterizer.
//!
//! Every derived quantity has a documented legal range. A value outside it means
//! the static data is corrupted (or a builder is wrong); downstream offsets
//! would be garbage, so the frame is abandoned.

use std::fmt;

/// The derived quantities whose ranges are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quantity {
    /// Seed magnitude of rotation entry 0; must be zero.
    FirstSeedMagnitude,
    /// Seed scale of rotation entry 0; must be non-zero.
    FirstSeedScale,
    /// Seed magnitude of rotation entries 1..=98; must be non-zero.
    SeedMagnitude,
    /// `98 + signed magnitude`, the tilt table index.
    TiltIndex,
    /// Low byte of a tilt table value, read as signed.
    TiltLowByte,
    /// Ring position, the slice index.
    SliceIndex,
    /// `table0` value: an even index into the rotation table.
    RotationIndex,
    /// Seed magnitude of the rotation entry being drawn.
    LookupSeedMagnitude,
    /// Seed scale of the rotation entry being drawn.
    LookupSeedScale,
    /// Integer word of the rotation entry being drawn.
    FixedHalf,
    /// `table1` value.
    RawDisplacement,
    /// Adjusted displacement (`table1`, or seed scale minus `table1`).
    Displacement,
    /// Color map offset relative to the base.
    ColorOffset,
    /// Framebuffer byte offset.
    PixelOffset,
}

impl Quantity {
    /// Whether `value` lies in this quantity's legal range.
    pub fn admits(self, value: i32) -> bool {
        let even = value % 2 == 0;
        match self {
            Self::FirstSeedMagnitude => value == 0,
            Self::FirstSeedScale | Self::SeedMagnitude => value != 0,
            Self::TiltIndex => (0..=195).contains(&value),
            Self::TiltLowByte => (-98..=98).contains(&value),
            Self::SliceIndex => (0..=63).contains(&value),
            Self::RotationIndex => (0..=196).contains(&value) && even,
            Self::LookupSeedMagnitude => (0..=25_334).contains(&value) && even,
            Self::LookupSeedScale => (3..=199).contains(&value),
            Self::FixedHalf => (0..=397).contains(&value),
            Self::RawDisplacement => (0..=99).contains(&value),
            Self::Displacement => (0..=195).contains(&value),
            Self::ColorOffset => (-25_334..=25_339).contains(&value),
            Self::PixelOffset => (0..64_000).contains(&value),
        }
    }

    fn legal(self) -> &'static str {
        match self {
            Self::FirstSeedMagnitude => "0",
            Self::FirstSeedScale | Self::SeedMagnitude => "non-zero",
            Self::TiltIndex => "0..=195",
            Self::TiltLowByte => "-98..=98",
            Self::SliceIndex => "0..=63",
            Self::RotationIndex => "even, 0..=196",
            Self::LookupSeedMagnitude => "even, 0..=25334",
            Self::LookupSeedScale => "3..=199",
            Self::FixedHalf => "0..=397",
            Self::RawDisplacement => "0..=99",
            Self::Displacement => "0..=195",
            Self::ColorOffset => "-25334..=25339",
            Self::PixelOffset => "0..64000",
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::FirstSeedMagnitude => "first seed magnitude",
            Self::FirstSeedScale => "first seed scale",
            Self::SeedMagnitude => "seed magnitude",
            Self::TiltIndex => "tilt index",
            Self::TiltLowByte => "tilt low byte",
            Self::SliceIndex => "slice index",
            Self::RotationIndex => "rotation index",
            Self::LookupSeedMagnitude => "lookup seed magnitude",
            Self::LookupSeedScale => "lookup seed scale",
            Self::FixedHalf => "fixed-point integer word",
            Self::RawDisplacement => "raw displacement",
            Self::Displacement => "displacement",
            Self::ColorOffset => "color map offset",
            Self::PixelOffset => "pixel offset",
        };
        f.write_str(name)
    }
}

/// A derived value fell outside its legal range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invariant violation: {quantity} is {value}, expected {}", quantity.legal())]
pub struct InvariantViolation {
    /// Which quantity was out of range.
    pub quantity: Quantity,
    /// The offending value.
    pub value: i32,
}

/// Pass `value` through if `quantity` admits it.
pub(crate) fn check(quantity: Quantity, value: impl Into<i32>) -> Result<i32, InvariantViolation> {
    let value = value.into();
    if quantity.admits(value) {
        Ok(value)
    } else {
        Err(InvariantViolation { quantity, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_index_must_be_even() {
        assert!(Quantity::RotationIndex.admits(196));
        assert!(!Quantity::RotationIndex.admits(3));
        assert!(!Quantity::RotationIndex.admits(198));
    }

    #[test]
    fn test_color_offset_window_is_asymmetric() {
        assert!(Quantity::ColorOffset.admits(-25_334));
        assert!(Quantity::ColorOffset.admits(25_339));
        assert!(!Quantity::ColorOffset.admits(-25_335));
        assert!(!Quantity::ColorOffset.admits(25_340));
    }

    #[test]
    fn test_check_reports_quantity_and_value() {
        assert_eq!(check(Quantity::LookupSeedScale, 3u16), Ok(3));
        let err = check(Quantity::LookupSeedScale, 2u16).unwrap_err();
        assert_eq!(
            err,
            InvariantViolation {
                quantity: Quantity::LookupSeedScale,
                value: 2
            }
        );
        assert_eq!(
            err.to_string(),
            "invariant violation: lookup seed scale is 2, expected 3..=199"
        );
    }

    #[test]
    fn test_negative_odd_values() {
        // `%` keeps the sign of the dividend; odd negatives must still be odd.
        assert!(!Quantity::LookupSeedMagnitude.admits(-1));
        assert!(!Quantity::RotationIndex.admits(-2));
    }
}

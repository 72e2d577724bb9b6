use std::num::NonZeroU32;
use std::ops::Add;

use crate::wrap::{hi_word, lo_word};

/// Unsigned 16.16 fixed-point number held in a 32-bit `dx:ax` register pair.
///
/// Layout: [16 integer bits][16 fractional bits]
///
/// The raw u32 value equals (real_value × 2¹⁶). Every operation wraps modulo 2³²,
/// like 32-bit products and sums on a 16-bit machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Fixed16_16 {
    raw: u32,
}

const FRAC_BITS: u32 = 16;
const FRAC_MASK: u32 = (1 << FRAC_BITS) - 1;

impl Fixed16_16 {
    /// One half (0x8000) in 16.16.
    pub const HALF: Fixed16_16 = Fixed16_16 { raw: 1 << (FRAC_BITS - 1) };

    /// A value in `[0, 1)` whose fractional word is `fraction`.
    pub const fn from_fraction(fraction: u16) -> Self {
        Self {
            raw: fraction as u32,
        }
    }

    /// Integer word.
    pub const fn hi(self) -> u16 {
        hi_word(self.raw)
    }

    /// Fractional word.
    pub const fn lo(self) -> u16 {
        lo_word(self.raw)
    }

    /// Round toward zero by clearing the fractional word.
    pub const fn floor(self) -> Self {
        Self {
            raw: self.raw & !FRAC_MASK,
        }
    }

    /// Multiply by a plain integer, wrapping modulo 2³².
    pub const fn wrapping_mul_int(self, factor: u32) -> Self {
        Self {
            raw: self.raw.wrapping_mul(factor),
        }
    }

    /// Divide the raw value by a plain integer (unsigned `div`, truncating).
    pub const fn div_int(self, divisor: NonZeroU32) -> Self {
        Self {
            raw: self.raw / divisor.get(),
        }
    }
}

impl Add for Fixed16_16 {
    type Output = Fixed16_16;

    fn add(self, rhs: Fixed16_16) -> Self::Output {
        Fixed16_16 {
            raw: self.raw.wrapping_add(rhs.raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span() -> NonZeroU32 {
        NonZeroU32::new(398).unwrap()
    }

    #[test]
    fn test_fraction_has_zero_integer_part() {
        let v = Fixed16_16::from_fraction(0xFFFF);
        assert_eq!(v.hi(), 0);
        assert_eq!(v.lo(), 0xFFFF);
    }

    #[test]
    fn test_floor_clears_fraction() {
        // 0x1234 * 0x50 = 0x5_B040
        let v = Fixed16_16::from_fraction(0x1234).wrapping_mul_int(0x50);
        assert_eq!((v.hi(), v.lo()), (0x5, 0xB040));
        let floored = v.floor();
        assert_eq!((floored.hi(), floored.lo()), (0x5, 0));
    }

    #[test]
    fn test_half() {
        assert_eq!((Fixed16_16::HALF.hi(), Fixed16_16::HALF.lo()), (0, 0x8000));
    }

    #[test]
    fn test_mul_int_scales_fraction_into_integer_part() {
        // 0.5 * 398 = 199.0
        let v = Fixed16_16::from_fraction(0x8000).wrapping_mul_int(398);
        assert_eq!(v.hi(), 199);
        assert_eq!(v.lo(), 0);
    }

    #[test]
    fn test_mul_int_wraps_at_32_bits() {
        // 0x8000 * 0x2_0000 = 2^32
        let v = Fixed16_16::from_fraction(0x8000).wrapping_mul_int(0x2_0000);
        assert_eq!(v, Fixed16_16::default());
    }

    #[test]
    fn test_add_wraps_at_32_bits() {
        // 0xFFFF * 0x1_0001 = 0xFFFF_FFFF
        let max = Fixed16_16::from_fraction(0xFFFF).wrapping_mul_int(0x1_0001);
        assert_eq!((max.hi(), max.lo()), (0xFFFF, 0xFFFF));
        let v = max + Fixed16_16::from_fraction(2);
        assert_eq!((v.hi(), v.lo()), (0, 1));
    }

    #[test]
    fn test_div_int_truncates() {
        let v = Fixed16_16::HALF.div_int(span());
        assert_eq!((v.hi(), v.lo()), (0, 82));

        // 199.5 / 398 = 32850 in the fractional word
        let v = (Fixed16_16::from_fraction(0x8000).wrapping_mul_int(398) + Fixed16_16::HALF)
            .div_int(span());
        assert_eq!((v.hi(), v.lo()), (0, 32850));
    }
}

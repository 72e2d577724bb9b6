//! Explicit modular conversions between machine word widths.
//!
//! All conversions take the two's-complement bit pattern of the input and keep
//! only the low bits, which is what a 16-bit register does when a wider result
//! is stored into it. `as` casts between integer types in Rust have exactly these
//! semantics; the helpers exist so every narrowing in the renderer is visible and
//! named at the call site.

/// Keep the low 16 bits of `value`, read as unsigned.
///
/// `as_u16(-1) == 0xFFFF`, `as_u16(0x1_0005) == 5`.
#[inline]
pub const fn as_u16(value: i32) -> u16 {
    value as u16
}

/// Keep the low 16 bits of `value`, read as signed.
///
/// `as_i16(0xFF9E) == -98`, `as_i16(0x1_0000) == 0`.
#[inline]
pub const fn as_i16(value: i32) -> i16 {
    value as i16
}

/// Keep the low 8 bits of `value`, read as signed.
///
/// The sign test on the `al` half of a register:
/// `as_i8(0x0062) == 98`, `as_i8(0xFF9E) == -98`, `as_i8(0x00FF) == -1`.
#[inline]
pub const fn as_i8(value: i32) -> i8 {
    value as i8
}

/// Store the low byte of `value` into a 16-bit word with a zero high byte.
///
/// `zero_extend_byte(-1) == 0x00FF`.
#[inline]
pub const fn zero_extend_byte(value: i32) -> u16 {
    value as u8 as u16
}

/// High 16 bits of a 32-bit `dx:ax` pair.
#[inline]
pub const fn hi_word(value: u32) -> u16 {
    (value >> 16) as u16
}

/// Low 16 bits of a 32-bit `dx:ax` pair.
#[inline]
pub const fn lo_word(value: u32) -> u16 {
    value as u16
}

/// 16-bit add with wraparound.
#[inline]
pub const fn add16(a: i16, b: i16) -> i16 {
    a.wrapping_add(b)
}

/// 16-bit subtract with wraparound.
#[inline]
pub const fn sub16(a: i16, b: i16) -> i16 {
    a.wrapping_sub(b)
}

/// 16-bit negate with wraparound (`neg16(i16::MIN) == i16::MIN`).
#[inline]
pub const fn neg16(a: i16) -> i16 {
    a.wrapping_neg()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_u16_wraps_negative() {
        assert_eq!(as_u16(-1), 0xFFFF);
        assert_eq!(as_u16(-320), 0xFEC0);
        assert_eq!(as_u16(0x1_0005), 5);
    }

    #[test]
    fn test_as_i16_reinterprets_high_bit() {
        assert_eq!(as_i16(0xFF9E), -98);
        assert_eq!(as_i16(0x7FFF), i16::MAX);
        assert_eq!(as_i16(0x8000), i16::MIN);
        assert_eq!(as_i16(0x1_0000), 0);
    }

    #[test]
    fn test_as_i8_takes_low_byte_only() {
        assert_eq!(as_i8(0x0062), 98);
        assert_eq!(as_i8(0xFF9E), -98);
        assert_eq!(as_i8(0x00FF), -1);
        assert_eq!(as_i8(0xFF01), 1);
        assert_eq!(as_i8(-65), -65);
    }

    #[test]
    fn test_zero_extend_byte() {
        assert_eq!(zero_extend_byte(-1), 0x00FF);
        assert_eq!(zero_extend_byte(-98), 0x009E);
        assert_eq!(zero_extend_byte(98), 98);
        assert_eq!(zero_extend_byte(0x1FF), 0x00FF);
    }

    #[test]
    fn test_word_split() {
        let dxax: u32 = 0x018D_8000;
        assert_eq!(hi_word(dxax), 0x018D);
        assert_eq!(lo_word(dxax), 0x8000);
        assert_eq!(
            ((hi_word(dxax) as u32) << 16) | lo_word(dxax) as u32,
            dxax
        );
    }

    #[test]
    fn test_add_sub_wrap_at_16_bits() {
        assert_eq!(add16(i16::MAX, 1), i16::MIN);
        assert_eq!(sub16(i16::MIN, 1), i16::MAX);
        assert_eq!(add16(-20, 20), 0);
        assert_eq!(sub16(397, 195), 202);
    }

    #[test]
    fn test_neg16() {
        assert_eq!(neg16(25334), -25334);
        assert_eq!(neg16(0), 0);
        assert_eq!(neg16(i16::MIN), i16::MIN);
    }
}

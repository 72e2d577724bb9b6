//! Symmetric scanline rasterizer for the globe.
//!
//! Each ring is one scanline. Walking a ring's magnitudes outward from the center
//! column, every magnitude yields a mirrored pixel pair: one written just left of
//! the center and moving left, one written at the center and moving right. The
//! north pass walks rows upward from row 79; the south pass walks rows downward
//! from row 80 and skips ring 0, which the two hemispheres share.
//!
//! All arithmetic on table values goes through the 16-bit helpers in
//! [`globe_math`], so overflow wraps the way 16-bit registers do.

use globe_assets::{ColorMap, Outline, Slice, SliceTable};
use globe_math::{add16, as_i8, as_i16, neg16, sub16};

use crate::framebuffer::{FRAME_WIDTH, Framebuffer, frame_offset};
use crate::invariant::{InvariantViolation, Quantity, check};
use crate::rotation::RotationTable;
use crate::tilt::{MAX_TILT, TiltTable};

/// Column the mirrored pixel pairs spread out from.
pub const CENTER_COLUMN: usize = 160;

/// Which half of the globe a pass draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hemisphere {
    North,
    South,
}

impl Hemisphere {
    fn start_row(self) -> usize {
        match self {
            Self::North => 79,
            Self::South => 80,
        }
    }

    fn row_step(self) -> isize {
        match self {
            Self::North => -(FRAME_WIDTH as isize),
            Self::South => FRAME_WIDTH as isize,
        }
    }

    fn first_ring(self) -> usize {
        match self {
            Self::North => 0,
            Self::South => 1,
        }
    }

    fn signed_magnitude(self, magnitude: u8) -> i8 {
        let magnitude = as_i8(i32::from(magnitude));
        match self {
            Self::North => magnitude,
            Self::South => magnitude.wrapping_neg(),
        }
    }
}

/// Write cursors for one scanline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MirrorCursor {
    left: isize,
    right: isize,
}

impl MirrorCursor {
    fn at_row(row_start: isize) -> Self {
        Self {
            left: row_start - 1,
            right: row_start,
        }
    }

    /// Current pair of write offsets; moves both cursors one column outward.
    fn advance(&mut self) -> (isize, isize) {
        let pair = (self.left, self.right);
        self.left -= 1;
        self.right += 1;
        pair
    }
}

/// Values read from the slice and rotation tables for one magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Lookup {
    /// Adjusted `table1` value.
    displacement: i16,
    /// Seed magnitude, negated for tagged tilt words.
    seed_magnitude: i16,
    /// Twice the seed scale.
    scale2: i16,
    /// Integer word of the rotation entry.
    fixed_half: i16,
}

#[derive(Clone, Copy)]
struct GlobeTables<'a> {
    outline: &'a Outline,
    slices: &'a SliceTable,
    rotation: &'a RotationTable,
    tilt: &'a TiltTable,
    color_map: &'a ColorMap,
}

/// Draw both hemispheres into `out`.
///
/// Only the globe's pixels are written; everything else in `out` is left as is.
/// On error `out` may hold a partial frame; [`crate::render_globe`] guards
/// callers against that.
pub fn draw_globe(
    outline: &Outline,
    slices: &SliceTable,
    rotation: &RotationTable,
    tilt: &TiltTable,
    color_map: &ColorMap,
    out: &mut Framebuffer,
) -> Result<(), InvariantViolation> {
    let tables = GlobeTables {
        outline,
        slices,
        rotation,
        tilt,
        color_map,
    };
    draw_hemisphere(Hemisphere::North, &tables, out)?;
    draw_hemisphere(Hemisphere::South, &tables, out)
}

fn draw_hemisphere(
    hemisphere: Hemisphere,
    tables: &GlobeTables<'_>,
    out: &mut Framebuffer,
) -> Result<(), InvariantViolation> {
    let mut row_start = frame_offset(CENTER_COLUMN, hemisphere.start_row()) as isize;
    let rings = tables.outline.rings();

    for ring in rings.iter().skip(hemisphere.first_ring()) {
        let mut cursor = MirrorCursor::at_row(row_start);
        for (position, &magnitude) in ring.magnitudes().iter().enumerate() {
            let slice = tables.slices.get(position).ok_or(InvariantViolation {
                quantity: Quantity::SliceIndex,
                value: i32::try_from(position).unwrap_or(i32::MAX),
            })?;
            let (left_color, right_color) =
                shade_pair(hemisphere.signed_magnitude(magnitude), slice, tables)?;

            let (left, right) = cursor.advance();
            out.put(left, left_color)?;
            out.put(right, right_color)?;
        }
        row_start += hemisphere.row_step();
    }

    tracing::trace!("Drew {hemisphere:?} hemisphere ({} rings)", rings.len());
    Ok(())
}

/// Colors of the left and right pixel for one signed magnitude.
fn shade_pair(
    signed_magnitude: i8,
    slice: &Slice,
    tables: &GlobeTables<'_>,
) -> Result<(u8, u8), InvariantViolation> {
    let l = lookup(signed_magnitude, slice, tables.rotation, tables.tilt)?;

    let left = wrap_offset(sub16(l.fixed_half, l.displacement), l.scale2, l.seed_magnitude);
    let right = wrap_offset(
        sub16(add16(l.fixed_half, l.displacement), l.scale2),
        l.scale2,
        l.seed_magnitude,
    );

    Ok((
        color_at(tables.color_map, left)?,
        color_at(tables.color_map, right)?,
    ))
}

fn lookup(
    signed_magnitude: i8,
    slice: &Slice,
    rotation: &RotationTable,
    tilt: &TiltTable,
) -> Result<Lookup, InvariantViolation> {
    let tilt_index = check(
        Quantity::TiltIndex,
        i32::from(MAX_TILT) + i32::from(signed_magnitude),
    )?;
    let word = tilt.get(tilt_index as usize).ok_or(InvariantViolation {
        quantity: Quantity::TiltIndex,
        value: tilt_index,
    })?;

    let word_negative = word < 0;
    let low = as_i8(i32::from(word));
    check(Quantity::TiltLowByte, low)?;
    let low_negative = low < 0;
    let column = usize::from(low.unsigned_abs());

    let rotation_index = check(Quantity::RotationIndex, slice.table0()[column])?;
    let entry = rotation
        .get(rotation_index as usize / 2)
        .ok_or(InvariantViolation {
            quantity: Quantity::RotationIndex,
            value: rotation_index,
        })?;
    check(Quantity::LookupSeedMagnitude, entry.seed_magnitude)?;
    check(Quantity::LookupSeedScale, entry.seed_scale)?;
    check(Quantity::FixedHalf, entry.fp_hi)?;

    let magnitude = as_i16(i32::from(entry.seed_magnitude));
    let seed_magnitude = if word_negative {
        neg16(magnitude)
    } else {
        magnitude
    };

    let raw = as_i16(check(Quantity::RawDisplacement, slice.table1()[column])?);
    let scale = as_i16(i32::from(entry.seed_scale));
    let displacement = if low_negative { sub16(scale, raw) } else { raw };
    check(Quantity::Displacement, displacement)?;

    Ok(Lookup {
        displacement,
        seed_magnitude,
        scale2: add16(scale, scale),
        fixed_half: as_i16(i32::from(entry.fp_hi)),
    })
}

/// `(v < 0 ? v + wrap : v) + shift`, in 16 bits.
fn wrap_offset(value: i16, wrap: i16, shift: i16) -> i16 {
    let value = if value < 0 { add16(value, wrap) } else { value };
    add16(value, shift)
}

fn color_at(color_map: &ColorMap, offset: i16) -> Result<u8, InvariantViolation> {
    check(Quantity::ColorOffset, offset)?;
    color_map
        .at(offset)
        .map(pixel_color)
        .ok_or(InvariantViolation {
            quantity: Quantity::ColorOffset,
            value: i32::from(offset),
        })
}

/// Map a color map byte to a palette index.
///
/// The low nibble is the base color; entries whose bits `0x30` equal `0x10` move
/// nibbles below 8 up by 12. The result lands in the palette's `0x10..=0x2F` band.
pub fn pixel_color(value: u8) -> u8 {
    let mut color = value & 0x0F;
    if value & 0x30 == 0x10 && color < 8 {
        color += 12;
    }
    color + 0x10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_color() {
        assert_eq!(pixel_color(0x00), 0x10);
        assert_eq!(pixel_color(0x05), 0x15);
        // 0x30 bits == 0x10 and nibble < 8: +12
        assert_eq!(pixel_color(0x13), 0x1F);
        assert_eq!(pixel_color(0x17), 0x23);
        // nibble >= 8 is left alone
        assert_eq!(pixel_color(0x18), 0x18);
        // other 0x30 patterns are left alone
        assert_eq!(pixel_color(0x33), 0x13);
        assert_eq!(pixel_color(0xE3), 0x13);
        assert_eq!(pixel_color(0xFF), 0x1F);
    }

    #[test]
    fn test_wrap_offset() {
        assert_eq!(wrap_offset(-3, 20, 2), 19);
        assert_eq!(wrap_offset(3, 20, 2), 5);
        assert_eq!(wrap_offset(0, 20, -2), -2);
        assert_eq!(wrap_offset(i16::MAX, 20, 1), i16::MIN);
    }

    #[test]
    fn test_mirror_cursor_moves_outward_by_one() {
        let row_start = frame_offset(CENTER_COLUMN, 79) as isize;
        let mut cursor = MirrorCursor::at_row(row_start);
        for step in 0..64 {
            let (left, right) = cursor.advance();
            assert_eq!(row_start - 1 - left, step);
            assert_eq!(right - row_start, step);
            // Equidistant from the boundary between columns 159 and 160.
            assert_eq!((row_start - 1 - left), (right - row_start));
        }
    }

    #[test]
    fn test_hemisphere_geometry() {
        assert_eq!(Hemisphere::North.start_row(), 79);
        assert_eq!(Hemisphere::South.start_row(), 80);
        assert_eq!(Hemisphere::North.row_step(), -320);
        assert_eq!(Hemisphere::South.row_step(), 320);
        assert_eq!(Hemisphere::North.first_ring(), 0);
        assert_eq!(Hemisphere::South.first_ring(), 1);
        assert_eq!(Hemisphere::North.signed_magnitude(86), 86);
        assert_eq!(Hemisphere::South.signed_magnitude(86), -86);
        assert_eq!(Hemisphere::South.signed_magnitude(0), 0);
    }
}

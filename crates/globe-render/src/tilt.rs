//! Per-frame tilt table.
//!
//! 196 signed words, filled by four counting stages. Stages 1 and 2 store only the
//! low byte of their counter (the high byte stays zero); stages 3 and 4 tag their
//! values with `0xFF00`. The rasterizer looks at two signs per word: the sign of
//! the full word marks the tagged entries, the sign of the low byte decides which
//! side of a slice is read.

use globe_math::{as_i16, as_u16, zero_extend_byte};

/// Largest tilt magnitude; inputs are clamped to `[-MAX_TILT, MAX_TILT]`.
pub const MAX_TILT: i16 = 98;

/// Number of words in a tilt table.
pub const TILT_TABLE_LEN: usize = 2 * MAX_TILT as usize;

const TAG: i32 = 0xFF00;

/// The 196 tilt words used for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TiltTable {
    values: [i16; TILT_TABLE_LEN],
}

impl TiltTable {
    /// Words in index order.
    pub fn values(&self) -> &[i16; TILT_TABLE_LEN] {
        &self.values
    }

    /// Word at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<i16> {
        self.values.get(index).copied()
    }
}

/// Clamp a raw tilt into `[-98, 98]`.
pub fn clamp_tilt(tilt: i16) -> i16 {
    tilt.clamp(-MAX_TILT, MAX_TILT)
}

struct StageWriter {
    values: [i16; TILT_TABLE_LEN],
    filled: usize,
}

impl StageWriter {
    fn push(&mut self, word: u16) {
        self.values[self.filled] = as_i16(i32::from(word));
        self.filled += 1;
    }

    fn is_full(&self) -> bool {
        self.filled == TILT_TABLE_LEN
    }

    fn finish(self) -> TiltTable {
        TiltTable {
            values: self.values,
        }
    }
}

/// Build the tilt table for `tilt` (clamped first).
pub fn build_tilt_table(tilt: i16) -> TiltTable {
    let tilt = i32::from(clamp_tilt(tilt));
    let max = i32::from(MAX_TILT);
    let mut out = StageWriter {
        values: [0; TILT_TABLE_LEN],
        filled: 0,
    };

    // Stage 1: count down from tilt - 99 to -98.
    if tilt > 0 {
        let mut v = tilt - max;
        loop {
            v -= 1;
            out.push(zero_extend_byte(v));
            if out.is_full() || v <= -max {
                break;
            }
        }
    }
    if out.is_full() {
        return out.finish();
    }

    // Stage 2: count down to 0.
    let mut v = tilt + max - out.filled as i32;
    loop {
        out.push(zero_extend_byte(v));
        v -= 1;
        if out.is_full() || v < 0 {
            break;
        }
    }
    if out.is_full() {
        return out.finish();
    }

    // Stage 3: count up from 1 to 98, tagged.
    let mut v = 1;
    loop {
        out.push(as_u16(v | TAG));
        v += 1;
        if out.is_full() || v > max {
            break;
        }
    }
    if out.is_full() {
        return out.finish();
    }

    // Stage 4: count up from -98 to 0, tagged.
    let mut v = -max;
    loop {
        out.push(as_u16(v | TAG));
        v += 1;
        if out.is_full() || v > 0 {
            break;
        }
    }

    out.finish()
}

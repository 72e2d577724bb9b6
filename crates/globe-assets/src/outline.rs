//! Outline rings: one latitude circle of magnitudes per ring.
//!
//! ## Binary Layout
//!
//! | Offset | Size | Field |
//! |--------|------|-------|
//! | 0 | 1 | Header sentinel (`-65` as `i8`) |
//! | 1 | 2867 | Ring stream: runs of magnitudes `>= 0`, each closed by a byte `< 0`; a `-1` at a ring start ends the stream |
//! | 2868 | 1 | Unused |
//! | 2869 | 421 | Zero padding |
//!
//! The end marker always sits at offset 2867, so a well-formed stream leaves the
//! read cursor at exactly 2868.

use crate::error::AssetError;
use crate::slices::SLICE_COUNT;

/// Size of the outline section of `GLOBDATA.BIN`.
pub const OUTLINE_LEN: usize = 3290;

/// Largest magnitude a ring may carry.
pub const MAX_RING_MAGNITUDE: u8 = 86;

/// Most rings one hemisphere pass can place between row 79 and row 0.
pub const MAX_RINGS: usize = 80;

const HEADER_SENTINEL: i8 = -65;
const END_OF_RINGS: i8 = -1;
const FIRST_RING_OFFSET: usize = 1;
const LAST_STREAM_OFFSET: usize = 2867;
const END_CURSOR: usize = 2868;
const PADDING_START: usize = 2869;

/// One latitude circle: a magnitude per slice position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ring {
    magnitudes: Vec<u8>,
}

impl Ring {
    /// Magnitudes in slice order; position `i` is drawn with slice `i`.
    pub fn magnitudes(&self) -> &[u8] {
        &self.magnitudes
    }

    /// Number of magnitudes (and of pixel pairs drawn for this ring).
    pub fn len(&self) -> usize {
        self.magnitudes.len()
    }

    /// Always false for a validated ring; provided for API completeness.
    pub fn is_empty(&self) -> bool {
        self.magnitudes.is_empty()
    }
}

/// Ordered rings from the pole toward the equator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outline {
    rings: Vec<Ring>,
}

impl Outline {
    /// Validate ring data supplied directly (fixtures, alternative loaders).
    ///
    /// Each ring must hold 1..=64 magnitudes in `0..=86`, and there may be at
    /// most 80 rings.
    pub fn from_rings<R>(rings: impl IntoIterator<Item = R>) -> Result<Self, AssetError>
    where
        R: Into<Vec<u8>>,
    {
        let rings = rings
            .into_iter()
            .enumerate()
            .map(|(index, magnitudes)| validate_ring(index, magnitudes.into()))
            .collect::<Result<Vec<_>, _>>()?;

        if rings.len() > MAX_RINGS {
            return Err(AssetError::TooManyRings { count: rings.len() });
        }
        Ok(Self { rings })
    }

    /// Rings in stream order.
    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }

    /// Number of rings.
    pub fn len(&self) -> usize {
        self.rings.len()
    }

    /// Whether the outline has no rings at all.
    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }
}

fn validate_ring(index: usize, magnitudes: Vec<u8>) -> Result<Ring, AssetError> {
    if magnitudes.is_empty() {
        return Err(AssetError::EmptyRing { ring: index });
    }
    if magnitudes.len() > SLICE_COUNT {
        return Err(AssetError::RingTooLong {
            ring: index,
            len: magnitudes.len(),
        });
    }
    if let Some((position, &value)) = magnitudes
        .iter()
        .enumerate()
        .find(|&(_, &m)| m > MAX_RING_MAGNITUDE)
    {
        return Err(AssetError::MagnitudeOutOfRange {
            ring: index,
            position,
            value,
        });
    }
    Ok(Ring { magnitudes })
}

/// Parse the outline section of `GLOBDATA.BIN` into rings.
pub fn parse_outline(blob: &[u8; OUTLINE_LEN]) -> Result<Outline, AssetError> {
    let header = blob[0] as i8;
    if header != HEADER_SENTINEL {
        return Err(AssetError::BadHeader { found: header });
    }

    let read = |cursor: usize| -> Result<i8, AssetError> {
        if (FIRST_RING_OFFSET..=LAST_STREAM_OFFSET).contains(&cursor) {
            Ok(blob[cursor] as i8)
        } else {
            Err(AssetError::CursorOutOfRange { offset: cursor })
        }
    };

    let mut rings: Vec<Vec<u8>> = Vec::new();
    let mut cursor = FIRST_RING_OFFSET;
    loop {
        let mut value = read(cursor)?;
        cursor += 1;
        if value == END_OF_RINGS {
            break;
        }
        if value < 0 {
            return Err(AssetError::UnexpectedTerminator {
                offset: cursor - 1,
                value,
            });
        }

        let mut ring = Vec::new();
        while value >= 0 {
            ring.push(value as u8);
            value = read(cursor)?;
            cursor += 1;
        }
        rings.push(ring);
    }

    if cursor != END_CURSOR {
        return Err(AssetError::TerminatorMisplaced {
            expected: END_CURSOR,
            actual: cursor,
        });
    }

    if let Some((offset, &value)) = blob
        .iter()
        .enumerate()
        .skip(PADDING_START)
        .find(|&(_, &b)| b != 0)
    {
        return Err(AssetError::NonZeroPadding { offset, value });
    }

    let outline = Outline::from_rings(rings)?;
    tracing::debug!("Parsed globe outline with {} rings", outline.len());
    Ok(outline)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fill the ring stream with rings of `magnitude`, 64 wide except the last,
    /// closing ring `i` with `closer(i)` and placing the end marker at 2867.
    fn stream(magnitude: u8, closer: impl Fn(usize) -> u8) -> [u8; OUTLINE_LEN] {
        let mut blob = [0u8; OUTLINE_LEN];
        blob[0] = HEADER_SENTINEL as u8;
        let mut cursor = FIRST_RING_OFFSET;
        let mut ring = 0;
        while cursor < LAST_STREAM_OFFSET {
            let len = (LAST_STREAM_OFFSET - cursor - 1).min(SLICE_COUNT);
            blob[cursor..cursor + len].fill(magnitude);
            cursor += len;
            blob[cursor] = closer(ring);
            cursor += 1;
            ring += 1;
        }
        blob[LAST_STREAM_OFFSET] = END_OF_RINGS as u8;
        blob
    }

    #[test]
    fn test_parse_full_stream() {
        let outline = parse_outline(&stream(3, |_| 0x80)).expect("parse failed");
        // 2866 stream bytes = 44 rings of 64 + terminator, then one ring of 5.
        assert_eq!(outline.len(), 45);
        assert_eq!(outline.rings()[0].magnitudes(), &[3u8; 64][..]);
        assert_eq!(outline.rings()[44].len(), 5);
    }

    #[test]
    fn test_any_negative_byte_closes_a_ring() {
        let closers = [0x80u8, 0xFF, 0xBF, 0xC0];
        let outline =
            parse_outline(&stream(0, |i| closers[i % closers.len()])).expect("parse failed");
        assert_eq!(outline.len(), 45);
        assert!(
            outline
                .rings()
                .iter()
                .all(|r| r.magnitudes().iter().all(|&m| m == 0))
        );
    }

    #[test]
    fn test_bad_header() {
        let mut blob = stream(0, |_| 0x80);
        blob[0] = 0;
        assert!(matches!(
            parse_outline(&blob),
            Err(AssetError::BadHeader { found: 0 })
        ));
    }

    #[test]
    fn test_end_marker_too_early() {
        let mut blob = [0u8; OUTLINE_LEN];
        blob[0] = HEADER_SENTINEL as u8;
        blob[1] = 3;
        blob[2] = 0x80;
        blob[3] = END_OF_RINGS as u8;
        assert!(matches!(
            parse_outline(&blob),
            Err(AssetError::TerminatorMisplaced {
                expected: 2868,
                actual: 4
            })
        ));
    }

    #[test]
    fn test_stream_without_end_marker_runs_out() {
        let mut blob = [0u8; OUTLINE_LEN];
        blob[0] = HEADER_SENTINEL as u8;
        assert!(matches!(
            parse_outline(&blob),
            Err(AssetError::CursorOutOfRange { offset: 2868 })
        ));
    }

    #[test]
    fn test_unexpected_terminator_at_ring_start() {
        let mut blob = stream(0, |_| 0x80);
        blob[1] = 0xFE;
        assert!(matches!(
            parse_outline(&blob),
            Err(AssetError::UnexpectedTerminator {
                offset: 1,
                value: -2
            })
        ));
    }

    #[test]
    fn test_magnitude_out_of_range() {
        let mut blob = stream(2, |_| 0x80);
        blob[2] = MAX_RING_MAGNITUDE + 1;
        assert!(matches!(
            parse_outline(&blob),
            Err(AssetError::MagnitudeOutOfRange {
                ring: 0,
                position: 1,
                value: 87
            })
        ));
    }

    #[test]
    fn test_padding() {
        let mut blob = stream(1, |_| 0x80);
        // Offset 2868 sits between the stream and the padding and is never inspected.
        blob[END_CURSOR] = 0x55;
        assert!(parse_outline(&blob).is_ok());

        blob[3000] = 7;
        assert!(matches!(
            parse_outline(&blob),
            Err(AssetError::NonZeroPadding {
                offset: 3000,
                value: 7
            })
        ));
    }

    #[test]
    fn test_from_rings_validation() {
        assert!(Outline::from_rings([vec![0u8]]).is_ok());
        assert!(matches!(
            Outline::from_rings([Vec::<u8>::new()]),
            Err(AssetError::EmptyRing { ring: 0 })
        ));
        assert!(matches!(
            Outline::from_rings([vec![0u8], vec![0u8; 65]]),
            Err(AssetError::RingTooLong { ring: 1, len: 65 })
        ));
        assert!(matches!(
            Outline::from_rings(vec![vec![1u8]; MAX_RINGS + 1]),
            Err(AssetError::TooManyRings { count: 81 })
        ));
    }
}

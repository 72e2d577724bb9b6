//! Asset loading error types.

use std::fmt;
use std::path::PathBuf;

/// Which of the four static blobs an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    /// Outline rings plus slice tables (`GLOBDATA.BIN`).
    GlobeData,
    /// Rotation seed table (`TABLAT.BIN`).
    SeedTable,
    /// Color map (`MAP.BIN`).
    ColorMap,
    /// Palette (`PAL.BIN`).
    Palette,
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::GlobeData => "globe data",
            Self::SeedTable => "seed table",
            Self::ColorMap => "color map",
            Self::Palette => "palette",
        };
        f.write_str(name)
    }
}

/// Errors raised while loading or validating the static assets.
///
/// Every variant except [`AssetError::Io`] means the blob itself is malformed and
/// must be rejected before any frame is rendered.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    /// The blob does not have its fixed size.
    #[error("{asset}: expected {expected} bytes, got {actual}")]
    SizeMismatch {
        /// Offending blob.
        asset: AssetKind,
        /// Required byte count.
        expected: usize,
        /// Actual byte count.
        actual: usize,
    },
    /// The color map cannot cover every offset the rasterizer may look up.
    #[error("color map too small: need at least {required} bytes, got {actual}")]
    ColorMapTooSmall {
        /// Minimum byte count.
        required: usize,
        /// Actual byte count.
        actual: usize,
    },
    /// Byte 0 of the outline is not the header sentinel.
    #[error("outline header sentinel is {found}, expected -65")]
    BadHeader {
        /// Byte found at offset 0, read as signed.
        found: i8,
    },
    /// A ring magnitude lies outside `0..=86`.
    #[error("ring {ring} position {position}: magnitude {value} out of range")]
    MagnitudeOutOfRange {
        /// Ring index.
        ring: usize,
        /// Position within the ring.
        position: usize,
        /// Offending magnitude.
        value: u8,
    },
    /// A negative byte other than the end marker appeared where a ring should start.
    #[error("unexpected terminator {value} at offset {offset}")]
    UnexpectedTerminator {
        /// Absolute offset in the outline.
        offset: usize,
        /// Byte read as signed.
        value: i8,
    },
    /// The ring stream ran past its region without reaching the end marker.
    #[error("outline read cursor left the ring region at offset {offset}")]
    CursorOutOfRange {
        /// Offset the parser tried to read.
        offset: usize,
    },
    /// The end marker was found, but not at its fixed position.
    #[error("outline end marker misplaced: cursor at {actual}, expected {expected}")]
    TerminatorMisplaced {
        /// Expected cursor position after the end marker.
        expected: usize,
        /// Actual cursor position.
        actual: usize,
    },
    /// A padding byte after the ring stream is not zero.
    #[error("non-zero padding byte {value:#04x} at offset {offset}")]
    NonZeroPadding {
        /// Absolute offset in the outline.
        offset: usize,
        /// Offending byte.
        value: u8,
    },
    /// A ring has no magnitudes.
    #[error("ring {ring} is empty")]
    EmptyRing {
        /// Ring index.
        ring: usize,
    },
    /// A ring has more magnitudes than there are slices.
    #[error("ring {ring} has {len} magnitudes, at most 64 allowed")]
    RingTooLong {
        /// Ring index.
        ring: usize,
        /// Ring length.
        len: usize,
    },
    /// More rings than fit in one hemisphere of the framebuffer.
    #[error("outline has {count} rings, at most 80 allowed")]
    TooManyRings {
        /// Ring count.
        count: usize,
    },
    /// Failed to read an asset file from disk.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// File that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl AssetError {
    /// Whether this error reports a structurally malformed blob (as opposed to I/O).
    pub fn is_malformed(&self) -> bool {
        !matches!(self, Self::Io { .. })
    }
}

//! Application error type.

use std::path::PathBuf;

use globe_assets::AssetError;
use globe_render::InvariantViolation;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("failed to load globe assets: {0}")]
    Assets(#[from] AssetError),

    #[error("frame rejected: {0}")]
    Render(#[from] InvariantViolation),

    /// A swept frame failed; carries the parameters that triggered it.
    #[error("sweep failed at tilt {tilt}, rotation {rotation}: {source}")]
    Sweep {
        tilt: i16,
        rotation: u16,
        #[source]
        source: InvariantViolation,
    },

    #[error("upscale factor must be at least 1")]
    ZeroScale,

    /// The upscaled image would not fit a PNG or the address space.
    #[error("upscale factor {scale} is too large (at most {max})")]
    ScaleTooLarge { scale: u32, max: u32 },

    #[error("rotation step must be at least 1")]
    ZeroRotationStep,

    #[error("failed to encode PNG: {0}")]
    Encode(#[from] png::EncodingError),

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

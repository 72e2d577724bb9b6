//! Parameter sequencing: the exhaustive sweep and the built-in animation.

use std::time::{Duration, Instant};

use globe_assets::GlobeAssets;
use globe_render::{Framebuffer, GlobeRenderer, MAX_TILT};

use crate::error::AppError;

/// Outcome of a successful sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepReport {
    /// Frames rendered.
    pub frames: u64,
    pub elapsed: Duration,
}

/// Rotations `0, step, 2 * step, ...` up to 65535.
pub fn sweep_rotations(step: u16) -> impl Iterator<Item = u16> {
    (0..=u16::MAX).step_by(usize::from(step.max(1)))
}

/// Render every tilt in `-98..=98` at every rotation of [`sweep_rotations`],
/// stopping at the first frame that violates an invariant.
pub fn sweep(assets: &GlobeAssets, rotation_step: u16) -> Result<SweepReport, AppError> {
    if rotation_step == 0 {
        return Err(AppError::ZeroRotationStep);
    }
    let renderer = GlobeRenderer::new(assets);
    let mut frame = Framebuffer::new();
    let started = Instant::now();
    let mut frames = 0u64;

    for tilt in -MAX_TILT..=MAX_TILT {
        for rotation in sweep_rotations(rotation_step) {
            renderer
                .render(tilt, rotation, &mut frame)
                .map_err(|source| AppError::Sweep {
                    tilt,
                    rotation,
                    source,
                })?;
            frames += 1;
        }
        tracing::debug!("Swept tilt {tilt} ({frames} frames so far)");
    }

    let report = SweepReport {
        frames,
        elapsed: started.elapsed(),
    };
    tracing::info!("Sweep complete: {frames} frames in {:?}", report.elapsed);
    Ok(report)
}

/// Tilt and rotation of frame `frame` of the built-in animation:
/// `tilt = -98 * sin(frame / 200)`, `rotation = 150 * frame` (wrapping).
pub fn animated_params(frame: u32) -> (i16, u16) {
    let phase = (frame as f32 / 200.0).sin();
    let tilt = (-f32::from(MAX_TILT) * phase) as i16;
    let rotation = frame.wrapping_mul(150) as u16;
    (tilt, rotation)
}

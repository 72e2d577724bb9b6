//! One-call frame rendering on top of the table builders and the rasterizer.

use globe_assets::GlobeAssets;

use crate::framebuffer::Framebuffer;
use crate::invariant::InvariantViolation;
use crate::rasterizer::draw_globe;
use crate::rotation::build_rotation_table;
use crate::tilt::build_tilt_table;

/// Renders frames from one set of loaded assets.
///
/// The assets are never mutated; every call derives fresh rotation and tilt
/// tables, so frames are independent of one another and of call order.
#[derive(Debug, Clone, Copy)]
pub struct GlobeRenderer<'a> {
    assets: &'a GlobeAssets,
}

impl<'a> GlobeRenderer<'a> {
    pub fn new(assets: &'a GlobeAssets) -> Self {
        Self { assets }
    }

    pub fn assets(&self) -> &'a GlobeAssets {
        self.assets
    }

    /// Render the globe at `tilt` and `rotation` into `out`.
    ///
    /// Only pixels inside the globe outline are written; the rest of `out` keeps
    /// whatever the caller put there. On failure `out` is left untouched.
    pub fn render(
        &self,
        tilt: i16,
        rotation: u16,
        out: &mut Framebuffer,
    ) -> Result<(), InvariantViolation> {
        let rotation_table = build_rotation_table(self.assets.seed(), rotation)?;
        let tilt_table = build_tilt_table(tilt);

        let mut frame = out.clone();
        draw_globe(
            self.assets.outline(),
            self.assets.slices(),
            &rotation_table,
            &tilt_table,
            self.assets.color_map(),
            &mut frame,
        )
        .inspect_err(|violation| {
            tracing::warn!("Frame rejected at tilt {tilt}, rotation {rotation}: {violation}")
        })?;

        *out = frame;
        tracing::debug!("Rendered frame at tilt {tilt}, rotation {rotation}");
        Ok(())
    }
}

/// Render one frame; shorthand for [`GlobeRenderer::render`].
pub fn render_globe(
    assets: &GlobeAssets,
    tilt: i16,
    rotation: u16,
    out: &mut Framebuffer,
) -> Result<(), InvariantViolation> {
    GlobeRenderer::new(assets).render(tilt, rotation, out)
}

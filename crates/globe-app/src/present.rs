//! Palette expansion, integer upscaling and PNG output.

use std::io::{BufWriter, Write};
use std::path::Path;

use globe_assets::Palette;
use globe_render::{FRAME_HEIGHT, FRAME_WIDTH, Framebuffer};

use crate::error::AppError;

/// An RGBA8 image ready for encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl Image {
    /// RGBA of the pixel at (`x`, `y`).
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let start = (y as usize * self.width as usize + x as usize) * 4;
        self.rgba
            .get(start..start + 4)
            .and_then(|px| px.try_into().ok())
    }
}

/// Largest upscale factor; 32 gives a 10240×6400 image of about 260 MB.
pub const MAX_SCALE: u32 = 32;

/// Expand `frame` through `palette` and scale it up by `scale` in both axes.
pub fn present(frame: &Framebuffer, palette: &Palette, scale: u32) -> Result<Image, AppError> {
    if scale == 0 {
        return Err(AppError::ZeroScale);
    }
    if scale > MAX_SCALE {
        return Err(AppError::ScaleTooLarge {
            scale,
            max: MAX_SCALE,
        });
    }
    let factor = scale as usize;
    let width = FRAME_WIDTH * factor;
    let height = FRAME_HEIGHT * factor;

    let mut rgba = Vec::with_capacity(width * height * 4);
    for row in frame.pixels().chunks_exact(FRAME_WIDTH) {
        let mut line = Vec::with_capacity(width * 4);
        for &index in row {
            let rgb = palette.rgb_of(index);
            for _ in 0..factor {
                line.extend_from_slice(&[rgb.r, rgb.g, rgb.b, 255]);
            }
        }
        for _ in 0..factor {
            rgba.extend_from_slice(&line);
        }
    }

    Ok(Image {
        width: width as u32,
        height: height as u32,
        rgba,
    })
}

/// Encode `image` as an 8-bit RGBA PNG.
pub fn encode_png<W: Write>(image: &Image, writer: W) -> Result<(), png::EncodingError> {
    let mut encoder = png::Encoder::new(writer, image.width, image.height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(&image.rgba)?;
    writer.finish()
}

/// Encode `image` into the file at `path`.
pub fn write_png(image: &Image, path: &Path) -> Result<(), AppError> {
    let file = std::fs::File::create(path).map_err(|source| AppError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    encode_png(image, BufWriter::new(file))?;
    tracing::info!(
        "Wrote {} ({}x{})",
        path.display(),
        image.width,
        image.height
    );
    Ok(())
}

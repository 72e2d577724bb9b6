//! Headless driver for the globe renderer.
//!
//! Loads the four data files, renders frames with [`globe_render`], and either
//! writes one frame as a PNG or sweeps the whole parameter space.

pub mod error;
pub mod platform;
pub mod present;
pub mod sweep;

use globe_assets::GlobeAssets;
use globe_config::{Command, Config, OutputConfig};
use globe_render::{Framebuffer, render_globe};

pub use error::AppError;
pub use platform::{PlatformDirs, PlatformError};
pub use present::{Image, encode_png, present, write_png};
pub use sweep::{SweepReport, animated_params, sweep, sweep_rotations};

/// Run `command` (default: render) against the assets named in `config`.
pub fn run(command: Option<&Command>, config: &Config) -> Result<(), AppError> {
    let assets = GlobeAssets::load(&config.assets.dir)?;

    match command {
        None => render_to_png(&assets, config.view.tilt, config.view.rotation, &config.output),
        Some(Command::Render { frame }) => {
            let (tilt, rotation) = match frame {
                Some(frame) => animated_params(*frame),
                None => (config.view.tilt, config.view.rotation),
            };
            render_to_png(&assets, tilt, rotation, &config.output)
        }
        Some(Command::Sweep) => {
            let report = sweep(&assets, config.sweep.rotation_step)?;
            tracing::info!(
                "All {} frames rendered without invariant violations ({:.1}s)",
                report.frames,
                report.elapsed.as_secs_f64()
            );
            Ok(())
        }
    }
}

/// Render one frame and write it to `output.path`.
pub fn render_to_png(
    assets: &GlobeAssets,
    tilt: i16,
    rotation: u16,
    output: &OutputConfig,
) -> Result<(), AppError> {
    let mut frame = Framebuffer::new();
    render_globe(assets, tilt, rotation, &mut frame)?;
    let image = present(&frame, assets.palette(), output.scale)?;
    write_png(&image, &output.path)
}


#[cfg(test)]
mod tests {
    use super::*;

    fn config_for(dir: &std::path::Path) -> Config {
        let mut config = Config::default();
        config.assets.dir = dir.to_path_buf();
        config.output.path = dir.join("out.png");
        config.output.scale = 1;
        config
    }

    fn decoded_size(path: &std::path::Path) -> (u32, u32) {
        let file = std::fs::File::open(path).unwrap();
        let reader = png::Decoder::new(std::io::BufReader::new(file))
            .read_info()
            .unwrap();
        (reader.info().width, reader.info().height)
    }

    #[test]
    fn test_render_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        test_assets::write_dir(dir.path());
        let config = config_for(dir.path());

        run(Some(&Command::Render { frame: Some(10) }), &config).unwrap();
        assert_eq!(decoded_size(&config.output.path), (320, 200));
    }

    #[test]
    fn test_default_command_uses_configured_view_and_scale() {
        let dir = tempfile::tempdir().unwrap();
        test_assets::write_dir(dir.path());
        let mut config = config_for(dir.path());
        config.view.tilt = -50;
        config.view.rotation = 0x7000;
        config.output.scale = 2;

        run(None, &config).unwrap();
        assert_eq!(decoded_size(&config.output.path), (640, 400));
    }

    #[test]
    fn test_sweep_command() {
        let dir = tempfile::tempdir().unwrap();
        test_assets::write_dir(dir.path());
        let mut config = config_for(dir.path());
        config.sweep.rotation_step = 32768;

        run(Some(&Command::Sweep), &config).unwrap();
        assert!(!config.output.path.exists());
    }

    #[test]
    fn test_missing_assets_reported() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_for(dir.path());
        assert!(matches!(
            run(None, &config),
            Err(AppError::Assets(err)) if !err.is_malformed()
        ));
    }

    #[test]
    fn test_rendered_frame_is_symmetric_in_shape() {
        let assets = test_assets::globe_assets();
        let mut frame = Framebuffer::new();
        render_globe(&assets, 0, 0, &mut frame).unwrap();
        // 45 north rings from row 79 up, 44 south rings from row 80 down.
        let drawn_rows: Vec<usize> = (0..200)
            .filter(|&y| frame.row(y).unwrap().iter().any(|&p| p != 0))
            .collect();
        assert_eq!(drawn_rows, (35..=123).collect::<Vec<_>>());
    }
}

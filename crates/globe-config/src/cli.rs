//! Command-line argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::Config;

/// Globe renderer command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug)]
#[command(name = "globe", about = "Render the rotating globe to PNG")]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Directory holding the globe data files.
    #[arg(long, global = true)]
    pub assets: Option<PathBuf>,

    /// Tilt (-98..=98; larger values are clamped).
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub tilt: Option<i16>,

    /// Rotation (0..=65535, one full turn).
    #[arg(long, global = true)]
    pub rotation: Option<u16>,

    /// Output PNG path.
    #[arg(long, short, global = true)]
    pub output: Option<PathBuf>,

    /// Integer upscale factor.
    #[arg(long, global = true)]
    pub scale: Option<u32>,

    /// Rotation increment for `sweep`.
    #[arg(long, global = true)]
    pub rotation_step: Option<u16>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Render one frame to a PNG file (the default).
    Render {
        /// Render frame N of the built-in animation instead of the configured view.
        #[arg(long)]
        frame: Option<u32>,
    },
    /// Render every tilt across the rotation range and check that all frames succeed.
    Sweep,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(ref dir) = args.assets {
            self.assets.dir = dir.clone();
        }
        if let Some(tilt) = args.tilt {
            self.view.tilt = tilt;
        }
        if let Some(rotation) = args.rotation {
            self.view.rotation = rotation;
        }
        if let Some(ref path) = args.output {
            self.output.path = path.clone();
        }
        if let Some(scale) = args.scale {
            self.output.scale = scale;
        }
        if let Some(step) = args.rotation_step {
            self.sweep.rotation_step = step;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

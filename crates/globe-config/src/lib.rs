//! Configuration for the globe renderer.
//!
//! Settings persist to disk as `config.ron`. Every field can be overridden from
//! the command line.

mod cli;
mod config;
mod error;

pub use cli::{CliArgs, Command};
pub use config::{
    AssetsConfig, CONFIG_FILE, Config, DebugConfig, OutputConfig, SweepConfig, ViewConfig,
};
pub use error::ConfigError;

//! The `globe` binary.

use clap::Parser;
use globe_app::PlatformDirs;
use globe_config::{CliArgs, Config};

fn main() {
    let args = CliArgs::parse();

    let dirs = match PlatformDirs::resolve_with_override(args.config.as_deref())
        .and_then(|dirs| dirs.create_dirs().map(|()| dirs))
    {
        Ok(dirs) => dirs,
        Err(e) => {
            eprintln!("Failed to initialize platform directories: {e}");
            std::process::exit(1);
        }
    };

    // Load or create config, then apply CLI overrides
    let mut config = Config::load_or_create(&dirs.config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    globe_log::init_logging(Some(&dirs.log_dir), cfg!(debug_assertions), Some(&config));
    tracing::debug!("Config directory: {}", dirs.config_dir.display());

    if let Err(e) = globe_app::run(args.command.as_ref(), &config) {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}

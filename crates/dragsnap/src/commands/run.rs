use std::io::ErrorKind;

use clap::Args;
use dragsnap_core::config::{self, Config};
use dragsnap_core::error::Error;
use dragsnap_core::log;

/// Arguments for the `run` subcommand.
#[derive(Args)]
pub struct RunArgs {
    /// Also log to stderr at this level (trace, debug, info, warn, error)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,
}

pub fn execute(args: &RunArgs) {
    let config = load_config();
    log::init(&config.logging, args.log_level.as_deref());

    #[cfg(windows)]
    if let Err(e) = dragsnap_windows::daemon::run(&config) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    #[cfg(not(windows))]
    super::windows_only("run");
}

/// Loads the config before logging exists, so problems go to stderr.
pub fn load_config() -> Config {
    match config::try_load() {
        Ok(config) => config,
        Err(Error::Io(e)) if e.kind() == ErrorKind::NotFound => Config::default(),
        Err(e) => {
            eprintln!("Warning: {e}; using defaults");
            Config::default()
        }
    }
}

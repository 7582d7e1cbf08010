use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::Config;
use crate::error::{Error, Result};

/// Returns the config directory: `~/.config/dragsnap/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".config").join("dragsnap"))
}

/// Returns the config file path: `~/.config/dragsnap/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Tries to load and parse `config.toml`.
pub fn try_load() -> Result<Config> {
    let path = config_path().ok_or_else(|| Error::Config {
        path: "config.toml".into(),
        message: "could not determine home directory".into(),
    })?;
    load_from(&path)
}

/// Reads, parses and validates a config file.
///
/// IO failures surface as [`Error::Io`] so callers can tell a missing
/// file apart from a broken one.
pub fn load_from(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)?;
    let mut config: Config = toml::from_str(&content).map_err(|e| Error::Config {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    config.validate();
    Ok(config)
}

/// Loads the configuration from disk, falling back to defaults.
///
/// A missing file silently returns defaults; any other failure is
/// logged and defaults are used.
pub fn load() -> Config {
    match try_load() {
        Ok(config) => config,
        Err(Error::Io(e)) if e.kind() == ErrorKind::NotFound => {
            debug!("no config file, using defaults");
            Config::default()
        }
        Err(e) => {
            warn!("{e}; using defaults");
            Config::default()
        }
    }
}

//! Logging setup.
//!
//! Everything logs through `tracing`. When file logging is enabled, lines
//! go to `~/.config/dragsnap/logs/dragsnap.log`; once the file exceeds the
//! configured size it is rotated to `dragsnap.log.1` (one backup kept).
//! `dragsnap run --log-level` adds a stderr layer on top.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::prelude::*;

const LOG_FILE_NAME: &str = "dragsnap.log";
const BACKUP_EXTENSION: &str = "log.1";

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Whether file logging is enabled. Defaults to `false`.
    pub enabled: bool,
    /// Minimum log level: "trace", "debug", "info", "warn", or "error".
    /// Any `EnvFilter` directive string is accepted.
    pub level: String,
    /// Maximum log file size in megabytes before rotation.
    pub max_file_mb: u64,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".into(),
            max_file_mb: 10,
        }
    }
}

/// Installs the global subscriber. Call once at startup.
///
/// `stderr_level` adds a console layer at that level. Failures to open
/// the log file are reported on stderr and file logging is skipped.
pub fn init(config: &LogConfig, stderr_level: Option<&str>) {
    let file_layer = if config.enabled {
        match open_default(config) {
            Ok(file) => Some(
                fmt::layer()
                    .with_ansi(false)
                    .with_target(false)
                    .with_writer(file)
                    .with_filter(filter_for(&config.level)),
            ),
            Err(e) => {
                eprintln!("Warning: file logging disabled: {e}");
                None
            }
        }
    } else {
        None
    };

    let stderr_layer = stderr_level.map(|level| {
        fmt::layer()
            .without_time()
            .with_writer(io::stderr)
            .with_filter(filter_for(level))
    });

    tracing_subscriber::registry()
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .ok();
}

/// Path of the active log file.
pub fn log_path() -> Option<PathBuf> {
    crate::config::config_dir().map(|d| d.join("logs").join(LOG_FILE_NAME))
}

fn open_default(config: &LogConfig) -> crate::error::Result<RotatingFile> {
    let path = log_path().ok_or(crate::error::Error::Config {
        path: LOG_FILE_NAME.into(),
        message: "could not determine home directory".into(),
    })?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    Ok(RotatingFile::open(&path, config.max_file_mb * 1024 * 1024)?)
}

fn filter_for(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// A log file that rotates itself once it grows past a size limit.
///
/// Implements [`MakeWriter`], so it plugs straight into a fmt layer.
#[derive(Debug)]
pub struct RotatingFile {
    state: Mutex<FileState>,
}

#[derive(Debug)]
struct FileState {
    /// `None` while reopening after a rotation keeps failing.
    file: Option<File>,
    path: PathBuf,
    max_bytes: u64,
    written: u64,
    /// Whether the current reopen failure was already reported.
    reported: bool,
}

impl RotatingFile {
    /// Opens `path` for appending. `max_bytes == 0` disables rotation.
    pub fn open(path: &Path, max_bytes: u64) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let written = file.metadata().map(|m| m.len()).unwrap_or(0);
        Ok(Self {
            state: Mutex::new(FileState {
                file: Some(file),
                path: path.to_path_buf(),
                max_bytes,
                written,
                reported: false,
            }),
        })
    }
}

impl FileState {
    fn rotate(&mut self) {
        let backup = self.path.with_extension(BACKUP_EXTENSION);
        // The handle must be closed before the rename on Windows.
        self.file = None;
        let _ = fs::rename(&self.path, &backup);
        self.written = 0;
        self.reopen();
    }

    /// The open file, reopening it first if a previous attempt failed.
    /// A failure is reported on stderr once until an open succeeds.
    fn reopen(&mut self) -> Option<&mut File> {
        if self.file.is_none() {
            match OpenOptions::new().create(true).append(true).open(&self.path) {
                Ok(file) => {
                    self.written = file.metadata().map(|m| m.len()).unwrap_or(0);
                    self.file = Some(file);
                    self.reported = false;
                }
                Err(e) if !self.reported => {
                    eprintln!("Warning: cannot reopen {}: {e}", self.path.display());
                    self.reported = true;
                }
                Err(_) => {}
            }
        }
        self.file.as_mut()
    }
}

/// Writer handed out per log event.
pub struct RotatingWriter<'a> {
    target: &'a RotatingFile,
}

impl Write for RotatingWriter<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut state = self.target.state.lock();
        let Some(file) = state.reopen() else {
            // Drop the line rather than fail the caller.
            return Ok(buf.len());
        };
        let n = file.write(buf)?;
        state.written += n as u64;
        if state.max_bytes > 0 && state.written >= state.max_bytes {
            state.rotate();
        }
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.target.state.lock().file.as_mut() {
            Some(file) => file.flush(),
            None => Ok(()),
        }
    }
}

impl<'a> MakeWriter<'a> for RotatingFile {
    type Writer = RotatingWriter<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        RotatingWriter { target: self }
    }
}

use thiserror::Error;

/// Errors raised by the engine and its platform implementations.
///
/// None of these are fatal to the process. The session controller turns
/// most of them into a silent no-op or a fallback.
#[derive(Error, Debug)]
pub enum Error {
    /// An OS call failed.
    #[error("{op} failed: {message}")]
    Os {
        /// Name of the failing API call (e.g. "SetWindowPos").
        op: &'static str,
        /// Message reported by the OS.
        message: String,
    },

    /// The window handle no longer refers to a live window.
    #[error("window is gone")]
    WindowGone,

    /// No monitor could be resolved, not even the primary one.
    #[error("no monitor available")]
    NoMonitor,

    /// The configuration file could not be read or parsed.
    #[error("{path}: {message}")]
    Config {
        /// Path of the offending file.
        path: String,
        /// Parser or IO message.
        message: String,
    },

    /// Generic IO failure (config directory, log file).
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Builds an [`Error::Os`] from any displayable OS error.
    pub fn os(op: &'static str, err: impl std::fmt::Display) -> Self {
        Self::Os {
            op,
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

//! Error types for the logger
//!
//! None of these propagate out of a logging call: internal failures degrade
//! to "log less" and surface as stderr diagnostics. The error type exists
//! for the explicit lifecycle operations (`shutdown`, `flush`) and for sink
//! implementations.

use std::time::Duration;

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Output file could not be opened. The engine recovers by disabling
    /// file output for the instance.
    #[error("could not open log file '{path}': {source}")]
    FileOpen {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The async consumer did not finish within the shutdown bound. The
    /// thread is detached and records still queued at that moment are lost.
    #[error("consumer thread did not stop within {timeout:?}; queued records may be lost")]
    ShutdownTimeout { timeout: Duration },
}

impl LoggerError {
    pub fn file_open(path: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::FileOpen {
            path: path.into(),
            source,
        }
    }
}

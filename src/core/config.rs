//! Engine configuration
//!
//! All of these settings are fixed once a [`Logger`](super::engine::Logger)
//! is constructed; changing them requires building a new instance.

use super::level::Severity;
use std::path::PathBuf;

/// Which sink(s) a produced record may reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SinkMode {
    File,
    #[default]
    Console,
    Both,
    /// Suppresses all output regardless of severity.
    None,
}

impl SinkMode {
    pub fn includes_file(&self) -> bool {
        matches!(self, SinkMode::File | SinkMode::Both)
    }

    pub fn includes_console(&self) -> bool {
        matches!(self, SinkMode::Console | SinkMode::Both)
    }
}

/// How a produced record travels from the caller to the sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Delivery {
    /// Format and write on the caller thread without locking. Concurrent
    /// callers may interleave bytes at the sink.
    #[default]
    Direct,
    /// Format and write on the caller thread while holding the instance
    /// write lock. Mutual exclusion only, no ordering guarantee.
    Synchronized,
    /// Enqueue on the caller thread; a single background consumer writes.
    /// FIFO for records that were enqueued.
    Async,
}

/// How the output file is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileMode {
    #[default]
    Append,
    Truncate,
}

/// Instance-scoped configuration, set once at construction.
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    pub mode: SinkMode,
    pub delivery: Delivery,
    pub level: Severity,
    pub file_path: Option<PathBuf>,
    pub file_mode: FileMode,
}

impl EngineConfig {
    /// Console-only, direct delivery, all severities enabled.
    pub fn new() -> Self {
        Self::default()
    }
}

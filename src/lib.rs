//! # Pattern Logger
//!
//! A lightweight leveled logging library with template-driven formatting
//! and a choice of delivery disciplines.
//!
//! ## Features
//!
//! - **Template formatting**: records render through a printf-like template
//!   (`[%t] [%f:%l] [%p] %m%n` by default) with directives for time, file,
//!   line, method, severity tag, and message
//! - **Three delivery disciplines**: direct (unsynchronized immediate
//!   write), synchronized (mutex-serialized write), or async (unbounded
//!   FIFO queue drained by a background consumer)
//! - **File and console sinks**: warnings and errors route to stderr,
//!   debug output to stdout; file output appends or truncates
//! - **Never fails the caller**: internal failures degrade to "log less"
//!   and surface as stderr diagnostics
//!
//! ## Quick start
//!
//! ```
//! use pattern_logger::prelude::*;
//! use pattern_logger::debug;
//!
//! let logger = Logger::builder()
//!     .mode(SinkMode::Console)
//!     .level(Severity::Debug)
//!     .build();
//!
//! debug!(logger, "ready after {} ms", 12);
//! ```

pub mod core;
pub mod facade;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        Delivery, EngineConfig, FileMode, FormatOptions, LogRecord, LogStream, Logger,
        LoggerBuilder, LoggerError, Result, Severity, Sink, SinkMode, TimeFormat,
        DEFAULT_LOG_FORMAT, DEFAULT_SHUTDOWN_TIMEOUT, DEFAULT_TIME_FORMAT,
    };
    pub use crate::sinks::SinkWriter;
}

pub use crate::core::{
    set_log_format, set_time_format, Delivery, EngineConfig, FileMode, FormatOptions, LogRecord,
    LogStream, Logger, LoggerBuilder, LoggerError, Result, Severity, Sink, SinkMode, TimeFormat,
    DEFAULT_LOG_FORMAT, DEFAULT_SHUTDOWN_TIMEOUT, DEFAULT_TIME_FORMAT,
};
pub use crate::sinks::SinkWriter;

//! Core logger types and traits

pub mod config;
pub mod engine;
pub mod error;
pub mod format;
pub mod level;
pub mod record;
pub mod sink;
pub mod stream;

pub use config::{Delivery, EngineConfig, FileMode, SinkMode};
pub use engine::{Logger, LoggerBuilder, DEFAULT_SHUTDOWN_TIMEOUT};
pub use error::{LoggerError, Result};
pub use format::{
    set_log_format, set_time_format, FormatOptions, TimeFormat, DEFAULT_LOG_FORMAT,
    DEFAULT_TIME_FORMAT,
};
pub use level::Severity;
pub use record::LogRecord;
pub use sink::Sink;
pub use stream::LogStream;

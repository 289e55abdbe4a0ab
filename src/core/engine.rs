//! Log dispatch engine
//!
//! The engine owns the gate (severity and mode checks), the choice among
//! the three delivery disciplines, and the background consumer for the
//! async discipline. The discipline is picked once at construction and
//! fixed for the instance's lifetime; reconfiguration means building a new
//! instance.

use super::{
    config::{Delivery, EngineConfig, FileMode, SinkMode},
    error::{LoggerError, Result},
    format,
    level::Severity,
    record::LogRecord,
    sink::Sink,
    stream::LogStream,
};
use crate::sinks::SinkWriter;
use crossbeam_channel::{unbounded, Sender};
use parking_lot::Mutex;
use std::fmt::{self, Write as _};
use std::path::PathBuf;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Default shutdown bound used when the engine is dropped without an
/// explicit `shutdown` call.
pub const DEFAULT_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

/// Format a record and hand it to the sink. Write failures surface as
/// stderr diagnostics; they never propagate to the logging caller.
fn deliver(sink: &dyn Sink, record: &LogRecord) {
    let text = format::render(record);
    if let Err(e) = sink.write(&text, record.routes_to_error()) {
        eprintln!("[LOGGER ERROR] sink '{}' write failed: {}", sink.name(), e);
    }
}

pub struct Logger {
    level: Severity,
    mode: SinkMode,
    delivery: Delivery,
    sink: Arc<dyn Sink>,
    /// Serializes the format-and-write step under `Delivery::Synchronized`.
    write_lock: Mutex<()>,
    sender: Option<Sender<LogRecord>>,
    consumer: Option<thread::JoinHandle<()>>,
}

impl Logger {
    /// Console-only, direct delivery, all severities enabled.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        let sink: Arc<dyn Sink> = Arc::new(SinkWriter::open(&config));
        Self::assemble(config, sink)
    }

    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    fn assemble(config: EngineConfig, sink: Arc<dyn Sink>) -> Self {
        let mut delivery = config.delivery;
        let mut sender = None;
        let mut consumer = None;

        if delivery == Delivery::Async {
            let (tx, rx) = unbounded::<LogRecord>();
            let consumer_sink = Arc::clone(&sink);
            let spawned = thread::Builder::new()
                .name("log-consumer".to_string())
                .spawn(move || {
                    // recv() blocks until a record arrives and keeps yielding
                    // already-queued records after the sender drops, so the
                    // queue drains to empty before the thread exits.
                    while let Ok(record) = rx.recv() {
                        deliver(consumer_sink.as_ref(), &record);
                    }
                });

            match spawned {
                Ok(handle) => {
                    sender = Some(tx);
                    consumer = Some(handle);
                }
                Err(e) => {
                    eprintln!(
                        "[LOGGER WARNING] could not start consumer thread: {}; \
                         falling back to direct delivery",
                        e
                    );
                    delivery = Delivery::Direct;
                }
            }
        }

        Self {
            level: config.level,
            mode: config.mode,
            delivery,
            sink,
            write_lock: Mutex::new(()),
            sender,
            consumer,
        }
    }

    /// Whether a record of `severity` would be produced at all.
    ///
    /// Both checks are required: the severity must pass the configured
    /// level and the mode must allow at least one sink.
    pub fn enabled(&self, severity: Severity) -> bool {
        self.mode != SinkMode::None && severity.enabled_at(self.level)
    }

    pub fn debug(&self, file: &str, line: u32, method: &str, message: impl Into<String>) {
        self.dispatch(Severity::Debug, file, line, method, message.into());
    }

    pub fn warning(&self, file: &str, line: u32, method: &str, message: impl Into<String>) {
        self.dispatch(Severity::Warning, file, line, method, message.into());
    }

    pub fn error(&self, file: &str, line: u32, method: &str, message: impl Into<String>) {
        self.dispatch(Severity::Error, file, line, method, message.into());
    }

    /// Log an error with a cause appended after the message.
    pub fn error_with_cause(
        &self,
        file: &str,
        line: u32,
        method: &str,
        message: impl Into<String>,
        cause: impl fmt::Display,
    ) {
        let mut message = message.into();
        message.push(' ');
        let _ = write!(message, "{}", cause);
        self.dispatch(Severity::Error, file, line, method, message);
    }

    pub fn debug_stream<'a>(&'a self, file: &str, line: u32, method: &str) -> LogStream<'a> {
        self.stream(Severity::Debug, file, line, method)
    }

    pub fn warning_stream<'a>(&'a self, file: &str, line: u32, method: &str) -> LogStream<'a> {
        self.stream(Severity::Warning, file, line, method)
    }

    pub fn error_stream<'a>(&'a self, file: &str, line: u32, method: &str) -> LogStream<'a> {
        self.stream(Severity::Error, file, line, method)
    }

    fn stream<'a>(
        &'a self,
        severity: Severity,
        file: &str,
        line: u32,
        method: &str,
    ) -> LogStream<'a> {
        if !self.enabled(severity) {
            return LogStream::disabled();
        }
        let file = file.to_string();
        let method = method.to_string();
        LogStream::new(Box::new(move |message| {
            self.dispatch(severity, &file, line, &method, message);
        }))
    }

    fn dispatch(&self, severity: Severity, file: &str, line: u32, method: &str, message: String) {
        if !self.enabled(severity) {
            return;
        }
        let record = LogRecord::new(severity, file, line, method, message);

        match self.delivery {
            Delivery::Direct => deliver(self.sink.as_ref(), &record),
            Delivery::Synchronized => {
                let _guard = self.write_lock.lock();
                deliver(self.sink.as_ref(), &record);
            }
            Delivery::Async => {
                if let Some(sender) = &self.sender {
                    // Disconnected only during teardown; the record is
                    // dropped then, matching the shutdown data-loss bound.
                    let _ = sender.send(record);
                }
            }
        }
    }

    /// Flush the sink. Does not drain the async queue; use
    /// [`shutdown`](Self::shutdown) for that.
    pub fn flush(&self) -> Result<()> {
        self.sink.flush()
    }

    /// Stop the async consumer, waiting up to `timeout` for it to drain the
    /// queue, then flush the sink.
    ///
    /// On timeout the consumer thread is detached and
    /// [`LoggerError::ShutdownTimeout`] is returned; records still queued at
    /// that moment are lost. The detached thread keeps its own handle to the
    /// sink, so the output file stays open until the thread actually
    /// finishes. For non-async instances this only flushes.
    pub fn shutdown(&mut self, timeout: Duration) -> Result<()> {
        // Dropping the sender closes the queue and tells the consumer to
        // exit once it has drained.
        drop(self.sender.take());

        if let Some(handle) = self.consumer.take() {
            let start = Instant::now();
            loop {
                if handle.is_finished() {
                    if handle.join().is_err() {
                        eprintln!("[LOGGER ERROR] consumer thread panicked during shutdown");
                    }
                    break;
                }
                if start.elapsed() >= timeout {
                    eprintln!(
                        "[LOGGER WARNING] consumer thread did not stop within {:?}; detaching it",
                        timeout
                    );
                    drop(handle);
                    return Err(LoggerError::ShutdownTimeout { timeout });
                }
                thread::sleep(Duration::from_millis(10));
            }
        }

        self.flush()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if let Err(e) = self.shutdown(DEFAULT_SHUTDOWN_TIMEOUT) {
            eprintln!("[LOGGER WARNING] {}", e);
        }
    }
}

/// Builder for constructing a [`Logger`] with a fluent API
///
/// # Example
/// ```
/// use pattern_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .mode(SinkMode::Console)
///     .delivery(Delivery::Synchronized)
///     .level(Severity::Warning)
///     .build();
/// ```
pub struct LoggerBuilder {
    config: EngineConfig,
    sink: Option<Arc<dyn Sink>>,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
            sink: None,
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn mode(mut self, mode: SinkMode) -> Self {
        self.config.mode = mode;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn delivery(mut self, delivery: Delivery) -> Self {
        self.config.delivery = delivery;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: Severity) -> Self {
        self.config.level = level;
        self
    }

    /// Set the output file path. Only used when the mode includes the file
    /// sink.
    #[must_use = "builder methods return a new value"]
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.file_path = Some(path.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn file_mode(mut self, file_mode: FileMode) -> Self {
        self.config.file_mode = file_mode;
        self
    }

    /// Replace the standard file/console writer with a custom sink. The
    /// severity gate and mode `None` suppression still apply; everything
    /// else about routing becomes the sink's business.
    #[must_use = "builder methods return a new value"]
    pub fn sink<S: Sink + 'static>(mut self, sink: S) -> Self {
        self.sink = Some(Arc::new(sink));
        self
    }

    pub fn build(self) -> Logger {
        let sink = self
            .sink
            .unwrap_or_else(|| Arc::new(SinkWriter::open(&self.config)));
        Logger::assemble(self.config, sink)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex as PlMutex;

    struct RecordingSink {
        lines: Arc<PlMutex<Vec<(String, bool)>>>,
    }

    impl Sink for RecordingSink {
        fn write(&self, text: &str, route_to_error: bool) -> Result<()> {
            self.lines.lock().push((text.to_string(), route_to_error));
            Ok(())
        }

        fn flush(&self) -> Result<()> {
            Ok(())
        }

        fn name(&self) -> &str {
            "recording"
        }
    }

    fn recording_logger(mode: SinkMode, level: Severity) -> (Logger, Arc<PlMutex<Vec<(String, bool)>>>) {
        let lines = Arc::new(PlMutex::new(Vec::new()));
        let logger = Logger::builder()
            .mode(mode)
            .level(level)
            .sink(RecordingSink {
                lines: Arc::clone(&lines),
            })
            .build();
        (logger, lines)
    }

    #[test]
    fn test_enabled_gate() {
        let (logger, _) = recording_logger(SinkMode::Console, Severity::Warning);
        assert!(logger.enabled(Severity::Error));
        assert!(logger.enabled(Severity::Warning));
        assert!(!logger.enabled(Severity::Debug));
    }

    #[test]
    fn test_mode_none_disables_everything() {
        let (logger, lines) = recording_logger(SinkMode::None, Severity::Debug);
        assert!(!logger.enabled(Severity::Error));
        logger.error("f.rs", 1, "m", "not delivered");
        assert!(lines.lock().is_empty());
    }

    #[test]
    fn test_direct_delivery_writes_on_caller_thread() {
        let (logger, lines) = recording_logger(SinkMode::Console, Severity::Debug);
        logger.debug("f.rs", 1, "m", "hello");
        let lines = lines.lock();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].0.contains("hello"));
        assert!(!lines[0].1);
    }

    #[test]
    fn test_error_routes_to_error_stream() {
        let (logger, lines) = recording_logger(SinkMode::Console, Severity::Debug);
        logger.error("f.rs", 1, "m", "boom");
        logger.warning("f.rs", 2, "m", "careful");
        let lines = lines.lock();
        assert!(lines[0].1);
        assert!(lines[1].1);
    }

    #[test]
    fn test_error_with_cause_appends_cause() {
        let (logger, lines) = recording_logger(SinkMode::Console, Severity::Debug);
        let cause = std::io::Error::other("disk on fire");
        logger.error_with_cause("f.rs", 1, "m", "write failed:", cause);
        let lines = lines.lock();
        assert!(lines[0].0.contains("write failed: disk on fire"));
    }

    #[test]
    fn test_stream_delivers_on_drop() {
        let (logger, lines) = recording_logger(SinkMode::Console, Severity::Debug);
        {
            let _stream = logger.debug_stream("f.rs", 3, "m").value("x=").value(7);
        }
        let lines = lines.lock();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].0.contains("x=7"));
    }

    #[test]
    fn test_disabled_stream_delivers_nothing() {
        let (logger, lines) = recording_logger(SinkMode::Console, Severity::Error);
        {
            let stream = logger.debug_stream("f.rs", 3, "m");
            assert!(!stream.is_enabled());
            let _stream = stream.value("dropped");
        }
        assert!(lines.lock().is_empty());
    }

    #[test]
    fn test_async_shutdown_is_idempotent() {
        let (mut logger, lines) = {
            let lines = Arc::new(PlMutex::new(Vec::new()));
            let logger = Logger::builder()
                .delivery(Delivery::Async)
                .sink(RecordingSink {
                    lines: Arc::clone(&lines),
                })
                .build();
            (logger, lines)
        };
        logger.debug("f.rs", 1, "m", "queued");
        logger.shutdown(DEFAULT_SHUTDOWN_TIMEOUT).expect("shutdown");
        assert_eq!(lines.lock().len(), 1);
        // Second shutdown (and the implicit one in Drop) only flushes.
        logger.shutdown(DEFAULT_SHUTDOWN_TIMEOUT).expect("shutdown again");
    }
}

//! Process-wide logger facade
//!
//! An explicit, lazily-constructed, resettable holder around one shared
//! [`Logger`] instance, for callers that do not want to thread a logger
//! reference through their program. Every operation delegates to the held
//! instance; the facade has no logic of its own.
//!
//! [`create`] replaces the held instance (the previous one shuts down when
//! its last handle drops) and [`reset`] discards it. Calling a logging
//! operation without a prior `create` lazily installs a default
//! console/direct/debug instance.

use crate::core::{config::EngineConfig, engine::Logger, level::Severity, stream::LogStream};
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

static INSTANCE: RwLock<Option<Arc<Logger>>> = RwLock::new(None);

/// Install a new process-wide instance built from `config`.
pub fn create(config: EngineConfig) {
    *INSTANCE.write() = Some(Arc::new(Logger::with_config(config)));
}

/// Install a default instance (console, direct delivery, all severities).
pub fn create_default() {
    create(EngineConfig::default());
}

/// Discard the process-wide instance. It shuts down (draining any async
/// queue within the default bound) once the last outstanding handle drops.
pub fn reset() {
    INSTANCE.write().take();
}

/// A handle to the process-wide instance, creating a default one if none
/// has been installed yet.
pub fn instance() -> Arc<Logger> {
    if let Some(logger) = INSTANCE.read().as_ref() {
        return Arc::clone(logger);
    }
    let mut guard = INSTANCE.write();
    Arc::clone(guard.get_or_insert_with(|| Arc::new(Logger::new())))
}

pub fn debug(file: &str, line: u32, method: &str, message: impl Into<String>) {
    instance().debug(file, line, method, message);
}

pub fn warning(file: &str, line: u32, method: &str, message: impl Into<String>) {
    instance().warning(file, line, method, message);
}

pub fn error(file: &str, line: u32, method: &str, message: impl Into<String>) {
    instance().error(file, line, method, message);
}

pub fn error_with_cause(
    file: &str,
    line: u32,
    method: &str,
    message: impl Into<String>,
    cause: impl fmt::Display,
) {
    instance().error_with_cause(file, line, method, message, cause);
}

pub fn debug_stream(file: &str, line: u32, method: &str) -> LogStream<'static> {
    stream(Severity::Debug, file, line, method)
}

pub fn warning_stream(file: &str, line: u32, method: &str) -> LogStream<'static> {
    stream(Severity::Warning, file, line, method)
}

pub fn error_stream(file: &str, line: u32, method: &str) -> LogStream<'static> {
    stream(Severity::Error, file, line, method)
}

fn stream(severity: Severity, file: &str, line: u32, method: &str) -> LogStream<'static> {
    let logger = instance();
    if !logger.enabled(severity) {
        return LogStream::disabled();
    }
    let file = file.to_string();
    let method = method.to_string();
    LogStream::new(Box::new(move |message| match severity {
        Severity::Warning => logger.warning(&file, line, &method, message),
        Severity::Error => logger.error(&file, line, &method, message),
        _ => logger.debug(&file, line, &method, message),
    }))
}

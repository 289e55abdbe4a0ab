//! Log record structure

use super::level::Severity;

/// Strip everything up to the last path separator, leaving the file name.
///
/// Both separator styles are handled so that `file!()` paths from Windows
/// builds shorten the same way.
pub fn basename(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

/// One log event, immutable once constructed.
///
/// A record is owned by exactly one party at a time: the caller that built
/// it, then the queue (async delivery only), then the consumer that writes
/// it. It is never shared between threads.
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub severity: Severity,
    /// Source file basename, without any directory components.
    pub file: String,
    pub line: u32,
    pub method: String,
    pub message: String,
}

impl LogRecord {
    pub fn new(
        severity: Severity,
        file: &str,
        line: u32,
        method: &str,
        message: String,
    ) -> Self {
        Self {
            severity,
            file: basename(file).to_string(),
            line,
            method: method.to_string(),
            message,
        }
    }

    /// The display tag for the `%p` directive.
    pub fn tag(&self) -> &'static str {
        self.severity.tag()
    }

    /// Whether console delivery routes this record to the error stream.
    pub fn routes_to_error(&self) -> bool {
        self.severity.routes_to_error()
    }
}

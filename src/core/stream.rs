//! Stream-style logging adapter
//!
//! A [`LogStream`] accumulates appended values and forwards the collected
//! text through the leveled call it was created for when it goes out of
//! scope. A stream created for a disabled severity (or mode `None`) is a
//! no-op: nothing is accumulated and nothing is delivered.

use std::fmt::{self, Write as _};

/// Buffering adapter returned by the `*_stream` operations.
///
/// Values can be appended with the chainable [`value`](Self::value) method
/// or through `std::fmt::Write` (`write!(stream, ...)`). The buffered text
/// becomes one log record on drop.
pub struct LogStream<'a> {
    buffer: String,
    forward: Option<Box<dyn FnOnce(String) + 'a>>,
}

impl<'a> LogStream<'a> {
    pub(crate) fn new(forward: Box<dyn FnOnce(String) + 'a>) -> Self {
        Self {
            buffer: String::new(),
            forward: Some(forward),
        }
    }

    pub(crate) fn disabled() -> Self {
        Self {
            buffer: String::new(),
            forward: None,
        }
    }

    /// Whether the accumulated text will be delivered on drop.
    pub fn is_enabled(&self) -> bool {
        self.forward.is_some()
    }

    /// Append a value, returning the stream for chaining.
    pub fn value(mut self, value: impl fmt::Display) -> Self {
        if self.forward.is_some() {
            // Writing into a String cannot fail unless the Display impl does;
            // a failing value renders partially rather than failing the log.
            let _ = write!(self.buffer, "{}", value);
        }
        self
    }
}

impl fmt::Write for LogStream<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.forward.is_some() {
            self.buffer.push_str(s);
        }
        Ok(())
    }
}

impl Drop for LogStream<'_> {
    fn drop(&mut self) {
        if let Some(forward) = self.forward.take() {
            forward(std::mem::take(&mut self.buffer));
        }
    }
}

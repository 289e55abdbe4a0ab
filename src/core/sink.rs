//! Sink trait for formatted log output destinations

use super::error::Result;

/// A destination for formatted record text.
///
/// `write` takes `&self` so that direct delivery can stay lock-free;
/// implementations manage their own interior mutability where they need
/// any (the standard writer does not: `&File` and the locked stdio handles
/// are writable as-is).
pub trait Sink: Send + Sync {
    /// Write one formatted record. `route_to_error` is set for warning and
    /// error records and selects the error stream on console-like sinks.
    fn write(&self, text: &str, route_to_error: bool) -> Result<()>;

    fn flush(&self) -> Result<()>;

    fn name(&self) -> &str;
}

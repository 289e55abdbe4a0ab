//! Sink implementations

pub mod writer;

pub use writer::SinkWriter;

// Re-export the trait next to its standard implementation.
pub use crate::core::sink::Sink;

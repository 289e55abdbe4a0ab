//! Basic logger usage example
//!
//! Demonstrates direct delivery to the console with the call-site capture
//! macros and severity gating.
//!
//! Run with: cargo run --example basic_usage

use pattern_logger::prelude::*;
use pattern_logger::{debug, debug_stream, error, warning};

fn main() {
    println!("=== Pattern Logger - Basic Usage Example ===\n");

    // Console-only, direct delivery, everything enabled.
    let logger = Logger::new();

    println!("1. Logging at different severities:");
    debug!(logger, "this is a debug message");
    warning!(logger, "this is a warning message");
    error!(logger, "this is an error message");

    println!("\n2. Gating at level Warning - debug won't show:");
    let gated = Logger::builder().level(Severity::Warning).build();
    debug!(gated, "debug message (hidden)");
    warning!(gated, "warning message (visible)");
    error!(gated, "error message (visible)");

    println!("\n3. Stream-style logging:");
    {
        let _stream = debug_stream!(logger)
            .value("accumulated: ")
            .value(42)
            .value(" and some hex: ")
            .value(format!("{:x}", 1234));
    } // delivered here

    println!("\n=== Example completed successfully! ===");
}

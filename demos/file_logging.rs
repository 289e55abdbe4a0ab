//! File logging example
//!
//! Demonstrates file output with a custom record template and both file
//! open modes.
//!
//! Run with: cargo run --example file_logging

use pattern_logger::prelude::*;
use pattern_logger::{debug, error, set_log_format, warning};

fn main() {
    println!("=== Pattern Logger - File Logging Example ===\n");

    // Set the process-wide template before any logging starts.
    set_log_format("%t %p %f:%l (%M) %m%n");

    let logger = Logger::builder()
        .mode(SinkMode::Both)
        .level(Severity::Debug)
        .file("example.log")
        .file_mode(FileMode::Truncate)
        .build();

    debug!(logger, "written to example.log and the console");
    warning!(logger, "warnings go to the file and stderr");
    error!(logger, "so do errors");
    drop(logger);

    let content = std::fs::read_to_string("example.log").unwrap_or_default();
    println!("\nexample.log contains {} lines", content.lines().count());

    println!("\n=== Example completed successfully! ===");
}

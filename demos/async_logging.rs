//! Async logging example
//!
//! Demonstrates the queued delivery discipline: callers enqueue and return
//! immediately while a background consumer writes in FIFO order, and
//! shutdown drains the queue within a bounded wait.
//!
//! Run with: cargo run --example async_logging

use pattern_logger::prelude::*;
use pattern_logger::debug;
use std::time::Instant;

fn main() {
    println!("=== Pattern Logger - Async Logging Example ===\n");

    let mut logger = Logger::builder()
        .delivery(Delivery::Async)
        .level(Severity::Debug)
        .build();

    let start = Instant::now();
    for i in 0..1000 {
        debug!(logger, "queued message {}", i);
    }
    println!(
        "\nenqueued 1000 records in {:?} (writes happen on the consumer thread)",
        start.elapsed()
    );

    match logger.shutdown(DEFAULT_SHUTDOWN_TIMEOUT) {
        Ok(()) => println!("queue drained and consumer stopped"),
        Err(e) => eprintln!("shutdown incomplete: {}", e),
    }

    println!("\n=== Example completed successfully! ===");
}

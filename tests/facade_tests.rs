//! Lifecycle tests for the process-wide facade
//!
//! The facade holds one global instance, so the whole lifecycle runs inside
//! a single test to keep parallel test threads from racing on it.

use pattern_logger::prelude::*;
use pattern_logger::{facade, static_debug, static_debug_stream, static_error, static_warning};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_facade_lifecycle() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("facade.log");

    facade::create(EngineConfig {
        mode: SinkMode::File,
        delivery: Delivery::Direct,
        level: Severity::Debug,
        file_path: Some(path.clone()),
        file_mode: FileMode::Truncate,
    });

    static_debug!("facade debug {}", 1);
    static_warning!("facade warning");
    static_error!("facade error");
    {
        let _stream = static_debug_stream!().value("streamed ").value(99);
    }

    let content = fs::read_to_string(&path).expect("read log");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].contains("facade debug 1"));
    assert!(lines[0].contains("facade_tests.rs"));
    assert!(lines[1].contains("WARN"));
    assert!(lines[2].contains("ERROR"));
    assert!(lines[3].contains("streamed 99"));

    // Replacing the instance redirects subsequent calls.
    let other = dir.path().join("replaced.log");
    facade::create(EngineConfig {
        mode: SinkMode::File,
        delivery: Delivery::Direct,
        level: Severity::Debug,
        file_path: Some(other.clone()),
        file_mode: FileMode::Truncate,
    });
    static_debug!("after replace");
    assert!(fs::read_to_string(&other)
        .expect("read replaced log")
        .contains("after replace"));
    let old = fs::read_to_string(&path).expect("re-read original log");
    assert!(!old.contains("after replace"));

    // After reset, a logging call lazily installs a default console
    // instance instead of panicking.
    facade::reset();
    static_debug!("lazily recreated");
    assert!(facade::instance().enabled(Severity::Debug));

    facade::reset();
}

//! Test for `init_tracing`: file tee and idempotent re-init behavior.
//!
//! Lives in its own test binary because the subscriber is process-global.

use tempfile::TempDir;

use assistant::init_tracing;

/// **Test: init_tracing creates the log file (parent dirs included) and logged lines land in it.**
#[test]
fn init_tracing_writes_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let log_path = temp_dir
        .path()
        .join("logs")
        .join("assistant.log")
        .display()
        .to_string();

    init_tracing(&log_path).unwrap();
    tracing::info!(check = "logger-test", "assistant logger smoke line");

    let contents = std::fs::read_to_string(&log_path).unwrap();
    assert!(contents.contains("assistant logger smoke line"));

    // Second init must fail cleanly (global subscriber already set), not panic.
    assert!(init_tracing(&log_path).is_err());
}

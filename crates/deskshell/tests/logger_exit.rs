//! Process-exit behaviour of the file logger.
//!
//! Ending the process cannot be observed from inside a test, so each test
//! re-runs this test binary filtered to itself with `CHILD_DIR_ENV` set.  The
//! child performs the fatal action; the parent asserts on its exit status and
//! output.  They verify:
//!
//! - `fatal` logs the line and exits with a failure status.
//! - A log file that cannot be written ends the process.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use deskshell::infrastructure::logging::FileLogger;
use deskshell_core::Logger;
use tempfile::TempDir;

/// Set in the child process to the directory it should log into.
const CHILD_DIR_ENV: &str = "DESKSHELL_LOGGER_EXIT_DIR";

fn run_child(test_name: &str, dir: &Path) -> Output {
    Command::new(std::env::current_exe().expect("test binary path"))
        .args([test_name, "--exact", "--nocapture", "--test-threads=1"])
        .env(CHILD_DIR_ENV, dir)
        .output()
        .expect("spawn child test process")
}

fn combined_output(output: &Output) -> String {
    format!(
        "{}{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    )
}

#[test]
fn test_fatal_exits_with_failure_status() {
    if let Some(dir) = std::env::var_os(CHILD_DIR_ENV) {
        let logger = FileLogger::create(PathBuf::from(dir).join("deskshell.log")).expect("create");
        logger.fatal("unrecoverable");
        return;
    }

    // Arrange
    let dir = TempDir::new().expect("tempdir");

    // Act
    let output = run_child("test_fatal_exits_with_failure_status", dir.path());

    // Assert
    assert!(!output.status.success(), "child exited cleanly");
    assert!(combined_output(&output).contains("FATAL | unrecoverable"));
    let log = std::fs::read_to_string(dir.path().join("deskshell.log")).expect("read log");
    assert_eq!(log, "FATAL | unrecoverable\n");
}

#[test]
fn test_unwritable_log_file_ends_process() {
    if let Some(dir) = std::env::var_os(CHILD_DIR_ENV) {
        // The log path is the directory itself, so every append fails.
        let logger = FileLogger::create(PathBuf::from(dir)).expect("create");
        logger.info("Starting application");
        return;
    }

    // Arrange
    let dir = TempDir::new().expect("tempdir");

    // Act
    let output = run_child("test_unwritable_log_file_ends_process", dir.path());

    // Assert
    assert!(!output.status.success(), "child exited cleanly");
    let text = combined_output(&output);
    assert!(text.contains("INFO  | Starting application"));
    assert!(text.contains("FATAL | cannot write log file"));
}

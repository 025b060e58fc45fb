//! In-memory log sink for unit and integration tests.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use super::{format_line, LogLevel, Logger};

/// A [`Logger`] that keeps every message in memory.
///
/// `fatal` records a termination request instead of exiting, so tests can
/// assert on it.
#[derive(Debug, Default)]
pub struct MemoryLogger {
    entries: Mutex<Vec<(LogLevel, String)>>,
    terminated: AtomicBool,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all recorded `(level, message)` pairs.
    pub fn entries(&self) -> Vec<(LogLevel, String)> {
        self.entries.lock().expect("lock poisoned").clone()
    }

    /// Returns the recorded messages formatted as log lines.
    pub fn lines(&self) -> Vec<String> {
        self.entries()
            .iter()
            .map(|(level, message)| format_line(*level, message))
            .collect()
    }

    /// Returns `true` if a message at `level` contains `needle`.
    pub fn contains(&self, level: LogLevel, needle: &str) -> bool {
        self.entries()
            .iter()
            .any(|(l, message)| *l == level && message.contains(needle))
    }

    pub fn count(&self, level: LogLevel) -> usize {
        self.entries().iter().filter(|(l, _)| *l == level).count()
    }

    /// Returns `true` once `terminate` has been called.
    pub fn termination_requested(&self) -> bool {
        self.terminated.load(Ordering::SeqCst)
    }

    pub fn clear(&self) {
        self.entries.lock().expect("lock poisoned").clear();
    }
}

impl Logger for MemoryLogger {
    fn log(&self, level: LogLevel, message: &str) {
        self.entries
            .lock()
            .expect("lock poisoned")
            .push((level, message.to_string()));
    }

    fn terminate(&self) {
        self.terminated.store(true, Ordering::SeqCst);
    }
}

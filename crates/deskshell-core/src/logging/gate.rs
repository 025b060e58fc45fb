//! Runtime severity filter driven by the preferences document.
//!
//! The document carries a master `enableLogging` switch plus one flag per
//! level.  [`LevelGate`] holds those switches as atomics so the logging path
//! can read them from any thread while the UI thread flips them through the
//! config store.  [`GatedLogger`] consults the gate before forwarding.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::{LogLevel, Logger};
use crate::domain::defaults;
use crate::domain::document::ConfigDocument;

/// Atomic set of log switches.
#[derive(Debug)]
pub struct LevelGate {
    logging: AtomicBool,
    levels: [AtomicBool; 6],
}

impl LevelGate {
    /// A gate holding the compiled defaults.
    pub fn new() -> Self {
        Self::from_document(&ConfigDocument::defaults())
    }

    pub fn from_document(doc: &ConfigDocument) -> Self {
        let gate = Self {
            logging: AtomicBool::new(defaults::ENABLE_LOGGING),
            levels: Default::default(),
        };
        gate.apply(doc);
        gate
    }

    /// Copies the switches from `doc`.  Absent flags take their default.
    pub fn apply(&self, doc: &ConfigDocument) {
        let flag = |value: Option<bool>, default: bool| value.unwrap_or(default);

        self.logging.store(
            flag(doc.enable_logging, defaults::ENABLE_LOGGING),
            Ordering::Relaxed,
        );
        let per_level = [
            flag(doc.enable_trace, defaults::ENABLE_TRACE),
            flag(doc.enable_debug, defaults::ENABLE_DEBUG),
            flag(doc.enable_info, defaults::ENABLE_INFO),
            flag(doc.enable_warn, defaults::ENABLE_WARN),
            flag(doc.enable_error, defaults::ENABLE_ERROR),
            flag(doc.enable_fatal, defaults::ENABLE_FATAL),
        ];
        for (slot, enabled) in self.levels.iter().zip(per_level) {
            slot.store(enabled, Ordering::Relaxed);
        }
    }

    /// Returns `true` if messages at `level` should be recorded.
    pub fn allows(&self, level: LogLevel) -> bool {
        self.logging.load(Ordering::Relaxed) && self.levels[level.index()].load(Ordering::Relaxed)
    }
}

impl Default for LevelGate {
    fn default() -> Self {
        Self::new()
    }
}

/// A [`Logger`] that drops messages whose level is switched off.
///
/// Termination is always forwarded: a fatal condition ends the process even
/// when fatal messages are not recorded.
pub struct GatedLogger<L> {
    inner: L,
    gate: Arc<LevelGate>,
}

impl<L: Logger> GatedLogger<L> {
    pub fn new(inner: L, gate: Arc<LevelGate>) -> Self {
        Self { inner, gate }
    }
}

impl<L: Logger> Logger for GatedLogger<L> {
    fn log(&self, level: LogLevel, message: &str) {
        if self.gate.allows(level) {
            self.inner.log(level, message);
        }
    }

    fn terminate(&self) {
        self.inner.terminate();
    }
}

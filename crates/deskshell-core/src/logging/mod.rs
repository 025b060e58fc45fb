//! Leveled logging capability.
//!
//! [`Logger`] is the sink every component ultimately writes to.  Only
//! [`Logger::log`] must be implemented; the six severity methods are provided.
//! `fatal` additionally ends the process through [`Logger::terminate`], which
//! a test sink overrides to record the request instead.
//!
//! Implementations in this crate:
//!
//! - [`MemoryLogger`] – keeps every line in memory, for tests.
//! - [`GatedLogger`] – wraps another logger and drops levels switched off in
//!   the preferences document (see [`LevelGate`]).
//!
//! The file-backed logger lives in the application crate because it touches
//! the file system.

use std::fmt;
use std::sync::Arc;

mod gate;
mod memory;

pub use gate::{GatedLogger, LevelGate};
pub use memory::MemoryLogger;

/// Message severity, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warning,
    Error,
    Fatal,
}

impl LogLevel {
    pub const ALL: [LogLevel; 6] = [
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warning,
        LogLevel::Error,
        LogLevel::Fatal,
    ];

    pub fn label(self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Fatal => "FATAL",
        }
    }

    /// Maps the numeric level sent by the UI (`1` = trace … `6` = fatal).
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1..=6 => Some(Self::ALL[usize::from(code - 1)]),
            _ => None,
        }
    }

    /// Position of the level in [`LogLevel::ALL`].
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Formats one log line: `"INFO  | message"`.
///
/// The label is padded to five characters so the separators line up.
pub fn format_line(level: LogLevel, message: &str) -> String {
    format!("{:<5} | {}", level.label(), message)
}

/// A leveled message sink.
///
/// Every method returns without error: a sink that cannot record a message
/// deals with that itself (the file logger treats it as fatal).
pub trait Logger: Send + Sync {
    /// Records one message at `level`.
    fn log(&self, level: LogLevel, message: &str);

    /// Ends the process after a fatal message.  Defaults to exit status 1.
    fn terminate(&self) {
        std::process::exit(1);
    }

    fn trace(&self, message: &str) {
        self.log(LogLevel::Trace, message);
    }

    fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    fn warning(&self, message: &str) {
        self.log(LogLevel::Warning, message);
    }

    fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }

    /// Logs at fatal level, then calls [`Logger::terminate`].
    fn fatal(&self, message: &str) {
        self.log(LogLevel::Fatal, message);
        self.terminate();
    }
}

impl<L: Logger + ?Sized> Logger for Arc<L> {
    fn log(&self, level: LogLevel, message: &str) {
        (**self).log(level, message);
    }

    fn terminate(&self) {
        (**self).terminate();
    }
}

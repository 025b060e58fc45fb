//! File-backed log sink.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use deskshell_core::logging::format_line;
use deskshell_core::{LogLevel, Logger};

/// Appends formatted lines to a log file and echoes them to stdout.
///
/// The file is opened, appended to, and closed on every call.  No handle is
/// held between calls, so writers on different threads never share a seek
/// position.  Failing to write the file ends the process.
#[derive(Debug, Clone)]
pub struct FileLogger {
    path: PathBuf,
    echo: bool,
}

impl FileLogger {
    /// Creates the log directory if needed and returns a logger for `path`.
    ///
    /// # Errors
    ///
    /// Returns the I/O error if the directory cannot be created.
    pub fn create(path: impl Into<PathBuf>) -> io::Result<Self> {
        let path = path.into();
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        Ok(Self { path, echo: true })
    }

    /// Turns the stdout echo on or off.
    pub fn with_console_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn append(&self, line: &str) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        // One write call per line keeps appends from different threads whole.
        file.write_all(format!("{line}\n").as_bytes())
    }
}

impl Logger for FileLogger {
    fn log(&self, level: LogLevel, message: &str) {
        let line = format_line(level, message);
        if self.echo {
            let _ = writeln!(io::stdout().lock(), "{line}");
        }
        if let Err(e) = self.append(&line) {
            eprintln!("FATAL | cannot write log file {}: {e}", self.path.display());
            std::process::exit(1);
        }
    }
}

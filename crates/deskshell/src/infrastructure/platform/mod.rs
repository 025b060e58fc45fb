//! Process-level operating system services.
//!
//! - [`SystemPlatform`] implements [`Platform`]: locale detection, spawning a
//!   replacement process for restart, and process exit.
//! - [`CommandNotifier`] implements [`Notifier`](crate::application::ports::Notifier)
//!   by calling the desktop's command-line notification tool.

mod locale;
mod notifier;

use std::process::{Command, Stdio};

use tracing::info;

use crate::application::ports::{Platform, PlatformError};

pub use locale::{detect_language, normalize_locale};
pub use notifier::CommandNotifier;

/// The real operating system.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemPlatform;

impl SystemPlatform {
    pub fn new() -> Self {
        Self
    }
}

impl Platform for SystemPlatform {
    fn system_language(&self) -> Option<String> {
        detect_language(|key| std::env::var(key).ok())
    }

    fn spawn_replacement(&self) -> Result<(), PlatformError> {
        let exe_path = std::env::current_exe().map_err(PlatformError::CurrentExe)?;
        let args: Vec<String> = std::env::args().skip(1).collect();
        info!(exe = %exe_path.display(), args = ?args, "Spawning replacement process");
        // The environment is inherited by default.
        Command::new(exe_path)
            .args(&args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(PlatformError::Spawn)?;
        Ok(())
    }

    fn exit(&self, code: i32) {
        std::process::exit(code);
    }
}

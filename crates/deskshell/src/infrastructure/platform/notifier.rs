//! Native desktop notifications through command-line tools.

use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::application::ports::{Notifier, PlatformError};

/// Sends native notifications through the desktop's command-line tool.
///
/// - Linux: `notify-send`
/// - macOS: `osascript -e 'display notification ...'`
///
/// Other platforms report [`PlatformError::UnsupportedPlatform`].
#[derive(Debug, Clone)]
pub struct CommandNotifier {
    app_name: String,
}

impl CommandNotifier {
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
        }
    }

    /// The command line that would deliver the notification on this platform.
    fn command(&self, title: &str, body: &str, icon: &Path) -> Result<Command, PlatformError> {
        #[cfg(target_os = "linux")]
        {
            let mut cmd = Command::new("notify-send");
            cmd.arg("--app-name")
                .arg(&self.app_name)
                .arg("--icon")
                .arg(icon)
                .arg(title)
                .arg(body);
            Ok(cmd)
        }

        #[cfg(target_os = "macos")]
        {
            let _ = icon;
            let mut cmd = Command::new("osascript");
            cmd.arg("-e").arg(applescript_notification(title, body, &self.app_name));
            Ok(cmd)
        }

        #[cfg(not(any(target_os = "linux", target_os = "macos")))]
        {
            let _ = (title, body, icon);
            Err(PlatformError::UnsupportedPlatform(format!(
                "native notifications for {}",
                self.app_name
            )))
        }
    }
}

/// Builds an AppleScript `display notification` statement.
#[cfg_attr(not(target_os = "macos"), allow(dead_code))]
fn applescript_notification(title: &str, body: &str, app_name: &str) -> String {
    fn quote(s: &str) -> String {
        format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
    }
    format!(
        "display notification {} with title {} subtitle {}",
        quote(body),
        quote(title),
        quote(app_name)
    )
}

impl Notifier for CommandNotifier {
    fn notify(&self, title: &str, body: &str, icon: &Path) -> Result<(), PlatformError> {
        let output = self
            .command(title, body, icon)?
            .output()
            .map_err(|e| PlatformError::Notification(e.to_string()))?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(PlatformError::Notification(format!(
                "notifier exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }
        debug!(title, "Native notification sent");
        Ok(())
    }
}

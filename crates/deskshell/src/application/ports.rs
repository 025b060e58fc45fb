//! Traits for the collaborators the application layer drives.
//!
//! The application never touches the window runtime, the file system, or the
//! operating system directly.  It calls through these traits so tests can
//! substitute [`crate::infrastructure::host::mock::MockHost`],
//! [`crate::infrastructure::storage::mock::MemoryRepository`], or a generated
//! `mockall` mock.

use std::path::Path;

use deskshell_core::{ConfigDocument, ConfigError};

/// Error type for operating-system collaborators.
#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("failed to resolve current executable: {0}")]
    CurrentExe(#[source] std::io::Error),
    #[error("failed to spawn replacement process: {0}")]
    Spawn(#[source] std::io::Error),
    #[error("native notification failed: {0}")]
    Notification(String),
    #[error("platform not supported: {0}")]
    UnsupportedPlatform(String),
}

/// Persistent storage for the preferences document.
///
/// The production implementation is
/// [`crate::infrastructure::storage::JsonFileRepository`].
pub trait DocumentRepository: Send {
    /// Where the document lives, for log messages.
    fn location(&self) -> &Path;
    /// Returns `true` if a stored document exists.
    fn exists(&self) -> bool;
    /// Reads and decodes the stored document.
    fn read(&self) -> Result<ConfigDocument, ConfigError>;
    /// Encodes and stores `doc`, replacing any previous content.
    fn write(&self, doc: &ConfigDocument) -> Result<(), ConfigError>;
}

/// The desktop runtime hosting the main window and the web UI.
///
/// Window methods report the window as last known to the host.  Every method
/// is infallible from the caller's point of view.
pub trait HostRuntime: Send + Sync {
    fn window_position(&self) -> (i32, i32);
    fn window_size(&self) -> (i32, i32);
    fn is_maximised(&self) -> bool;
    fn is_normal(&self) -> bool;
    fn is_fullscreen(&self) -> bool;
    fn set_window_position(&self, x: i32, y: i32);
    fn set_window_size(&self, width: i32, height: i32);
    fn unminimise(&self);
    fn show(&self);
    /// Runs a script inside the UI's JavaScript context.
    fn execute_script(&self, script: &str);
    /// Delivers a named event with a JSON payload to the UI.
    fn emit_event(&self, name: &str, payload: serde_json::Value);
}

/// Native (OS-level) notifications.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    fn notify(&self, title: &str, body: &str, icon: &Path) -> Result<(), PlatformError>;
}

/// Process-level operating system services.
#[cfg_attr(test, mockall::automock)]
pub trait Platform: Send + Sync {
    /// The user's preferred UI language as a BCP 47 tag, if one is set.
    fn system_language(&self) -> Option<String>;
    /// Starts a new instance of the running executable with the same
    /// arguments.  Returns once the child has been spawned.
    fn spawn_replacement(&self) -> Result<(), PlatformError>;
    /// Ends the current process.
    fn exit(&self, code: i32);
}

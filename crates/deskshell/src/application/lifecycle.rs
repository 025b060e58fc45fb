//! Use case: react to the application's coarse lifecycle.
//!
//! ```text
//! NotStarted ──on_startup──▶ Starting ──▶ Running ──before_close──▶ Closing ──on_shutdown──▶ Terminated
//! ```
//!
//! - **Startup** initializes the [`ConfigStore`], restores the saved window
//!   geometry, and on first run emits the detected UI language.
//! - **Close** snapshots the host window geometry into the document and
//!   saves.  It never vetoes the close, even when the save fails.
//! - **Terminated** performs no further config I/O.
//!
//! Out-of-order hooks are reported as [`LifecycleError::InvalidTransition`]
//! and logged; they never panic.

use serde_json::json;
use thiserror::Error;
use tracing::{error, info, warn};

use deskshell_core::{WindowGeometry, WindowState};

use crate::application::config_store::ConfigStore;
use crate::application::events::{EventBus, SYSTEM_LANGUAGE_EVENT};
use crate::application::ports::{DocumentRepository, HostRuntime, Platform};

/// Language used when the platform reports none.
pub const DEFAULT_LANGUAGE: &str = "en-US";

/// Coarse application lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LifecyclePhase {
    #[default]
    NotStarted,
    Starting,
    Running,
    Closing,
    Terminated,
}

impl LifecyclePhase {
    /// Returns `true` if moving from `self` to `next` is allowed.
    pub fn can_transition_to(self, next: LifecyclePhase) -> bool {
        use LifecyclePhase::*;
        matches!(
            (self, next),
            (NotStarted, Starting)
                | (Starting, Running)
                | (Running, Closing)
                | (Running, Terminated)
                | (Closing, Terminated)
        )
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LifecycleError {
    #[error("invalid lifecycle transition from {from:?} to {to:?}")]
    InvalidTransition {
        from: LifecyclePhase,
        to: LifecyclePhase,
    },
}

/// Summary of what startup did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartupReport {
    /// No config file existed before initialization.
    pub first_run: bool,
    /// Initialization completed; `false` means the process runs on defaults.
    pub config_loaded: bool,
}

/// Drives the lifecycle state machine and its side effects.
#[derive(Debug)]
pub struct LifecycleHooks {
    phase: LifecyclePhase,
    events: EventBus,
}

impl LifecycleHooks {
    pub fn new(events: EventBus) -> Self {
        Self {
            phase: LifecyclePhase::NotStarted,
            events,
        }
    }

    pub fn phase(&self) -> LifecyclePhase {
        self.phase
    }

    fn advance(&mut self, to: LifecyclePhase) -> Result<(), LifecycleError> {
        if !self.phase.can_transition_to(to) {
            return Err(LifecycleError::InvalidTransition {
                from: self.phase,
                to,
            });
        }
        self.phase = to;
        Ok(())
    }

    /// Startup hook.
    ///
    /// Config failures are logged and the process continues on defaults.
    ///
    /// # Errors
    ///
    /// Returns [`LifecycleError::InvalidTransition`] if startup already ran.
    pub fn on_startup<R: DocumentRepository>(
        &mut self,
        store: &mut ConfigStore<R>,
        host: &dyn HostRuntime,
        platform: &dyn Platform,
    ) -> Result<StartupReport, LifecycleError> {
        self.advance(LifecyclePhase::Starting)?;
        info!("Starting application");
        info!(path = %store.path().display(), "Initiating config");

        let first_run = !store.file_exists();
        let config_loaded = match store.initialize() {
            Ok(_) => true,
            Err(e) if e.is_load_failure() => {
                error!(error = %e, "Failed to load config; continuing with defaults");
                false
            }
            Err(e) => {
                error!(error = %e, "Failed to create config; continuing with defaults");
                false
            }
        };

        restore_window(store, host);

        if first_run {
            self.on_first_run(platform);
        }

        self.advance(LifecyclePhase::Running)?;
        Ok(StartupReport {
            first_run,
            config_loaded,
        })
    }

    fn on_first_run(&self, platform: &dyn Platform) {
        info!("First run detected");
        let language = platform
            .system_language()
            .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());
        info!("Setting default system language to {language}");
        self.events.emit(SYSTEM_LANGUAGE_EVENT, json!(language));
    }

    /// Close hook.  Always returns `false` ("do not prevent close").
    ///
    /// A save failure is logged and swallowed.
    pub fn before_close<R: DocumentRepository>(
        &mut self,
        store: &mut ConfigStore<R>,
        host: &dyn HostRuntime,
    ) -> bool {
        if let Err(e) = self.advance(LifecyclePhase::Closing) {
            warn!(error = %e, "Ignoring close hook");
            return false;
        }
        info!("Saving config");
        match store.snapshot_window(capture_geometry(host)) {
            Ok(()) => info!("Saving config complete"),
            Err(e) => error!(error = %e, "Failed to save config on close"),
        }
        false
    }

    /// Marks the process as terminated and closes the store to writes.
    pub fn on_shutdown<R: DocumentRepository>(&mut self, store: &mut ConfigStore<R>) {
        match self.advance(LifecyclePhase::Terminated) {
            Ok(()) => {
                store.close();
                info!("Application terminated");
            }
            Err(e) => warn!(error = %e, "Ignoring shutdown hook"),
        }
    }
}

/// Reads the current window geometry from the host.
pub fn capture_geometry(host: &dyn HostRuntime) -> WindowGeometry {
    let (x, y) = host.window_position();
    let (width, height) = host.window_size();
    let state = if host.is_maximised() {
        WindowState::Maximised
    } else {
        WindowState::Normal
    };
    WindowGeometry {
        x,
        y,
        width,
        height,
        state,
    }
}

/// Moves and resizes the host window to the saved geometry.
///
/// Negative values mean "let the host decide" and are skipped.  The size is
/// only applied while the window is in the normal state.
pub fn restore_window<R: DocumentRepository>(store: &ConfigStore<R>, host: &dyn HostRuntime) {
    let (x, y) = (store.window_start_position_x(), store.window_start_position_y());
    if x >= 0 && y >= 0 {
        host.set_window_position(x, y);
    }
    let (width, height) = (store.window_start_size_x(), store.window_start_size_y());
    if width >= 0 && height >= 0 && host.is_normal() {
        host.set_window_size(width, height);
    }
}

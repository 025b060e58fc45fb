//! Command bridge: exposes application-layer operations to the web UI.
//!
//! Every command function lives here and delegates to the shared
//! [`AppState`].  The host runtime is the only consumer of this module; it
//! must NOT be imported by the application or domain layers.
//!
//! # How UI commands work (for beginners)
//!
//! The web UI calls into the backend by name:
//! ```js
//! const theme = await invoke("get_theme");
//! ```
//!
//! The host routes `"get_theme"` to [`get_theme`], which receives the
//! `AppState` and returns a value the host serialises to JSON.
//!
//! # `CommandResult<T>` wrapper
//!
//! All commands return `CommandResult<T>` rather than `Result<T, E>`, so
//! every response has the same shape:
//! `{ success: bool, data: T | null, error: string | null }`.
//!
//! # Lifecycle callbacks
//!
//! Besides commands, the host calls [`AppState::startup`],
//! [`AppState::before_close`], [`AppState::shutdown`] and
//! [`AppState::second_instance`] on the matching runtime events.

use std::path::PathBuf;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{debug, error, info, trace, warn};

use deskshell_core::{ConfigDocument, ConfigField, LevelGate, LogLevel};

use crate::application::{
    config_store::ConfigStore,
    events::EventBus,
    instance::{on_second_instance_launch, SecondInstanceLaunch},
    lifecycle::{LifecycleHooks, StartupReport},
    notify::{send_notification as deliver_notification, Delivery, Notification},
    ports::{DocumentRepository, HostRuntime, Notifier, Platform},
    restart,
};
use crate::infrastructure::storage::JsonFileRepository;

// ── Shared application state ──────────────────────────────────────────────────

/// Collaborators the bridge hands to the application layer.
pub struct Services {
    pub host: Arc<dyn HostRuntime>,
    pub notifier: Arc<dyn Notifier>,
    pub platform: Arc<dyn Platform>,
    /// Icon shown by native notifications.
    pub icon_path: PathBuf,
}

/// Application state shared between commands.
///
/// The store and the lifecycle sit behind async Tokio mutexes because
/// commands run concurrently in an async context.  When both are needed the
/// lifecycle is locked first.
pub struct AppState {
    pub store: Mutex<ConfigStore<JsonFileRepository>>,
    pub lifecycle: Mutex<LifecycleHooks>,
    pub events: EventBus,
    /// Severity switches consulted by the log sink.
    pub gate: Arc<LevelGate>,
    pub services: Services,
}

impl AppState {
    pub fn new(
        repo: JsonFileRepository,
        services: Services,
        events: EventBus,
        gate: Arc<LevelGate>,
    ) -> Arc<Self> {
        Arc::new(Self {
            store: Mutex::new(ConfigStore::new(repo)),
            lifecycle: Mutex::new(LifecycleHooks::new(events.clone())),
            events,
            gate,
            services,
        })
    }

    /// Startup callback.  Applies the loaded log switches to the gate.
    pub async fn startup(&self) -> Option<StartupReport> {
        let mut lifecycle = self.lifecycle.lock().await;
        let mut store = self.store.lock().await;
        let report = lifecycle.on_startup(
            &mut store,
            self.services.host.as_ref(),
            self.services.platform.as_ref(),
        );
        self.gate.apply(store.document());
        match report {
            Ok(report) => Some(report),
            Err(e) => {
                warn!(error = %e, "Ignoring startup callback");
                None
            }
        }
    }

    /// Close callback.  Returns `true` to prevent the close, which never
    /// happens.
    pub async fn before_close(&self) -> bool {
        let mut lifecycle = self.lifecycle.lock().await;
        let mut store = self.store.lock().await;
        lifecycle.before_close(&mut store, self.services.host.as_ref())
    }

    /// Shutdown callback.  Later commands still update memory but no longer
    /// write the config file.
    pub async fn shutdown(&self) {
        let mut lifecycle = self.lifecycle.lock().await;
        let mut store = self.store.lock().await;
        lifecycle.on_shutdown(&mut store);
    }

    /// Another process of this application was launched.
    pub fn second_instance(&self, launch: SecondInstanceLaunch) {
        on_second_instance_launch(self.services.host.as_ref(), &self.events, launch);
    }

    fn refresh_gate<R: DocumentRepository>(&self, store: &ConfigStore<R>) {
        self.gate.apply(store.document());
    }
}

// ── Response wrapper ──────────────────────────────────────────────────────────

/// Unified response wrapper used by UI commands.
#[derive(Debug, Serialize, Deserialize)]
pub struct CommandResult<T: Serialize> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T: Serialize> CommandResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
    pub fn err(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(msg.into()),
        }
    }
}

// ── Config commands ───────────────────────────────────────────────────────────

/// Returns the whole preferences document.
///
/// # Example (frontend)
/// ```ts
/// const config = await invoke<Config>('get_config');
/// ```
pub async fn get_config(state: Arc<AppState>) -> CommandResult<ConfigDocument> {
    CommandResult::ok(state.store.lock().await.document().clone())
}

/// Replaces the whole document; absent fields are filled from defaults.
pub async fn set_config(state: Arc<AppState>, config: ConfigDocument) -> CommandResult<()> {
    let mut store = state.store.lock().await;
    let result = store.import_document(config);
    state.refresh_gate(&store);
    match result {
        Ok(()) => CommandResult::ok(()),
        Err(e) => CommandResult::err(format!("failed to save config: {e}")),
    }
}

/// Returns the path of the preferences file.
pub async fn get_config_path(state: Arc<AppState>) -> CommandResult<String> {
    CommandResult::ok(state.store.lock().await.path().display().to_string())
}

pub async fn get_theme(state: Arc<AppState>) -> CommandResult<String> {
    CommandResult::ok(state.store.lock().await.theme())
}

pub async fn set_theme(state: Arc<AppState>, theme: String) -> CommandResult<()> {
    match state.store.lock().await.set_theme(&theme) {
        Ok(()) => CommandResult::ok(()),
        Err(e) => CommandResult::err(format!("failed to save config: {e}")),
    }
}

pub async fn get_use_system_title_bar(state: Arc<AppState>) -> CommandResult<bool> {
    CommandResult::ok(state.store.lock().await.use_system_title_bar())
}

pub async fn set_use_system_title_bar(state: Arc<AppState>, value: bool) -> CommandResult<()> {
    match state.store.lock().await.set_use_system_title_bar(value) {
        Ok(()) => CommandResult::ok(()),
        Err(e) => CommandResult::err(format!("failed to save config: {e}")),
    }
}

/// Reads one field by name (`"Theme"`, `"enableDebug"`, ...) as text.
pub async fn get_config_field(state: Arc<AppState>, name: String) -> CommandResult<String> {
    match state.store.lock().await.field_by_name(&name) {
        Ok(value) => CommandResult::ok(value),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

/// Writes one field by name from its text form.
///
/// Changing an `enable*` switch takes effect on logging immediately.
pub async fn set_config_field(
    state: Arc<AppState>,
    name: String,
    value: String,
) -> CommandResult<()> {
    let mut store = state.store.lock().await;
    let result = store.set_field_by_name(&name, &value);
    if name.parse::<ConfigField>().is_ok_and(ConfigField::is_log_switch) {
        state.refresh_gate(&store);
    }
    match result {
        Ok(_) => CommandResult::ok(()),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

/// Restores every field to its default.
pub async fn reset_config(state: Arc<AppState>) -> CommandResult<()> {
    let mut store = state.store.lock().await;
    let result = store.reset_to_defaults();
    state.refresh_gate(&store);
    match result {
        Ok(()) => CommandResult::ok(()),
        Err(e) => CommandResult::err(format!("failed to save config: {e}")),
    }
}

/// Loads preferences from another file and makes them current.
///
/// A file that cannot be read or decoded leaves the current document as is.
pub async fn import_config(state: Arc<AppState>, path: String) -> CommandResult<()> {
    let doc = match JsonFileRepository::new(&path).read() {
        Ok(doc) => doc,
        Err(e) => {
            error!(error = %e, "Failed to import config");
            return CommandResult::err(e.to_string());
        }
    };
    info!(path = %path, "Importing config");
    set_config(state, doc).await
}

/// Writes the current preferences to another file.
pub async fn export_config(state: Arc<AppState>, path: String) -> CommandResult<()> {
    let store = state.store.lock().await;
    match JsonFileRepository::new(&path).write(store.document()) {
        Ok(()) => {
            info!(path = %path, "Exported config");
            CommandResult::ok(())
        }
        Err(e) => {
            error!(error = %e, "Failed to export config");
            CommandResult::err(e.to_string())
        }
    }
}

// ── Shell commands ────────────────────────────────────────────────────────────

/// Shows a notification in-window or natively, depending on window state.
pub async fn send_notification(
    state: Arc<AppState>,
    notification: Notification,
) -> CommandResult<()> {
    let services = &state.services;
    match deliver_notification(
        services.host.as_ref(),
        services.notifier.as_ref(),
        &services.icon_path,
        &notification,
    ) {
        Delivery::InWindow | Delivery::Native => CommandResult::ok(()),
        Delivery::Failed => CommandResult::err("failed to send native notification"),
    }
}

/// Logs a message from the UI.  `level` is `1` (trace) to `6` (fatal).
///
/// Fatal messages from the UI are logged as errors and do not end the
/// process.
pub async fn log_message(_state: Arc<AppState>, message: String, level: u8) -> CommandResult<()> {
    let Some(level) = LogLevel::from_code(level) else {
        return CommandResult::err(format!("unknown log level {level}"));
    };
    match level {
        LogLevel::Trace => trace!("{message}"),
        LogLevel::Debug => debug!("{message}"),
        LogLevel::Info => info!("{message}"),
        LogLevel::Warning => warn!("{message}"),
        LogLevel::Error | LogLevel::Fatal => error!("{message}"),
    }
    CommandResult::ok(())
}

/// Restarts the application.  Only returns if spawning the new process
/// failed.
pub async fn restart_application(state: Arc<AppState>) -> CommandResult<()> {
    let mut lifecycle = state.lifecycle.lock().await;
    let mut store = state.store.lock().await;
    match restart::restart_application(
        &mut lifecycle,
        &mut store,
        state.services.host.as_ref(),
        state.services.platform.as_ref(),
    ) {
        Ok(()) => CommandResult::ok(()),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

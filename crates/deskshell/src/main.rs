//! deskshell entry point.
//!
//! Wires together the infrastructure services and starts the Tokio async
//! runtime.  Without a windowing runtime attached, the binary runs against a
//! [`HeadlessHost`] until Ctrl-C, then runs the close and shutdown hooks.
//!
//! # Architecture
//!
//! ```text
//! main()
//!  └─ logging             -- registry + EnvFilter + LoggerLayer(GatedLogger(FileLogger))
//!  └─ AppState::new()     -- config store, lifecycle hooks, event bus
//!  └─ event pump          -- EventBus → HostRuntime::emit_event (Tokio task)
//!  └─ AppState::startup() -- initialize config, restore window, first run
//!  └─ Ctrl-C
//!  └─ before_close + shutdown
//! ```

use std::sync::Arc;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use deskshell::application::events::{spawn_event_pump, EventBus};
use deskshell::application::ports::HostRuntime;
use deskshell::infrastructure::host::HeadlessHost;
use deskshell::infrastructure::logging::{FileLogger, LoggerLayer};
use deskshell::infrastructure::platform::{CommandNotifier, SystemPlatform};
use deskshell::infrastructure::storage::{
    config_file_path, icon_file_path, log_file_path, JsonFileRepository,
};
use deskshell::infrastructure::ui_bridge::{AppState, Services};
use deskshell_core::{GatedLogger, LevelGate};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logging is a precondition: failing to set it up ends the process.
    let log_path = log_file_path().context("resolving log file path")?;
    let file_logger = FileLogger::create(&log_path)
        .with_context(|| format!("creating log directory for {}", log_path.display()))?;
    let gate = Arc::new(LevelGate::new());
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace")))
        .with(LoggerLayer::new(GatedLogger::new(file_logger, Arc::clone(&gate))))
        .init();

    let config_path = config_file_path().context("resolving config file path")?;
    let icon_path = icon_file_path().context("resolving icon path")?;

    let host: Arc<dyn HostRuntime> = Arc::new(HeadlessHost::new());
    let (events, event_rx) = EventBus::new();
    let pump = spawn_event_pump(event_rx, Arc::clone(&host));

    let state = AppState::new(
        JsonFileRepository::new(config_path),
        Services {
            host,
            notifier: Arc::new(CommandNotifier::new("deskshell")),
            platform: Arc::new(SystemPlatform::new()),
            icon_path,
        },
        events,
        gate,
    );

    state.startup().await;

    info!("deskshell ready.  Press Ctrl-C to exit.");
    tokio::signal::ctrl_c()
        .await
        .context("waiting for shutdown signal")?;
    info!("shutdown signal received");

    state.before_close().await;
    state.shutdown().await;

    // Dropping the state drops the last event senders, which ends the pump.
    drop(state);
    if let Err(e) = pump.await {
        tracing::warn!(error = %e, "event pump ended abnormally");
    }
    Ok(())
}

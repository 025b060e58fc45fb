//! Fire-and-forget event delivery towards the UI.
//!
//! Producers call [`EventBus::emit`], which queues the event on an unbounded
//! channel and returns immediately.  A single pump task started with
//! [`spawn_event_pump`] drains the channel into [`HostRuntime::emit_event`].
//!
//! Delivery is best effort and at most once: nothing awaits completion, and
//! events queued after the pump stops are dropped with a warning.

use std::sync::Arc;

use serde_json::Value;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, trace, warn};

use crate::application::ports::HostRuntime;

/// Event name carrying the second instance's command-line arguments.
pub const LAUNCH_ARGS_EVENT: &str = "launchArgs";

/// Event name carrying the detected UI language on first run.
pub const SYSTEM_LANGUAGE_EVENT: &str = "systemLanguage";

/// A named event with a JSON payload.
#[derive(Debug, Clone, PartialEq)]
pub struct HostEvent {
    pub name: String,
    pub payload: Value,
}

/// Cloneable sending side of the event channel.
#[derive(Debug, Clone)]
pub struct EventBus {
    tx: mpsc::UnboundedSender<HostEvent>,
}

impl EventBus {
    /// Creates a bus and the receiver the pump should drain.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<HostEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Queues an event without waiting for delivery.
    pub fn emit(&self, name: &str, payload: Value) {
        let event = HostEvent {
            name: name.to_string(),
            payload,
        };
        if self.tx.send(event).is_err() {
            warn!(event = name, "Event pump stopped; dropping event");
        }
    }
}

/// Spawns the task that forwards queued events to `host`.
///
/// The task ends once every [`EventBus`] clone has been dropped.
pub fn spawn_event_pump(
    mut rx: mpsc::UnboundedReceiver<HostEvent>,
    host: Arc<dyn HostRuntime>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(event) = rx.recv().await {
            trace!(event = %event.name, "Delivering event");
            host.emit_event(&event.name, event.payload);
        }
        debug!("Event pump stopped");
    })
}

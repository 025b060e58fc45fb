//! Use case: the user launched the application while it was already running.
//!
//! The running instance brings its window to the front and forwards the new
//! command line to the UI as a `launchArgs` event.

use std::path::PathBuf;

use serde_json::json;
use tracing::debug;

use crate::application::events::{EventBus, LAUNCH_ARGS_EVENT};
use crate::application::ports::HostRuntime;

/// What the second process handed over.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecondInstanceLaunch {
    pub args: Vec<String>,
    pub working_directory: PathBuf,
}

/// Focuses the existing window and forwards `launch.args` to the UI.
///
/// The event is queued, not awaited.
pub fn on_second_instance_launch(
    host: &dyn HostRuntime,
    events: &EventBus,
    launch: SecondInstanceLaunch,
) {
    debug!("User opened a second instance {}", launch.args.join(","));
    debug!(
        "User opened a second instance from {}",
        launch.working_directory.display()
    );
    host.unminimise();
    host.show();
    events.emit(LAUNCH_ARGS_EVENT, json!(launch.args));
}

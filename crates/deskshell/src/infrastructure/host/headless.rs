//! Host runtime for running without a window toolkit.

use std::sync::Mutex;

use serde_json::Value;
use tracing::{debug, info};

use crate::application::ports::HostRuntime;

/// Default window size of a fresh headless host.
const DEFAULT_SIZE: (i32, i32) = (1024, 768);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct WindowModel {
    pub position: (i32, i32),
    pub size: (i32, i32),
    pub maximised: bool,
    pub minimised: bool,
    pub fullscreen: bool,
}

impl Default for WindowModel {
    fn default() -> Self {
        Self {
            position: (0, 0),
            size: DEFAULT_SIZE,
            maximised: false,
            minimised: false,
            fullscreen: false,
        }
    }
}

impl WindowModel {
    pub fn is_normal(&self) -> bool {
        !self.maximised && !self.minimised && !self.fullscreen
    }
}

/// A [`HostRuntime`] without a real window.
///
/// Window operations update an in-memory model; scripts and events are
/// logged instead of delivered.
#[derive(Debug, Default)]
pub struct HeadlessHost {
    window: Mutex<WindowModel>,
}

impl HeadlessHost {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_window<T>(&self, f: impl FnOnce(&mut WindowModel) -> T) -> T {
        // A poisoned lock still holds a usable model.
        let mut guard = self.window.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut guard)
    }
}

impl HostRuntime for HeadlessHost {
    fn window_position(&self) -> (i32, i32) {
        self.with_window(|w| w.position)
    }

    fn window_size(&self) -> (i32, i32) {
        self.with_window(|w| w.size)
    }

    fn is_maximised(&self) -> bool {
        self.with_window(|w| w.maximised)
    }

    fn is_normal(&self) -> bool {
        self.with_window(|w| w.is_normal())
    }

    fn is_fullscreen(&self) -> bool {
        self.with_window(|w| w.fullscreen)
    }

    fn set_window_position(&self, x: i32, y: i32) {
        debug!(x, y, "Moving window");
        self.with_window(|w| w.position = (x, y));
    }

    fn set_window_size(&self, width: i32, height: i32) {
        debug!(width, height, "Resizing window");
        self.with_window(|w| w.size = (width, height));
    }

    fn unminimise(&self) {
        self.with_window(|w| w.minimised = false);
    }

    fn show(&self) {
        debug!("Showing window");
    }

    fn execute_script(&self, script: &str) {
        debug!(script, "Executing script");
    }

    fn emit_event(&self, name: &str, payload: Value) {
        info!(event = name, payload = %payload, "Emitting event");
    }
}

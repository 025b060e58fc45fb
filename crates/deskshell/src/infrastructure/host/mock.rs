//! Mock host runtime for unit testing.
//!
//! Reports a configurable window and records every call the application
//! makes, so tests can assert on moves, resizes, scripts and events without a
//! real windowing toolkit.

use std::sync::Mutex;

use serde_json::Value;

use super::headless::WindowModel;
use crate::application::ports::HostRuntime;

#[derive(Debug, Default)]
struct Recorded {
    position_calls: Vec<(i32, i32)>,
    size_calls: Vec<(i32, i32)>,
    scripts: Vec<String>,
    events: Vec<(String, Value)>,
    unminimise_count: u32,
    show_count: u32,
}

/// A [`HostRuntime`] that records calls.
#[derive(Debug, Default)]
pub struct MockHost {
    window: Mutex<WindowModel>,
    recorded: Mutex<Recorded>,
}

impl MockHost {
    /// A normal window at `(0, 0)` sized 1024x768.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the reported position and size.
    pub fn with_geometry(self, position: (i32, i32), size: (i32, i32)) -> Self {
        {
            let mut w = self.window.lock().expect("lock poisoned");
            w.position = position;
            w.size = size;
        }
        self
    }

    pub fn maximised(self) -> Self {
        self.window.lock().expect("lock poisoned").maximised = true;
        self
    }

    pub fn minimised(self) -> Self {
        self.window.lock().expect("lock poisoned").minimised = true;
        self
    }

    pub fn fullscreen(self) -> Self {
        self.window.lock().expect("lock poisoned").fullscreen = true;
        self
    }

    pub fn position_calls(&self) -> Vec<(i32, i32)> {
        self.recorded.lock().expect("lock poisoned").position_calls.clone()
    }

    pub fn size_calls(&self) -> Vec<(i32, i32)> {
        self.recorded.lock().expect("lock poisoned").size_calls.clone()
    }

    pub fn scripts(&self) -> Vec<String> {
        self.recorded.lock().expect("lock poisoned").scripts.clone()
    }

    /// Events delivered through [`HostRuntime::emit_event`], in order.
    pub fn events(&self) -> Vec<(String, Value)> {
        self.recorded.lock().expect("lock poisoned").events.clone()
    }

    pub fn unminimise_count(&self) -> u32 {
        self.recorded.lock().expect("lock poisoned").unminimise_count
    }

    pub fn show_count(&self) -> u32 {
        self.recorded.lock().expect("lock poisoned").show_count
    }
}

impl HostRuntime for MockHost {
    fn window_position(&self) -> (i32, i32) {
        self.window.lock().expect("lock poisoned").position
    }

    fn window_size(&self) -> (i32, i32) {
        self.window.lock().expect("lock poisoned").size
    }

    fn is_maximised(&self) -> bool {
        self.window.lock().expect("lock poisoned").maximised
    }

    fn is_normal(&self) -> bool {
        self.window.lock().expect("lock poisoned").is_normal()
    }

    fn is_fullscreen(&self) -> bool {
        self.window.lock().expect("lock poisoned").fullscreen
    }

    fn set_window_position(&self, x: i32, y: i32) {
        self.window.lock().expect("lock poisoned").position = (x, y);
        self.recorded
            .lock()
            .expect("lock poisoned")
            .position_calls
            .push((x, y));
    }

    fn set_window_size(&self, width: i32, height: i32) {
        self.window.lock().expect("lock poisoned").size = (width, height);
        self.recorded
            .lock()
            .expect("lock poisoned")
            .size_calls
            .push((width, height));
    }

    fn unminimise(&self) {
        self.window.lock().expect("lock poisoned").minimised = false;
        self.recorded.lock().expect("lock poisoned").unminimise_count += 1;
    }

    fn show(&self) {
        self.recorded.lock().expect("lock poisoned").show_count += 1;
    }

    fn execute_script(&self, script: &str) {
        self.recorded
            .lock()
            .expect("lock poisoned")
            .scripts
            .push(script.to_string());
    }

    fn emit_event(&self, name: &str, payload: Value) {
        self.recorded
            .lock()
            .expect("lock poisoned")
            .events
            .push((name.to_string(), payload));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_host_window_states() {
        assert!(MockHost::new().is_normal());
        assert!(!MockHost::new().maximised().is_normal());
        assert!(!MockHost::new().minimised().is_normal());
        assert!(MockHost::new().fullscreen().is_fullscreen());
    }

    #[test]
    fn test_mock_host_records_calls() {
        // Arrange
        let host = MockHost::new();

        // Act
        host.set_window_position(1, 2);
        host.execute_script("window.toast({});");
        host.emit_event("launchArgs", Value::Null);

        // Assert
        assert_eq!(host.position_calls(), vec![(1, 2)]);
        assert_eq!(host.scripts(), vec!["window.toast({});".to_string()]);
        assert_eq!(host.events(), vec![("launchArgs".to_string(), Value::Null)]);
    }
}

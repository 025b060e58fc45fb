//! Use case: show a notification to the user.
//!
//! When the main window is on screen (normal, maximised or fullscreen) the
//! notification is rendered in-window by calling the UI's `window.toast`
//! function.  Otherwise it goes to the operating system's notification
//! facility through the [`Notifier`] port.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, error};

use crate::application::ports::{HostRuntime, Notifier};

/// A notification request from the UI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Notification {
    pub title: String,
    pub message: String,
    /// Route the UI navigates to when the toast is clicked; empty for none.
    pub path: String,
    /// Toast style understood by the UI (`"success"`, `"error"`, ...).
    pub variant: String,
}

/// How a notification was delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    InWindow,
    Native,
    /// The native notifier failed; the error was logged.
    Failed,
}

/// Builds the `window.toast({...})` call for `notification`.
///
/// Every value is JSON-encoded, so quotes and newlines in the text cannot
/// break out of the string literal.
pub fn toast_script(notification: &Notification) -> String {
    let mut payload = Map::new();
    payload.insert("title".into(), Value::from(notification.title.as_str()));
    payload.insert(
        "description".into(),
        Value::from(notification.message.as_str()),
    );
    if !notification.path.is_empty() {
        payload.insert("path".into(), Value::from(notification.path.as_str()));
    }
    payload.insert("variant".into(), Value::from(notification.variant.as_str()));
    format!("window.toast({});", Value::Object(payload))
}

/// Delivers `notification` in-window if the window is visible, natively
/// otherwise.
pub fn send_notification(
    host: &dyn HostRuntime,
    notifier: &dyn Notifier,
    icon: &Path,
    notification: &Notification,
) -> Delivery {
    if host.is_normal() || host.is_maximised() || host.is_fullscreen() {
        debug!(title = %notification.title, "Showing in-window notification");
        host.execute_script(&toast_script(notification));
        return Delivery::InWindow;
    }
    debug!(title = %notification.title, "Showing native notification");
    match notifier.notify(&notification.title, &notification.message, icon) {
        Ok(()) => Delivery::Native,
        Err(e) => {
            error!(error = %e, "Failed to send native notification");
            Delivery::Failed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{MockNotifier, PlatformError};
    use crate::infrastructure::host::mock::MockHost;

    fn sample() -> Notification {
        Notification {
            title: "Saved".to_string(),
            message: "Settings \"stored\"\nok".to_string(),
            path: String::new(),
            variant: "success".to_string(),
        }
    }

    #[test]
    fn test_toast_script_escapes_values_and_omits_empty_path() {
        // Act
        let script = toast_script(&sample());

        // Assert
        assert!(script.starts_with("window.toast({"));
        assert!(script.ends_with("});"));
        assert!(script.contains(r#""description":"Settings \"stored\"\nok""#));
        assert!(!script.contains("\"path\""));
    }

    #[test]
    fn test_toast_script_includes_path_when_set() {
        let mut n = sample();
        n.path = "/settings".to_string();
        assert!(toast_script(&n).contains(r#""path":"/settings""#));
    }

    #[test]
    fn test_visible_window_uses_in_window_toast() {
        // Arrange
        let host = MockHost::new().maximised();
        let mut notifier = MockNotifier::new();
        notifier.expect_notify().never();

        // Act
        let delivery = send_notification(&host, &notifier, Path::new("icon.png"), &sample());

        // Assert
        assert_eq!(delivery, Delivery::InWindow);
        assert_eq!(host.scripts().len(), 1);
    }

    #[test]
    fn test_minimised_window_uses_native_notifier() {
        // Arrange
        let host = MockHost::new().minimised();
        let mut notifier = MockNotifier::new();
        notifier
            .expect_notify()
            .withf(|title, body, icon| {
                title == "Saved" && body.starts_with("Settings") && icon == Path::new("icon.png")
            })
            .times(1)
            .returning(|_, _, _| Ok(()));

        // Act
        let delivery = send_notification(&host, &notifier, Path::new("icon.png"), &sample());

        // Assert
        assert_eq!(delivery, Delivery::Native);
        assert!(host.scripts().is_empty());
    }

    #[test]
    fn test_native_failure_is_reported_not_raised() {
        let host = MockHost::new().minimised();
        let mut notifier = MockNotifier::new();
        notifier
            .expect_notify()
            .returning(|_, _, _| Err(PlatformError::Notification("no daemon".to_string())));

        let delivery = send_notification(&host, &notifier, Path::new("icon.png"), &sample());

        assert_eq!(delivery, Delivery::Failed);
    }
}

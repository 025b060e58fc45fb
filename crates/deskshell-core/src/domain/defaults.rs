//! Compiled-in default table: exactly one default per document field.

use crate::domain::document::{ConfigDocument, Theme, WindowState};

pub const THEME: Theme = Theme::System;
pub const USE_SYSTEM_TITLE_BAR: bool = false;

pub const ENABLE_LOGGING: bool = true;
pub const ENABLE_TRACE: bool = false;
pub const ENABLE_DEBUG: bool = false;
pub const ENABLE_INFO: bool = true;
pub const ENABLE_WARN: bool = true;
pub const ENABLE_ERROR: bool = true;
pub const ENABLE_FATAL: bool = true;

/// Negative coordinates tell the startup hook not to move the window.
pub const WINDOW_POSITION: i32 = -1;
/// Negative sizes tell the startup hook not to resize the window.
pub const WINDOW_SIZE: i32 = -1;
pub const WINDOW_STATE: WindowState = WindowState::Normal;

impl ConfigDocument {
    /// Returns the default table as a fully-populated document.
    pub fn defaults() -> Self {
        Self {
            theme: Some(THEME.as_str().to_string()),
            use_system_title_bar: Some(USE_SYSTEM_TITLE_BAR),
            enable_logging: Some(ENABLE_LOGGING),
            enable_trace: Some(ENABLE_TRACE),
            enable_debug: Some(ENABLE_DEBUG),
            enable_info: Some(ENABLE_INFO),
            enable_warn: Some(ENABLE_WARN),
            enable_error: Some(ENABLE_ERROR),
            enable_fatal: Some(ENABLE_FATAL),
            window_start_position_x: Some(WINDOW_POSITION),
            window_start_position_y: Some(WINDOW_POSITION),
            window_start_size_x: Some(WINDOW_SIZE),
            window_start_size_y: Some(WINDOW_SIZE),
            window_start_state: Some(WINDOW_STATE.code()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_complete() {
        assert!(ConfigDocument::defaults().is_complete());
    }

    #[test]
    fn test_default_log_flags() {
        let d = ConfigDocument::defaults();
        assert_eq!(d.enable_logging, Some(true));
        assert_eq!(d.enable_trace, Some(false));
        assert_eq!(d.enable_debug, Some(false));
        assert_eq!(d.enable_info, Some(true));
        assert_eq!(d.enable_warn, Some(true));
        assert_eq!(d.enable_error, Some(true));
        assert_eq!(d.enable_fatal, Some(true));
    }

    #[test]
    fn test_default_theme_and_title_bar() {
        let d = ConfigDocument::defaults();
        assert_eq!(d.theme.as_deref(), Some("system"));
        assert_eq!(d.use_system_title_bar, Some(false));
    }

    #[test]
    fn test_default_window_fields_mean_host_decides() {
        let d = ConfigDocument::defaults();
        assert_eq!(d.window_start_position_x, Some(-1));
        assert_eq!(d.window_start_size_y, Some(-1));
        assert_eq!(d.window_state(), Some(WindowState::Normal));
    }
}

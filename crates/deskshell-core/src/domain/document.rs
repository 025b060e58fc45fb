//! The persisted preferences record.
//!
//! Every field of [`ConfigDocument`] is an `Option`: a document read from disk
//! may carry any subset of keys, because older builds wrote fewer fields and
//! newer builds may have added some.  `None` means "absent", never "false" or
//! "zero".  After the merge step every field is `Some`.

use serde::{Deserialize, Serialize};

/// UI colour scheme preference.
///
/// The document stores the theme as free text so that a value written by a
/// newer build (or edited by hand) survives a round-trip untouched.  This enum
/// is the typed view over the three values the shell understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Theme {
    /// Follow the operating system's light/dark setting.
    System,
    Light,
    Dark,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::System, Theme::Light, Theme::Dark];

    /// Wire name of the theme as stored in the document.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::System => "system",
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parses a stored theme string.  Returns `None` for unrecognised values.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Window state remembered between runs.
///
/// Stored as an integer code in the document (`windowStartState`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowState {
    #[default]
    Normal,
    Maximised,
}

impl WindowState {
    /// Integer code written to disk.
    pub fn code(self) -> i32 {
        match self {
            WindowState::Normal => 0,
            WindowState::Maximised => 2,
        }
    }

    /// Maps a stored code back to a state.  Unknown codes yield `None`.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(WindowState::Normal),
            2 => Some(WindowState::Maximised),
            _ => None,
        }
    }
}

/// Snapshot of the main window captured from the host runtime at close time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowGeometry {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub state: WindowState,
}

/// The preferences record persisted as one JSON object.
///
/// Keys on disk are the camelCase field names (`useSystemTitleBar`,
/// `windowStartSizeX`, ...).  Absent fields are omitted when encoding and
/// tolerated when decoding; unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConfigDocument {
    /// `"system"`, `"light"`, or `"dark"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_system_title_bar: Option<bool>,

    // Log severity switches
    /// Master switch; when `false` nothing is logged regardless of the
    /// per-level flags below.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_logging: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_trace: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_debug: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_info: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_warn: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_error: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_fatal: Option<bool>,

    // Window geometry at last close
    /// Last known top-left X.  Negative means "let the host place the window".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window_start_position_x: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window_start_position_y: Option<i32>,
    /// Last known width.  Negative means "use the host default size".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window_start_size_x: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window_start_size_y: Option<i32>,
    /// [`WindowState::code`] of the window at last close.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window_start_state: Option<i32>,
}

impl ConfigDocument {
    /// A document with every field absent.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Typed view of the `theme` field.  `None` when absent or unrecognised.
    pub fn theme_kind(&self) -> Option<Theme> {
        self.theme.as_deref().and_then(Theme::parse)
    }

    /// Typed view of the `windowStartState` field.
    pub fn window_state(&self) -> Option<WindowState> {
        self.window_start_state.and_then(WindowState::from_code)
    }

    /// Writes the five geometry fields from a host snapshot.
    pub fn apply_geometry(&mut self, geometry: WindowGeometry) {
        self.window_start_position_x = Some(geometry.x);
        self.window_start_position_y = Some(geometry.y);
        self.window_start_size_x = Some(geometry.width);
        self.window_start_size_y = Some(geometry.height);
        self.window_start_state = Some(geometry.state.code());
    }

    /// Returns `true` when every field is present.
    pub fn is_complete(&self) -> bool {
        crate::domain::field::ConfigField::ALL
            .iter()
            .all(|field| self.get(*field).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_parse_accepts_known_names() {
        assert_eq!(Theme::parse("system"), Some(Theme::System));
        assert_eq!(Theme::parse("light"), Some(Theme::Light));
        assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
    }

    #[test]
    fn test_theme_parse_rejects_unknown_and_wrong_case() {
        assert_eq!(Theme::parse("solarized"), None);
        assert_eq!(Theme::parse("Dark"), None);
    }

    #[test]
    fn test_window_state_codes_round_trip() {
        for state in [WindowState::Normal, WindowState::Maximised] {
            assert_eq!(WindowState::from_code(state.code()), Some(state));
        }
        assert_eq!(WindowState::Maximised.code(), 2);
        assert_eq!(WindowState::from_code(1), None);
    }

    #[test]
    fn test_unrecognised_theme_is_kept_as_text() {
        let doc = ConfigDocument {
            theme: Some("solarized".to_string()),
            ..ConfigDocument::empty()
        };
        assert_eq!(doc.theme.as_deref(), Some("solarized"));
        assert_eq!(doc.theme_kind(), None);
    }

    #[test]
    fn test_apply_geometry_sets_all_five_fields() {
        // Arrange
        let mut doc = ConfigDocument::empty();

        // Act
        doc.apply_geometry(WindowGeometry {
            x: 10,
            y: 20,
            width: 1280,
            height: 720,
            state: WindowState::Maximised,
        });

        // Assert
        assert_eq!(doc.window_start_position_x, Some(10));
        assert_eq!(doc.window_start_position_y, Some(20));
        assert_eq!(doc.window_start_size_x, Some(1280));
        assert_eq!(doc.window_start_size_y, Some(720));
        assert_eq!(doc.window_start_state, Some(2));
        assert_eq!(doc.window_state(), Some(WindowState::Maximised));
    }

    #[test]
    fn test_empty_document_is_not_complete() {
        assert!(!ConfigDocument::empty().is_complete());
    }
}

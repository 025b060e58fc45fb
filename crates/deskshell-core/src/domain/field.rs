//! Name-keyed access to document fields.
//!
//! The UI addresses settings by name (`"Theme"`, `"EnableDebug"`) and passes
//! values as text.  [`ConfigField`] is the registry of every field with its
//! wire key and value kind; [`FieldValue`] is the typed value moved in and out
//! of a [`ConfigDocument`].

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::domain::document::ConfigDocument;

/// Errors from name-keyed field access.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("unknown config field: {0}")]
    UnknownField(String),

    #[error("invalid value {value:?} for config field {field}")]
    InvalidValue { field: ConfigField, value: String },
}

/// Value type carried by a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Bool,
    Int,
}

/// One variant per [`ConfigDocument`] field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigField {
    Theme,
    UseSystemTitleBar,
    EnableLogging,
    EnableTrace,
    EnableDebug,
    EnableInfo,
    EnableWarn,
    EnableError,
    EnableFatal,
    WindowStartPositionX,
    WindowStartPositionY,
    WindowStartSizeX,
    WindowStartSizeY,
    WindowStartState,
}

impl ConfigField {
    pub const ALL: [ConfigField; 14] = [
        ConfigField::Theme,
        ConfigField::UseSystemTitleBar,
        ConfigField::EnableLogging,
        ConfigField::EnableTrace,
        ConfigField::EnableDebug,
        ConfigField::EnableInfo,
        ConfigField::EnableWarn,
        ConfigField::EnableError,
        ConfigField::EnableFatal,
        ConfigField::WindowStartPositionX,
        ConfigField::WindowStartPositionY,
        ConfigField::WindowStartSizeX,
        ConfigField::WindowStartSizeY,
        ConfigField::WindowStartState,
    ];

    /// JSON key used on disk.
    pub fn key(self) -> &'static str {
        match self {
            ConfigField::Theme => "theme",
            ConfigField::UseSystemTitleBar => "useSystemTitleBar",
            ConfigField::EnableLogging => "enableLogging",
            ConfigField::EnableTrace => "enableTrace",
            ConfigField::EnableDebug => "enableDebug",
            ConfigField::EnableInfo => "enableInfo",
            ConfigField::EnableWarn => "enableWarn",
            ConfigField::EnableError => "enableError",
            ConfigField::EnableFatal => "enableFatal",
            ConfigField::WindowStartPositionX => "windowStartPositionX",
            ConfigField::WindowStartPositionY => "windowStartPositionY",
            ConfigField::WindowStartSizeX => "windowStartSizeX",
            ConfigField::WindowStartSizeY => "windowStartSizeY",
            ConfigField::WindowStartState => "windowStartState",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            ConfigField::Theme => FieldKind::Text,
            ConfigField::UseSystemTitleBar
            | ConfigField::EnableLogging
            | ConfigField::EnableTrace
            | ConfigField::EnableDebug
            | ConfigField::EnableInfo
            | ConfigField::EnableWarn
            | ConfigField::EnableError
            | ConfigField::EnableFatal => FieldKind::Bool,
            ConfigField::WindowStartPositionX
            | ConfigField::WindowStartPositionY
            | ConfigField::WindowStartSizeX
            | ConfigField::WindowStartSizeY
            | ConfigField::WindowStartState => FieldKind::Int,
        }
    }

    /// Returns `true` for the fields that drive the log level gate.
    pub fn is_log_switch(self) -> bool {
        self.key().starts_with("enable")
    }
}

impl fmt::Display for ConfigField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ConfigField {
    type Err = FieldError;

    /// Accepts the wire key in any letter case, so both `"theme"` and the
    /// UI's `"Theme"` resolve.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.key().eq_ignore_ascii_case(name))
            .ok_or_else(|| FieldError::UnknownField(name.to_string()))
    }
}

/// A typed field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Bool(bool),
    Int(i32),
}

impl FieldValue {
    /// Parses UI text into the value kind `field` expects.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::InvalidValue`] when the text does not parse as
    /// the field's kind (`"yes"` for a boolean, `"1.5"` for an integer).
    pub fn parse(field: ConfigField, raw: &str) -> Result<Self, FieldError> {
        let invalid = || FieldError::InvalidValue {
            field,
            value: raw.to_string(),
        };
        match field.kind() {
            FieldKind::Text => Ok(FieldValue::Text(raw.to_string())),
            FieldKind::Bool => raw.trim().parse().map(FieldValue::Bool).map_err(|_| invalid()),
            FieldKind::Int => raw.trim().parse().map(FieldValue::Int).map_err(|_| invalid()),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Bool(b) => write!(f, "{b}"),
            FieldValue::Int(i) => write!(f, "{i}"),
        }
    }
}

impl ConfigDocument {
    /// Reads one field.  `None` when the field is absent.
    pub fn get(&self, field: ConfigField) -> Option<FieldValue> {
        match field {
            ConfigField::Theme => self.theme.clone().map(FieldValue::Text),
            ConfigField::UseSystemTitleBar => self.use_system_title_bar.map(FieldValue::Bool),
            ConfigField::EnableLogging => self.enable_logging.map(FieldValue::Bool),
            ConfigField::EnableTrace => self.enable_trace.map(FieldValue::Bool),
            ConfigField::EnableDebug => self.enable_debug.map(FieldValue::Bool),
            ConfigField::EnableInfo => self.enable_info.map(FieldValue::Bool),
            ConfigField::EnableWarn => self.enable_warn.map(FieldValue::Bool),
            ConfigField::EnableError => self.enable_error.map(FieldValue::Bool),
            ConfigField::EnableFatal => self.enable_fatal.map(FieldValue::Bool),
            ConfigField::WindowStartPositionX => self.window_start_position_x.map(FieldValue::Int),
            ConfigField::WindowStartPositionY => self.window_start_position_y.map(FieldValue::Int),
            ConfigField::WindowStartSizeX => self.window_start_size_x.map(FieldValue::Int),
            ConfigField::WindowStartSizeY => self.window_start_size_y.map(FieldValue::Int),
            ConfigField::WindowStartState => self.window_start_state.map(FieldValue::Int),
        }
    }

    /// Writes one field.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::InvalidValue`] if `value` is of the wrong kind;
    /// the document is unchanged in that case.
    pub fn set(&mut self, field: ConfigField, value: FieldValue) -> Result<(), FieldError> {
        match (field, value) {
            (ConfigField::Theme, FieldValue::Text(v)) => self.theme = Some(v),
            (ConfigField::UseSystemTitleBar, FieldValue::Bool(v)) => {
                self.use_system_title_bar = Some(v)
            }
            (ConfigField::EnableLogging, FieldValue::Bool(v)) => self.enable_logging = Some(v),
            (ConfigField::EnableTrace, FieldValue::Bool(v)) => self.enable_trace = Some(v),
            (ConfigField::EnableDebug, FieldValue::Bool(v)) => self.enable_debug = Some(v),
            (ConfigField::EnableInfo, FieldValue::Bool(v)) => self.enable_info = Some(v),
            (ConfigField::EnableWarn, FieldValue::Bool(v)) => self.enable_warn = Some(v),
            (ConfigField::EnableError, FieldValue::Bool(v)) => self.enable_error = Some(v),
            (ConfigField::EnableFatal, FieldValue::Bool(v)) => self.enable_fatal = Some(v),
            (ConfigField::WindowStartPositionX, FieldValue::Int(v)) => {
                self.window_start_position_x = Some(v)
            }
            (ConfigField::WindowStartPositionY, FieldValue::Int(v)) => {
                self.window_start_position_y = Some(v)
            }
            (ConfigField::WindowStartSizeX, FieldValue::Int(v)) => self.window_start_size_x = Some(v),
            (ConfigField::WindowStartSizeY, FieldValue::Int(v)) => self.window_start_size_y = Some(v),
            (ConfigField::WindowStartState, FieldValue::Int(v)) => self.window_start_state = Some(v),
            (field, value) => {
                return Err(FieldError::InvalidValue {
                    field,
                    value: value.to_string(),
                })
            }
        }
        Ok(())
    }
}

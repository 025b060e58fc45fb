//! JSON preferences file for deskshell.
//!
//! The document lives in the platform-appropriate config directory:
//! - Windows:  `%APPDATA%\deskshell\config.json`
//! - Linux:    `$XDG_CONFIG_HOME/deskshell/config.json` (or `~/.config/...`)
//! - macOS:    `~/Library/Application Support/deskshell/config.json`
//!
//! The log file sits next to it under `logs/`.
//!
//! # Write semantics
//!
//! Every save truncates and rewrites the whole file.  There is no temp-file
//! rename, so an external reader can observe a half-written file; only one
//! writer (this process) is assumed.

use std::path::{Path, PathBuf};

use deskshell_core::{decode_document, encode_document, ConfigDocument, ConfigError};

use crate::application::ports::DocumentRepository;

const APP_DIR_NAME: &str = "deskshell";
const CONFIG_FILE_NAME: &str = "config.json";
const LOG_DIR_NAME: &str = "logs";
const LOG_FILE_NAME: &str = "deskshell.log";
const ICON_FILE_NAME: &str = "appicon.png";

// ── Path resolution ───────────────────────────────────────────────────────────

/// Determines the platform-appropriate directory for deskshell's files.
///
/// # Errors
///
/// Returns [`ConfigError::PathResolution`] when the platform config base
/// directory cannot be determined from the environment.
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    platform_config_dir()
        .map(|base| base.join(APP_DIR_NAME))
        .ok_or(ConfigError::PathResolution)
}

/// Resolves the full path to the preferences file.  Touches nothing on disk.
///
/// # Errors
///
/// Returns [`ConfigError::PathResolution`] if the base directory cannot be
/// determined.
pub fn config_file_path() -> Result<PathBuf, ConfigError> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Resolves the full path to the log file.
///
/// # Errors
///
/// Returns [`ConfigError::PathResolution`] if the base directory cannot be
/// determined.
pub fn log_file_path() -> Result<PathBuf, ConfigError> {
    Ok(config_dir()?.join(LOG_DIR_NAME).join(LOG_FILE_NAME))
}

/// Resolves the icon shown by native notifications.
///
/// # Errors
///
/// Returns [`ConfigError::PathResolution`] if the base directory cannot be
/// determined.
pub fn icon_file_path() -> Result<PathBuf, ConfigError> {
    Ok(config_dir()?.join(ICON_FILE_NAME))
}

fn platform_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        // %APPDATA% e.g. C:\Users\<user>\AppData\Roaming
        std::env::var_os("APPDATA").map(PathBuf::from)
    }

    #[cfg(target_os = "linux")]
    {
        // XDG_CONFIG_HOME or ~/.config
        std::env::var_os("XDG_CONFIG_HOME")
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))
    }

    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME")
            .map(|h| PathBuf::from(h).join("Library").join("Application Support"))
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    {
        None
    }
}

// ── Repository ────────────────────────────────────────────────────────────────

/// Reads and writes the preferences document as a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// A repository at the platform config location.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::PathResolution`] if the location is unknown.
    pub fn at_platform_location() -> Result<Self, ConfigError> {
        Ok(Self::new(config_file_path()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DocumentRepository for JsonFileRepository {
    fn location(&self) -> &Path {
        &self.path
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }

    fn read(&self) -> Result<ConfigDocument, ConfigError> {
        let text = std::fs::read_to_string(&self.path).map_err(|source| ConfigError::Read {
            path: self.path.clone(),
            source,
        })?;
        decode_document(&text)
    }

    fn write(&self, doc: &ConfigDocument) -> Result<(), ConfigError> {
        // Ensure directory exists before writing.
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir).map_err(|source| ConfigError::Write {
                path: dir.to_path_buf(),
                source,
            })?;
        }

        let content = encode_document(doc)?;
        std::fs::write(&self.path, content).map_err(|source| ConfigError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

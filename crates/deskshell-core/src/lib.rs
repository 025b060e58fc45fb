//! # deskshell-core
//!
//! Shared library for the deskshell desktop shell containing the preferences
//! document, its compiled-in defaults, the default-merge algorithm, the JSON
//! codec used for the on-disk file, and the leveled logging capability.
//!
//! This crate has zero dependencies on windowing toolkits, webviews, or the
//! file system.  Everything here can be compiled and tested on any platform.
//!
//! # Architecture overview (for beginners)
//!
//! deskshell is the persistence and lifecycle layer of a desktop application
//! shell.  It remembers a handful of user preferences (theme, title bar style,
//! which log levels are enabled) plus where the main window was and how big it
//! was when the user last closed it.
//!
//! This crate (`deskshell-core`) is the shared foundation.  It defines:
//!
//! - **`domain`** – The [`ConfigDocument`] record where every field is
//!   optional, the default table, and the *additive* merge that fills absent
//!   fields without ever touching present ones.
//!
//! - **`codec`** – How the document travels to and from disk: one JSON object
//!   whose keys are the camelCase field names.
//!
//! - **`logging`** – The [`Logger`] capability (`trace` … `fatal`), an
//!   in-memory sink for tests, and a runtime gate driven by the document's
//!   `enable*` flags.

pub mod codec;
pub mod domain;
pub mod error;
pub mod logging;

// Re-export the most-used types at the crate root so callers can write
// `deskshell_core::ConfigDocument` instead of the full module path.
pub use codec::{decode_document, encode_document};
pub use domain::document::{ConfigDocument, Theme, WindowGeometry, WindowState};
pub use domain::field::{ConfigField, FieldError, FieldValue};
pub use domain::merge::fill_absent;
pub use error::ConfigError;
pub use logging::{GatedLogger, LevelGate, LogLevel, Logger, MemoryLogger};

//! Storage infrastructure: preferences file persistence.
//!
//! This module provides a thin adapter between the application and the
//! file system.  The `config` sub-module handles:
//!
//! - Resolving the platform-appropriate config directory.
//! - Reading and writing the JSON preferences file through
//!   [`JsonFileRepository`].
//!
//! The `mock` sub-module keeps the document in memory for tests.

pub mod config;
pub mod mock;

pub use config::{config_dir, config_file_path, icon_file_path, log_file_path, JsonFileRepository};

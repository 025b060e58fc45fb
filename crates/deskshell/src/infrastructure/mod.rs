//! Infrastructure layer for deskshell.
//!
//! Contains OS-facing adapters: the JSON config file, the log file and its
//! `tracing` bridge, the host window runtime, process-level platform
//! services, and the UI command bridge.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `deskshell_core`, but MUST NOT be imported by the `application` or domain
//! layers (tests excepted, which borrow the mocks).

pub mod host;
pub mod logging;
pub mod platform;
pub mod storage;
pub mod ui_bridge;

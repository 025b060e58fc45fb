//! Host runtime adapters.
//!
//! The desktop runtime that owns the real window and webview is an external
//! collaborator reached through [`HostRuntime`](crate::application::ports::HostRuntime).
//!
//! - [`HeadlessHost`] keeps a window model in memory and logs every call.  The
//!   binary uses it when no windowing runtime is attached.
//! - [`mock::MockHost`] records calls for assertions in tests.

mod headless;
pub mod mock;

pub use headless::HeadlessHost;
